//! Layered API credential lookup.
//!
//! A `CredentialResolver` holds an ordered list of `CredentialSource`s and
//! returns the first credential any of them yields. Finding nothing is a
//! normal outcome (`None`), not an error: callers branch on it before making
//! a completion request.

use medcompanion_core::credential::{Credential, SessionCredential};
use std::path::PathBuf;
use tracing::debug;

use crate::secrets::SecretsFileSource;

/// Environment variables checked, in order, by the standard resolver.
pub const CREDENTIAL_ENV_VARS: [&str; 2] = ["GEMINI_API_KEY", "GOOGLE_API_KEY"];

/// One place a credential may come from.
pub trait CredentialSource: Send + Sync {
    /// Short label for logs and status output.
    fn name(&self) -> &str;

    /// Look the credential up. Must not fail: an unavailable source yields `None`.
    fn lookup(&self) -> Option<Credential>;
}

type EnvReader = Box<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Reads one environment variable.
pub struct EnvVarSource {
    var: String,
    reader: EnvReader,
}

impl EnvVarSource {
    pub fn new(var: impl Into<String>) -> Self {
        Self::with_reader(var, |name| std::env::var(name).ok())
    }

    /// Use a custom lookup in place of the process environment.
    pub fn with_reader(
        var: impl Into<String>,
        reader: impl Fn(&str) -> Option<String> + Send + Sync + 'static,
    ) -> Self {
        Self {
            var: var.into(),
            reader: Box::new(reader),
        }
    }
}

impl CredentialSource for EnvVarSource {
    fn name(&self) -> &str {
        &self.var
    }

    fn lookup(&self) -> Option<Credential> {
        (self.reader)(&self.var).and_then(Credential::new)
    }
}

/// Reads the value set interactively during the current session.
pub struct SessionSource {
    slot: SessionCredential,
}

impl SessionSource {
    pub fn new(slot: SessionCredential) -> Self {
        Self { slot }
    }
}

impl CredentialSource for SessionSource {
    fn name(&self) -> &str {
        "session"
    }

    fn lookup(&self) -> Option<Credential> {
        self.slot.get()
    }
}

/// Tries each source in order; first hit wins.
pub struct CredentialResolver {
    sources: Vec<Box<dyn CredentialSource>>,
}

impl CredentialResolver {
    pub fn new(sources: Vec<Box<dyn CredentialSource>>) -> Self {
        Self { sources }
    }

    /// The standard chain: secrets file, `GEMINI_API_KEY`, `GOOGLE_API_KEY`,
    /// then the session slot.
    pub fn standard(secrets_path: impl Into<PathBuf>, session: SessionCredential) -> Self {
        let mut sources: Vec<Box<dyn CredentialSource>> =
            vec![Box::new(SecretsFileSource::new(secrets_path))];
        for var in CREDENTIAL_ENV_VARS {
            sources.push(Box::new(EnvVarSource::new(var)));
        }
        sources.push(Box::new(SessionSource::new(session)));
        Self::new(sources)
    }

    /// Resolve a credential, or `None` if no source has one.
    pub fn resolve(&self) -> Option<Credential> {
        self.resolve_with_source().map(|(credential, _)| credential)
    }

    /// Like `resolve`, also naming the source that supplied it.
    pub fn resolve_with_source(&self) -> Option<(Credential, &str)> {
        let found = self
            .sources
            .iter()
            .find_map(|source| source.lookup().map(|c| (c, source.name())));

        match &found {
            Some((_, source)) => debug!(source = %source, "API credential resolved"),
            None => debug!("No API credential found in any source"),
        }
        found
    }

    /// Source names in lookup order.
    pub fn source_names(&self) -> Vec<&str> {
        self.sources.iter().map(|s| s.name()).collect()
    }
}
