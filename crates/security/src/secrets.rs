//! TOML secrets file: the user-managed secrets store.
//!
//! The file holds plain `KEY = "value"` pairs:
//!
//! ```toml
//! GEMINI_API_KEY = "AIza..."
//! ```
//!
//! A missing file is the common case and is silent. An unreadable or
//! malformed file is logged as a warning and otherwise treated the same as a
//! missing one.

use medcompanion_core::credential::Credential;
use std::path::PathBuf;
use tracing::{debug, warn};

use crate::credentials::{CREDENTIAL_ENV_VARS, CredentialSource};

/// Reads `GEMINI_API_KEY`, then `GOOGLE_API_KEY`, from a TOML file.
pub struct SecretsFileSource {
    path: PathBuf,
}

impl SecretsFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn load_table(&self) -> Option<toml::Table> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No secrets file");
                return None;
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Secrets file unreadable, skipping");
                return None;
            }
        };

        match content.parse::<toml::Table>() {
            Ok(table) => Some(table),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Secrets file malformed, skipping");
                None
            }
        }
    }

    /// Template written by `onboard`.
    pub fn template() -> &'static str {
        concat!(
            "# MedCompanion secrets\n",
            "# Uncomment and paste your Gemini API key:\n",
            "# GEMINI_API_KEY = \"AIza...\"\n",
        )
    }
}

impl CredentialSource for SecretsFileSource {
    fn name(&self) -> &str {
        "secrets_file"
    }

    fn lookup(&self) -> Option<Credential> {
        let table = self.load_table()?;
        CREDENTIAL_ENV_VARS
            .iter()
            .filter_map(|key| table.get(*key))
            .filter_map(|value| value.as_str())
            .find_map(Credential::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_secrets(content: &str) -> (TempDir, PathBuf) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("secrets.toml");
        std::fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn missing_file_is_not_found() {
        let source = SecretsFileSource::new("/nonexistent/secrets.toml");
        assert!(source.lookup().is_none());
    }

    #[test]
    fn reads_gemini_key() {
        let (_dir, path) = write_secrets("GEMINI_API_KEY = \"AIza-gemini\"\n");
        let cred = SecretsFileSource::new(path).lookup().unwrap();
        assert_eq!(cred.expose(), "AIza-gemini");
    }

    #[test]
    fn gemini_key_preferred_over_google_key() {
        let (_dir, path) =
            write_secrets("GOOGLE_API_KEY = \"google\"\nGEMINI_API_KEY = \"gemini\"\n");
        assert_eq!(SecretsFileSource::new(path).lookup().unwrap().expose(), "gemini");
    }

    #[test]
    fn falls_back_to_google_key() {
        let (_dir, path) = write_secrets("GOOGLE_API_KEY = \"google\"\n");
        assert_eq!(SecretsFileSource::new(path).lookup().unwrap().expose(), "google");
    }

    #[test]
    fn non_string_value_is_ignored() {
        let (_dir, path) = write_secrets("GEMINI_API_KEY = 42\n");
        assert!(SecretsFileSource::new(path).lookup().is_none());
    }

    #[test]
    fn malformed_file_is_not_found() {
        let (_dir, path) = write_secrets("this is = = not toml");
        assert!(SecretsFileSource::new(path).lookup().is_none());
    }

    #[test]
    fn template_has_no_active_key() {
        let (_dir, path) = write_secrets(SecretsFileSource::template());
        assert!(SecretsFileSource::new(path).lookup().is_none());
    }
}
