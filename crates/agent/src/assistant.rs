//! The health assistant: the single query-answering entry point.
//!
//! One turn runs:
//!
//! 1. **Format** profile + recent consultations into the context block
//! 2. **Assemble** instructions, context, prior history, and the query
//! 3. **Complete** via the provider (failures come back as inline text)
//! 4. **Append** the user turn and the reply to the session
//!
//! Step 4 happens only after step 3 resolves, and the session is borrowed
//! mutably for the whole turn, so turns on one session never interleave.

use medcompanion_config::AppConfig;
use medcompanion_core::credential::{Credential, SessionCredential};
use medcompanion_core::error::StorageError;
use medcompanion_core::message::{ChatMessage, ChatSession};
use medcompanion_core::record::{ConsultationLog, Profile};
use medcompanion_core::store::RecordStore;
use medcompanion_security::CredentialResolver;
use medcompanion_store::JsonFileStore;
use std::sync::Arc;
use tracing::info;

use crate::client::CompletionClient;
use crate::context::{RECENT_CONSULTATION_LIMIT, format_context_with_limit};
use crate::prompt::assemble_prompt;

/// Failures that stop a turn before the provider is contacted.
#[derive(Debug, thiserror::Error)]
pub enum AssistantError {
    #[error("Could not load health records: {0}")]
    Storage(#[from] StorageError),

    #[error("No API key found. Set GEMINI_API_KEY (or GOOGLE_API_KEY), add it to the secrets file, or enter one with /key")]
    CredentialAbsent,
}

/// Ties the record store, credential lookup, and completion client together.
pub struct HealthAssistant {
    store: Arc<dyn RecordStore>,
    resolver: CredentialResolver,
    client: CompletionClient,
    recent_consultations: usize,
}

impl HealthAssistant {
    pub fn new(
        store: Arc<dyn RecordStore>,
        resolver: CredentialResolver,
        client: CompletionClient,
    ) -> Self {
        Self {
            store,
            resolver,
            client,
            recent_consultations: RECENT_CONSULTATION_LIMIT,
        }
    }

    /// Build the standard assistant: JSON files under `config.data_dir`, the
    /// standard credential chain ending in `session`, and the configured
    /// provider.
    pub fn from_config(config: &AppConfig, session: SessionCredential) -> Self {
        let store = Arc::new(JsonFileStore::new(&config.data_dir));
        let resolver = CredentialResolver::standard(&config.secrets_path, session);
        let provider = medcompanion_providers::build_from_config(config);
        let client = CompletionClient::from_config(provider, &config.provider);

        Self::new(store, resolver, client)
            .with_recent_consultations(config.context.recent_consultations)
    }

    /// Override how many recent consultations reach the model. At least one
    /// is always included, so a non-empty log is never reported as empty.
    pub fn with_recent_consultations(mut self, limit: usize) -> Self {
        self.recent_consultations = limit.max(1);
        self
    }

    pub fn store(&self) -> &dyn RecordStore {
        self.store.as_ref()
    }

    pub fn resolver(&self) -> &CredentialResolver {
        &self.resolver
    }

    pub fn client(&self) -> &CompletionClient {
        &self.client
    }

    /// Resolve the API credential afresh. `None` means the assistant feature
    /// is unavailable until the user supplies one.
    pub fn resolve_credential(&self) -> Option<Credential> {
        self.resolver.resolve()
    }

    /// Answer `query` against the given records and append both turns to
    /// `session`. Always returns the text appended as the assistant turn.
    pub async fn answer_query(
        &self,
        session: &mut ChatSession,
        query: &str,
        profile: &Profile,
        consultations: &[ConsultationLog],
        credential: &Credential,
    ) -> String {
        let context = format_context_with_limit(profile, consultations, self.recent_consultations);
        let prompt = assemble_prompt(&context, session.messages(), query);

        let reply = self.client.complete(&prompt, credential).await;

        session.push(ChatMessage::user(query));
        session.push(ChatMessage::assistant(reply.clone()));
        info!(turns = session.len(), "Query answered");
        reply
    }

    /// Load the current records, resolve a credential, and answer `query`.
    ///
    /// Storage failures and a missing credential are returned as errors and
    /// leave the session untouched.
    pub async fn ask(&self, session: &mut ChatSession, query: &str) -> Result<String, AssistantError> {
        let credential = self
            .resolve_credential()
            .ok_or(AssistantError::CredentialAbsent)?;
        let profile = self.store.load_profile()?;
        let consultations = self.store.load_consultations()?;

        Ok(self
            .answer_query(session, query, &profile, &consultations, &credential)
            .await)
    }
}
