//! Completion client: one prompt in, one string out.
//!
//! Provider failures never escape as errors. They come back as the string
//! `"Error contacting <provider>: <message>"`, which the caller shows in the
//! transcript like any other assistant reply, so a failed turn never ends the
//! session.

use medcompanion_config::ProviderConfig;
use medcompanion_core::credential::Credential;
use medcompanion_core::error::ProviderError;
use medcompanion_core::provider::{CompletionRequest, Provider};
use std::sync::Arc;
use tracing::{debug, warn};

/// Stateless wrapper around a `Provider` with a fixed model.
pub struct CompletionClient {
    provider: Arc<dyn Provider>,
    model: String,
    temperature: f32,
    max_output_tokens: Option<u32>,
}

impl CompletionClient {
    pub fn new(provider: Arc<dyn Provider>, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
            temperature: 0.7,
            max_output_tokens: None,
        }
    }

    /// Take model and sampling settings from config.
    pub fn from_config(provider: Arc<dyn Provider>, config: &ProviderConfig) -> Self {
        Self::new(provider, &config.model)
            .with_temperature(config.temperature)
            .with_max_output_tokens(config.max_output_tokens)
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_output_tokens(mut self, max_output_tokens: Option<u32>) -> Self {
        self.max_output_tokens = max_output_tokens;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn provider(&self) -> &Arc<dyn Provider> {
        &self.provider
    }

    /// Send `prompt` and return the model's text verbatim, or the inline
    /// error string on any failure.
    pub async fn complete(&self, prompt: &str, credential: &Credential) -> String {
        match self.try_complete(prompt, credential).await {
            Ok(text) => text,
            Err(e) => {
                warn!(provider = %self.provider.name(), error = %e, "Completion failed");
                self.error_text(&e)
            }
        }
    }

    /// Like `complete`, but surfaces the provider error.
    pub async fn try_complete(
        &self,
        prompt: &str,
        credential: &Credential,
    ) -> Result<String, ProviderError> {
        let mut request = CompletionRequest::new(&self.model, prompt);
        request.temperature = self.temperature;
        request.max_output_tokens = self.max_output_tokens;

        let response = self.provider.complete(request, credential).await?;
        debug!(model = %response.model, chars = response.text.len(), "Completion received");
        Ok(response.text)
    }

    fn error_text(&self, error: &ProviderError) -> String {
        format!("Error contacting {}: {}", self.provider.name(), error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{ScriptedProvider, credential};
    use medcompanion_providers::GeminiProvider;
    use std::time::Duration;

    #[tokio::test]
    async fn success_returns_text_verbatim() {
        let provider = Arc::new(ScriptedProvider::text("  Take with food.\n\n"));
        let client = CompletionClient::new(provider.clone(), "gemini-1.5-flash");

        let text = client.complete("prompt", &credential()).await;
        assert_eq!(text, "  Take with food.\n\n");
        assert_eq!(provider.prompts(), vec!["prompt".to_string()]);
    }

    #[tokio::test]
    async fn failure_becomes_inline_error_text() {
        let provider = Arc::new(ScriptedProvider::failing(ProviderError::Network(
            "connection refused".into(),
        )));
        let client = CompletionClient::new(provider, "gemini-1.5-flash");

        let text = client.complete("prompt", &credential()).await;
        assert_eq!(text, "Error contacting Gemini: Network error: connection refused");
    }

    #[tokio::test]
    async fn try_complete_surfaces_error() {
        let provider = Arc::new(ScriptedProvider::failing(ProviderError::AuthenticationFailed(
            "API key not valid.".into(),
        )));
        let client = CompletionClient::new(provider, "gemini-1.5-flash");

        let err = client.try_complete("prompt", &credential()).await.unwrap_err();
        assert!(matches!(err, ProviderError::AuthenticationFailed(_)));
    }

    #[tokio::test]
    async fn unreachable_gemini_endpoint_yields_error_text() {
        let provider = Arc::new(GeminiProvider::with_base_url(
            "http://127.0.0.1:1",
            Duration::from_secs(5),
        ));
        let client = CompletionClient::new(provider, "gemini-1.5-flash");

        let text = client.complete("prompt", &credential()).await;
        assert!(text.starts_with("Error contacting Gemini: "), "got: {text}");
    }

    #[test]
    fn from_config_copies_settings() {
        let config = ProviderConfig {
            model: "gemini-1.5-pro".into(),
            temperature: 0.2,
            max_output_tokens: Some(512),
            ..ProviderConfig::default()
        };
        let client = CompletionClient::from_config(Arc::new(ScriptedProvider::new(vec![])), &config);
        assert_eq!(client.model(), "gemini-1.5-pro");
        assert_eq!(client.max_output_tokens, Some(512));
        assert!((client.temperature - 0.2).abs() < f32::EPSILON);
    }
}
