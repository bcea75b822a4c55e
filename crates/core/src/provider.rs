//! Provider trait: the abstraction over generative-model backends.
//!
//! A Provider takes one fully assembled prompt and returns the model's text.
//! History is re-sent by the caller on every turn, so providers hold no
//! conversation state.

use async_trait::async_trait;
use crate::credential::Credential;
use crate::error::ProviderError;

/// A single text-completion request.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// The model to use (e.g., "gemini-1.5-flash")
    pub model: String,

    /// The assembled prompt
    pub prompt: String,

    /// Temperature (0.0 = deterministic, 2.0 = most creative)
    pub temperature: f32,

    /// Maximum tokens to generate
    pub max_output_tokens: Option<u32>,
}

const DEFAULT_TEMPERATURE: f32 = 0.7;

impl CompletionRequest {
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            temperature: DEFAULT_TEMPERATURE,
            max_output_tokens: None,
        }
    }
}

/// A complete response from a provider.
#[derive(Debug, Clone)]
pub struct CompletionResponse {
    /// The generated text, verbatim
    pub text: String,

    /// Which model actually responded
    pub model: String,

    /// Token usage statistics, if reported
    pub usage: Option<Usage>,
}

/// Token usage information.
#[derive(Debug, Clone)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// The core Provider trait.
#[async_trait]
pub trait Provider: Send + Sync {
    /// A human-readable name for this provider (e.g., "Gemini").
    fn name(&self) -> &str;

    /// Send a request and get a complete response.
    async fn complete(
        &self,
        request: CompletionRequest,
        credential: &Credential,
    ) -> std::result::Result<CompletionResponse, ProviderError>;

    /// Health check: can we reach the provider with this credential?
    async fn health_check(&self, _credential: &Credential) -> std::result::Result<bool, ProviderError> {
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completion_request_defaults() {
        let req = CompletionRequest::new("gemini-1.5-flash", "Hello");
        assert!((req.temperature - 0.7).abs() < f32::EPSILON);
        assert!(req.max_output_tokens.is_none());
    }
}
