//! Shared test helpers for agent tests.

use medcompanion_core::credential::Credential;
use medcompanion_core::error::ProviderError;
use medcompanion_core::provider::{CompletionRequest, CompletionResponse, Provider};
use std::collections::VecDeque;
use std::sync::Mutex;

/// A mock provider that returns a sequence of scripted outcomes.
///
/// Each call to `complete` pops the next outcome and records the prompt it
/// was given. Panics if more calls are made than outcomes provided.
pub struct ScriptedProvider {
    name: String,
    outcomes: Mutex<VecDeque<Result<String, ProviderError>>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedProvider {
    pub fn new(outcomes: Vec<Result<String, ProviderError>>) -> Self {
        Self {
            name: "Gemini".into(),
            outcomes: Mutex::new(outcomes.into()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn text(text: &str) -> Self {
        Self::new(vec![Ok(text.to_string())])
    }

    pub fn failing(error: ProviderError) -> Self {
        Self::new(vec![Err(error)])
    }

    /// Prompts received so far, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl Provider for ScriptedProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn complete(
        &self,
        request: CompletionRequest,
        _credential: &Credential,
    ) -> Result<CompletionResponse, ProviderError> {
        self.prompts.lock().unwrap().push(request.prompt);
        let outcome = self
            .outcomes
            .lock()
            .unwrap()
            .pop_front()
            .expect("ScriptedProvider: no more outcomes");

        outcome.map(|text| CompletionResponse {
            text,
            model: request.model,
            usage: None,
        })
    }
}

pub fn credential() -> Credential {
    Credential::new("test-key").unwrap()
}
