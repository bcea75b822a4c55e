//! Generative-model provider implementations for MedCompanion.
//!
//! All providers implement the `medcompanion_core::Provider` trait.

pub mod gemini;

pub use gemini::GeminiProvider;

use medcompanion_core::provider::Provider;
use std::sync::Arc;
use std::time::Duration;

/// Build the configured provider.
pub fn build_from_config(config: &medcompanion_config::AppConfig) -> Arc<dyn Provider> {
    Arc::new(GeminiProvider::with_base_url(
        &config.provider.base_url,
        Duration::from_secs(config.provider.timeout_secs),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_from_default_config() {
        let config = medcompanion_config::AppConfig::default();
        let provider = build_from_config(&config);
        assert_eq!(provider.name(), "Gemini");
    }
}
