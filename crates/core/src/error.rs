//! Error types for the MedCompanion domain.
//!
//! Uses `thiserror` for ergonomic error definitions.
//! Each bounded context has its own error enum; crates above core wrap them
//! in their own errors (e.g. `AssistantError`) rather than one umbrella type.

use std::path::PathBuf;
use thiserror::Error;

// --- Bounded context errors ---

/// A persisted record could not be read, parsed, or written.
///
/// Storage failures always propagate to the caller. A corrupt health record
/// is never replaced by a default value.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to read {path}: {reason}")]
    Read { path: PathBuf, reason: String },

    #[error("Failed to write {path}: {reason}")]
    Write { path: PathBuf, reason: String },

    #[error("Corrupt record in {path}: {reason}")]
    Corrupt { path: PathBuf, reason: String },

    #[error("Failed to create data directory {path}: {reason}")]
    CreateDir { path: PathBuf, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("{0} is required")]
    MissingField(&'static str),
}

#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    #[error("API request failed: {message} (status: {status_code})")]
    ApiError { status_code: u16, message: String },

    #[error("Rate limited by provider, retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Provider returned no text: {0}")]
    EmptyResponse(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Network error: {0}")]
    Network(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_error_displays_correctly() {
        let err = ProviderError::ApiError {
            status_code: 400,
            message: "Invalid argument".into(),
        };
        assert!(err.to_string().contains("400"));
        assert!(err.to_string().contains("Invalid argument"));
    }

    #[test]
    fn storage_error_names_the_file() {
        let err = StorageError::Corrupt {
            path: PathBuf::from("/data/profile.json"),
            reason: "expected value at line 1".into(),
        };
        assert!(err.to_string().contains("profile.json"));
        assert!(err.to_string().contains("line 1"));
    }

    #[test]
    fn record_error_names_the_field() {
        assert_eq!(
            RecordError::MissingField("provider").to_string(),
            "provider is required"
        );
    }
}
