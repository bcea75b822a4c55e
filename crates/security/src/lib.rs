//! Credential handling for MedCompanion.
//!
//! Provides:
//! - **Credential resolution**: ordered lookup across secrets file, environment, and session
//! - **Secrets file**: a user-managed TOML file holding the API key

pub mod credentials;
pub mod secrets;

pub use credentials::{
    CREDENTIAL_ENV_VARS, CredentialResolver, CredentialSource, EnvVarSource, SessionSource,
};
pub use secrets::SecretsFileSource;
