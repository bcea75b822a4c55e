//! # MedCompanion Core
//!
//! Domain types, traits, and error definitions for the MedCompanion health
//! record assistant. This crate has **zero framework dependencies**: it
//! defines the domain model that all other crates implement against.
//!
//! ## Design Philosophy
//!
//! Storage and model backends are defined as traits here. Implementations
//! live in their respective crates, so tests can swap in in-memory stores and
//! scripted providers.

pub mod error;
pub mod record;
pub mod message;
pub mod credential;
pub mod provider;
pub mod store;

// Re-export key types at crate root for ergonomics
pub use error::{ProviderError, RecordError, StorageError};
pub use record::{ConsultationLog, DashboardSummary, Profile, parse_list};
pub use message::{ChatMessage, ChatSession, Role};
pub use credential::{Credential, SessionCredential};
pub use provider::{CompletionRequest, CompletionResponse, Provider};
pub use store::RecordStore;
