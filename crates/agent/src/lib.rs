//! The query pipeline: the heart of MedCompanion.
//!
//! Each question follows a fixed path:
//!
//! 1. **Load** the profile and consultation log from the record store
//! 2. **Format** them into a deterministic context block
//! 3. **Assemble** system instructions + context + chat history + query
//! 4. **Complete** the prompt via the configured provider
//! 5. **Append** the user turn and the reply to the chat session
//!
//! Provider failures never abort a session: they are returned as the
//! assistant's reply text.

pub mod assistant;
pub mod client;
pub mod context;
pub mod prompt;

#[cfg(test)]
mod test_helpers;

pub use assistant::{AssistantError, HealthAssistant};
pub use client::CompletionClient;
pub use context::{RECENT_CONSULTATION_LIMIT, format_context, format_context_with_limit};
pub use prompt::{DISCLAIMER, assemble_prompt, system_instructions};
