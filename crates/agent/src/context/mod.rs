//! Context block rendering for the model prompt.
//!
//! | Section | Source | Trim Strategy |
//! |---------|--------|---------------|
//! | Patient profile | Record store | Never trimmed, fallbacks for empty fields |
//! | Recent consultations | Record store | Only the last N by insertion order |

pub mod formatter;

pub use formatter::{
    NO_CONSULTATIONS, NONE_LISTED, NOT_AVAILABLE, RECENT_CONSULTATION_LIMIT, format_context,
    format_context_with_limit,
};
