//! Context block rendering: profile plus recent consultations as text.
//!
//! # Determinism
//!
//! Formatting is a pure function of its inputs: identical records always
//! produce byte-identical output. No clock, randomness, or I/O is involved.
//!
//! # Layout
//!
//! ```text
//! PATIENT PROFILE:
//! Name: Ann
//! Date of Birth: N/A
//! Allergies: penicillin
//! Current Medications: None listed
//! Medical History: None listed
//!
//! RECENT CONSULTATIONS:
//! - Date: 2026-01-05, Provider: Dr. Smith
//!   Notes: BP 120/80
//! ```

use medcompanion_core::record::{ConsultationLog, Profile};

/// Number of most recent consultations included by default. Bounds prompt
/// size while keeping the visits most likely to matter.
pub const RECENT_CONSULTATION_LIMIT: usize = 3;

pub const NOT_AVAILABLE: &str = "N/A";
pub const NONE_LISTED: &str = "None listed";
pub const NO_CONSULTATIONS: &str = "No recent consultations logged.";

/// Render the context block with the default consultation limit.
pub fn format_context(profile: &Profile, consultations: &[ConsultationLog]) -> String {
    format_context_with_limit(profile, consultations, RECENT_CONSULTATION_LIMIT)
}

/// Render the context block including at most the last `limit` consultations,
/// by stored (insertion) order.
pub fn format_context_with_limit(
    profile: &Profile,
    consultations: &[ConsultationLog],
    limit: usize,
) -> String {
    let mut out = String::from("PATIENT PROFILE:\n");
    out.push_str(&format!("Name: {}\n", or_fallback(&profile.name, NOT_AVAILABLE)));
    out.push_str(&format!(
        "Date of Birth: {}\n",
        or_fallback(&profile.date_of_birth, NOT_AVAILABLE)
    ));
    out.push_str(&format!("Allergies: {}\n", join_or_none(&profile.allergies)));
    out.push_str(&format!(
        "Current Medications: {}\n",
        join_or_none(&profile.current_medications)
    ));
    out.push_str(&format!(
        "Medical History: {}\n",
        or_fallback(&profile.medical_history, NONE_LISTED)
    ));

    out.push_str("\nRECENT CONSULTATIONS:\n");
    let recent = &consultations[consultations.len().saturating_sub(limit)..];
    if recent.is_empty() {
        out.push_str(NO_CONSULTATIONS);
        out.push('\n');
    }
    for c in recent {
        out.push_str(&format!("- Date: {}, Provider: {}\n", c.date, c.provider));
        out.push_str(&format!("  Notes: {}\n", c.notes));
    }

    out
}

fn or_fallback<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.trim().is_empty() { fallback } else { value }
}

fn join_or_none(items: &[String]) -> String {
    if items.is_empty() {
        NONE_LISTED.to_string()
    } else {
        items.join(", ")
    }
}
