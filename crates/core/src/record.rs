//! Health record domain types.
//!
//! These are the value objects persisted by the record store and fed to the
//! context formatter: the patient's profile and the log of past consultations.

use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::error::RecordError;

/// The single patient profile.
///
/// Every field defaults to empty, so a profile that has never been saved is
/// simply `Profile::default()`. Missing fields in a stored file default too.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    /// Full name
    pub name: String,

    /// ISO date (`YYYY-MM-DD`) or empty
    #[serde(rename = "dob")]
    pub date_of_birth: String,

    /// Known allergies, in the order the user entered them
    pub allergies: Vec<String>,

    /// Medications currently taken, in entry order
    pub current_medications: Vec<String>,

    /// Chronic conditions, past surgeries, etc.
    pub medical_history: String,
}

impl Profile {
    /// True if nothing has been filled in yet.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// One past visit to a healthcare provider.
///
/// Logs are append-only: the store exposes no way to edit or remove one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsultationLog {
    /// Date of the visit (`YYYY-MM-DD`)
    pub date: String,

    /// Who was seen (e.g. "Dr. Smith")
    pub provider: String,

    /// Key takeaways, vitals, advice
    pub notes: String,

    /// When the entry was recorded
    #[serde(rename = "timestamp")]
    pub recorded_at: String,
}

impl ConsultationLog {
    /// Create a new log entry stamped with the current local time.
    ///
    /// Provider and notes must be non-blank.
    pub fn new(
        date: impl Into<String>,
        provider: impl Into<String>,
        notes: impl Into<String>,
    ) -> Result<Self, RecordError> {
        let provider = provider.into();
        let notes = notes.into();

        if provider.trim().is_empty() {
            return Err(RecordError::MissingField("provider"));
        }
        if notes.trim().is_empty() {
            return Err(RecordError::MissingField("notes"));
        }

        Ok(Self {
            date: date.into(),
            provider,
            notes,
            recorded_at: Local::now().format("%Y-%m-%d %H:%M:%S%.6f").to_string(),
        })
    }
}

/// Split a comma-separated list as typed by the user.
///
/// Items are trimmed and blank items dropped: `"penicillin, , latex "`
/// becomes `["penicillin", "latex"]`.
pub fn parse_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(String::from)
        .collect()
}

/// At-a-glance overview of the stored records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardSummary {
    pub name: String,
    pub allergy_count: usize,
    pub medication_count: usize,
    pub consultation_count: usize,
    pub last_visit: String,
}

impl DashboardSummary {
    pub fn new(profile: &Profile, consultations: &[ConsultationLog]) -> Self {
        let name = if profile.name.is_empty() {
            "Not set".to_string()
        } else {
            profile.name.clone()
        };

        Self {
            name,
            allergy_count: profile.allergies.len(),
            medication_count: profile.current_medications.len(),
            consultation_count: consultations.len(),
            last_visit: consultations
                .last()
                .map(|c| c.date.clone())
                .unwrap_or_else(|| "None".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_profile_is_empty() {
        let profile = Profile::default();
        assert!(profile.is_empty());
        assert!(profile.allergies.is_empty());
        assert_eq!(profile.date_of_birth, "");
    }

    #[test]
    fn profile_uses_stored_field_names() {
        let profile = Profile {
            name: "Ann".into(),
            date_of_birth: "1980-04-02".into(),
            allergies: vec!["penicillin".into()],
            current_medications: vec![],
            medical_history: String::new(),
        };
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["dob"], "1980-04-02");
        assert_eq!(json["current_medications"], serde_json::json!([]));
        assert_eq!(json["medical_history"], "");
    }

    #[test]
    fn profile_missing_fields_default() {
        let profile: Profile = serde_json::from_str(r#"{"name":"Ann"}"#).unwrap();
        assert_eq!(profile.name, "Ann");
        assert!(profile.allergies.is_empty());
        assert_eq!(profile.medical_history, "");
    }

    #[test]
    fn consultation_serializes_timestamp_field() {
        let log = ConsultationLog::new("2026-01-05", "Dr. Smith", "BP 120/80").unwrap();
        let json = serde_json::to_value(&log).unwrap();
        assert_eq!(json["date"], "2026-01-05");
        assert!(json["timestamp"].as_str().is_some_and(|t| !t.is_empty()));
        assert!(json.get("recorded_at").is_none());
    }

    #[test]
    fn consultation_requires_provider_and_notes() {
        assert_eq!(
            ConsultationLog::new("2026-01-05", "  ", "notes"),
            Err(RecordError::MissingField("provider"))
        );
        assert_eq!(
            ConsultationLog::new("2026-01-05", "Dr. Smith", ""),
            Err(RecordError::MissingField("notes"))
        );
    }

    #[test]
    fn parse_list_trims_and_drops_blanks() {
        assert_eq!(parse_list("penicillin, , latex "), vec!["penicillin", "latex"]);
        assert!(parse_list("").is_empty());
        assert!(parse_list(" , ,").is_empty());
    }

    #[test]
    fn dashboard_for_empty_records() {
        let summary = DashboardSummary::new(&Profile::default(), &[]);
        assert_eq!(summary.name, "Not set");
        assert_eq!(summary.consultation_count, 0);
        assert_eq!(summary.last_visit, "None");
    }

    #[test]
    fn dashboard_uses_last_appended_visit() {
        let profile = Profile {
            name: "Ann".into(),
            allergies: vec!["penicillin".into(), "latex".into()],
            current_medications: vec!["metformin".into()],
            ..Profile::default()
        };
        let logs = vec![
            ConsultationLog::new("2026-03-01", "Dr. A", "a").unwrap(),
            ConsultationLog::new("2026-02-01", "Dr. B", "b").unwrap(),
        ];
        let summary = DashboardSummary::new(&profile, &logs);
        assert_eq!(summary.name, "Ann");
        assert_eq!(summary.allergy_count, 2);
        assert_eq!(summary.medication_count, 1);
        assert_eq!(summary.consultation_count, 2);
        assert_eq!(summary.last_visit, "2026-02-01");
    }
}
