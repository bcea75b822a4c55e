//! `medcompanion profile`: Show or edit the patient profile.

use chrono::NaiveDate;
use medcompanion_core::record::{Profile, parse_list};
use medcompanion_core::store::RecordStore;

/// Fields given on the command line. `None` keeps the stored value.
#[derive(Debug, Default)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub dob: Option<String>,
    pub allergies: Option<String>,
    pub medications: Option<String>,
    pub history: Option<String>,
}

impl ProfileUpdate {
    /// Merge into `profile`. An empty `dob` clears it; anything else must be
    /// a `YYYY-MM-DD` date.
    pub fn apply(self, mut profile: Profile) -> Result<Profile, String> {
        if let Some(name) = self.name {
            profile.name = name.trim().to_string();
        }
        if let Some(dob) = self.dob {
            let dob = dob.trim();
            if !dob.is_empty() && NaiveDate::parse_from_str(dob, "%Y-%m-%d").is_err() {
                return Err(format!("Invalid date of birth '{dob}', expected YYYY-MM-DD"));
            }
            profile.date_of_birth = dob.to_string();
        }
        if let Some(allergies) = self.allergies {
            profile.allergies = parse_list(&allergies);
        }
        if let Some(medications) = self.medications {
            profile.current_medications = parse_list(&medications);
        }
        if let Some(history) = self.history {
            profile.medical_history = history.trim().to_string();
        }
        Ok(profile)
    }

    fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.dob.is_none()
            && self.allergies.is_none()
            && self.medications.is_none()
            && self.history.is_none()
    }
}

pub async fn show() -> Result<(), Box<dyn std::error::Error>> {
    let config = super::load_config()?;
    let profile = super::open_store(&config).load_profile()?;

    println!("🩺 Patient Profile");
    println!("==================\n");
    print_profile(&profile);

    if profile.is_empty() {
        println!("\n  ⚠️  Nothing saved yet. Use `medcompanion profile set --name ...`");
    }
    println!();
    Ok(())
}

pub async fn set(update: ProfileUpdate) -> Result<(), Box<dyn std::error::Error>> {
    if update.is_empty() {
        return Err("Nothing to update. Pass at least one of --name, --dob, --allergies, --medications, --history".into());
    }

    let config = super::load_config()?;
    let store = super::open_store(&config);

    let profile = update.apply(store.load_profile()?)?;
    store.save_profile(&profile)?;

    println!("✅ Profile updated successfully!\n");
    print_profile(&profile);
    println!();
    Ok(())
}

fn print_profile(profile: &Profile) {
    println!("  Name:           {}", or_dash(&profile.name));
    println!("  Date of birth:  {}", or_dash(&profile.date_of_birth));
    println!("  Allergies:      {}", or_dash(&profile.allergies.join(", ")));
    println!("  Medications:    {}", or_dash(&profile.current_medications.join(", ")));
    println!("  History:        {}", or_dash(&profile.medical_history));
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() { "-" } else { value }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ann() -> Profile {
        Profile {
            name: "Ann".into(),
            date_of_birth: "1980-04-02".into(),
            allergies: vec!["penicillin".into()],
            current_medications: vec!["metformin".into()],
            medical_history: "Type 2 diabetes".into(),
        }
    }

    #[test]
    fn unspecified_fields_are_kept() {
        let update = ProfileUpdate {
            allergies: Some("penicillin, latex".into()),
            ..ProfileUpdate::default()
        };
        let profile = update.apply(ann()).unwrap();

        assert_eq!(profile.allergies, vec!["penicillin", "latex"]);
        assert_eq!(profile.name, "Ann");
        assert_eq!(profile.current_medications, vec!["metformin"]);
        assert_eq!(profile.medical_history, "Type 2 diabetes");
    }

    #[test]
    fn empty_list_clears_field() {
        let update = ProfileUpdate {
            medications: Some(" , ".into()),
            ..ProfileUpdate::default()
        };
        let profile = update.apply(ann()).unwrap();
        assert!(profile.current_medications.is_empty());
    }

    #[test]
    fn invalid_dob_rejected() {
        let update = ProfileUpdate {
            dob: Some("02/04/1980".into()),
            ..ProfileUpdate::default()
        };
        let err = update.apply(ann()).unwrap_err();
        assert!(err.contains("YYYY-MM-DD"));
    }

    #[test]
    fn blank_dob_clears_it() {
        let update = ProfileUpdate {
            dob: Some("".into()),
            ..ProfileUpdate::default()
        };
        assert_eq!(update.apply(ann()).unwrap().date_of_birth, "");
    }

    #[test]
    fn no_fields_is_empty_update() {
        assert!(ProfileUpdate::default().is_empty());
        assert!(!ProfileUpdate { name: Some("Ann".into()), ..ProfileUpdate::default() }.is_empty());
    }
}
