//! In-memory record store: useful for testing and ephemeral sessions.

use medcompanion_core::error::StorageError;
use medcompanion_core::record::{ConsultationLog, Profile};
use medcompanion_core::store::RecordStore;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Default)]
struct Records {
    profile: Option<Profile>,
    consultations: Vec<ConsultationLog>,
}

/// A store that keeps records in process memory only.
#[derive(Default)]
pub struct InMemoryStore {
    records: RwLock<Records>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from existing records.
    pub fn with_records(profile: Profile, consultations: Vec<ConsultationLog>) -> Self {
        Self {
            records: RwLock::new(Records {
                profile: Some(profile),
                consultations,
            }),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Records> {
        self.records.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Records> {
        self.records.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl RecordStore for InMemoryStore {
    fn name(&self) -> &str {
        "in_memory"
    }

    fn load_profile(&self) -> Result<Profile, StorageError> {
        Ok(self.read().profile.clone().unwrap_or_default())
    }

    fn save_profile(&self, profile: &Profile) -> Result<(), StorageError> {
        self.write().profile = Some(profile.clone());
        Ok(())
    }

    fn load_consultations(&self) -> Result<Vec<ConsultationLog>, StorageError> {
        Ok(self.read().consultations.clone())
    }

    fn add_consultation(&self, consultation: ConsultationLog) -> Result<(), StorageError> {
        self.write().consultations.push(consultation);
        Ok(())
    }
}
