//! RecordStore trait: durable storage for the profile and consultation log.
//!
//! The store exclusively owns the persisted representation. Callers get owned
//! copies and change records only through the write operations below.
//!
//! Operations are synchronous: storage is local and uncontended. Implementations
//! assume a single user and a single process; `add_consultation` is a
//! read-modify-write of the whole log and is not safe against concurrent
//! writers.

use crate::error::StorageError;
use crate::record::{ConsultationLog, Profile};

pub trait RecordStore: Send + Sync {
    /// A human-readable name for this backend (e.g., "json_file").
    fn name(&self) -> &str;

    /// Load the profile. A store that has never been written returns
    /// `Profile::default()`; an unreadable or corrupt record is an error.
    fn load_profile(&self) -> Result<Profile, StorageError>;

    /// Replace the persisted profile.
    fn save_profile(&self, profile: &Profile) -> Result<(), StorageError>;

    /// Load every consultation, oldest first. Empty if none were logged.
    fn load_consultations(&self) -> Result<Vec<ConsultationLog>, StorageError>;

    /// Append one consultation, preserving all earlier entries.
    fn add_consultation(&self, consultation: ConsultationLog) -> Result<(), StorageError>;
}
