//! File-based record store: two pretty-printed JSON files.
//!
//! Storage location: `<data_dir>/profile.json` and `<data_dir>/consultations.json`.
//!
//! Every operation goes to disk; nothing is cached between calls, so a record
//! written by one process run is exactly what the next run reads back.
//! Writes land in a sibling `.tmp` file that is renamed over the target, so a
//! crash mid-write leaves the previous record intact.

use medcompanion_core::error::StorageError;
use medcompanion_core::record::{ConsultationLog, Profile};
use medcompanion_core::store::RecordStore;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const PROFILE_FILE: &str = "profile.json";
pub const CONSULTATIONS_FILE: &str = "consultations.json";

/// A record store backed by JSON files in one data directory.
pub struct JsonFileStore {
    data_dir: PathBuf,
}

impl JsonFileStore {
    /// Create a store rooted at `data_dir`. The directory is created on first
    /// write.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn profile_path(&self) -> PathBuf {
        self.data_dir.join(PROFILE_FILE)
    }

    pub fn consultations_path(&self) -> PathBuf {
        self.data_dir.join(CONSULTATIONS_FILE)
    }

    /// Read and parse `path`, or `None` if the file does not exist.
    fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, StorageError> {
        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(StorageError::Read {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                });
            }
        };

        serde_json::from_str(&content)
            .map(Some)
            .map_err(|e| StorageError::Corrupt {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })
    }

    /// Serialize with 4-space indentation and replace `path` via rename.
    fn write_json<T: Serialize + ?Sized>(&self, path: &Path, value: &T) -> Result<(), StorageError> {
        std::fs::create_dir_all(&self.data_dir).map_err(|e| StorageError::CreateDir {
            path: self.data_dir.clone(),
            reason: e.to_string(),
        })?;

        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        value.serialize(&mut ser).map_err(|e| StorageError::Write {
            path: path.to_path_buf(),
            reason: format!("Failed to serialize record: {e}"),
        })?;

        let tmp_path = path.with_extension("json.tmp");
        std::fs::write(&tmp_path, &buf).map_err(|e| StorageError::Write {
            path: tmp_path.clone(),
            reason: e.to_string(),
        })?;

        std::fs::rename(&tmp_path, path).map_err(|e| {
            let _ = std::fs::remove_file(&tmp_path);
            StorageError::Write {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
        })
    }
}

impl RecordStore for JsonFileStore {
    fn name(&self) -> &str {
        "json_file"
    }

    fn load_profile(&self) -> Result<Profile, StorageError> {
        let path = self.profile_path();
        let profile = Self::read_json::<Profile>(&path)?.unwrap_or_default();
        debug!(path = %path.display(), "Profile loaded");
        Ok(profile)
    }

    fn save_profile(&self, profile: &Profile) -> Result<(), StorageError> {
        let path = self.profile_path();
        self.write_json(&path, profile)?;
        debug!(path = %path.display(), "Profile saved");
        Ok(())
    }

    fn load_consultations(&self) -> Result<Vec<ConsultationLog>, StorageError> {
        let path = self.consultations_path();
        let consultations = Self::read_json::<Vec<ConsultationLog>>(&path)?.unwrap_or_default();
        debug!(path = %path.display(), count = consultations.len(), "Consultations loaded");
        Ok(consultations)
    }

    fn add_consultation(&self, consultation: ConsultationLog) -> Result<(), StorageError> {
        // Whole-log read-modify-write; single writer assumed.
        let mut consultations = self.load_consultations()?;
        consultations.push(consultation);

        let path = self.consultations_path();
        self.write_json(&path, &consultations)?;
        debug!(path = %path.display(), count = consultations.len(), "Consultation appended");
        Ok(())
    }
}
