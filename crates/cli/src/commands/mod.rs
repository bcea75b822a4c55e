pub mod chat;
pub mod consult;
pub mod dashboard;
pub mod onboard;
pub mod profile;
pub mod status;

use medcompanion_config::AppConfig;
use medcompanion_store::JsonFileStore;

/// Load the config file plus env overrides, with a readable error.
pub(crate) fn load_config() -> Result<AppConfig, Box<dyn std::error::Error>> {
    Ok(AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?)
}

/// The on-disk record store for `config`.
pub(crate) fn open_store(config: &AppConfig) -> JsonFileStore {
    JsonFileStore::new(&config.data_dir)
}
