//! User settings for the contact book
//!
//! Settings live in `config.json` next to the contacts file. Every field has a
//! default so older or hand-edited files keep loading.

use serde::{Deserialize, Serialize};

use super::paths::ContactPaths;
use crate::error::ContactBookError;

/// User settings for the contact book
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for the settings file itself
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Write contacts.json pretty-printed instead of compact
    #[serde(default)]
    pub pretty_json: bool,

    /// Record create/delete operations in the audit log
    #[serde(default = "default_audit_enabled")]
    pub audit_enabled: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_audit_enabled() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            pretty_json: false,
            audit_enabled: default_audit_enabled(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &ContactPaths) -> Result<Self, ContactBookError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                ContactBookError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                ContactBookError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ContactPaths) -> Result<(), ContactBookError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            ContactBookError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            ContactBookError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}
