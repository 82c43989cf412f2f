//! Path management for the contact book
//!
//! ## Path Resolution Order
//!
//! 1. `CONTACTBOOK_DATA_DIR` environment variable (if set)
//! 2. The directory containing the running executable
//! 3. The platform data directory (`directories::ProjectDirs`)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::ContactBookError;

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "CONTACTBOOK_DATA_DIR";

/// Manages all paths used by the contact book
#[derive(Debug, Clone)]
pub struct ContactPaths {
    /// Base directory holding the contacts file, settings and audit log
    base_dir: PathBuf,
}

impl ContactPaths {
    /// Create a new ContactPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if none of the candidate locations can be determined.
    pub fn new() -> Result<Self, ContactBookError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create ContactPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to contacts.json
    pub fn contacts_file(&self) -> PathBuf {
        self.base_dir.join("contacts.json")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), ContactBookError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| ContactBookError::Io(format!("Failed to create base directory: {}", e)))
    }
}

/// The contacts file lives alongside the installed binary
fn resolve_default_path() -> Result<PathBuf, ContactBookError> {
    if let Some(dir) = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(PathBuf::from))
    {
        return Ok(dir);
    }

    ProjectDirs::from("", "", "contactbook")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| ContactBookError::Config("Could not determine a data directory".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ContactPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.contacts_file(), temp_dir.path().join("contacts.json"));
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().to_str().unwrap();

        env::set_var(DATA_DIR_ENV, custom_path);

        let paths = ContactPaths::new().unwrap();
        assert_eq!(paths.base_dir(), temp_dir.path());

        env::remove_var(DATA_DIR_ENV);
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ContactPaths::with_base_dir(temp_dir.path().join("nested").join("book"));

        paths.ensure_directories().unwrap();

        assert!(paths.base_dir().exists());
    }

    #[test]
    fn test_file_paths() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ContactPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(paths.audit_log(), temp_dir.path().join("audit.log"));
    }
}
