//! Contact repository for JSON storage
//!
//! The whole collection is one JSON array in `contacts.json`; there is no
//! wrapper object, schema version or index.

use std::path::{Path, PathBuf};

use crate::error::ContactResult;
use crate::models::Contact;

use super::file_io::{read_json, write_json_atomic};
use super::ContactBackend;

/// Backend persisting the collection to a single JSON file
pub struct JsonFileBackend {
    path: PathBuf,
    pretty: bool,
}

impl JsonFileBackend {
    /// Create a backend writing compact JSON to `path`
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            pretty: false,
        }
    }

    /// Toggle pretty-printed output
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ContactBackend for JsonFileBackend {
    fn load(&self) -> ContactResult<Vec<Contact>> {
        read_json(&self.path)
    }

    fn save(&self, contacts: &[Contact]) -> ContactResult<()> {
        write_json_atomic(&self.path, contacts, self.pretty)
    }
}
