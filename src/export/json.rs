//! JSON export
//!
//! Wraps the contact list with a schema version and timestamp. The live store
//! stays a bare array; this format is for hand-off and backup only.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ContactBookError, ContactResult};
use crate::models::Contact;
use crate::services::ContactService;
use crate::storage::Storage;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full contact book export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Number of contacts in the export
    pub contact_count: usize,

    /// All contacts, in stored order
    pub contacts: Vec<Contact>,
}

impl ContactExport {
    /// Build an export from the current store contents
    pub fn from_storage(storage: &Storage) -> ContactResult<Self> {
        let contacts = ContactService::new(storage).list()?;

        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            contact_count: contacts.len(),
            contacts,
        })
    }
}

/// Export all contacts as JSON
pub fn export_json<W: Write>(storage: &Storage, writer: &mut W, pretty: bool) -> ContactResult<()> {
    let export = ContactExport::from_storage(storage)?;

    let written = if pretty {
        serde_json::to_writer_pretty(&mut *writer, &export)
    } else {
        serde_json::to_writer(&mut *writer, &export)
    };
    written.map_err(|e| ContactBookError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| ContactBookError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, ContactId};

    #[test]
    fn test_export_json() {
        let storage = Storage::in_memory(vec![Contact::new(
            ContactId::FIRST,
            "Alice",
            "a@x.com",
            "555",
            Category::Family,
        )]);

        let mut output = Vec::new();
        export_json(&storage, &mut output, true).unwrap();

        let parsed: ContactExport = serde_json::from_slice(&output).unwrap();
        assert_eq!(parsed.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(parsed.contact_count, 1);
        assert_eq!(parsed.contacts[0].name, "Alice");
    }
}
