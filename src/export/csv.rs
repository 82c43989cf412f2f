//! CSV export
//!
//! Writes `name,email,phone,category` plus the id, so the file can be fed
//! back into `import` (which ignores the id column).

use std::io::Write;

use crate::error::{ContactBookError, ContactResult};
use crate::services::ContactService;
use crate::storage::Storage;

/// Export all contacts to CSV
pub fn export_contacts_csv<W: Write>(storage: &Storage, writer: W) -> ContactResult<usize> {
    let contacts = ContactService::new(storage).list()?;

    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer
        .write_record(["id", "name", "email", "phone", "category"])
        .map_err(|e| ContactBookError::Export(e.to_string()))?;

    for contact in &contacts {
        csv_writer
            .write_record([
                contact.id.to_string().as_str(),
                contact.name.as_str(),
                contact.email.as_str(),
                contact.phone.as_str(),
                contact.category.as_str(),
            ])
            .map_err(|e| ContactBookError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| ContactBookError::Export(e.to_string()))?;

    Ok(contacts.len())
}
