//! YAML export for a human-readable backup

use std::io::Write;

use crate::error::{ContactBookError, ContactResult};
use crate::export::json::ContactExport;
use crate::storage::Storage;

/// Export all contacts as YAML
pub fn export_yaml<W: Write>(storage: &Storage, writer: &mut W) -> ContactResult<()> {
    let export = ContactExport::from_storage(storage)?;

    writeln!(writer, "# Contact Book Export")
        .map_err(|e| ContactBookError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| ContactBookError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| ContactBookError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| ContactBookError::Export(e.to_string()))?;

    Ok(())
}
