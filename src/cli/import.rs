//! CLI command handler for CSV import

use std::fs::File;
use std::path::Path;

use crate::error::{ContactBookError, ContactResult};
use crate::services::ImportService;
use crate::storage::Storage;

/// Handle the import command
pub fn handle_import_command(storage: &Storage, file: &Path) -> ContactResult<()> {
    if !file.exists() {
        return Err(ContactBookError::Import(format!(
            "File not found: {}",
            file.display()
        )));
    }

    let reader = File::open(file)
        .map_err(|e| ContactBookError::Import(format!("Failed to read file: {}", e)))?;

    let result = ImportService::new(storage).import_csv(reader)?;

    println!("Import Complete!");
    println!("  Imported:    {}", result.imported.len());
    if !result.skipped.is_empty() {
        println!("  Skipped:     {}", result.skipped.len());
        for skipped in &result.skipped {
            println!("    Line {}: {}", skipped.line, skipped.reason);
        }
    }

    Ok(())
}
