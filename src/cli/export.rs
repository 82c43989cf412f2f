//! CLI command for data export

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use clap::ValueEnum;

use crate::error::{ContactBookError, ContactResult};
use crate::export::{export_contacts_csv, export_json, export_yaml};
use crate::storage::Storage;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV (re-importable with `import`)
    Csv,
    /// Versioned JSON document
    Json,
    /// Human-readable YAML
    Yaml,
}

/// Handle the export command
pub fn handle_export_command(
    storage: &Storage,
    output: &Path,
    format: ExportFormat,
    pretty: bool,
) -> ContactResult<()> {
    let file = File::create(output).map_err(|e| {
        ContactBookError::Export(format!(
            "Failed to create file {}: {}",
            output.display(),
            e
        ))
    })?;
    let mut writer = BufWriter::new(file);

    match format {
        ExportFormat::Csv => {
            let count = export_contacts_csv(storage, &mut writer)?;
            writer
                .flush()
                .map_err(|e| ContactBookError::Export(e.to_string()))?;
            println!("Exported {} contacts to: {}", count, output.display());
        }
        ExportFormat::Json => {
            export_json(storage, &mut writer, pretty)?;
            writer
                .flush()
                .map_err(|e| ContactBookError::Export(e.to_string()))?;
            println!("Contacts exported to: {}", output.display());
        }
        ExportFormat::Yaml => {
            export_yaml(storage, &mut writer)?;
            writer
                .flush()
                .map_err(|e| ContactBookError::Export(e.to_string()))?;
            println!("Contacts exported to: {}", output.display());
        }
    }

    Ok(())
}
