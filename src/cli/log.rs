//! CLI command for viewing the audit log

use crate::error::ContactResult;
use crate::storage::Storage;

/// Print the most recent audit entries, oldest first
pub fn handle_log_command(storage: &Storage, limit: usize) -> ContactResult<()> {
    let Some(logger) = storage.audit() else {
        println!("Audit logging is disabled.");
        return Ok(());
    };

    let entries = logger.read_recent(limit)?;
    if entries.is_empty() {
        println!("No audit entries yet.");
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry.format_human_readable());
    }

    Ok(())
}
