//! Audit logger for append-only audit log
//!
//! Each entry is written as a single JSON line and flushed immediately.

use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use crate::error::{ContactBookError, ContactResult};

use super::entry::AuditEntry;

/// Handles writing audit entries to the audit log file (JSONL)
pub struct AuditLogger {
    log_path: PathBuf,
}

impl AuditLogger {
    /// Logger appending to `log_path`; the file is created on first write
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append an entry to the log
    pub fn log(&self, entry: &AuditEntry) -> ContactResult<()> {
        self.log_batch(std::slice::from_ref(entry))
    }

    /// Append several entries with a single flush
    pub fn log_batch(&self, entries: &[AuditEntry]) -> ContactResult<()> {
        if entries.is_empty() {
            return Ok(());
        }

        // Serialize everything first so a bad entry never leaves a partial batch
        let mut lines = String::new();
        for entry in entries {
            lines.push_str(&serde_json::to_string(entry)?);
            lines.push('\n');
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| {
                ContactBookError::Io(format!(
                    "Failed to open audit log {}: {}",
                    self.log_path.display(),
                    e
                ))
            })?;
        file.write_all(lines.as_bytes())?;
        file.flush()?;

        Ok(())
    }

    /// Read all audit entries, oldest first
    ///
    /// A missing log reads as empty. Blank lines are ignored; any other line
    /// that fails to decode is an error naming its line number.
    pub fn read_all(&self) -> ContactResult<Vec<AuditEntry>> {
        let Some(reader) = self.open_for_reading()? else {
            return Ok(Vec::new());
        };

        let mut entries = Vec::new();
        for (index, line) in reader.lines().enumerate() {
            let line_no = index + 1;
            let line = line.map_err(|e| {
                ContactBookError::Io(format!("Audit log line {}: {}", line_no, e))
            })?;
            if line.trim().is_empty() {
                continue;
            }
            entries.push(serde_json::from_str(&line).map_err(|e| {
                ContactBookError::Json(format!("Audit log line {}: {}", line_no, e))
            })?);
        }

        Ok(entries)
    }

    /// The last `count` entries, oldest first
    pub fn read_recent(&self, count: usize) -> ContactResult<Vec<AuditEntry>> {
        let mut entries = self.read_all()?;
        let skip = entries.len().saturating_sub(count);
        entries.drain(..skip);
        Ok(entries)
    }

    /// Number of non-blank lines in the log
    pub fn entry_count(&self) -> ContactResult<usize> {
        Ok(match self.open_for_reading()? {
            Some(reader) => reader
                .lines()
                .map_while(Result::ok)
                .filter(|l| !l.trim().is_empty())
                .count(),
            None => 0,
        })
    }

    fn open_for_reading(&self) -> ContactResult<Option<BufReader<File>>> {
        match File::open(&self.log_path) {
            Ok(file) => Ok(Some(BufReader::new(file))),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ContactBookError::Io(format!(
                "Failed to open audit log {}: {}",
                self.log_path.display(),
                e
            ))),
        }
    }

    /// Get the path to the audit log file
    pub fn path(&self) -> &Path {
        &self.log_path
    }
}
