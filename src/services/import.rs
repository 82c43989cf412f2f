//! CSV import service
//!
//! Appends contacts from a CSV file with a `name,email,phone,category` header.
//! Rows that fail to parse or validate are skipped and reported; the rest are
//! saved in one write and receive fresh ids.

use std::io::Read;

use serde::Deserialize;

use crate::error::{ContactBookError, ContactResult};
use crate::models::{Category, Contact};
use crate::storage::Storage;

use super::contact::next_id;

/// One CSV row as read from the file
#[derive(Debug, Deserialize)]
struct ImportRow {
    name: String,
    email: String,
    #[serde(default)]
    phone: String,
    category: String,
}

/// A row that was not imported
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    /// 1-based line number in the source file
    pub line: u64,
    pub reason: String,
}

/// Outcome of an import
#[derive(Debug, Default)]
pub struct ImportResult {
    pub imported: Vec<Contact>,
    pub skipped: Vec<SkippedRow>,
}

/// Service for importing contacts
pub struct ImportService<'a> {
    storage: &'a Storage,
}

impl<'a> ImportService<'a> {
    /// Create a new import service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Import all valid rows from `reader`
    pub fn import_csv<R: Read>(&self, reader: R) -> ContactResult<ImportResult> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        for required in ["name", "email", "category"] {
            if !headers.iter().any(|h| h.eq_ignore_ascii_case(required)) {
                return Err(ContactBookError::Import(format!(
                    "Missing required column '{}'",
                    required
                )));
            }
        }
        // Header names are matched case-insensitively
        let headers: csv::StringRecord = headers.iter().map(|h| h.to_lowercase()).collect();

        let mut contacts = self.storage.contacts().load()?;
        let mut result = ImportResult::default();
        let mut record = csv::StringRecord::new();

        while csv_reader.read_record(&mut record)? {
            let line = record.position().map(|p| p.line()).unwrap_or(0);

            let row: ImportRow = match record.deserialize(Some(&headers)) {
                Ok(row) => row,
                Err(e) => {
                    result.skipped.push(SkippedRow {
                        line,
                        reason: e.to_string(),
                    });
                    continue;
                }
            };

            let category = match row.category.parse::<Category>() {
                Ok(category) => category,
                Err(reason) => {
                    result.skipped.push(SkippedRow { line, reason });
                    continue;
                }
            };

            let contact = Contact::new(next_id(&contacts)?, row.name, row.email, row.phone, category);
            if let Err(e) = contact.validate() {
                result.skipped.push(SkippedRow {
                    line,
                    reason: e.to_string(),
                });
                continue;
            }

            contacts.push(contact.clone());
            result.imported.push(contact);
        }

        if !result.imported.is_empty() {
            self.storage.contacts().save(&contacts)?;
            self.storage.log_create_batch(&result.imported);
        }

        Ok(result)
    }
}
