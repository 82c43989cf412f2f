//! Storage layer for the contact book
//!
//! The collection is always read and written as a whole. Backends implement
//! [`ContactBackend`]; the JSON file backend writes atomically (temp file then
//! rename), the memory backend never touches disk.

pub mod contacts;
pub mod file_io;
pub mod memory;

pub use contacts::JsonFileBackend;
pub use file_io::{read_json, write_json_atomic};
pub use memory::MemoryBackend;

use std::cell::RefCell;
use std::rc::Rc;

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::{ContactPaths, Settings};
use crate::error::{ContactBookError, ContactResult};
use crate::models::Contact;

/// Loads and saves the full contact collection
pub trait ContactBackend {
    /// Read the whole collection; a missing store is an empty collection
    fn load(&self) -> ContactResult<Vec<Contact>>;

    /// Overwrite the store with `contacts`
    fn save(&self, contacts: &[Contact]) -> ContactResult<()>;
}

impl<B: ContactBackend + ?Sized> ContactBackend for Rc<B> {
    fn load(&self) -> ContactResult<Vec<Contact>> {
        (**self).load()
    }

    fn save(&self, contacts: &[Contact]) -> ContactResult<()> {
        (**self).save(contacts)
    }
}

/// Storage coordinator: the contact backend plus the audit log
///
/// Audit writes happen after the contacts are saved, so a failed audit write
/// never fails the operation. Failures are kept for the caller to report.
pub struct Storage {
    paths: Option<ContactPaths>,
    contacts: Box<dyn ContactBackend>,
    audit: Option<AuditLogger>,
    audit_failures: RefCell<Vec<ContactBookError>>,
}

impl Storage {
    /// Create file-backed storage under `paths`
    pub fn new(paths: ContactPaths, settings: &Settings) -> Result<Self, ContactBookError> {
        paths.ensure_directories()?;

        let backend = JsonFileBackend::new(paths.contacts_file()).pretty(settings.pretty_json);
        let audit = settings
            .audit_enabled
            .then(|| AuditLogger::new(paths.audit_log()));

        Ok(Self {
            contacts: Box::new(backend),
            audit,
            paths: Some(paths),
            audit_failures: RefCell::default(),
        })
    }

    /// Create storage over an arbitrary backend, without audit logging
    pub fn with_backend(backend: impl ContactBackend + 'static) -> Self {
        Self {
            paths: None,
            contacts: Box::new(backend),
            audit: None,
            audit_failures: RefCell::default(),
        }
    }

    /// Create in-memory storage holding `contacts`
    pub fn in_memory(contacts: Vec<Contact>) -> Self {
        Self::with_backend(MemoryBackend::with_contacts(contacts))
    }

    /// Get the paths configuration (file-backed storage only)
    pub fn paths(&self) -> Option<&ContactPaths> {
        self.paths.as_ref()
    }

    /// The contact backend
    pub fn contacts(&self) -> &dyn ContactBackend {
        self.contacts.as_ref()
    }

    /// The audit logger, if auditing is enabled
    pub fn audit(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    /// Record an added contact
    pub fn log_create(&self, contact: &Contact) {
        if let Some(logger) = &self.audit {
            self.note(logger.log(&AuditEntry::create(contact)));
        }
    }

    /// Record a removed contact
    pub fn log_delete(&self, contact: &Contact) {
        if let Some(logger) = &self.audit {
            self.note(logger.log(&AuditEntry::delete(contact)));
        }
    }

    /// Record several added contacts at once
    pub fn log_create_batch(&self, contacts: &[Contact]) {
        if let Some(logger) = &self.audit {
            let entries: Vec<_> = contacts.iter().map(AuditEntry::create).collect();
            self.note(logger.log_batch(&entries));
        }
    }

    /// Audit writes that failed since the last call, oldest first
    pub fn take_audit_failures(&self) -> Vec<ContactBookError> {
        self.audit_failures.take()
    }

    fn note(&self, result: ContactResult<()>) {
        if let Err(e) = result {
            self.audit_failures.borrow_mut().push(e);
        }
    }
}
