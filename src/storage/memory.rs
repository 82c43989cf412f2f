//! In-memory contact backend
//!
//! Holds the collection in a `RefCell`; used for tests and as a stand-in for
//! the file backend wherever nothing should touch disk.

use std::cell::RefCell;

use crate::error::ContactResult;
use crate::models::Contact;

use super::ContactBackend;

/// Backend keeping the collection in memory
#[derive(Debug, Default)]
pub struct MemoryBackend {
    data: RefCell<Vec<Contact>>,
    saves: RefCell<usize>,
}

impl MemoryBackend {
    /// Create an empty backend
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a backend pre-populated with `contacts`
    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        Self {
            data: RefCell::new(contacts),
            saves: RefCell::new(0),
        }
    }

    /// Number of times `save` has been called
    pub fn save_count(&self) -> usize {
        *self.saves.borrow()
    }
}

impl ContactBackend for MemoryBackend {
    fn load(&self) -> ContactResult<Vec<Contact>> {
        Ok(self.data.borrow().clone())
    }

    fn save(&self, contacts: &[Contact]) -> ContactResult<()> {
        *self.data.borrow_mut() = contacts.to_vec();
        *self.saves.borrow_mut() += 1;
        Ok(())
    }
}
