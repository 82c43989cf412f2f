//! Contact model
//!
//! A single entry in the contact book.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::ids::ContactId;

/// A contact record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Unique identifier, assigned by the store
    pub id: ContactId,

    /// Display name
    pub name: String,

    /// Email address (only checked for being non-empty)
    pub email: String,

    /// Phone number (free text)
    pub phone: String,

    /// Category tag
    pub category: Category,
}

impl Contact {
    /// Create a new contact
    pub fn new(
        id: ContactId,
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            category,
        }
    }

    /// Validate the contact
    pub fn validate(&self) -> Result<(), ContactValidationError> {
        if self.name.trim().is_empty() {
            return Err(ContactValidationError::EmptyName);
        }

        if self.email.trim().is_empty() {
            return Err(ContactValidationError::EmptyEmail);
        }

        Ok(())
    }

    /// Whether name or email contains `term`, ignoring case
    ///
    /// An empty term matches every contact.
    pub fn matches_term(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.name.to_lowercase().contains(&term) || self.email.to_lowercase().contains(&term)
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.name, self.email)
    }
}

/// Validation errors for contacts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactValidationError {
    EmptyName,
    EmptyEmail,
}

impl fmt::Display for ContactValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Contact name cannot be empty"),
            Self::EmptyEmail => write!(f, "Contact email cannot be empty"),
        }
    }
}

impl std::error::Error for ContactValidationError {}
