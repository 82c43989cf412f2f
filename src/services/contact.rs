//! Contact service
//!
//! Business logic for the contact book. Each operation is a single
//! load → compute → (save) cycle over the whole collection.

use crate::error::{ContactBookError, ContactResult};
use crate::models::{Category, Contact, ContactId};
use crate::storage::Storage;

/// Service for contact management
pub struct ContactService<'a> {
    storage: &'a Storage,
}

impl<'a> ContactService<'a> {
    /// Create a new contact service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Add a contact and return it with its assigned id
    ///
    /// Duplicate names and emails are allowed.
    pub fn add(
        &self,
        name: &str,
        email: &str,
        phone: &str,
        category: Category,
    ) -> ContactResult<Contact> {
        let mut contacts = self.storage.contacts().load()?;

        let contact = Contact::new(
            next_id(&contacts)?,
            name.trim(),
            email.trim(),
            phone.trim(),
            category,
        );
        contact
            .validate()
            .map_err(|e| ContactBookError::Validation(e.to_string()))?;

        contacts.push(contact.clone());
        self.storage.contacts().save(&contacts)?;

        self.storage.log_create(&contact);

        Ok(contact)
    }

    /// Remove the contact with `id`, keeping the order of the rest
    ///
    /// Nothing is saved when no contact has that id.
    pub fn delete(&self, id: ContactId) -> ContactResult<Contact> {
        let mut contacts = self.storage.contacts().load()?;

        let index = contacts
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| ContactBookError::contact_not_found(id.to_string()))?;

        let removed = contacts.remove(index);
        self.storage.contacts().save(&contacts)?;

        self.storage.log_delete(&removed);

        Ok(removed)
    }

    /// All contacts, in stored order
    pub fn list(&self) -> ContactResult<Vec<Contact>> {
        self.storage.contacts().load()
    }

    /// Get a contact by id
    pub fn get(&self, id: ContactId) -> ContactResult<Option<Contact>> {
        Ok(self
            .storage
            .contacts()
            .load()?
            .into_iter()
            .find(|c| c.id == id))
    }

    /// Contacts in `category`, in stored order
    pub fn filter_by_category(&self, category: Category) -> ContactResult<Vec<Contact>> {
        let mut contacts = self.storage.contacts().load()?;
        contacts.retain(|c| c.category == category);
        Ok(contacts)
    }

    /// Contacts whose name or email contains `term`, ignoring case
    pub fn search(&self, term: &str) -> ContactResult<Vec<Contact>> {
        let mut contacts = self.storage.contacts().load()?;
        contacts.retain(|c| c.matches_term(term));
        Ok(contacts)
    }
}

/// `max(id) + 1`, or the first id for an empty collection
pub(crate) fn next_id(contacts: &[Contact]) -> ContactResult<ContactId> {
    match contacts.iter().map(|c| c.id).max() {
        Some(max) => max
            .next()
            .ok_or_else(|| ContactBookError::Validation("Contact id space exhausted".into())),
        None => Ok(ContactId::FIRST),
    }
}
