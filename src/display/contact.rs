//! Contact display formatting
//!
//! Formats contacts for terminal output in table and detail views.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{Category, Contact, ContactId};

/// Table row for a contact
#[derive(Tabled)]
struct ContactRow<'a> {
    #[tabled(rename = "ID")]
    id: ContactId,
    #[tabled(rename = "Name")]
    name: &'a str,
    #[tabled(rename = "Email")]
    email: &'a str,
    #[tabled(rename = "Phone")]
    phone: &'a str,
    #[tabled(rename = "Category")]
    category: Category,
}

impl<'a> From<&'a Contact> for ContactRow<'a> {
    fn from(contact: &'a Contact) -> Self {
        Self {
            id: contact.id,
            name: &contact.name,
            email: &contact.email,
            phone: &contact.phone,
            category: contact.category,
        }
    }
}

/// Format contacts as a table
///
/// Callers handle the empty case; an empty slice renders a header-only table.
pub fn format_contact_table(contacts: &[Contact]) -> String {
    let mut table = Table::new(contacts.iter().map(ContactRow::from));
    table.with(Style::modern());
    table.to_string()
}

/// Format a single contact's details
pub fn format_contact_details(contact: &Contact) -> String {
    let mut output = String::new();

    output.push_str(&format!("Contact: {}\n", contact.name));
    output.push_str(&format!("  ID:       {}\n", contact.id));
    output.push_str(&format!("  Email:    {}\n", contact.email));
    let phone = if contact.phone.is_empty() {
        "(none)"
    } else {
        contact.phone.as_str()
    };
    output.push_str(&format!("  Phone:    {}\n", phone));
    output.push_str(&format!("  Category: {}\n", contact.category));

    output
}
