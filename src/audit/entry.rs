//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Contact;

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Contact was added
    Create,
    /// Contact was removed
    Delete,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Delete => write!(f, "DELETE"),
        }
    }
}

/// A single audit log entry
///
/// Carries a snapshot of the contact as it was after a create or before a
/// delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// Type of operation performed
    pub operation: Operation,

    /// ID of the affected contact
    pub entity_id: String,

    /// Name of the contact at the time of the operation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,

    /// Contact before the operation (deletes)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    /// Contact after the operation (creates)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,
}

impl AuditEntry {
    /// Entry for a newly added contact
    pub fn create(contact: &Contact) -> Self {
        let mut entry = Self::about(contact, Operation::Create);
        entry.after = serde_json::to_value(contact).ok();
        entry
    }

    /// Entry for a removed contact
    pub fn delete(contact: &Contact) -> Self {
        let mut entry = Self::about(contact, Operation::Delete);
        entry.before = serde_json::to_value(contact).ok();
        entry
    }

    fn about(contact: &Contact, operation: Operation) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            entity_id: contact.id.to_string(),
            entity_name: Some(contact.name.clone()),
            before: None,
            after: None,
        }
    }

    /// One-line summary, e.g. `[2024-01-02 10:00:00 UTC] DELETE #3 Alice`
    pub fn format_human_readable(&self) -> String {
        let when = self.timestamp.format("%Y-%m-%d %H:%M:%S UTC");
        match &self.entity_name {
            Some(name) => format!("[{}] {} #{} {}", when, self.operation, self.entity_id, name),
            None => format!("[{}] {} #{}", when, self.operation, self.entity_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, ContactId};

    fn bob() -> Contact {
        Contact::new(
            ContactId::new(3).unwrap(),
            "Bob",
            "bob@example.com",
            "555-0101",
            Category::Work,
        )
    }

    #[test]
    fn test_operation_display() {
        assert_eq!(Operation::Create.to_string(), "CREATE");
        assert_eq!(Operation::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_create_entry() {
        let entry = AuditEntry::create(&bob());

        assert_eq!(entry.operation, Operation::Create);
        assert_eq!(entry.entity_id, "3");
        assert_eq!(entry.entity_name.as_deref(), Some("Bob"));
        assert!(entry.before.is_none());
        assert_eq!(entry.after.unwrap()["category"], "Work");
    }

    #[test]
    fn test_delete_entry() {
        let entry = AuditEntry::delete(&bob());

        assert_eq!(entry.operation, Operation::Delete);
        assert!(entry.before.is_some());
        assert!(entry.after.is_none());
    }

    #[test]
    fn test_serialization() {
        let entry = AuditEntry::create(&bob());

        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains(r#""operation":"create""#));
        assert!(!json.contains("before"));

        let deserialized: AuditEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.operation, Operation::Create);
    }

    #[test]
    fn test_human_readable_format() {
        let formatted = AuditEntry::delete(&bob()).format_human_readable();
        assert!(formatted.contains("DELETE"));
        assert!(formatted.ends_with("DELETE #3 Bob"));
    }
}
