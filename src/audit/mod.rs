//! Audit logging for the contact book
//!
//! Every add and delete that reaches disk is recorded in an append-only,
//! line-delimited JSON log (`audit.log`) next to the contacts file.
//!
//! - `AuditEntry`: timestamp, operation, contact id/name and a snapshot of
//!   the contact.
//! - `AuditLogger`: appends entries and reads them back.

mod entry;
mod logger;

pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
