//! Business logic layer
//!
//! Services sit between the CLI and storage. They own id assignment,
//! validation and audit logging.

pub mod contact;
pub mod import;

pub use contact::ContactService;
pub use import::{ImportResult, ImportService, SkippedRow};
