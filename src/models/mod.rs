//! Core data models for the contact book

pub mod category;
pub mod contact;
pub mod ids;

pub use category::Category;
pub use contact::{Contact, ContactValidationError};
pub use ids::{ContactId, ParseContactIdError};
