//! Configuration module for the contact book
//!
//! - Explicit path configuration passed to the storage layer
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::ContactPaths;
pub use settings::Settings;
