//! CLI command handlers
//!
//! Bridges the clap argument parsing with the service layer.

pub mod contact;
pub mod export;
pub mod import;
pub mod log;
pub mod prompt;

pub use contact::{handle_contact_command, ContactCommands};
pub use export::{handle_export_command, ExportFormat};
pub use import::handle_import_command;
pub use log::handle_log_command;
pub use prompt::{Prompter, ScriptedPrompter, TerminalPrompter};
