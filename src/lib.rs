//! Contact Book - a personal contact manager for the command line
//!
//! This library provides the core functionality for the `contactbook` binary.
//! Contacts are kept as a single JSON array on disk; every operation loads the
//! whole collection, works on it in memory and (for mutations) writes it back.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `models`: Contact record, id and category enumeration
//! - `storage`: JSON file and in-memory backends
//! - `services`: Add/list/delete/filter/search and CSV import
//! - `audit`: Append-only audit log of mutations
//! - `display`: Table and detail formatting
//! - `export`: CSV, JSON and YAML export
//! - `cli`: Command handlers and interactive prompts
//!
//! # Example
//!
//! ```rust,ignore
//! use contactbook::config::ContactPaths;
//! use contactbook::models::Category;
//! use contactbook::services::ContactService;
//! use contactbook::storage::Storage;
//!
//! let storage = Storage::new(ContactPaths::new()?, &Settings::default())?;
//! let service = ContactService::new(&storage);
//! let alice = service.add("Alice", "a@x.com", "555", Category::Family)?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{ContactBookError, ContactResult};
