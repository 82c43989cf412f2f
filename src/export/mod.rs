//! Export module
//!
//! - CSV: spreadsheet-compatible, re-importable with `import`
//! - JSON: versioned machine-readable export
//! - YAML: human-readable export

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_contacts_csv;
pub use self::json::{export_json, ContactExport, EXPORT_SCHEMA_VERSION};
pub use self::yaml::export_yaml;
