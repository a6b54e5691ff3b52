//! Data export
//!
//! - JSON: machine-readable full snapshot
//! - YAML: human-readable full snapshot
//!
//! The dashboard's CSV export lives with the report itself.

pub mod json;
pub mod yaml;

pub use json::{export_full_json, ExportMetadata, FullExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_full_yaml;
