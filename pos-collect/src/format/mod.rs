//! Format-specific document parsers.
//!
//! Each sub-module turns file content into `serde_json::Value` documents:
//! - `yaml`: YAML streams, one value per document

pub mod yaml;
