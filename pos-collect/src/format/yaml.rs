//! YAML document parser.

use std::path::Path;

use serde_json::Value;
use serde_saphyr::{DuplicateKeyPolicy, Options};

use crate::error::{ScanError, ScanErrorKind};

/// Parse YAML content into one value per document.
///
/// Repeated mapping keys are accepted and the last occurrence wins. Empty
/// documents are skipped, so empty content yields no documents.
///
/// Unless `multi_document` is set, content holding more than one document
/// is rejected like any other malformed file.
///
/// # Errors
///
/// Returns a `YamlParseError` scan error if any document in the stream is
/// malformed, or if a second document is found and `multi_document` is off.
/// Partial streams are never returned, so a file contributes either all of
/// its documents or none.
pub fn parse_yaml_documents(
    content: &str,
    path: &Path,
    multi_document: bool,
) -> Result<Vec<Value>, ScanError> {
    let options = Options {
        duplicate_keys: DuplicateKeyPolicy::LastWins,
        ..Options::default()
    };
    let documents: Vec<Value> = serde_saphyr::from_multiple_with_options(content, options)
        .map_err(|e| {
            ScanError::new(
                path,
                ScanErrorKind::YamlParseError,
                format!("YAML parse error: {e}"),
            )
        })?;

    if !multi_document && documents.len() > 1 {
        return Err(ScanError::new(
            path,
            ScanErrorKind::YamlParseError,
            format!(
                "YAML parse error: expected a single document in the stream, found {}",
                documents.len()
            ),
        ));
    }

    Ok(documents)
}

/// Read and parse a YAML file (file-based convenience wrapper for tests).
#[cfg(test)]
pub fn parse_yaml_file(path: &Path, max_file_size: u64) -> Result<Vec<Value>, ScanError> {
    use crate::strategy::fs::{ScanResult, read_file_bounded};

    let content = match read_file_bounded(path, max_file_size) {
        ScanResult::Ok(c) => c,
        ScanResult::Err(e) => return Err(e),
    };

    parse_yaml_documents(&content, path, false)
}
