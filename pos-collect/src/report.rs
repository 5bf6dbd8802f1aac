//! Collection report types.

use serde::Serialize;

use crate::error::ScanError;

/// Result of a collection run.
///
/// A non-empty `scan_errors` means some files (or the whole directory)
/// contributed nothing to `values`.
#[derive(Debug, Clone, Serialize)]
#[non_exhaustive]
pub struct ScanReport {
    /// The key whose values were collected.
    pub key: String,
    /// Number of files successfully scanned (read + parsed).
    pub scanned_files: usize,
    /// Number of files that could not be scanned (read/parse failures).
    pub failed_files: usize,
    /// Whether every candidate file was scanned and no scan errors occurred.
    pub ok: bool,
    /// Distinct collected values in lexicographic order.
    pub values: Vec<String>,
    /// Scan-level errors: files or the directory that could not be read or parsed.
    pub scan_errors: Vec<ScanError>,
}

impl ScanReport {
    /// Report for a directory that could not be listed at all.
    #[must_use]
    pub fn inaccessible(key: &str, error: ScanError) -> Self {
        Self {
            key: key.to_owned(),
            scanned_files: 0,
            failed_files: 0,
            ok: false,
            values: Vec::new(),
            scan_errors: vec![error],
        }
    }

    /// Total number of files attempted (scanned + failed).
    #[must_use]
    pub fn files_attempted(&self) -> usize {
        self.scanned_files + self.failed_files
    }

    /// Whether the scanned directory itself could not be listed.
    #[must_use]
    pub fn directory_failed(&self) -> bool {
        self.scan_errors.iter().any(|e| e.kind.is_directory_level())
    }
}
