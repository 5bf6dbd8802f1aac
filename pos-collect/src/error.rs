//! Error types for tag collection.

use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

/// The kind of scan-level failure.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[non_exhaustive]
pub enum ScanErrorKind {
    /// An I/O error occurred while opening or reading the file.
    IoError,
    /// The file exceeded the configured maximum size limit.
    FileTooLarge,
    /// The file content is not valid UTF-8.
    InvalidEncoding,
    /// The file content could not be parsed as valid YAML.
    YamlParseError,
    /// The scanned directory itself could not be listed.
    DirectoryAccess,
    /// A traversal error below the scanned directory (recursive scans only).
    WalkError,
    /// A resource limit (`max_files` or `max_total_bytes`) was reached, truncating the scan.
    LimitExceeded,
    /// An exclude glob pattern could not be parsed.
    InvalidExcludePattern,
}

impl ScanErrorKind {
    /// Whether this failure prevented the whole directory from being scanned.
    #[must_use]
    pub fn is_directory_level(self) -> bool {
        matches!(self, Self::DirectoryAccess)
    }
}

/// A scan-level error: a file (or the directory) that contributed no values.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, Error)]
#[error("{}: {message}", .file.display())]
#[non_exhaustive]
pub struct ScanError {
    /// The path that could not be scanned.
    pub file: PathBuf,
    /// The kind of failure.
    pub kind: ScanErrorKind,
    /// Human-readable description of the failure, including the underlying cause.
    pub message: String,
}

impl ScanError {
    /// Build a scan error for `file`.
    #[must_use]
    pub fn new(file: impl Into<PathBuf>, kind: ScanErrorKind, message: String) -> Self {
        Self {
            file: file.into(),
            kind,
            message,
        }
    }

    /// Format the error for human-readable output.
    #[must_use]
    pub fn format_human_readable(&self) -> String {
        format!("{}: [scan error] {}", self.file.display(), self.message)
    }
}
