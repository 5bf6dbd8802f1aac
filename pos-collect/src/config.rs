//! Configuration types for tag collection.
//!
//! Split into extraction config (what to collect from a parsed document) and
//! source config (how files are discovered and read). The extractor never
//! sees filesystem concerns.

use std::path::PathBuf;

/// Key name collected when no other key is configured.
pub const DEFAULT_KEY: &str = "pos";

/// File name suffixes recognized as YAML documents.
pub const YAML_SUFFIXES: &[&str] = &[".yaml", ".yml"];

/// Extraction config, independent of where documents come from.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct ExtractConfig {
    /// Mapping key whose values are collected. Compared literally.
    pub key: String,
    /// Accept `---` separated multi-document YAML streams (default: off).
    ///
    /// When off, a file holding more than one document fails to parse and
    /// contributes nothing.
    pub multi_document: bool,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            key: DEFAULT_KEY.to_owned(),
            multi_document: false,
        }
    }
}

/// Filesystem source options.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct FsSourceConfig {
    /// Directory to scan.
    pub path: PathBuf,
    /// Exclude patterns (glob format), matched against the full path or the file name.
    pub exclude: Vec<String>,
    /// Maximum file size in bytes (default: 10 MB).
    pub max_file_size: u64,
    /// Whether to follow symbolic links to directories when `max_depth > 1`.
    pub follow_links: bool,
    /// Maximum directory depth (default: 1, the directory's own entries only).
    pub max_depth: usize,
    /// Maximum total number of files to read (default: `100_000`).
    pub max_files: usize,
    /// Maximum total bytes to read across all files (default: 512 MB).
    pub max_total_bytes: u64,
}

impl FsSourceConfig {
    /// Config for scanning `path` with default limits.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }
}

impl Default for FsSourceConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::new(),
            exclude: Vec::new(),
            max_file_size: 10_485_760,
            follow_links: false,
            max_depth: 1,
            max_files: 100_000,
            max_total_bytes: 536_870_912,
        }
    }
}
