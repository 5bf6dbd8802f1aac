//! # pos-collect
//!
//! Collects the distinct values stored under `pos` (part-of-speech) keys in a
//! directory of YAML lexicon files.
//!
//! The crate separates the **extractor** (input-agnostic, works on any parsed
//! `serde_json::Value`) from the **filesystem source** that lists, reads, and
//! parses files.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pos_collect::{ExtractConfig, FsSourceConfig, collect_fs};
//!
//! let report = collect_fs(&FsSourceConfig::new("lexicon"), &ExtractConfig::default());
//! println!("Files scanned: {}", report.scanned_files);
//! println!("Values: {:?}", report.values);
//! for err in &report.scan_errors {
//!     eprintln!("{}", err.format_human_readable());
//! }
//! ```

mod config;
mod error;
mod extract;
mod format;
pub mod output;
mod report;
mod strategy;

use std::collections::BTreeSet;
use std::path::Path;

pub use config::{DEFAULT_KEY, ExtractConfig, FsSourceConfig, YAML_SUFFIXES};
pub use error::{ScanError, ScanErrorKind};
pub use extract::{extract, extract_values, tag_string};
pub use format::yaml::parse_yaml_documents;
pub use report::ScanReport;

use strategy::ContentFormat;
use strategy::fs::{Listing, ScanResult, content_format_for, find_files, read_file_bounded};

/// Collect tag values from the YAML files of a directory.
///
/// Per-file failures (unreadable, oversized, non UTF-8, malformed YAML) are
/// recorded in `report.scan_errors`; the failing file contributes nothing and
/// the scan continues. If the directory itself cannot be listed, the report
/// carries a single `DirectoryAccess` error and no values.
#[must_use]
pub fn collect_fs(fs_config: &FsSourceConfig, extract_config: &ExtractConfig) -> ScanReport {
    let key = extract_config.key.as_str();

    let (files, mut scan_errors) = match find_files(fs_config) {
        Listing::Files { files, scan_errors } => (files, scan_errors),
        Listing::Inaccessible(err) => {
            tracing::warn!(path = %err.file.display(), "{}", err.message);
            return ScanReport::inaccessible(key, err);
        }
    };
    tracing::debug!(
        path = %fs_config.path.display(),
        candidates = files.len(),
        "listed directory"
    );

    let mut values = BTreeSet::new();
    let mut scanned_files: usize = 0;
    // Walk errors name entries that could not be listed; count them as failed upfront.
    // Bad exclude patterns are not files and stay out of the count.
    let mut failed_files: usize = scan_errors
        .iter()
        .filter(|e| e.kind != ScanErrorKind::InvalidExcludePattern)
        .count();
    let mut total_bytes: u64 = 0;

    for file_path in &files {
        if scanned_files + failed_files >= fs_config.max_files {
            scan_errors.push(ScanError::new(
                file_path,
                ScanErrorKind::LimitExceeded,
                format!(
                    "Scan aborted: max_files limit ({}) reached; remaining files not scanned",
                    fs_config.max_files
                ),
            ));
            failed_files += 1;
            break;
        }

        let content = match read_file_bounded(file_path, fs_config.max_file_size) {
            ScanResult::Ok(c) => c,
            ScanResult::Err(e) => {
                tracing::warn!(path = %file_path.display(), "{}", e.message);
                scan_errors.push(e);
                failed_files += 1;
                continue;
            }
        };

        let file_bytes = content.len() as u64;
        if total_bytes.saturating_add(file_bytes) > fs_config.max_total_bytes {
            scan_errors.push(ScanError::new(
                file_path,
                ScanErrorKind::LimitExceeded,
                format!(
                    "Scan aborted: max_total_bytes limit ({}) reached; remaining files not scanned",
                    fs_config.max_total_bytes
                ),
            ));
            failed_files += 1;
            break;
        }
        total_bytes = total_bytes.saturating_add(file_bytes);

        match collect_content(&content, file_path, extract_config) {
            Ok(found) => {
                tracing::debug!(path = %file_path.display(), found = found.len(), "scanned");
                values.extend(found);
                scanned_files += 1;
            }
            Err(e) => {
                tracing::warn!(path = %file_path.display(), "{}", e.message);
                scan_errors.push(e);
                failed_files += 1;
            }
        }
    }

    tracing::info!(
        scanned = scanned_files,
        failed = failed_files,
        values = values.len(),
        "collection finished"
    );

    ScanReport {
        key: key.to_owned(),
        scanned_files,
        failed_files,
        ok: scan_errors.is_empty(),
        values: values.into_iter().collect(),
        scan_errors,
    }
}

/// Parse one file's content and collect its values into a fresh set.
///
/// The fresh set keeps a failing file from contributing partial results.
fn collect_content(
    content: &str,
    path: &Path,
    config: &ExtractConfig,
) -> Result<BTreeSet<String>, ScanError> {
    let documents = match content_format_for(path) {
        Some(ContentFormat::Yaml) => parse_yaml_documents(content, path, config.multi_document)?,
        None => return Ok(BTreeSet::new()),
    };

    let mut found = BTreeSet::new();
    for document in &documents {
        extract(document, &config.key, &mut found);
    }
    Ok(found)
}
