//! Filesystem document source.
//!
//! Lists the scanned directory and reads candidate files for the collection
//! pipeline:
//! - Listing is bounded by `max_depth` (1 by default, no subdirectories)
//! - Only regular files are read; devices, pipes, and sockets are skipped
//! - Bounded streaming reads prevent memory `DoS`

use std::io::Read;
use std::path::{Path, PathBuf};

use glob::Pattern;
use walkdir::WalkDir;

use crate::config::{FsSourceConfig, YAML_SUFFIXES};
use crate::error::{ScanError, ScanErrorKind};
use crate::strategy::ContentFormat;

/// Result of attempting to read a file for scanning.
pub enum ScanResult {
    /// File was read successfully; contains the UTF-8 content.
    Ok(String),
    /// File could not be read; contains the scan error.
    Err(ScanError),
}

/// Outcome of listing the scanned directory.
pub enum Listing {
    /// The directory was listed. Per-entry errors may still be present.
    Files {
        files: Vec<PathBuf>,
        scan_errors: Vec<ScanError>,
    },
    /// The directory itself could not be listed.
    Inaccessible(ScanError),
}

/// Check if a path matches any of the exclude patterns
fn matches_exclude(path: &Path, exclude_patterns: &[Pattern]) -> bool {
    let path_str = path.to_string_lossy();
    exclude_patterns.iter().any(|pattern| {
        pattern.matches(&path_str)
            || path
                .file_name()
                .is_some_and(|name| pattern.matches(&name.to_string_lossy()))
    })
}

/// Determine the content format from a file name.
///
/// Matches on the name suffix rather than `Path::extension` so that a bare
/// `.yaml` file name is recognized too.
pub fn content_format_for(path: &Path) -> Option<ContentFormat> {
    let name = path.file_name()?.to_str()?;
    YAML_SUFFIXES
        .iter()
        .any(|suffix| name.ends_with(suffix))
        .then_some(ContentFormat::Yaml)
}

fn directory_error(root: &Path, message: String) -> Listing {
    Listing::Inaccessible(ScanError::new(root, ScanErrorKind::DirectoryAccess, message))
}

fn compile_excludes(exclude: &[String], scan_errors: &mut Vec<ScanError>) -> Vec<Pattern> {
    let mut patterns = Vec::with_capacity(exclude.len());
    for pat_str in exclude {
        match Pattern::new(pat_str) {
            Ok(pat) => patterns.push(pat),
            Err(e) => scan_errors.push(ScanError::new(
                pat_str,
                ScanErrorKind::InvalidExcludePattern,
                format!("Invalid exclude glob pattern '{pat_str}': {e}"),
            )),
        }
    }
    patterns
}

#[cfg(unix)]
fn is_special_file(entry: &walkdir::DirEntry) -> bool {
    use std::os::unix::fs::FileTypeExt;
    entry.metadata().map(|m| m.file_type()).is_ok_and(|ft| {
        ft.is_block_device() || ft.is_char_device() || ft.is_fifo() || ft.is_socket()
    })
}

#[cfg(not(unix))]
fn is_special_file(_entry: &walkdir::DirEntry) -> bool {
    false
}

/// List the files to scan under `config.path`.
///
/// Returns [`Listing::Inaccessible`] when the directory is missing, is not a
/// directory, or cannot be read. Errors on deeper entries (recursive scans)
/// are returned alongside the files and never silently discarded.
pub fn find_files(config: &FsSourceConfig) -> Listing {
    let root = config.path.as_path();

    match std::fs::metadata(root) {
        Ok(meta) if meta.is_dir() => {}
        Ok(_) => return directory_error(root, "Not a directory".to_owned()),
        Err(e) => return directory_error(root, format!("Failed to access directory: {e}")),
    }

    let mut files = Vec::new();
    let mut scan_errors = Vec::new();
    let exclude_patterns = compile_excludes(&config.exclude, &mut scan_errors);

    for entry_result in WalkDir::new(root)
        .min_depth(1)
        .max_depth(config.max_depth.max(1))
        .follow_links(config.follow_links)
    {
        let entry = match entry_result {
            Ok(e) => e,
            Err(walk_err) => {
                if walk_err.depth() == 0 {
                    return directory_error(
                        root,
                        format!("Failed to list directory: {walk_err}"),
                    );
                }
                let path = walk_err
                    .path()
                    .map_or_else(|| root.to_path_buf(), Path::to_path_buf);
                scan_errors.push(ScanError::new(
                    path,
                    ScanErrorKind::WalkError,
                    format!("Directory traversal error: {walk_err}"),
                ));
                continue;
            }
        };

        let file_path = entry.path();

        // `is_file` follows symlinks, so linked YAML files are still read
        if !file_path.is_file() || is_special_file(&entry) {
            continue;
        }

        if content_format_for(file_path).is_none() {
            continue;
        }

        if matches_exclude(file_path, &exclude_patterns) {
            tracing::debug!(path = %file_path.display(), "excluded");
            continue;
        }

        files.push(file_path.to_path_buf());
    }

    files.sort();
    Listing::Files { files, scan_errors }
}

/// Read a file using a bounded streaming read, enforcing `max_file_size`.
///
/// Returns `ScanResult::Err` if:
/// - The file exceeds `max_file_size`
/// - An I/O error occurs
/// - The content is not valid UTF-8
pub fn read_file_bounded(path: &Path, max_file_size: u64) -> ScanResult {
    let file = match std::fs::File::open(path) {
        Ok(f) => f,
        Err(e) => {
            return ScanResult::Err(ScanError::new(
                path,
                ScanErrorKind::IoError,
                format!("Failed to open file: {e}"),
            ));
        }
    };

    // Read at most max_file_size + 1 bytes to detect oversized files
    let mut buffer = Vec::new();
    if let Err(e) = file
        .take(max_file_size.saturating_add(1))
        .read_to_end(&mut buffer)
    {
        return ScanResult::Err(ScanError::new(
            path,
            ScanErrorKind::IoError,
            format!("Failed to read file: {e}"),
        ));
    }

    if buffer.len() as u64 > max_file_size {
        return ScanResult::Err(ScanError::new(
            path,
            ScanErrorKind::FileTooLarge,
            format!("File exceeds maximum size of {max_file_size} bytes"),
        ));
    }

    match String::from_utf8(buffer) {
        Ok(content) => ScanResult::Ok(content),
        Err(e) => ScanResult::Err(ScanError::new(
            path,
            ScanErrorKind::InvalidEncoding,
            format!("File is not valid UTF-8: {e}"),
        )),
    }
}
