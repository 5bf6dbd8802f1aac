//! Document source strategies.
//!
//! Only the filesystem strategy (`fs` module) exists, exposed through the
//! concrete `collect_fs()` API.

pub mod fs;

/// Content format for dispatching to the correct parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentFormat {
    Yaml,
}
