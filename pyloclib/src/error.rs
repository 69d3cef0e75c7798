//! Error types for pyloclib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during LOC counting
#[derive(Error, Debug)]
pub enum PylocError {
    /// An explicitly supplied path does not exist. Fatal to the whole run.
    #[error("dir/file '{0}' does not exist")]
    PathNotFound(PathBuf),

    /// An explicitly supplied path exists but cannot be read. Fatal to the
    /// whole run.
    #[error("dir/file '{0}' is inaccessible")]
    PathInaccessible(PathBuf),

    /// A file passed collection but failed during content read
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
