//! Error types for file conversion and the command line.
//!
//! Conversion itself cannot fail; only argument handling and file I/O can.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors reported to the user before exiting with a failure status.
#[derive(Debug, Error)]
pub enum Error {
    /// Wrong number of command-line arguments.
    #[error("Usage: markdown2html README.md README.html")]
    Usage,

    /// Input path does not name a regular file.
    #[error("Missing {}", .0.display())]
    MissingInput(PathBuf),

    /// Input exists but could not be read as UTF-8 text.
    #[error("failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    /// Output could not be written.
    #[error("failed to write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
