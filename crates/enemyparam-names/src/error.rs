//! Error types for name table parsing.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading a name table.
#[derive(Debug, Error)]
pub enum Error {
    /// The names file does not exist.
    #[error("names file not found: {}", path.display())]
    MissingFile { path: PathBuf },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for name table operations.
pub type Result<T> = std::result::Result<T, Error>;
