//! Error types for the enemyparam facade.

use thiserror::Error;

/// Errors that can occur while exporting a ParamTable listing.
#[derive(Debug, Error)]
pub enum Error {
    /// Enemy record error.
    #[error("{0}")]
    Enemies(#[from] enemyparam_enemies::Error),

    /// I/O error while writing the output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for enemyparam operations.
pub type Result<T> = std::result::Result<T, Error>;
