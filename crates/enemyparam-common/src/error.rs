//! Error types for enemyparam-common.

use thiserror::Error;

/// Common error type for enemyparam operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A read would cross the end of the buffer.
    #[error("unexpected end of buffer at offset {offset:#x}: needed {needed} bytes but only {available} available")]
    UnexpectedEof {
        offset: usize,
        needed: usize,
        available: usize,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;
