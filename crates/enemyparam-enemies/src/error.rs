//! Error types for enemy record reading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when reading enemy records.
#[derive(Debug, Error)]
pub enum Error {
    /// An input file does not exist.
    #[error("input file not found: {}", path.display())]
    MissingFile { path: PathBuf },

    /// Record index past the configured enemy count.
    #[error("enemy index {index} out of range (count {count})")]
    IndexOutOfRange { index: u32, count: u32 },

    /// The record's byte range extends past the end of the file.
    #[error(
        "enemy {index} at offset {offset:#x} ({size:#x} bytes) extends past end of file ({file_len} bytes)"
    )]
    RecordOutOfBounds {
        index: u32,
        offset: usize,
        size: usize,
        file_len: usize,
    },

    /// A field could not be decoded.
    #[error("decode error: {0}")]
    Decode(#[from] enemyparam_common::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for enemy record operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Map a `NotFound` open error to [`Error::MissingFile`].
pub(crate) fn open_error(path: &std::path::Path, e: std::io::Error) -> Error {
    match e.kind() {
        std::io::ErrorKind::NotFound => Error::MissingFile {
            path: path.to_path_buf(),
        },
        _ => Error::Io(e),
    }
}
