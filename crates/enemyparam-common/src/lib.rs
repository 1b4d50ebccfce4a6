//! Common utilities for enemyparam.
//!
//! This crate provides the foundational pieces used by the other enemyparam crates:
//!
//! - [`BinaryReader`] - Zero-copy cursor over a byte slice
//! - [`read_u32_le`], [`read_i32_le`], [`read_f32_le`] - Positional little-endian decoding
//! - [`sanitize`] - Identifier sanitizing for display names

mod error;
mod reader;
mod sanitize;

pub use error::{Error, Result};
pub use reader::{read_f32_le, read_i32_le, read_u32_le, BinaryReader};
pub use sanitize::{sanitize, UNKNOWN_NAME};

/// Re-export zerocopy traits for convenience
pub use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};
