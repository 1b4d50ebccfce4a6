//! Enemy name table parser.
//!
//! The names binary maps numeric enemy IDs to display names through an
//! indirect pointer table.
//!
//! # File Format
//!
//! - `0x000..0x124`: header (ignored)
//! - `0x124..EOF`: array of 8-byte entries `{ u32 id, u32 string_offset }`,
//!   both little-endian, until fewer than 8 bytes remain
//! - Each name is a NUL-terminated UTF-8 string located at
//!   `string_offset + 0x120` from the start of the file
//!
//! Names are passed through [`enemyparam_common::sanitize`] before being
//! cached, so every resolved name is a valid identifier.
//!
//! # Example
//!
//! ```no_run
//! use enemyparam_names::NameTable;
//!
//! let names = NameTable::open("data/enemy_names.bin")?;
//! if let Some(name) = names.lookup(42) {
//!     println!("42 -> {}", name);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod entry;
mod error;
mod table;

pub use entry::{NameTableEntry, NAMES_START_OFFSET, NAME_RECORD_SIZE, STRING_OFFSET_ADDITION};
pub use error::{Error, Result};
pub use table::NameTable;
