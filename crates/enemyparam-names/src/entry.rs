//! Name table entry layout.

use zerocopy::byteorder::little_endian::U32;
use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

/// Absolute offset of the first name table entry.
pub const NAMES_START_OFFSET: usize = 0x124;

/// Size of a single name table entry in bytes.
pub const NAME_RECORD_SIZE: usize = 8;

/// Added to an entry's string offset to get the absolute text position.
pub const STRING_OFFSET_ADDITION: usize = 0x120;

/// One `{ id, string_offset }` pair of the name table.
#[derive(Debug, Clone, Copy, FromBytes, IntoBytes, Immutable, KnownLayout, PartialEq, Eq)]
#[repr(C)]
pub struct NameTableEntry {
    id: U32,
    string_offset: U32,
}

const _: () = assert!(std::mem::size_of::<NameTableEntry>() == NAME_RECORD_SIZE);

impl NameTableEntry {
    /// Create an entry from its raw values.
    #[inline]
    pub fn new(id: u32, string_offset: u32) -> Self {
        Self {
            id: U32::new(id),
            string_offset: U32::new(string_offset),
        }
    }

    /// Enemy ID this entry names.
    #[inline]
    pub fn id(&self) -> u32 {
        self.id.get()
    }

    /// Raw string offset as stored in the file.
    #[inline]
    pub fn string_offset(&self) -> u32 {
        self.string_offset.get()
    }

    /// Absolute position of the name text, or `None` if it overflows `usize`.
    #[inline]
    pub fn text_position(&self) -> Option<usize> {
        usize::try_from(self.string_offset())
            .ok()?
            .checked_add(STRING_OFFSET_ADDITION)
    }
}
