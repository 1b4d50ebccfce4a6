//! Little-endian decoding over byte slices.
//!
//! Two flavours are provided: free functions that decode a value at an
//! absolute offset (used for fixed-layout records), and [`BinaryReader`], a
//! cursor-like type for walking tables sequentially.

use std::borrow::Cow;

use byteorder::{ByteOrder, LittleEndian};
use zerocopy::FromBytes;

use crate::{Error, Result};

/// Borrow the 4 bytes at `offset`, or fail if they would cross the end of `bytes`.
#[inline]
fn word(bytes: &[u8], offset: usize) -> Result<&[u8]> {
    match offset.checked_add(4) {
        Some(end) if end <= bytes.len() => Ok(&bytes[offset..end]),
        _ => Err(Error::UnexpectedEof {
            offset,
            needed: 4,
            available: bytes.len().saturating_sub(offset),
        }),
    }
}

/// Decode an unsigned little-endian u32 at `offset`.
#[inline]
pub fn read_u32_le(bytes: &[u8], offset: usize) -> Result<u32> {
    word(bytes, offset).map(LittleEndian::read_u32)
}

/// Decode a two's-complement little-endian i32 at `offset`.
#[inline]
pub fn read_i32_le(bytes: &[u8], offset: usize) -> Result<i32> {
    word(bytes, offset).map(LittleEndian::read_i32)
}

/// Decode an IEEE-754 binary32 little-endian f32 at `offset`.
#[inline]
pub fn read_f32_le(bytes: &[u8], offset: usize) -> Result<f32> {
    word(bytes, offset).map(LittleEndian::read_f32)
}

/// A binary reader that provides zero-copy reading from a byte slice.
///
/// # Example
///
/// ```
/// use enemyparam_common::BinaryReader;
///
/// let data = b"Garula\0Sabertusk";
/// let mut reader = BinaryReader::new(data);
///
/// assert_eq!(reader.read_cstring_lossy(), "Garula");
/// assert_eq!(reader.read_cstring_lossy(), "Sabertusk");
/// assert_eq!(reader.remaining(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct BinaryReader<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> BinaryReader<'a> {
    /// Create a new reader from a byte slice.
    #[inline]
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data, position: 0 }
    }

    /// Create a new reader starting at a specific position.
    #[inline]
    pub const fn new_at(data: &'a [u8], position: usize) -> Self {
        Self { data, position }
    }

    /// Get the current position in the buffer.
    #[inline]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Get the number of bytes remaining to read.
    #[inline]
    pub const fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.position)
    }

    /// Get the remaining bytes as a slice.
    #[inline]
    pub fn remaining_bytes(&self) -> &'a [u8] {
        &self.data[self.position.min(self.data.len())..]
    }

    /// Peek at bytes without advancing the position.
    #[inline]
    pub fn peek_bytes(&self, count: usize) -> Result<&'a [u8]> {
        if self.remaining() < count {
            return Err(Error::UnexpectedEof {
                offset: self.position,
                needed: count,
                available: self.remaining(),
            });
        }
        Ok(&self.data[self.position..self.position + count])
    }

    /// Read bytes and advance the position.
    #[inline]
    pub fn read_bytes(&mut self, count: usize) -> Result<&'a [u8]> {
        let bytes = self.peek_bytes(count)?;
        self.position += count;
        Ok(bytes)
    }

    /// Read a NUL-terminated string, decoding it as lossy UTF-8.
    ///
    /// Reading stops at the first NUL or at the end of the buffer, whichever
    /// comes first. A missing terminator is not an error: whatever precedes
    /// the end of the buffer is returned. Invalid UTF-8 sequences become
    /// `U+FFFD`.
    pub fn read_cstring_lossy(&mut self) -> Cow<'a, str> {
        let remaining = self.remaining_bytes();

        let (bytes, consumed) = match memchr::memchr(0, remaining) {
            Some(null_pos) => (&remaining[..null_pos], null_pos + 1),
            None => (remaining, remaining.len()),
        };
        self.position = self.position.saturating_add(consumed);

        String::from_utf8_lossy(bytes)
    }

    /// Read a struct using zerocopy.
    ///
    /// The struct must implement `FromBytes` from the zerocopy crate.
    #[inline]
    pub fn read_struct<T: FromBytes>(&mut self) -> Result<T> {
        let size = std::mem::size_of::<T>();
        let offset = self.position;
        let bytes = self.read_bytes(size)?;
        T::read_from_bytes(bytes).map_err(|_| Error::UnexpectedEof {
            offset,
            needed: size,
            available: bytes.len(),
        })
    }
}
