//! Enemies binary access.

use std::fs::File;
use std::path::Path;

use memmap2::Mmap;
use tracing::warn;

use crate::enemy::EnemyRecord;
use crate::error::open_error;
use crate::layout::{record_capacity, record_offset, ENEMY_COUNT, ENEMY_ENTRY_SIZE};
use crate::{Error, Result};

/// Backing storage for the enemies binary.
enum Backing {
    Mapped(Mmap),
    Owned(Vec<u8>),
}

impl Backing {
    #[inline]
    fn bytes(&self) -> &[u8] {
        match self {
            Backing::Mapped(mmap) => &mmap[..],
            Backing::Owned(data) => data.as_slice(),
        }
    }
}

/// The enemies binary, opened once and read by record index.
pub struct EnemyFile {
    data: Backing,
    count: u32,
}

impl EnemyFile {
    /// Memory-map the enemies binary, exposing [`ENEMY_COUNT`] records.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_count(path, ENEMY_COUNT)
    }

    /// Memory-map the enemies binary, exposing `count` records.
    ///
    /// A warning is logged if the file holds a different number of records
    /// than `count`; the count is not adjusted.
    pub fn open_with_count<P: AsRef<Path>>(path: P, count: u32) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| open_error(path, e))?;

        let data = if file.metadata()?.len() == 0 {
            Backing::Owned(Vec::new())
        } else {
            Backing::Mapped(unsafe { Mmap::map(&file)? })
        };

        let this = Self { data, count };
        this.check_capacity();
        Ok(this)
    }

    /// Wrap an in-memory copy of the enemies binary.
    pub fn from_bytes(data: Vec<u8>) -> Self {
        Self {
            data: Backing::Owned(data),
            count: ENEMY_COUNT,
        }
    }

    /// Override the number of records to expose.
    ///
    /// Unlike [`open_with_count`](Self::open_with_count), no capacity warning
    /// is logged.
    pub fn with_count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    /// Number of records exposed by [`read_record`](Self::read_record).
    #[inline]
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Number of whole records the file actually holds.
    #[inline]
    pub fn capacity(&self) -> usize {
        record_capacity(self.len())
    }

    /// File length in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.bytes().len()
    }

    /// Whether the file is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the file holds exactly [`count`](Self::count) records.
    #[inline]
    pub fn capacity_matches(&self) -> bool {
        self.capacity() == self.count as usize
    }

    fn check_capacity(&self) {
        if !self.capacity_matches() {
            let capacity = self.capacity();
            warn!(
                capacity,
                expected = self.count,
                file_len = self.len(),
                "enemies file record count differs from the expected count"
            );
        }
    }

    /// Decode the record at `index`.
    pub fn read_record(&self, index: u32) -> Result<EnemyRecord> {
        if index >= self.count {
            return Err(Error::IndexOutOfRange {
                index,
                count: self.count,
            });
        }

        let bytes = self.data.bytes();
        let out_of_bounds = |offset| Error::RecordOutOfBounds {
            index,
            offset,
            size: ENEMY_ENTRY_SIZE,
            file_len: bytes.len(),
        };

        let start = record_offset(index).ok_or_else(|| out_of_bounds(usize::MAX))?;
        let end = start
            .checked_add(ENEMY_ENTRY_SIZE)
            .filter(|end| *end <= bytes.len())
            .ok_or_else(|| out_of_bounds(start))?;

        Ok(EnemyRecord::decode(&bytes[start..end])?)
    }
}
