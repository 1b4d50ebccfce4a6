//! Name table loading and lookup.

use std::fs::File;
use std::io;
use std::path::Path;

use enemyparam_common::{sanitize, BinaryReader};
use hashbrown::HashMap as FastHashMap;
use memmap2::Mmap;
use rustc_hash::FxHasher;
use tracing::{debug, info};

use crate::entry::{NameTableEntry, NAMES_START_OFFSET};
use crate::{Error, Result};

type FxHashMap<K, V> = FastHashMap<K, V, std::hash::BuildHasherDefault<FxHasher>>;

/// In-memory `id -> sanitized name` cache built from the names binary.
#[derive(Debug, Clone, Default)]
pub struct NameTable {
    names: FxHashMap<u32, String>,
}

impl NameTable {
    /// Load the name table from a file.
    ///
    /// The file is mapped, fully walked and released before this returns.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => Error::MissingFile {
                path: path.to_path_buf(),
            },
            _ => Error::Io(e),
        })?;

        // Empty files cannot be mapped on every platform
        if file.metadata()?.len() == 0 {
            return Ok(Self::parse(&[]));
        }

        let mmap = unsafe { Mmap::map(&file)? };
        let table = Self::parse(&mmap);

        info!(
            path = %path.display(),
            names = table.len(),
            "loaded enemy name table"
        );

        Ok(table)
    }

    /// Parse a name table from the full contents of a names file.
    ///
    /// Entries whose text position lies past the end of the data are
    /// skipped. On duplicate IDs the later entry wins.
    pub fn parse(data: &[u8]) -> Self {
        let mut names = FxHashMap::default();
        let mut reader = BinaryReader::new_at(data, NAMES_START_OFFSET);

        while let Ok(entry) = reader.read_struct::<NameTableEntry>() {
            let id = entry.id();

            let text_pos = match entry.text_position() {
                Some(pos) if pos < data.len() => pos,
                _ => {
                    debug!(
                        id,
                        string_offset = entry.string_offset(),
                        "name text lies outside the file, skipping entry"
                    );
                    continue;
                }
            };

            let raw = BinaryReader::new_at(data, text_pos).read_cstring_lossy();
            let name = sanitize(&raw);

            if let Some(previous) = names.insert(id, name) {
                info!(id, %previous, "duplicate name table id, keeping the later entry");
            }
        }

        Self { names }
    }

    /// Resolve an enemy ID to its sanitized name.
    #[inline]
    pub fn lookup(&self, id: u32) -> Option<&str> {
        self.names.get(&id).map(String::as_str)
    }

    /// Number of resolved names.
    #[inline]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether no names were resolved.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate over `(id, name)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &str)> + '_ {
        self.names.iter().map(|(id, name)| (*id, name.as_str()))
    }
}
