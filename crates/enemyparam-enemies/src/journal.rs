//! Persistent set of enemy IDs with no entry in the name table.

use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use hashbrown::HashSet as FastHashSet;
use rustc_hash::FxHasher;
use tracing::{info, warn};

use crate::error::open_error;
use crate::reader::IdJournal;
use crate::Result;

type FxHashSet<T> = FastHashSet<T, std::hash::BuildHasherDefault<FxHasher>>;

/// Unknown-ID journal backed by a text file.
///
/// The file holds one decimal ID per line. Blank lines and lines starting
/// with `#` are ignored. New IDs are appended as `"\n<id>"`, so the first
/// append after a trailing newline leaves a blank line behind; the loader
/// skips it.
#[derive(Debug, Clone)]
pub struct UnknownIdJournal {
    path: PathBuf,
    ids: FxHashSet<u32>,
}

impl UnknownIdJournal {
    /// Load the journal from `path`. The file must exist.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| open_error(path, e))?;
        let ids = Self::parse_ids(BufReader::new(file), path)?;

        info!(path = %path.display(), ids = ids.len(), "loaded unknown enemy ids");

        Ok(Self {
            path: path.to_path_buf(),
            ids,
        })
    }

    fn parse_ids<R: BufRead>(reader: R, path: &Path) -> Result<FxHashSet<u32>> {
        let mut ids = FxHashSet::default();

        for (line_no, line) in reader.split(b'\n').enumerate() {
            let bytes = line?;
            let line = match std::str::from_utf8(&bytes) {
                Ok(line) => line.trim(),
                Err(e) => {
                    warn!(
                        path = %path.display(),
                        line = line_no + 1,
                        content = %String::from_utf8_lossy(&bytes),
                        error = %e,
                        "invalid line in unknown id file, expected a number"
                    );
                    continue;
                }
            };
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            match line.parse::<u32>() {
                Ok(id) => {
                    ids.insert(id);
                }
                Err(e) => warn!(
                    path = %path.display(),
                    line = line_no + 1,
                    content = line,
                    error = %e,
                    "invalid line in unknown id file, expected a number"
                ),
            }
        }

        Ok(ids)
    }

    /// Path of the journal file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of known unknown IDs.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether the journal holds no IDs.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Append a single ID to the journal file.
    fn append(&self, id: u32) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        write!(file, "\n{}", id)?;
        file.flush()
    }
}

impl IdJournal for UnknownIdJournal {
    fn contains(&self, id: u32) -> bool {
        self.ids.contains(&id)
    }

    fn record(&mut self, id: u32) -> bool {
        if !self.ids.insert(id) {
            return false;
        }

        match self.append(id) {
            Ok(()) => info!(id, "recorded new unknown enemy id"),
            Err(e) => warn!(
                id,
                path = %self.path.display(),
                error = %e,
                "could not save new unknown enemy id"
            ),
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_parse_ids() {
        let text = "# known unknowns\n\n  12 \n34\nnot-a-number\n-5\n99999999999\n#56\n12\n";
        let ids = UnknownIdJournal::parse_ids(text.as_bytes(), Path::new("ids.txt")).unwrap();

        let mut ids: Vec<_> = ids.into_iter().collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![12, 34]);
    }

    #[test]
    fn test_parse_ids_skips_invalid_utf8() {
        let bytes: &[u8] = b"12\n\xFF\xFE\n34\n";
        let ids = UnknownIdJournal::parse_ids(bytes, Path::new("ids.txt")).unwrap();

        let mut ids: Vec<_> = ids.into_iter().collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![12, 34]);
    }

    #[test]
    fn test_open_with_invalid_utf8_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("unknown_enemy_ids.txt");
        std::fs::write(&path, b"12\n\xFF\xFE garbage\n34\n").unwrap();

        let mut journal = UnknownIdJournal::open(&path).unwrap();
        assert_eq!(journal.len(), 2);
        assert!(journal.contains(12) && journal.contains(34));

        assert!(journal.record(56));
        let text = std::fs::read(&path).unwrap();
        assert!(text.ends_with(b"34\n\n56"));
    }

    #[test]
    fn test_open_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = UnknownIdJournal::open(dir.path().join("unknown_enemy_ids.txt")).unwrap_err();
        assert!(matches!(err, Error::MissingFile { .. }));
    }

    #[test]
    fn test_record_appends_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("unknown_enemy_ids.txt");
        std::fs::write(&path, "").unwrap();

        let mut journal = UnknownIdJournal::open(&path).unwrap();
        assert!(journal.is_empty());
        assert!(!journal.contains(999));

        assert!(journal.record(999));
        assert!(journal.contains(999));
        assert!(!journal.record(999));
        assert!(journal.record(7));

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "\n999\n7");
        assert_eq!(journal.len(), 2);
    }

    #[test]
    fn test_append_after_trailing_newline() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("unknown_enemy_ids.txt");
        std::fs::write(&path, "1\n2\n").unwrap();

        let mut journal = UnknownIdJournal::open(&path).unwrap();
        assert!(journal.contains(1) && journal.contains(2));
        assert!(!journal.record(2));
        assert!(journal.record(3));

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "1\n2\n\n3");

        // The blank line left behind is ignored on reload
        let reloaded = UnknownIdJournal::open(&path).unwrap();
        assert_eq!(reloaded.len(), 3);
    }

    #[test]
    fn test_append_failure_is_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("unknown_enemy_ids.txt");
        std::fs::write(&path, "").unwrap();

        let mut journal = UnknownIdJournal::open(&path).unwrap();
        // Replace the file with a directory so the append fails
        std::fs::remove_file(&path).unwrap();
        std::fs::create_dir(&path).unwrap();

        assert!(journal.record(42));
        assert!(journal.contains(42));
    }
}
