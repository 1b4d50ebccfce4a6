//! Record reading with name resolution.

use std::collections::{HashMap, HashSet};
use std::hash::BuildHasher;

use enemyparam_common::UNKNOWN_NAME;
use enemyparam_names::NameTable;

use crate::enemy::Enemy;
use crate::file::EnemyFile;
use crate::Result;

/// Resolves enemy IDs to display names.
pub trait NameSource {
    /// Look up the name for `id`.
    fn lookup(&self, id: u32) -> Option<&str>;
}

impl NameSource for NameTable {
    #[inline]
    fn lookup(&self, id: u32) -> Option<&str> {
        NameTable::lookup(self, id)
    }
}

impl<S: BuildHasher> NameSource for HashMap<u32, String, S> {
    #[inline]
    fn lookup(&self, id: u32) -> Option<&str> {
        self.get(&id).map(String::as_str)
    }
}

/// Set of IDs known to have no name.
pub trait IdJournal {
    /// Whether `id` is already known to be unnamed.
    fn contains(&self, id: u32) -> bool;

    /// Add `id` to the set and persist it.
    ///
    /// Returns `false` if the ID was already present, in which case nothing
    /// is persisted. Persistence failures are not reported to the caller.
    fn record(&mut self, id: u32) -> bool;
}

impl<S: BuildHasher> IdJournal for HashSet<u32, S> {
    fn contains(&self, id: u32) -> bool {
        HashSet::contains(self, &id)
    }

    fn record(&mut self, id: u32) -> bool {
        self.insert(id)
    }
}

/// Name resolution counters for a walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolveStats {
    /// Records whose ID was found in the name source.
    pub resolved: usize,
    /// Records whose ID was not found.
    pub unknown: usize,
    /// Unknown IDs that were not in the journal before this walk.
    pub newly_journaled: usize,
}

/// Reads enemy records and resolves their names.
///
/// An ID missing from the name source gets [`UNKNOWN_NAME`]; the first time
/// such an ID is seen it is also recorded in the journal.
pub struct EnemyReader<'a, N, J> {
    file: EnemyFile,
    names: &'a N,
    journal: &'a mut J,
    stats: ResolveStats,
}

impl<'a, N: NameSource, J: IdJournal> EnemyReader<'a, N, J> {
    /// Create a reader over an opened enemies file.
    pub fn new(file: EnemyFile, names: &'a N, journal: &'a mut J) -> Self {
        Self {
            file,
            names,
            journal,
            stats: ResolveStats::default(),
        }
    }

    /// The underlying enemies file.
    pub fn file(&self) -> &EnemyFile {
        &self.file
    }

    /// Number of records available through [`read`](Self::read).
    pub fn count(&self) -> u32 {
        self.file.count()
    }

    /// Counters accumulated by [`read`](Self::read) so far.
    pub fn stats(&self) -> ResolveStats {
        self.stats
    }

    /// Read the enemy at `index` and resolve its name.
    pub fn read(&mut self, index: u32) -> Result<Enemy> {
        let record = self.file.read_record(index)?;
        let name = self.resolve_name(record.id);
        Ok(record.with_name(name))
    }

    fn resolve_name(&mut self, id: u32) -> String {
        if let Some(name) = self.names.lookup(id) {
            self.stats.resolved += 1;
            return name.to_string();
        }

        self.stats.unknown += 1;
        if !self.journal.contains(id) && self.journal.record(id) {
            self.stats.newly_journaled += 1;
        }

        UNKNOWN_NAME.to_string()
    }
}
