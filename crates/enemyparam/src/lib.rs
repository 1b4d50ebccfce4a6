//! enemyparam - enemy record extraction library.
//!
//! This crate provides a unified interface to the enemyparam crates and the
//! ParamTable export that ties them together.
//!
//! # Crates
//!
//! - [`enemyparam_common`] - Little-endian decoding, identifier sanitizing
//! - [`enemyparam_names`] - Enemy name table (`enemy_names.bin`) parsing
//! - [`enemyparam_enemies`] - Enemy record (`enemies.bin`) reading and unknown-ID journaling
//!
//! # Example
//!
//! ```no_run
//! use std::fs::File;
//!
//! use enemyparam::prelude::*;
//!
//! let names = NameTable::open("data/enemy_names.bin")?;
//! let mut journal = UnknownIdJournal::open("data/unknown_enemy_ids.txt")?;
//! let file = EnemyFile::open("data/enemies.bin")?;
//!
//! let mut reader = EnemyReader::new(file, &names, &mut journal);
//! let summary = export_param_table(&mut reader, File::create("elements.txt")?, |_, _| {})?;
//! println!("Wrote {} lines", summary.written);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;
mod export;

pub use error::{Error, Result};
pub use export::{export_param_table, param_table_line, ExportSummary, ParamTableWriter};

// Re-export all sub-crates
pub use enemyparam_common as common;
pub use enemyparam_enemies as enemies;
pub use enemyparam_names as names;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::{export_param_table, ExportSummary, ParamTableWriter};
    pub use enemyparam_common::{sanitize, BinaryReader};
    pub use enemyparam_enemies::{
        Enemy, EnemyFile, EnemyReader, IdJournal, NameSource, UnknownIdJournal,
    };
    pub use enemyparam_names::NameTable;
}

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
