//! Enemy record reader.
//!
//! Enemy stats live in a fixed-stride table inside the enemies binary. Each
//! record is decoded at reverse-engineered offsets, and its ID is resolved to
//! a display name through a [`NameSource`]. IDs that cannot be resolved are
//! written once to an [`IdJournal`] so they can be investigated later.
//!
//! # File Format
//!
//! - `0x0000..0xA2AB`: unrelated data (ignored)
//! - `0xA2AB..`: 935 records of `0x448` bytes each
//!
//! See [`layout`] for the field offsets inside a record.
//!
//! # Example
//!
//! ```no_run
//! use enemyparam_enemies::{EnemyFile, EnemyReader, UnknownIdJournal};
//! use enemyparam_names::NameTable;
//!
//! let names = NameTable::open("data/enemy_names.bin")?;
//! let mut journal = UnknownIdJournal::open("data/unknown_enemy_ids.txt")?;
//! let file = EnemyFile::open("data/enemies.bin")?;
//!
//! let mut reader = EnemyReader::new(file, &names, &mut journal);
//! let enemy = reader.read(0)?;
//! println!("{}", enemy);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod enemy;
mod error;
mod file;
mod journal;
pub mod layout;
mod reader;

pub use enemy::{Enemy, EnemyRecord};
pub use error::{Error, Result};
pub use file::EnemyFile;
pub use journal::UnknownIdJournal;
pub use reader::{EnemyReader, IdJournal, NameSource, ResolveStats};
