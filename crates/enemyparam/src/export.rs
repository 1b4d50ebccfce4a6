//! ParamTable element export.
//!
//! Every enemy becomes one `ParamTable_Element <name>;` line, in ascending
//! record order. The listing is consumed by an external template generator.

use std::io::{self, BufWriter, Write};

use enemyparam_enemies::{Enemy, EnemyReader, IdJournal, NameSource};
use tracing::debug;

use crate::Result;

/// Format the ParamTable line for a sanitized enemy name, without the newline.
#[inline]
pub fn param_table_line(name: &str) -> String {
    format!("ParamTable_Element {};", name)
}

/// Buffered writer of ParamTable lines.
pub struct ParamTableWriter<W: Write> {
    out: BufWriter<W>,
    written: usize,
}

impl<W: Write> ParamTableWriter<W> {
    /// Wrap an output sink.
    pub fn new(out: W) -> Self {
        Self {
            out: BufWriter::new(out),
            written: 0,
        }
    }

    /// Write the line for `enemy`.
    pub fn write_enemy(&mut self, enemy: &Enemy) -> io::Result<()> {
        writeln!(self.out, "{}", param_table_line(&enemy.name))?;
        self.written += 1;
        Ok(())
    }

    /// Flush and return the number of lines written.
    pub fn finish(mut self) -> io::Result<usize> {
        self.out.flush()?;
        Ok(self.written)
    }
}

/// Outcome of a full export.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportSummary {
    /// Lines written to the output.
    pub written: usize,
    /// Records with a resolved name.
    pub resolved: usize,
    /// Records written as `_unknown`.
    pub unknown: usize,
    /// Unknown IDs added to the journal during this export.
    pub newly_journaled: usize,
}

/// Read every record from `reader` and write its ParamTable line to `out`.
///
/// `on_record` is called after each record is written, with its index. Any
/// read or write error aborts the export.
pub fn export_param_table<N, J, W, F>(
    reader: &mut EnemyReader<'_, N, J>,
    out: W,
    mut on_record: F,
) -> Result<ExportSummary>
where
    N: NameSource,
    J: IdJournal,
    W: Write,
    F: FnMut(u32, &Enemy),
{
    let mut writer = ParamTableWriter::new(out);
    let before = reader.stats();

    for index in 0..reader.count() {
        let enemy = reader.read(index)?;
        writer.write_enemy(&enemy)?;

        debug!(
            "Processed Enemy[{}] -> ID: {} -> Name: {}",
            index, enemy.id, enemy.name
        );
        on_record(index, &enemy);
    }

    let written = writer.finish()?;
    let after = reader.stats();

    Ok(ExportSummary {
        written,
        resolved: after.resolved - before.resolved,
        unknown: after.unknown - before.unknown,
        newly_journaled: after.newly_journaled - before.newly_journaled,
    })
}
