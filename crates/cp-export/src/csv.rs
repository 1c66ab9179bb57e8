//! CSV table backend.
//!
//! One row per custody block:
//!
//! ```csv
//! start,end,days,parent,parent_name
//! 2024-01-01,2024-01-07,7,A,Parent A
//! 2024-01-08,2024-01-14,7,B,Parent B
//! ```

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::Writer;
use cp_schedule::CustodyBlock;

use crate::row::BlockRow;
use crate::writer::ScheduleWriter;
use crate::{ExportContext, ExportError, ExportResult};

/// Writes custody blocks as CSV rows.
pub struct CsvWriter<W: Write> {
    rows:     Writer<W>,
    finished: bool,
}

impl CsvWriter<File> {
    /// Create (or truncate) `path` and write the header row.
    pub fn create(path: &Path) -> ExportResult<Self> {
        Self::from_writer(File::create(path)?)
    }
}

impl<W: Write> CsvWriter<W> {
    /// Wrap any sink and write the header row.
    pub fn from_writer(out: W) -> ExportResult<Self> {
        let mut rows = Writer::from_writer(out);
        rows.write_record(BlockRow::HEADERS)?;
        Ok(Self { rows, finished: false })
    }

    /// Flush and unwrap the underlying sink.
    pub fn into_inner(self) -> ExportResult<W> {
        self.rows
            .into_inner()
            .map_err(|e| ExportError::Io(e.into_error()))
    }
}

impl<W: Write> ScheduleWriter for CsvWriter<W> {
    fn write_block(&mut self, block: &CustodyBlock, ctx: &ExportContext) -> ExportResult<()> {
        self.rows.write_record(BlockRow::new(block, &ctx.names).fields())?;
        Ok(())
    }

    fn finish(&mut self, _ctx: &ExportContext) -> ExportResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.rows.flush()?;
        Ok(())
    }
}
