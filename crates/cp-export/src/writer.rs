//! The `ScheduleWriter` trait implemented by all export backends.

use cp_schedule::CustodyBlock;

use crate::{ExportContext, ExportResult};

/// Trait implemented by the ICS, CSV, document, and PDF writers.
///
/// Writers are pure serializers: they receive already-resolved blocks in
/// date order and never decide who has custody.
pub trait ScheduleWriter {
    /// Write one custody block.
    fn write_block(&mut self, block: &CustodyBlock, ctx: &ExportContext) -> ExportResult<()>;

    /// Complete the output (footers, pagination, flushing).
    ///
    /// Idempotent; safe to call more than once.  A writer that received no
    /// blocks still produces a well-formed, empty document.
    fn finish(&mut self, ctx: &ExportContext) -> ExportResult<()>;
}

impl<W: ScheduleWriter + ?Sized> ScheduleWriter for &mut W {
    fn write_block(&mut self, block: &CustodyBlock, ctx: &ExportContext) -> ExportResult<()> {
        (**self).write_block(block, ctx)
    }

    fn finish(&mut self, ctx: &ExportContext) -> ExportResult<()> {
        (**self).finish(ctx)
    }
}
