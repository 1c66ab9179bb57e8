//! Export drivers: feed resolved custody blocks to a `ScheduleWriter`.

use chrono::{DateTime, Utc};
use cp_core::{DateRange, ParentNames};
use cp_schedule::{CustodyBlock, CustodyResolver, ScheduleConfig};
use tracing::{debug, info};

use crate::writer::ScheduleWriter;
use crate::ExportResult;

// ── ExportContext ─────────────────────────────────────────────────────────────

/// Presentation data shared by every writer in one export run.
///
/// Nothing here affects who has custody; it only labels the output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportContext {
    pub title:             String,
    pub pattern:           String,
    pub names:             ParentNames,
    pub exchange_time:     Option<String>,
    pub exchange_location: Option<String>,
    /// Timestamp stamped into the output (`DTSTAMP`, document footer).
    /// Supplied by the caller so exports stay reproducible.
    pub generated_at:      DateTime<Utc>,
}

impl ExportContext {
    /// Context labelled from `config`, with default parent names.
    pub fn from_config(config: &ScheduleConfig, generated_at: DateTime<Utc>) -> Self {
        Self {
            title:             "Custody Schedule".to_owned(),
            pattern:           config.pattern.label().to_owned(),
            names:             ParentNames::default(),
            exchange_time:     config.exchange_time.clone(),
            exchange_location: config.exchange_location.clone(),
            generated_at,
        }
    }

    pub fn with_names(mut self, names: ParentNames) -> Self {
        self.names = names;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Free-text exchange description, e.g. `"Exchange at 18:00, School"`.
    pub fn exchange_description(&self) -> Option<String> {
        match (self.exchange_time.as_deref(), self.exchange_location.as_deref()) {
            (Some(time), Some(place)) => Some(format!("Exchange at {time}, {place}")),
            (Some(time), None) => Some(format!("Exchange at {time}")),
            (None, Some(place)) => Some(format!("Exchange location: {place}")),
            (None, None) => None,
        }
    }
}

// ── Drivers ───────────────────────────────────────────────────────────────────

/// Write every block to `writer`, then finish it.
///
/// Returns the number of blocks written.  An empty iterator still finishes
/// the writer, producing an empty feed or table.
pub fn export_blocks<W>(
    blocks: impl IntoIterator<Item = CustodyBlock>,
    ctx: &ExportContext,
    writer: &mut W,
) -> ExportResult<usize>
where
    W: ScheduleWriter + ?Sized,
{
    let mut count = 0;
    for block in blocks {
        writer.write_block(&block, ctx)?;
        count += 1;
    }
    writer.finish(ctx)?;
    info!(blocks = count, title = %ctx.title, "export finished");
    Ok(count)
}

/// Segment `range` under `config` and export the resulting blocks.
///
/// Fails before writing anything if the config cannot be resolved.
pub fn export_range<W>(
    resolver: &CustodyResolver<'_>,
    config: &ScheduleConfig,
    range: DateRange,
    ctx: &ExportContext,
    writer: &mut W,
) -> ExportResult<usize>
where
    W: ScheduleWriter + ?Sized,
{
    let blocks = resolver.segment_range(range, config)?;
    debug!(range = %range, pattern = %ctx.pattern, "exporting custody range");
    export_blocks(blocks, ctx, writer)
}
