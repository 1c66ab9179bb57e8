//! `cp-export`: output writers for resolved custody schedules.
//!
//! Backends consume [`CustodyBlock`][cp_schedule::CustodyBlock]s in date
//! order and never decide who has custody:
//!
//! | Feature   | Backend            | Output                                  |
//! |-----------|--------------------|-----------------------------------------|
//! | *(none)*  | [`IcsWriter`]      | RFC 5545 `.ics` feed, one all-day event per block |
//! | *(none)*  | [`CsvWriter`]      | `start,end,days,parent,parent_name` table |
//! | *(none)*  | [`DocumentWriter`] | paginated [`ScheduleDocument`] (table or month grids) |
//! | `pdf`     | `PdfWriter`        | rendered US Letter PDF                  |
//!
//! [`MonthGrid`] and [`CustodySummary`] are view models for callers that
//! render their own calendars or reports.
//!
//! # Usage
//!
//! ```rust,ignore
//! use cp_export::{ExportContext, IcsWriter, export_range};
//!
//! let ctx = ExportContext::from_config(&config, now);
//! let mut ics = IcsWriter::new(File::create("custody.ics")?);
//! export_range(&resolver, &config, range, &ctx, &mut ics)?;
//! ```

pub mod calendar;
pub mod csv;
pub mod error;
pub mod export;
pub mod ics;
pub mod layout;
pub mod row;
pub mod summary;
pub mod writer;

#[cfg(feature = "pdf")]
pub mod pdf;

#[cfg(test)]
mod tests;

pub use calendar::{DayCell, MonthGrid, weekday_label};
pub use csv::CsvWriter;
pub use error::{ExportError, ExportResult};
pub use export::{ExportContext, export_blocks, export_range};
pub use ics::{IcsEvent, IcsWriter, escape_text, fold_line, read_events, unescape_text};
pub use layout::{
    DocumentStyle, DocumentWriter, Layout, Page, PageBody, ParentStyle, Rgb, ScheduleDocument,
    StyledRow, layout_document,
};
pub use row::BlockRow;
pub use summary::{CustodySummary, Exchange};
pub use writer::ScheduleWriter;

#[cfg(feature = "pdf")]
pub use pdf::{PdfWriter, render_pdf};
