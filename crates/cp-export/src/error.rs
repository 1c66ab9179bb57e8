//! Error types for cp-export.

use cp_core::CpError;
use cp_schedule::ScheduleError;
use thiserror::Error;

/// Errors that can occur while exporting a custody schedule.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Schedule(#[from] ScheduleError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("calendar feed error: {0}")]
    Ics(String),

    #[error("layout error: {0}")]
    Layout(String),

    #[cfg(feature = "pdf")]
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
}

impl From<CpError> for ExportError {
    fn from(err: CpError) -> Self {
        ExportError::Schedule(err.into())
    }
}

/// Alias for `Result<T, ExportError>`.
pub type ExportResult<T> = Result<T, ExportError>;
