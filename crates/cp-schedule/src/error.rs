use chrono::NaiveDate;
use cp_core::CpError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("unknown custody pattern {0:?}")]
    UnknownPattern(String),

    #[error("invalid custody cycle: {0}")]
    InvalidCycle(String),

    #[error("invalid date range: end {end} is before start {start}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    #[error("schedule parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<CpError> for ScheduleError {
    fn from(err: CpError) -> Self {
        match err {
            CpError::InvalidDateRange { start, end } => ScheduleError::InvalidDateRange { start, end },
            CpError::Parse(msg) => ScheduleError::Parse(msg),
        }
    }
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
