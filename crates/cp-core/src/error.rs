//! Core error type.
//!
//! Sub-crates define their own error enums and convert `CpError` into them
//! via `From` impls, so `?` works across crate boundaries.

use chrono::NaiveDate;
use thiserror::Error;

/// The error type for `cp-core` and a common base for sub-crates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CpError {
    #[error("invalid date range: end {end} is before start {start}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand result type for `cp-core`.
pub type CpResult<T> = Result<T, CpError>;
