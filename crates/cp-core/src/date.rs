//! Calendar-day model.
//!
//! # Design
//!
//! Custody is assigned per calendar day.  Every date that enters the engine
//! is first reduced to a `NaiveDate` through [`CalendarDay`], which strips
//! the time of day:
//!
//!   offset = calendar_day(date) - calendar_day(anchor)    (signed days)
//!
//! Working in whole `NaiveDate`s keeps offset arithmetic exact.  A
//! `DateTime<Tz>` is reduced to its local date in its own zone, so 23:30 in
//! one zone never becomes the next day because of a UTC conversion.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};

use crate::{CpError, CpResult};

// ── CalendarDay ───────────────────────────────────────────────────────────────

/// Anything that can be normalized to midnight of a calendar day.
pub trait CalendarDay {
    fn calendar_day(&self) -> NaiveDate;
}

impl CalendarDay for NaiveDate {
    #[inline]
    fn calendar_day(&self) -> NaiveDate {
        *self
    }
}

impl CalendarDay for NaiveDateTime {
    #[inline]
    fn calendar_day(&self) -> NaiveDate {
        self.date()
    }
}

impl<Tz: TimeZone> CalendarDay for DateTime<Tz> {
    #[inline]
    fn calendar_day(&self) -> NaiveDate {
        self.date_naive()
    }
}

impl<T: CalendarDay + ?Sized> CalendarDay for &T {
    #[inline]
    fn calendar_day(&self) -> NaiveDate {
        (**self).calendar_day()
    }
}

/// Signed whole days from `anchor` to `date`, both normalized first.
///
/// Negative when `date` precedes `anchor`.
#[inline]
pub fn days_between(date: impl CalendarDay, anchor: impl CalendarDay) -> i64 {
    (date.calendar_day() - anchor.calendar_day()).num_days()
}

/// The day after `date`.
///
/// # Errors
/// Fails only at the end of chrono's representable range.
pub fn next_day(date: NaiveDate) -> CpResult<NaiveDate> {
    date.succ_opt()
        .ok_or_else(|| CpError::Parse(format!("no calendar day after {date}")))
}

// ── DateRange ─────────────────────────────────────────────────────────────────

/// A closed range of calendar days, `[start, end]`.
///
/// Fields are private so `end >= start` holds for every value, including
/// deserialized ones.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RangeBounds", into = "RangeBounds")
)]
pub struct DateRange {
    start: NaiveDate,
    end:   NaiveDate,
}

impl DateRange {
    /// Construct a range, rejecting `end < start`.
    pub fn new(start: impl CalendarDay, end: impl CalendarDay) -> CpResult<Self> {
        let (start, end) = (start.calendar_day(), end.calendar_day());
        if end < start {
            return Err(CpError::InvalidDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// A range covering a single day.
    pub fn single(day: NaiveDate) -> Self {
        Self { start: day, end: day }
    }

    #[inline]
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Inclusive.
    #[inline]
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of days in the range (always ≥ 1).
    #[inline]
    pub fn len(&self) -> u64 {
        days_between(self.end, self.start) as u64 + 1
    }

    #[inline]
    pub fn contains(&self, date: impl CalendarDay) -> bool {
        let d = date.calendar_day();
        self.start <= d && d <= self.end
    }

    /// Every day in the range, in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        self.start.iter_days().take(self.len() as usize)
    }
}

/// Unvalidated wire form of a [`DateRange`].
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RangeBounds {
    start: NaiveDate,
    end:   NaiveDate,
}

#[cfg(feature = "serde")]
impl TryFrom<RangeBounds> for DateRange {
    type Error = CpError;

    fn try_from(bounds: RangeBounds) -> CpResult<Self> {
        DateRange::new(bounds.start, bounds.end)
    }
}

#[cfg(feature = "serde")]
impl From<DateRange> for RangeBounds {
    fn from(range: DateRange) -> Self {
        Self { start: range.start, end: range.end }
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}
