//! Block segmentation: collapse per-day custody into contiguous runs.
//!
//! Exports never want 365 single-day rows; they want "Parent A: Jan 1–7".
//! [`Blocks`] walks a closed date range one day at a time and yields each
//! maximal run of same-parent days as a [`CustodyBlock`].
//!
//! Blocks are clipped to the requested range: a range ending mid-run closes
//! the final block on the range's last day.  The blocks of one range are
//! ordered, non-overlapping, and cover the range exactly.

use std::fmt;

use chrono::NaiveDate;
use cp_core::{CalendarDay, CpResult, DateRange, Parent, days_between, next_day};
use tracing::{debug, trace};

use crate::overrides::CustodyOverride;
use crate::resolver::BoundSchedule;

// ── CustodyBlock ──────────────────────────────────────────────────────────────

/// A maximal run of consecutive days assigned to one parent.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
pub struct CustodyBlock {
    pub start:  NaiveDate,
    /// Inclusive.
    pub end:    NaiveDate,
    pub parent: Parent,
}

impl CustodyBlock {
    pub fn new(start: NaiveDate, end: NaiveDate, parent: Parent) -> Self {
        debug_assert!(start <= end, "block end before start");
        Self { start, end, parent }
    }

    /// Number of days in the block (always ≥ 1).
    #[inline]
    pub fn days(&self) -> u64 {
        days_between(self.end, self.start) as u64 + 1
    }

    /// The day after `end`, i.e. the exclusive end used by calendar feeds.
    ///
    /// # Errors
    /// A block ending on `NaiveDate::MAX` has no exclusive end.
    pub fn exclusive_end(&self) -> CpResult<NaiveDate> {
        next_day(self.end)
    }

    /// # Errors
    /// `InvalidDateRange` for a hand-built block with `end < start`.
    pub fn range(&self) -> CpResult<DateRange> {
        DateRange::new(self.start, self.end)
    }

    #[inline]
    pub fn contains(&self, date: impl CalendarDay) -> bool {
        let day = date.calendar_day();
        self.start <= day && day <= self.end
    }
}

impl fmt::Display for CustodyBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={} {}", self.start, self.end, self.parent)
    }
}

// ── Blocks ────────────────────────────────────────────────────────────────────

/// Lazy iterator over the custody blocks of one range.
///
/// Created by [`CustodyResolver::segment`][crate::CustodyResolver::segment]
/// and friends.  Each day is resolved exactly once.
pub struct Blocks<'c, O: CustodyOverride> {
    schedule: BoundSchedule<'c>,
    extra:    O,
    end:      NaiveDate,
    /// First day of the next block and its already-resolved parent.
    next:     Option<(NaiveDate, Parent)>,
}

impl<'c, O: CustodyOverride> Blocks<'c, O> {
    pub(crate) fn new(schedule: BoundSchedule<'c>, range: DateRange, extra: O) -> Self {
        debug!(
            pattern = schedule.config().pattern.label(),
            range = %range,
            days = range.len(),
            "segmenting custody range"
        );
        let first = schedule.parent_with(range.start(), &extra);
        Self {
            schedule,
            extra,
            end: range.end(),
            next: Some((range.start(), first)),
        }
    }

    fn resolve(&self, day: NaiveDate) -> Parent {
        self.schedule.parent_with(day, &self.extra)
    }
}

impl<O: CustodyOverride> Iterator for Blocks<'_, O> {
    type Item = CustodyBlock;

    fn next(&mut self) -> Option<CustodyBlock> {
        let (start, parent) = self.next.take()?;
        let mut last = start;

        while last < self.end {
            let Some(day) = last.succ_opt() else { break };
            let owner = self.resolve(day);
            if owner != parent {
                self.next = Some((day, owner));
                break;
            }
            last = day;
        }

        let block = CustodyBlock::new(start, last, parent);
        trace!(%block, "custody block");
        Some(block)
    }
}

impl<O: CustodyOverride> std::iter::FusedIterator for Blocks<'_, O> {}
