//! Month calendar view.
//!
//! A [`MonthGrid`] is the structure a visual calendar renders: whole weeks
//! covering one month, one [`DayCell`] per day.  Leading and trailing days
//! from neighbouring months are included with `in_month = false` so every
//! week row has seven cells.

use std::collections::BTreeSet;

use chrono::{Datelike, Days, Month, NaiveDate, Weekday};
use cp_core::{DateRange, Parent};
use cp_schedule::{BoundSchedule, CustodyBlock};

use crate::{ExportError, ExportResult};

/// One day in a month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub date:        NaiveDate,
    /// `false` for padding days from the previous / next month.
    pub in_month:    bool,
    /// `None` when no block covers the day.
    pub parent:      Option<Parent>,
    /// First day of a block that follows another block.
    pub is_exchange: bool,
    /// Set only when the caller passed a matching `today`.
    pub is_today:    bool,
}

/// Whole weeks covering one calendar month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub year:       i32,
    pub month:      u32,
    pub week_start: Weekday,
    pub weeks:      Vec<[DayCell; 7]>,
}

impl MonthGrid {
    /// Days shown by the grid for `year`/`month`, padded to whole weeks.
    pub fn visible_range(year: i32, month: u32, week_start: Weekday) -> ExportResult<DateRange> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or_else(|| ExportError::Layout(format!("invalid month {year}-{month:02}")))?;
        let last = last_of_month(first)?;

        let lead = days_from(week_start, first.weekday());
        let trail = 6 - days_from(week_start, last.weekday());
        let start = first - Days::new(lead);
        let end = last + Days::new(trail);
        Ok(DateRange::new(start, end)?)
    }

    /// Build a grid by segmenting the visible range of `schedule`.
    pub fn for_schedule(
        schedule: &BoundSchedule<'_>,
        year: i32,
        month: u32,
        week_start: Weekday,
        today: Option<NaiveDate>,
    ) -> ExportResult<Self> {
        let range = Self::visible_range(year, month, week_start)?;
        let blocks: Vec<CustodyBlock> = schedule.blocks(range).collect();
        Self::from_blocks(year, month, week_start, &blocks, today)
    }

    /// Build a grid from blocks sorted by start date (as produced by the
    /// segmenter).  Days outside every block get `parent = None`.
    pub fn from_blocks(
        year: i32,
        month: u32,
        week_start: Weekday,
        blocks: &[CustodyBlock],
        today: Option<NaiveDate>,
    ) -> ExportResult<Self> {
        let range = Self::visible_range(year, month, week_start)?;
        let exchanges: BTreeSet<NaiveDate> = blocks
            .windows(2)
            .filter(|pair| pair[0].end.succ_opt() == Some(pair[1].start))
            .map(|pair| pair[1].start)
            .collect();

        let days: Vec<NaiveDate> = range.days().collect();
        let weeks: Vec<[DayCell; 7]> = days
            .chunks_exact(7)
            .map(|week| {
                std::array::from_fn(|i| {
                    let date = week[i];
                    DayCell {
                        date,
                        in_month: date.month() == month && date.year() == year,
                        parent: parent_on(blocks, date),
                        is_exchange: exchanges.contains(&date),
                        is_today: today == Some(date),
                    }
                })
            })
            .collect();

        Ok(Self { year, month, week_start, weeks })
    }

    /// `"January 2024"`.
    pub fn title(&self) -> String {
        let name = u8::try_from(self.month)
            .ok()
            .and_then(|m| Month::try_from(m).ok())
            .map_or("?", |m| m.name());
        format!("{name} {}", self.year)
    }

    /// Weekday column headers in display order.
    pub fn weekday_headers(&self) -> [Weekday; 7] {
        let mut day = self.week_start;
        std::array::from_fn(|_| {
            let current = day;
            day = day.succ();
            current
        })
    }

    pub fn cell(&self, date: NaiveDate) -> Option<&DayCell> {
        self.weeks.iter().flatten().find(|c| c.date == date)
    }

    /// Cells belonging to the month itself.
    pub fn month_days(&self) -> impl Iterator<Item = &DayCell> {
        self.weeks.iter().flatten().filter(|c| c.in_month)
    }
}

/// Three-letter weekday label.
pub fn weekday_label(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}

/// Binary search over date-ordered, non-overlapping blocks.
pub(crate) fn parent_on(blocks: &[CustodyBlock], date: NaiveDate) -> Option<Parent> {
    let idx = blocks.partition_point(|b| b.end < date);
    blocks.get(idx).filter(|b| b.start <= date).map(|b| b.parent)
}

/// Every month touched by `[start, end]`, as `(year, month)`.
pub(crate) fn months_between(start: NaiveDate, end: NaiveDate) -> Vec<(i32, u32)> {
    let mut months = Vec::new();
    let (mut y, mut m) = (start.year(), start.month());
    while (y, m) <= (end.year(), end.month()) {
        months.push((y, m));
        if m == 12 {
            y += 1;
            m = 1;
        } else {
            m += 1;
        }
    }
    months
}

fn days_from(week_start: Weekday, day: Weekday) -> u64 {
    let from = week_start.num_days_from_monday();
    let to = day.num_days_from_monday();
    u64::from((to + 7 - from) % 7)
}

fn last_of_month(first: NaiveDate) -> ExportResult<NaiveDate> {
    first
        .checked_add_months(chrono::Months::new(1))
        .and_then(|next| next.pred_opt())
        .ok_or_else(|| ExportError::Layout(format!("no month after {first}")))
}
