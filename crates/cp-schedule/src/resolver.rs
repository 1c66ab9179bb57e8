//! `CustodyResolver`: date → parent.
//!
//! # Resolution
//!
//! ```text
//! offset  = days_between(calendar_day(date), calendar_day(start_date))
//! value   = cycle[offset.rem_euclid(cycle.len())]          // 0 or 1
//! base    = Parent::from_bit(value ^ starting_parent.bit())
//! parent  = holiday override for that exact date, else base
//! ```
//!
//! [`BoundSchedule::base_parent`] is the only place a raw cycle value is
//! turned into a parent.  Segmenters and exporters consume parents, never
//! bits.
//!
//! Resolving a config is split in two: [`CustodyResolver::bind`] looks the
//! cycle up once (the only fallible step) and the returned
//! [`BoundSchedule`] answers any number of per-day queries infallibly.

use chrono::{NaiveDate, NaiveDateTime};
use cp_core::{CalendarDay, DateRange, Parent, days_between};
use tracing::trace;

use crate::config::{PatternSpec, ScheduleConfig};
use crate::holiday::{Holiday, HolidayCalendar, NoHolidays};
use crate::overrides::{CustodyOverride, HolidayOverrides, NoOverride};
use crate::pattern::{Cycle, PatternTable};
use crate::segment::Blocks;
use crate::ScheduleResult;

// ── CustodyResolver ───────────────────────────────────────────────────────────

/// Resolves custody for any [`ScheduleConfig`] against one pattern table and
/// one holiday calendar.
///
/// Holds only shared references, so it is `Copy` and holds no state between
/// calls.
#[derive(Copy, Clone)]
pub struct CustodyResolver<'a> {
    table:    &'a PatternTable,
    calendar: &'a dyn HolidayCalendar,
}

impl<'a> CustodyResolver<'a> {
    /// A resolver with no holiday calendar (holidays never match).
    pub fn new(table: &'a PatternTable) -> Self {
        Self { table, calendar: &NoHolidays }
    }

    /// Use `calendar` to decide which dates holidays fall on.
    pub fn with_calendar(mut self, calendar: &'a dyn HolidayCalendar) -> Self {
        self.calendar = calendar;
        self
    }

    pub fn table(&self) -> &'a PatternTable {
        self.table
    }

    /// Resolve the config's cycle and prepare for per-day queries.
    ///
    /// # Errors
    /// [`UnknownPattern`][crate::ScheduleError::UnknownPattern] for an
    /// unregistered pattern id.
    pub fn bind<'c>(&self, config: &'c ScheduleConfig) -> ScheduleResult<BoundSchedule<'c>>
    where
        'a: 'c,
    {
        let cycle: &'c Cycle = match &config.pattern {
            PatternSpec::Named(id) => self.table.get_cycle(id.as_str())?,
            PatternSpec::Custom(cycle) => cycle,
        };
        trace!(
            pattern = config.pattern.label(),
            cycle_len = cycle.len(),
            start = %config.start_date,
            starting_parent = %config.starting_parent,
            "bound custody schedule"
        );
        Ok(BoundSchedule {
            config,
            cycle,
            anchor: config.start_date.calendar_day(),
            calendar: self.calendar,
        })
    }

    /// Base-pattern parent for `date`, ignoring holidays.
    pub fn resolve_base_parent(
        &self,
        date: impl CalendarDay,
        config: &ScheduleConfig,
    ) -> ScheduleResult<Parent> {
        Ok(self.bind(config)?.base_parent(date))
    }

    /// Parent for `date` with enabled holiday overrides applied.
    pub fn resolve_parent(
        &self,
        date: impl CalendarDay,
        config: &ScheduleConfig,
    ) -> ScheduleResult<Parent> {
        Ok(self.bind(config)?.parent(date))
    }

    /// Parent at a specific moment; honours `Split` holiday cutoffs.
    pub fn resolve_at(
        &self,
        moment: NaiveDateTime,
        config: &ScheduleConfig,
    ) -> ScheduleResult<Parent> {
        Ok(self.bind(config)?.parent_at(moment))
    }

    /// Parent for `date` with holidays and then `extra` applied.
    pub fn resolve_with(
        &self,
        date: impl CalendarDay,
        config: &ScheduleConfig,
        extra: &impl CustodyOverride,
    ) -> ScheduleResult<Parent> {
        Ok(self.bind(config)?.parent_with(date, extra))
    }

    /// Custody blocks over `[start, end]`.
    ///
    /// # Errors
    /// [`InvalidDateRange`][crate::ScheduleError::InvalidDateRange] if
    /// `end < start`, plus any [`bind`][Self::bind] error.  Nothing is
    /// produced on error.
    pub fn segment<'c>(
        &self,
        start: impl CalendarDay,
        end: impl CalendarDay,
        config: &'c ScheduleConfig,
    ) -> ScheduleResult<Blocks<'c, NoOverride>>
    where
        'a: 'c,
    {
        self.segment_range(DateRange::new(start, end)?, config)
    }

    /// [`segment`][Self::segment] over an already validated range.
    pub fn segment_range<'c>(
        &self,
        range: DateRange,
        config: &'c ScheduleConfig,
    ) -> ScheduleResult<Blocks<'c, NoOverride>>
    where
        'a: 'c,
    {
        Ok(self.bind(config)?.blocks(range))
    }

    /// [`segment_range`][Self::segment_range] with an extra override layered
    /// after holidays.
    pub fn segment_with<'c, O: CustodyOverride>(
        &self,
        range: DateRange,
        config: &'c ScheduleConfig,
        extra: O,
    ) -> ScheduleResult<Blocks<'c, O>>
    where
        'a: 'c,
    {
        Ok(self.bind(config)?.blocks_with(range, extra))
    }
}

// ── BoundSchedule ─────────────────────────────────────────────────────────────

/// A config whose cycle has been looked up.  All queries are infallible.
#[derive(Copy, Clone)]
pub struct BoundSchedule<'c> {
    config:   &'c ScheduleConfig,
    cycle:    &'c Cycle,
    anchor:   NaiveDate,
    calendar: &'c dyn HolidayCalendar,
}

impl<'c> BoundSchedule<'c> {
    pub fn config(&self) -> &'c ScheduleConfig {
        self.config
    }

    pub fn cycle(&self) -> &'c Cycle {
        self.cycle
    }

    /// Position of `date` within the cycle.
    #[inline]
    pub fn cycle_index(&self, date: impl CalendarDay) -> usize {
        self.cycle.index_for(days_between(date, self.anchor))
    }

    /// Parent from the cycle alone.
    #[inline]
    pub fn base_parent(&self, date: impl CalendarDay) -> Parent {
        let value = self.cycle.value_at(days_between(date, self.anchor));
        Parent::from_bit(value).flip_if(self.config.starting_parent == Parent::B)
    }

    /// Parent with enabled holiday overrides applied.
    pub fn parent(&self, date: impl CalendarDay) -> Parent {
        self.parent_with(date, &NoOverride)
    }

    /// Parent with holidays, then `extra`, applied.
    pub fn parent_with(&self, date: impl CalendarDay, extra: &impl CustodyOverride) -> Parent {
        let day = date.calendar_day();
        let base = self.base_parent(day);
        let after_holidays = self.holidays().apply(day, base).unwrap_or(base);
        extra.apply(day, after_holidays).unwrap_or(after_holidays)
    }

    /// Parent at a specific moment.  Identical to [`parent`][Self::parent]
    /// except on `Split` holidays, where the day changes hands at the cutoff.
    pub fn parent_at(&self, moment: NaiveDateTime) -> Parent {
        let day = moment.calendar_day();
        let base = self.base_parent(day);
        match self.holiday_on(day) {
            Some(holiday) => holiday.rule.at(day, moment.time(), base),
            None => base,
        }
    }

    /// The enabled holiday governing `date`, if any.
    pub fn holiday_on(&self, date: impl CalendarDay) -> Option<&'c Holiday> {
        self.holidays().holiday_on(date.calendar_day())
    }

    /// Custody blocks over `range`.
    pub fn blocks(&self, range: DateRange) -> Blocks<'c, NoOverride> {
        self.blocks_with(range, NoOverride)
    }

    /// Custody blocks over `range` with `extra` layered after holidays.
    pub fn blocks_with<O: CustodyOverride>(&self, range: DateRange, extra: O) -> Blocks<'c, O> {
        Blocks::new(*self, range, extra)
    }

    fn holidays(&self) -> HolidayOverrides<'c> {
        HolidayOverrides::new(&self.config.holidays, self.calendar)
    }
}
