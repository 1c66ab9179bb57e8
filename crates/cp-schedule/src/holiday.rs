//! Holiday rules and the holiday-date collaborator.
//!
//! Working out *when* a holiday falls ("third Thursday of November") is not
//! this crate's job.  A [`HolidayCalendar`] answers the one question the
//! resolver needs, "does this holiday occur on this date?", and the rule
//! decides who gets the day.

use std::collections::{BTreeSet, HashMap};

use chrono::{Datelike, NaiveDate, NaiveTime};
use cp_core::Parent;

/// Parent who receives alternating holidays in even-numbered years.  Odd
/// years go to the other parent.
pub const ALTERNATE_EVEN_YEAR_PARENT: Parent = Parent::A;

// ── HolidayRule ───────────────────────────────────────────────────────────────

/// How an enabled holiday overrides the base pattern on its date.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
#[serde(tag = "rule")]
pub enum HolidayRule {
    /// Even years go to [`ALTERNATE_EVEN_YEAR_PARENT`], odd years to the other.
    #[serde(rename = "alternate-by-year", alias = "alternate")]
    Alternate,

    /// The day is shared: the parent who has it under the base pattern keeps
    /// it until `cutoff`, then it passes to the other parent.
    #[serde(rename = "split")]
    Split { cutoff: NaiveTime },

    #[serde(rename = "always-A", alias = "always-a")]
    FixedA,

    #[serde(rename = "always-B", alias = "always-b")]
    FixedB,
}

impl HolidayRule {
    /// Whole-day owner on `date` given the base pattern's `base` parent.
    ///
    /// A `Split` day counts for the parent holding its early part.
    pub fn whole_day(self, date: NaiveDate, base: Parent) -> Parent {
        match self {
            HolidayRule::FixedA => Parent::A,
            HolidayRule::FixedB => Parent::B,
            HolidayRule::Alternate => {
                ALTERNATE_EVEN_YEAR_PARENT.flip_if(date.year().rem_euclid(2) == 1)
            }
            HolidayRule::Split { .. } => base,
        }
    }

    /// Owner at `time` of day on `date`.
    pub fn at(self, date: NaiveDate, time: NaiveTime, base: Parent) -> Parent {
        match self {
            HolidayRule::Split { cutoff } => base.flip_if(time >= cutoff),
            other => other.whole_day(date, base),
        }
    }
}

// ── Holiday ───────────────────────────────────────────────────────────────────

/// One configured holiday.
#[derive(Clone, PartialEq, Eq, Debug, serde::Serialize, serde::Deserialize)]
pub struct Holiday {
    pub name: String,

    #[serde(flatten)]
    pub rule: HolidayRule,

    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
}

fn enabled_by_default() -> bool {
    true
}

impl Holiday {
    pub fn new(name: impl Into<String>, rule: HolidayRule) -> Self {
        Self { name: name.into(), rule, enabled: true }
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}

// ── HolidayCalendar ───────────────────────────────────────────────────────────

/// Maps a holiday to the dates it falls on.
///
/// # Contract
///
/// - Must be deterministic: the same `(holiday, date)` always gives the same
///   answer.
/// - Must not block or perform I/O per call; preload whatever it needs.
pub trait HolidayCalendar: Send + Sync {
    fn occurs_on(&self, holiday: &Holiday, date: NaiveDate) -> bool;
}

/// A calendar on which no holiday ever occurs.
pub struct NoHolidays;

impl HolidayCalendar for NoHolidays {
    #[inline]
    fn occurs_on(&self, _holiday: &Holiday, _date: NaiveDate) -> bool {
        false
    }
}

/// Explicit holiday dates keyed by holiday name.
///
/// Typically filled by the application from its holiday data for the years
/// being exported.
#[derive(Clone, Debug, Default)]
pub struct FixedDateCalendar {
    dates: HashMap<String, BTreeSet<NaiveDate>>,
}

impl FixedDateCalendar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, date: NaiveDate) {
        self.dates.entry(name.into()).or_default().insert(date);
    }

    /// Builder-style [`insert`][Self::insert].
    pub fn with_date(mut self, name: impl Into<String>, date: NaiveDate) -> Self {
        self.insert(name, date);
        self
    }

    /// Dates registered for `name`, ascending.
    pub fn dates(&self, name: &str) -> impl Iterator<Item = NaiveDate> + '_ {
        self.dates.get(name).into_iter().flatten().copied()
    }
}

impl HolidayCalendar for FixedDateCalendar {
    fn occurs_on(&self, holiday: &Holiday, date: NaiveDate) -> bool {
        self.dates
            .get(&holiday.name)
            .is_some_and(|dates| dates.contains(&date))
    }
}
