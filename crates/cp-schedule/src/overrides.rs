//! `CustodyOverride`: hook for replacing the base pattern on specific days.
//!
//! The resolver computes the base parent from the cycle, then asks an
//! override whether that day belongs to someone else.  Returning `Some`
//! replaces the parent for that single day; returning `None` keeps it.
//! Overrides never touch the cycle itself, so the days after an override
//! resolve exactly as they would have without it.
//!
//! # Provided overrides
//!
//! - [`HolidayOverrides`]: enabled holidays from the schedule config.
//! - [`SwapDays`]: one-off exchanges the parents agreed on.
//! - [`NoOverride`]: the identity.
//!
//! Overrides are *composable*: chain them with [`ChainedOverride`] via
//! `.then(..)`.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use cp_core::Parent;

use crate::holiday::{Holiday, HolidayCalendar};

// ── Trait ─────────────────────────────────────────────────────────────────────

/// Per-day replacement of the base custody assignment.
///
/// # Contract
///
/// - Must be deterministic for the same `(date, base)`.
/// - Must not block or perform I/O.
pub trait CustodyOverride {
    /// Optionally replace `base` as the parent for `date`.
    fn apply(&self, date: NaiveDate, base: Parent) -> Option<Parent>;
}

impl<O: CustodyOverride + ?Sized> CustodyOverride for &O {
    #[inline]
    fn apply(&self, date: NaiveDate, base: Parent) -> Option<Parent> {
        (**self).apply(date, base)
    }
}

// ── No-op ─────────────────────────────────────────────────────────────────────

/// An override that never changes the base assignment.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoOverride;

impl CustodyOverride for NoOverride {
    #[inline]
    fn apply(&self, _date: NaiveDate, _base: Parent) -> Option<Parent> {
        None
    }
}

// ── Holidays ──────────────────────────────────────────────────────────────────

/// Applies the first enabled holiday (in config order) that falls on a date.
pub struct HolidayOverrides<'a> {
    holidays: &'a [Holiday],
    calendar: &'a dyn HolidayCalendar,
}

impl<'a> HolidayOverrides<'a> {
    pub fn new(holidays: &'a [Holiday], calendar: &'a dyn HolidayCalendar) -> Self {
        Self { holidays, calendar }
    }

    /// The enabled holiday governing `date`, if any.
    pub fn holiday_on(&self, date: NaiveDate) -> Option<&'a Holiday> {
        self.holidays
            .iter()
            .find(|h| h.enabled && self.calendar.occurs_on(h, date))
    }
}

impl CustodyOverride for HolidayOverrides<'_> {
    fn apply(&self, date: NaiveDate, base: Parent) -> Option<Parent> {
        self.holiday_on(date).map(|h| h.rule.whole_day(date, base))
    }
}

// ── Swap days ─────────────────────────────────────────────────────────────────

/// Explicit single-day reassignments, e.g. an approved swap request.
#[derive(Clone, Debug, Default)]
pub struct SwapDays {
    days: BTreeMap<NaiveDate, Parent>,
}

impl SwapDays {
    pub fn new() -> Self {
        Self::default()
    }

    /// Give `date` to `parent`, replacing any earlier swap for that date.
    pub fn insert(&mut self, date: NaiveDate, parent: Parent) {
        self.days.insert(date, parent);
    }

    pub fn with_day(mut self, date: NaiveDate, parent: Parent) -> Self {
        self.insert(date, parent);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

impl CustodyOverride for SwapDays {
    fn apply(&self, date: NaiveDate, _base: Parent) -> Option<Parent> {
        self.days.get(&date).copied()
    }
}

// ── Chained override ──────────────────────────────────────────────────────────

/// Applies two overrides in sequence.
///
/// The second override sees the (possibly replaced) output of the first.
/// Construct chains with `override_a.then(override_b)`.
pub struct ChainedOverride<A: CustodyOverride, B: CustodyOverride> {
    first:  A,
    second: B,
}

impl<A: CustodyOverride, B: CustodyOverride> CustodyOverride for ChainedOverride<A, B> {
    fn apply(&self, date: NaiveDate, base: Parent) -> Option<Parent> {
        let after_first = self.first.apply(date, base);
        let candidate = after_first.unwrap_or(base);
        self.second.apply(date, candidate).or(after_first)
    }
}

/// Extension trait that adds `.then(other)` to any `CustodyOverride`.
pub trait CustodyOverrideExt: CustodyOverride + Sized {
    fn then<B: CustodyOverride>(self, other: B) -> ChainedOverride<Self, B> {
        ChainedOverride { first: self, second: other }
    }
}

impl<O: CustodyOverride + Sized> CustodyOverrideExt for O {}
