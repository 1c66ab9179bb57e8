//! Custody cycles and the named-pattern registry.
//!
//! # Cycle model
//!
//! A pattern is a fixed-length sequence of 0/1 values, one per day.  For a
//! signed day offset `n` from the schedule's anchor date:
//!
//! ```text
//! index = n.rem_euclid(cycle.len())      // always in [0, len), even for n < 0
//! value = cycle[index]
//! ```
//!
//! Values are relative.  `0` means "the starting parent" and `1` "the other
//! parent"; binding to `Parent::A` / `Parent::B` happens in the resolver.
//!
//! The built-in patterns are hand-authored data.  Adding a pattern is one
//! more entry in [`BUILTIN_PATTERNS`] (or a call to [`PatternTable::insert`]
//! at runtime); nothing else changes.

use std::fmt;

use crate::{ScheduleError, ScheduleResult};

/// Reserved pattern identifier selecting a config-supplied cycle.
pub const CUSTOM_PATTERN_ID: &str = "custom";

// ── Built-in patterns ─────────────────────────────────────────────────────────

/// Built-in `(id, cycle)` pairs.  All start on the anchor date's weekday; the
/// comments assume a Monday anchor.
pub const BUILTIN_PATTERNS: &[(&str, &[u8])] = &[
    // One full week each.
    ("alternating-weeks", &[0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1]),
    // Mon-Tue / Wed-Thu / Fri-Sun, then mirrored.
    ("2-2-3", &[0, 0, 1, 1, 0, 0, 0, 1, 1, 0, 0, 1, 1, 1]),
    // Mon-Tue / Wed-Thu / Fri-Tue / Wed-Sun.
    ("2-2-5-5", &[0, 0, 1, 1, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1]),
    // Mon-Wed / Thu-Sun / Mon-Thu / Fri-Sun.
    ("3-4-4-3", &[0, 0, 0, 1, 1, 1, 1, 0, 0, 0, 0, 1, 1, 1]),
    // Friday through Sunday every second week.
    ("every-other-weekend", &[0, 0, 0, 0, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0]),
];

// ── PatternId ─────────────────────────────────────────────────────────────────

/// Name of a registered pattern, e.g. `"2-2-3"`.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct PatternId(String);

impl PatternId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PatternId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PatternId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

// ── Cycle ─────────────────────────────────────────────────────────────────────

/// A validated custody cycle: non-empty, every value 0 or 1.
#[derive(Clone, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct Cycle(Vec<u8>);

impl Cycle {
    /// Validate and wrap raw cycle values.
    ///
    /// # Errors
    /// [`ScheduleError::InvalidCycle`] if `values` is empty or contains
    /// anything other than 0 and 1.
    pub fn new(values: Vec<u8>) -> ScheduleResult<Self> {
        if values.is_empty() {
            return Err(ScheduleError::InvalidCycle("cycle is empty".into()));
        }
        if let Some((i, v)) = values.iter().enumerate().find(|(_, v)| **v > 1) {
            return Err(ScheduleError::InvalidCycle(format!(
                "value {v} at position {i} is not 0 or 1"
            )));
        }
        Ok(Self(values))
    }

    /// Parse a digit string such as `"0011000"`.  Whitespace is ignored.
    pub fn from_digits(digits: &str) -> ScheduleResult<Self> {
        let values = digits
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| match c {
                '0' => Ok(0),
                '1' => Ok(1),
                other => Err(ScheduleError::InvalidCycle(format!(
                    "unexpected character {other:?} in cycle {digits:?}"
                ))),
            })
            .collect::<ScheduleResult<Vec<u8>>>()?;
        Self::new(values)
    }

    /// Cycle period in days (always ≥ 1).
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; present for API symmetry with slices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn values(&self) -> &[u8] {
        &self.0
    }

    /// Position within the cycle for a signed day offset.
    #[inline]
    pub fn index_for(&self, day_offset: i64) -> usize {
        day_offset.rem_euclid(self.0.len() as i64) as usize
    }

    /// Raw 0/1 value for a signed day offset.
    #[inline]
    pub fn value_at(&self, day_offset: i64) -> u8 {
        self.0[self.index_for(day_offset)]
    }

    /// How many days per period carry `bit`.
    pub fn count(&self, bit: u8) -> usize {
        self.0.iter().filter(|v| **v == bit).count()
    }
}

impl TryFrom<Vec<u8>> for Cycle {
    type Error = ScheduleError;
    fn try_from(values: Vec<u8>) -> ScheduleResult<Self> {
        Cycle::new(values)
    }
}

impl From<Cycle> for Vec<u8> {
    fn from(cycle: Cycle) -> Vec<u8> {
        cycle.0
    }
}

impl fmt::Display for Cycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for v in &self.0 {
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

// ── PatternTable ──────────────────────────────────────────────────────────────

#[cfg(not(feature = "fx-hash"))]
type PatternMap = std::collections::HashMap<PatternId, Cycle>;

#[cfg(feature = "fx-hash")]
type PatternMap = rustc_hash::FxHashMap<PatternId, Cycle>;

/// Immutable-by-convention lookup from pattern id to cycle.
///
/// Build one at startup and pass it by reference to every
/// [`CustodyResolver`][crate::CustodyResolver]; tests can build their own
/// with [`PatternTable::empty`] and [`PatternTable::with_pattern`].
#[derive(Clone, Debug)]
pub struct PatternTable {
    patterns: PatternMap,
}

impl PatternTable {
    /// A table with no patterns.
    pub fn empty() -> Self {
        Self { patterns: PatternMap::default() }
    }

    /// A table holding every entry of [`BUILTIN_PATTERNS`].
    pub fn builtin() -> Self {
        let mut patterns = PatternMap::default();
        for (id, values) in BUILTIN_PATTERNS {
            patterns.insert(PatternId::new(*id), Cycle(values.to_vec()));
        }
        Self { patterns }
    }

    /// Register (or replace) a named pattern.
    ///
    /// # Errors
    /// [`ScheduleError::UnknownPattern`] if `id` is the reserved `"custom"`.
    pub fn insert(&mut self, id: impl Into<PatternId>, cycle: Cycle) -> ScheduleResult<()> {
        let id = id.into();
        if id.as_str() == CUSTOM_PATTERN_ID {
            return Err(ScheduleError::UnknownPattern(format!(
                "{CUSTOM_PATTERN_ID:?} is reserved and cannot be registered"
            )));
        }
        self.patterns.insert(id, cycle);
        Ok(())
    }

    /// Builder-style [`insert`][Self::insert].
    pub fn with_pattern(mut self, id: impl Into<PatternId>, cycle: Cycle) -> ScheduleResult<Self> {
        self.insert(id, cycle)?;
        Ok(self)
    }

    /// Look up a named cycle.
    pub fn get_cycle(&self, id: &str) -> ScheduleResult<&Cycle> {
        self.patterns
            .get(&PatternId::new(id))
            .ok_or_else(|| ScheduleError::UnknownPattern(id.to_owned()))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.patterns.contains_key(&PatternId::new(id))
    }

    /// Registered ids in sorted order.
    pub fn ids(&self) -> Vec<&PatternId> {
        let mut ids: Vec<_> = self.patterns.keys().collect();
        ids.sort_unstable();
        ids
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl Default for PatternTable {
    fn default() -> Self {
        Self::builtin()
    }
}
