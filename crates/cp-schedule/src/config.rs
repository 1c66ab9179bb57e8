//! `ScheduleConfig`: the declarative input to the custody engine.
//!
//! The config is built by the surrounding application (forms, wizard, file)
//! and handed over as a value.  The engine never mutates it.
//!
//! # Wire format
//!
//! The serialized shape keeps the flat `pattern` string.  `"custom"` selects
//! the `custom_cycle` field:
//!
//! ```toml
//! pattern = "custom"
//! custom_cycle = [0, 0, 1, 1]
//! start_date = "2024-01-01"
//! starting_parent = "B"
//! ```
//!
//! In memory the two cases are the [`PatternSpec`] variants, so nothing
//! downstream branches on the string.

use chrono::NaiveDate;
use cp_core::Parent;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::holiday::Holiday;
use crate::pattern::{CUSTOM_PATTERN_ID, Cycle, PatternId};
use crate::{ScheduleError, ScheduleResult};

// ── PatternSpec ───────────────────────────────────────────────────────────────

/// Which cycle a schedule follows.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum PatternSpec {
    /// A pattern registered in the [`PatternTable`][crate::PatternTable].
    Named(PatternId),
    /// A cycle carried by the config itself.
    Custom(Cycle),
}

impl PatternSpec {
    /// Short label for logs and document headers.
    pub fn label(&self) -> &str {
        match self {
            PatternSpec::Named(id) => id.as_str(),
            PatternSpec::Custom(_) => CUSTOM_PATTERN_ID,
        }
    }
}

// ── ScheduleConfig ────────────────────────────────────────────────────────────

/// A complete custody schedule description.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(try_from = "ScheduleConfigFile", into = "ScheduleConfigFile")]
pub struct ScheduleConfig {
    pub pattern: PatternSpec,

    /// Day zero of the cycle.
    pub start_date: NaiveDate,

    /// Parent bound to cycle value 0.
    pub starting_parent: Parent,

    /// Display-only; never consulted by the resolver.
    pub exchange_time: Option<String>,

    /// Display-only; never consulted by the resolver.
    pub exchange_location: Option<String>,

    /// Holiday overrides, in priority order.
    pub holidays: Vec<Holiday>,
}

impl ScheduleConfig {
    /// A config following a registered pattern.
    pub fn named(id: impl Into<PatternId>, start_date: NaiveDate, starting_parent: Parent) -> Self {
        Self::with_pattern(PatternSpec::Named(id.into()), start_date, starting_parent)
    }

    /// A config following its own cycle.
    pub fn custom(cycle: Cycle, start_date: NaiveDate, starting_parent: Parent) -> Self {
        Self::with_pattern(PatternSpec::Custom(cycle), start_date, starting_parent)
    }

    fn with_pattern(pattern: PatternSpec, start_date: NaiveDate, starting_parent: Parent) -> Self {
        Self {
            pattern,
            start_date,
            starting_parent,
            exchange_time: None,
            exchange_location: None,
            holidays: Vec::new(),
        }
    }

    pub fn with_exchange(
        mut self,
        time: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        self.exchange_time = Some(time.into());
        self.exchange_location = Some(location.into());
        self
    }

    pub fn with_holiday(mut self, holiday: Holiday) -> Self {
        self.holidays.push(holiday);
        self
    }

    /// The same schedule with the starting parent swapped.
    pub fn inverted(&self) -> Self {
        Self { starting_parent: self.starting_parent.other(), ..self.clone() }
    }

    /// Enabled holidays only.
    pub fn enabled_holidays(&self) -> impl Iterator<Item = &Holiday> {
        self.holidays.iter().filter(|h| h.enabled)
    }
}

// ── Serialized form ───────────────────────────────────────────────────────────

/// Flat on-disk / on-wire shape of a [`ScheduleConfig`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub(crate) struct ScheduleConfigFile {
    pattern: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    custom_cycle: Option<Vec<u8>>,

    start_date: NaiveDate,

    starting_parent: Parent,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    exchange_time: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    exchange_location: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    holidays: Vec<Holiday>,
}

impl TryFrom<ScheduleConfigFile> for ScheduleConfig {
    type Error = ScheduleError;

    fn try_from(file: ScheduleConfigFile) -> ScheduleResult<Self> {
        let pattern = match (file.pattern.as_str(), file.custom_cycle) {
            (CUSTOM_PATTERN_ID, Some(values)) => PatternSpec::Custom(Cycle::new(values)?),
            (CUSTOM_PATTERN_ID, None) => {
                return Err(ScheduleError::InvalidCycle(
                    "pattern \"custom\" requires custom_cycle".into(),
                ));
            }
            (name, stale) => {
                if stale.is_some() {
                    warn!(pattern = name, "custom_cycle ignored for named pattern");
                }
                PatternSpec::Named(PatternId::new(name))
            }
        };

        for holiday in file.holidays.iter().filter(|h| !h.enabled) {
            warn!(holiday = %holiday.name, "holiday disabled; base pattern applies");
        }

        Ok(Self {
            pattern,
            start_date: file.start_date,
            starting_parent: file.starting_parent,
            exchange_time: file.exchange_time,
            exchange_location: file.exchange_location,
            holidays: file.holidays,
        })
    }
}

impl From<ScheduleConfig> for ScheduleConfigFile {
    fn from(config: ScheduleConfig) -> Self {
        let (pattern, custom_cycle) = match config.pattern {
            PatternSpec::Named(id) => (id.as_str().to_owned(), None),
            PatternSpec::Custom(cycle) => (CUSTOM_PATTERN_ID.to_owned(), Some(cycle.into())),
        };
        Self {
            pattern,
            custom_cycle,
            start_date: config.start_date,
            starting_parent: config.starting_parent,
            exchange_time: config.exchange_time,
            exchange_location: config.exchange_location,
            holidays: config.holidays,
        }
    }
}
