//! `cp-schedule`: custody patterns, resolution, and block segmentation.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`pattern`]   | `Cycle`, `PatternId`, `PatternTable`, built-in patterns   |
//! | [`config`]    | `ScheduleConfig`, `PatternSpec`                           |
//! | [`holiday`]   | `Holiday`, `HolidayRule`, `HolidayCalendar`               |
//! | [`overrides`] | `CustodyOverride` trait, `HolidayOverrides`, `SwapDays`, `ChainedOverride` |
//! | [`resolver`]  | `CustodyResolver`, `BoundSchedule`                        |
//! | [`segment`]   | `CustodyBlock`, `Blocks`                                  |
//! | [`loader`]    | `load_config_toml`, `load_patterns_csv`                   |
//! | [`error`]     | `ScheduleError`, `ScheduleResult<T>`                      |
//!
//! # Cycle model (summary)
//!
//! Every schedule follows a 0/1 cycle anchored at `start_date`.  For a date:
//!
//! ```text
//! offset  = date - start_date                     (signed days)
//! value   = cycle[offset.rem_euclid(cycle.len())]
//! parent  = value XOR starting_parent             (0 → A, 1 → B)
//! ```
//!
//! Enabled holidays then replace the parent for their exact date only.

pub mod config;
pub mod error;
pub mod holiday;
pub mod loader;
pub mod overrides;
pub mod pattern;
pub mod resolver;
pub mod segment;


pub use config::{PatternSpec, ScheduleConfig};
pub use error::{ScheduleError, ScheduleResult};
pub use holiday::{
    ALTERNATE_EVEN_YEAR_PARENT, FixedDateCalendar, Holiday, HolidayCalendar, HolidayRule,
    NoHolidays,
};
pub use loader::{
    config_to_toml, load_config_toml, load_patterns_csv, load_patterns_reader, parse_config_toml,
};
pub use overrides::{
    ChainedOverride, CustodyOverride, CustodyOverrideExt, HolidayOverrides, NoOverride, SwapDays,
};
pub use pattern::{BUILTIN_PATTERNS, CUSTOM_PATTERN_ID, Cycle, PatternId, PatternTable};
pub use resolver::{BoundSchedule, CustodyResolver};
pub use segment::{Blocks, CustodyBlock};
