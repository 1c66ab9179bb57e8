//! `cp-core`: foundational types for the custody pattern engine.
//!
//! This crate is a dependency of every other `cp-*` crate.  It has no `cp-*`
//! dependencies and only `chrono` and `thiserror` (plus optional `serde`)
//! from outside.
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`parent`]      | `Parent` (`A` / `B`), `ParentNames`                   |
//! | [`date`]        | `CalendarDay`, `days_between`, `DateRange`            |
//! | [`error`]       | `CpError`, `CpResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | `Serialize`/`Deserialize` on all public types; required by `cp-schedule` |

pub mod date;
pub mod error;
pub mod parent;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use date::{CalendarDay, DateRange, days_between, next_day};
pub use error::{CpError, CpResult};
pub use parent::{Parent, ParentNames};

/// Re-exported so downstream crates name the same `chrono` types.
pub use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
