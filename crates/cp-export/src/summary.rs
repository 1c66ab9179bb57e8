//! Custody totals and exchange list for a segmented range.

use chrono::NaiveDate;
use cp_core::{DateRange, Parent};
use cp_schedule::CustodyBlock;
use serde::Serialize;

/// A handoff between two consecutive blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Exchange {
    /// First day with the receiving parent.
    pub date: NaiveDate,
    pub from: Parent,
    pub to:   Parent,
}

/// Per-parent day counts and exchanges over a range of blocks.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct CustodySummary {
    /// `None` when built from zero blocks.
    pub range:     Option<DateRange>,
    pub days_a:    u64,
    pub days_b:    u64,
    pub exchanges: Vec<Exchange>,
}

impl CustodySummary {
    /// Summarize blocks in date order.
    pub fn from_blocks(blocks: &[CustodyBlock]) -> Self {
        let (days_a, days_b) = blocks.iter().fold((0, 0), |(a, b), block| match block.parent {
            Parent::A => (a + block.days(), b),
            Parent::B => (a, b + block.days()),
        });
        let exchanges = blocks
            .windows(2)
            .filter(|pair| pair[0].parent != pair[1].parent)
            .map(|pair| Exchange { date: pair[1].start, from: pair[0].parent, to: pair[1].parent })
            .collect();
        let range = match (blocks.first(), blocks.last()) {
            (Some(first), Some(last)) => DateRange::new(first.start, last.end).ok(),
            _ => None,
        };
        Self { range, days_a, days_b, exchanges }
    }

    pub fn total_days(&self) -> u64 {
        self.days_a + self.days_b
    }

    pub fn days(&self, parent: Parent) -> u64 {
        match parent {
            Parent::A => self.days_a,
            Parent::B => self.days_b,
        }
    }

    /// Share of days held by `parent`, in percent.  `0.0` for an empty summary.
    pub fn share(&self, parent: Parent) -> f64 {
        match self.total_days() {
            0 => 0.0,
            total => self.days(parent) as f64 * 100.0 / total as f64,
        }
    }
}
