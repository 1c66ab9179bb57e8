//! Plain data row types shared by tabular backends.

use chrono::NaiveDate;
use cp_core::{Parent, ParentNames};
use cp_schedule::CustodyBlock;

/// One custody block as a table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockRow {
    pub start:       NaiveDate,
    /// Inclusive.
    pub end:         NaiveDate,
    pub days:        u64,
    pub parent:      Parent,
    pub parent_name: String,
}

impl BlockRow {
    pub fn new(block: &CustodyBlock, names: &ParentNames) -> Self {
        Self {
            start:       block.start,
            end:         block.end,
            days:        block.days(),
            parent:      block.parent,
            parent_name: names.name(block.parent).to_owned(),
        }
    }

    /// Column headers matching [`fields`][Self::fields].
    pub const HEADERS: [&'static str; 5] = ["start", "end", "days", "parent", "parent_name"];

    pub fn fields(&self) -> [String; 5] {
        [
            self.start.to_string(),
            self.end.to_string(),
            self.days.to_string(),
            self.parent.to_string(),
            self.parent_name.clone(),
        ]
    }
}
