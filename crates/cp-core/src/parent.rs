//! The two custodial parents.
//!
//! Cycles store opaque 0/1 values.  `Parent` is the resolved side of that
//! mapping; binding a raw bit to a parent happens in exactly one place
//! (`cp_schedule::CustodyResolver`) via [`Parent::from_bit`] and
//! [`Parent::flip_if`].

use std::fmt;
use std::str::FromStr;

use crate::CpError;

// ── Parent ────────────────────────────────────────────────────────────────────

/// One of the two parents sharing custody.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Parent {
    A,
    B,
}

impl Parent {
    /// Both parents in display order.
    pub const BOTH: [Parent; 2] = [Parent::A, Parent::B];

    /// The parent who does not have custody when `self` does.
    #[inline]
    pub fn other(self) -> Parent {
        match self {
            Parent::A => Parent::B,
            Parent::B => Parent::A,
        }
    }

    /// 0/1 encoding: `A = 0`, `B = 1`.
    #[inline]
    pub fn bit(self) -> u8 {
        match self {
            Parent::A => 0,
            Parent::B => 1,
        }
    }

    /// Inverse of [`bit`][Self::bit].  Any non-zero value maps to `B`.
    #[inline]
    pub fn from_bit(bit: u8) -> Parent {
        if bit == 0 { Parent::A } else { Parent::B }
    }

    /// `self.other()` when `flip` is true, otherwise `self`.
    #[inline]
    pub fn flip_if(self, flip: bool) -> Parent {
        if flip { self.other() } else { self }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Parent::A => "A",
            Parent::B => "B",
        }
    }
}

impl fmt::Display for Parent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Parent {
    type Err = CpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "A" | "a" => Ok(Parent::A),
            "B" | "b" => Ok(Parent::B),
            other => Err(CpError::Parse(format!(
                "invalid parent {other:?}: expected \"A\" or \"B\""
            ))),
        }
    }
}

// ── ParentNames ───────────────────────────────────────────────────────────────

/// Human-readable labels for the two parents, used only by presentation
/// layers (calendar feeds, documents).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParentNames {
    pub a: String,
    pub b: String,
}

impl ParentNames {
    pub fn new(a: impl Into<String>, b: impl Into<String>) -> Self {
        Self { a: a.into(), b: b.into() }
    }

    /// Display label for `parent`.
    pub fn name(&self, parent: Parent) -> &str {
        match parent {
            Parent::A => &self.a,
            Parent::B => &self.b,
        }
    }
}

impl Default for ParentNames {
    fn default() -> Self {
        Self::new("Parent A", "Parent B")
    }
}
