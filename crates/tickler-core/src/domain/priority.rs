//! Priority levels and their per-level constants.

use std::fmt;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use super::errors::TicklerError;

/// Growth rate per level, `(5p)^(1/7)`, computed once.
static GROWTH_RATES: LazyLock<[f64; Priority::LEVELS]> = LazyLock::new(|| {
    std::array::from_fn(|i| {
        let p = (i + 1) as f64;
        (5.0 * p).powf(1.0 / 7.0)
    })
});

/// ANSI SGR foreground codes, indexed by level - 1.
const COLOR_CODES: [u8; Priority::LEVELS] = [36, 32, 33, 35, 31];

/// Task priority, one of exactly five levels (1 = lowest, 5 = highest).
///
/// Serialized as the bare integer so the store file stays hand-editable.
/// Out-of-range values are rejected on deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Priority(u8);

impl Priority {
    pub const LEVELS: usize = 5;
    pub const LOWEST: Priority = Priority(1);
    pub const HIGHEST: Priority = Priority(5);

    /// Validate a raw integer from the command line or the store.
    pub fn new(value: i64) -> Result<Self, TicklerError> {
        if (1..=Self::LEVELS as i64).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(TicklerError::InvalidPriority(value))
        }
    }

    pub fn level(self) -> u8 {
        self.0
    }

    /// Multiplier applied to the value once per week of age.
    pub fn growth_rate(self) -> f64 {
        GROWTH_RATES[self.index()]
    }

    /// ANSI SGR color code used when rendering tasks of this level.
    pub fn color_code(self) -> u8 {
        COLOR_CODES[self.index()]
    }

    /// All levels, lowest first.
    pub fn all() -> impl Iterator<Item = Priority> {
        (1..=Self::LEVELS as u8).map(Priority)
    }

    fn index(self) -> usize {
        usize::from(self.0) - 1
    }
}

impl Default for Priority {
    fn default() -> Self {
        Self(3)
    }
}

impl TryFrom<i64> for Priority {
    type Error = TicklerError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Priority> for u8 {
    fn from(priority: Priority) -> Self {
        priority.0
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
