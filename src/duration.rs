use std::fmt;

use crate::constants::{TICKS_PER_DAY, TICKS_PER_HOUR, TICKS_PER_MINUTE, TICKS_PER_SECOND};
use crate::formatter::{Completeness, format_standard};

/// A signed span of time stored as a count of 100-nanosecond ticks.
///
/// The formatter only reads the decomposed view: sign once, magnitude
/// fields everywhere else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Duration {
    ticks: i64,
}

impl Duration {
    pub const fn from_ticks(ticks: i64) -> Self {
        Self { ticks }
    }

    pub const fn new(days: i64, hours: i64, minutes: i64, seconds: i64) -> Self {
        Self {
            ticks: days * TICKS_PER_DAY
                + hours * TICKS_PER_HOUR
                + minutes * TICKS_PER_MINUTE
                + seconds * TICKS_PER_SECOND,
        }
    }

    pub const fn ticks(&self) -> i64 {
        self.ticks
    }

    pub const fn is_negative(&self) -> bool {
        self.ticks < 0
    }

    /// Whole days of the magnitude.
    pub const fn days(&self) -> u64 {
        self.ticks.unsigned_abs() / TICKS_PER_DAY as u64
    }

    pub const fn hours(&self) -> u32 {
        (self.ticks.unsigned_abs() / TICKS_PER_HOUR as u64 % 24) as u32
    }

    pub const fn minutes(&self) -> u32 {
        (self.ticks.unsigned_abs() / TICKS_PER_MINUTE as u64 % 60) as u32
    }

    pub const fn seconds(&self) -> u32 {
        (self.ticks.unsigned_abs() / TICKS_PER_SECOND as u64 % 60) as u32
    }

    /// Sub-second remainder of the magnitude, `0..10^7` ticks.
    pub const fn fraction_ticks(&self) -> u32 {
        (self.ticks.unsigned_abs() % TICKS_PER_SECOND as u64) as u32
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_standard(self, true, "c", Completeness::Minimum))
    }
}
