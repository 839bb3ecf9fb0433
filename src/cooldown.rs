//! A reusable last-use gate for repeatable grants.
//!
//! The gate itself only decides; callers commit `last_use = now` in the same
//! atomic store update as the effect it guards.

use crate::constants::{AFFECTION_WINDOW_SECS, DAILY_WINDOW_SECS};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayUnit {
    Hours,
    Minutes,
}

impl DisplayUnit {
    pub fn seconds(&self) -> i64 {
        match self {
            DisplayUnit::Hours => 60 * 60,
            DisplayUnit::Minutes => 60,
        }
    }

    pub fn label(&self, n: i64) -> &'static str {
        match (self, n == 1) {
            (DisplayUnit::Hours, true) => "hour",
            (DisplayUnit::Hours, false) => "hours",
            (DisplayUnit::Minutes, true) => "minute",
            (DisplayUnit::Minutes, false) => "minutes",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cooldown {
    pub window_secs: i64,
    pub unit: DisplayUnit,
}

/// Returned when the gate is closed: how long until it reopens, rounded up
/// to the gate's display unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CooldownActive {
    pub remaining: i64,
    pub unit: DisplayUnit,
}

pub const DAILY: Cooldown = Cooldown {
    window_secs: DAILY_WINDOW_SECS,
    unit: DisplayUnit::Hours,
};

pub const AFFECTION: Cooldown = Cooldown {
    window_secs: AFFECTION_WINDOW_SECS,
    unit: DisplayUnit::Minutes,
};

impl Cooldown {
    pub fn check(
        &self,
        now: DateTime<Utc>,
        last_use: Option<DateTime<Utc>>,
    ) -> Result<(), CooldownActive> {
        let Some(last) = last_use else {
            return Ok(());
        };
        let window_ms = self.window_secs * 1000;
        // A timestamp in the future counts as "just used".
        let elapsed_ms = (now - last).num_milliseconds().max(0);
        if elapsed_ms >= window_ms {
            return Ok(());
        }
        let unit_ms = self.unit.seconds() * 1000;
        let left_ms = window_ms - elapsed_ms;
        Err(CooldownActive {
            remaining: (left_ms + unit_ms - 1) / unit_ms,
            unit: self.unit,
        })
    }
}

impl std::fmt::Display for CooldownActive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.remaining, self.unit.label(self.remaining))
    }
}
