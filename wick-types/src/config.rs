//! Schedule configuration types.

use serde::{Deserialize, Serialize};

use crate::WickError;

/// Wall-clock cadence for a periodic callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Cadence {
    /// Every minute, aligned to the top of the next minute.
    #[default]
    EveryMinute,
    /// Every five minutes, aligned to the next minute divisible by five.
    EveryFifthMinute,
    /// Every `every_minutes` minutes, anchored at `anchor_minute` past the
    /// current hour.
    ///
    /// The anchor is not checked against the cadence: `anchor_minute = 0` with
    /// `every_minutes = 15` lands on quarter hours, while inconsistent pairs
    /// simply drift from the anchor.
    EveryNthMinute {
        /// Interval between invocations, in minutes. Must be non-zero.
        every_minutes: u32,
        /// Minute of the hour on which the first invocation is anchored.
        anchor_minute: u32,
    },
}

impl Cadence {
    /// Whether this cadence invokes the callback at the alignment boundary by
    /// default.
    ///
    /// `EveryMinute` does not: its first invocation happens one full period
    /// after alignment. The other cadences fire at the boundary.
    #[must_use]
    pub const fn fires_on_alignment(&self) -> bool {
        !matches!(self, Self::EveryMinute)
    }

    /// Repeat period in whole minutes.
    #[must_use]
    pub const fn period_minutes(&self) -> u32 {
        match self {
            Self::EveryMinute => 1,
            Self::EveryFifthMinute => 5,
            Self::EveryNthMinute { every_minutes, .. } => *every_minutes,
        }
    }
}

/// A cadence plus invocation options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// Wall-clock cadence.
    pub cadence: Cadence,
    /// Invoke the callback once at the alignment boundary before repeating.
    pub fire_on_alignment: bool,
}

impl ScheduleConfig {
    /// Configuration for `cadence` with its default alignment behavior.
    #[must_use]
    pub const fn new(cadence: Cadence) -> Self {
        Self {
            cadence,
            fire_on_alignment: cadence.fires_on_alignment(),
        }
    }

    /// Check that the configuration describes a runnable schedule.
    ///
    /// # Errors
    /// Returns `Err(WickError::InvalidArg)` if the cadence has a zero-minute period.
    pub fn validate(&self) -> Result<(), WickError> {
        if self.cadence.period_minutes() == 0 {
            return Err(WickError::invalid_arg(
                "schedule period must be at least one minute",
            ));
        }
        Ok(())
    }
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self::new(Cadence::default())
    }
}

impl From<Cadence> for ScheduleConfig {
    fn from(cadence: Cadence) -> Self {
        Self::new(cadence)
    }
}
