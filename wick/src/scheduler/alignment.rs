use std::time::Duration;

use chrono::{DateTime, TimeDelta, TimeZone, Timelike};
use wick_types::{Cadence, ScheduleConfig, WickError};

/// When a schedule first wakes up and how often it repeats afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alignment {
    initial_delay: Duration,
    period: Duration,
    fire_on_alignment: bool,
}

impl Alignment {
    /// Build an alignment from raw durations.
    ///
    /// # Errors
    /// Returns `Err(WickError::InvalidArg)` if `period` is zero.
    pub fn new(
        initial_delay: Duration,
        period: Duration,
        fire_on_alignment: bool,
    ) -> Result<Self, WickError> {
        if period.is_zero() {
            return Err(WickError::invalid_arg("repeat period must be non-zero"));
        }
        Ok(Self {
            initial_delay,
            period,
            fire_on_alignment,
        })
    }

    /// Time to wait before the alignment boundary.
    #[must_use]
    pub const fn initial_delay(&self) -> Duration {
        self.initial_delay
    }

    /// Interval between repeated invocations.
    #[must_use]
    pub const fn period(&self) -> Duration {
        self.period
    }

    /// Whether the callback runs once at the boundary itself.
    #[must_use]
    pub const fn fire_on_alignment(&self) -> bool {
        self.fire_on_alignment
    }
}

/// Compute the alignment of `config` relative to the wall-clock instant `now`.
///
/// - `EveryMinute` waits `60 - second` seconds.
/// - `EveryFifthMinute` waits `300 - (second + 60 * (minute % 5))` seconds.
/// - `EveryNthMinute` targets `anchor_minute` past the start of the current
///   hour (anchors of 60 or more roll into later hours). If `now` is already
///   past that instant the target moves forward by one period; a target that
///   is still in the past after that fires without waiting.
///
/// Sub-second components of `now` are ignored by the first two cadences, so
/// they wake up to one second after the boundary.
///
/// # Errors
/// Returns `Err(WickError::InvalidArg)` if the cadence has a zero-minute period.
pub fn alignment_at<Tz: TimeZone>(
    config: &ScheduleConfig,
    now: &DateTime<Tz>,
) -> Result<Alignment, WickError> {
    config.validate()?;
    Ok(align(config, now))
}

/// Alignment for a configuration already known to have a non-zero period.
pub(crate) fn align<Tz: TimeZone>(config: &ScheduleConfig, now: &DateTime<Tz>) -> Alignment {
    let period = Duration::from_secs(u64::from(config.cadence.period_minutes()) * 60);

    let initial_delay = match config.cadence {
        Cadence::EveryMinute => Duration::from_secs(u64::from(60 - now.second())),
        Cadence::EveryFifthMinute => {
            let into_slot = now.second() + 60 * (now.minute() % 5);
            Duration::from_secs(u64::from(300 - into_slot))
        }
        Cadence::EveryNthMinute {
            every_minutes,
            anchor_minute,
        } => delay_to_anchor(now, every_minutes, anchor_minute),
    };

    Alignment {
        initial_delay,
        period,
        fire_on_alignment: config.fire_on_alignment,
    }
}

fn delay_to_anchor<Tz: TimeZone>(now: &DateTime<Tz>, every: u32, anchor: u32) -> Duration {
    let into_hour = TimeDelta::seconds(i64::from(now.minute() * 60 + now.second()))
        + TimeDelta::nanoseconds(i64::from(now.nanosecond() % 1_000_000_000));
    let hour_start = now.clone() - into_hour;

    let mut next = hour_start + TimeDelta::minutes(i64::from(anchor));
    if *now > next {
        next += TimeDelta::minutes(i64::from(every));
    }

    // Still behind `now` when the anchor lags more than one period.
    (next - now.clone()).to_std().unwrap_or(Duration::ZERO)
}
