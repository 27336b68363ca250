//! Wall-clock aligned periodic callbacks.
//!
//! Each schedule runs on its own Tokio task, but every callback invocation,
//! across all schedules in the process, goes through one dispatch lock: no two
//! callbacks ever run at the same time, even on a multi-thread runtime. The wait until the first boundary is computed
//! once, at registration, against the local wall clock; clock adjustments and
//! DST transitions during the wait are not compensated.

mod alignment;
mod handle;

use chrono::Local;
use tokio::sync::{Mutex, oneshot};
use tokio::time::{Instant, MissedTickBehavior};
use wick_types::{Cadence, ScheduleConfig, WickError};

pub use alignment::{Alignment, alignment_at};
pub use handle::ScheduleHandle;

// Serializes callback invocations of every schedule in the process.
static DISPATCH: Mutex<()> = Mutex::const_new(());

/// Builder for a clock-aligned schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schedule {
    cfg: ScheduleConfig,
}

impl Schedule {
    /// Start from `cadence` with its default alignment behavior.
    #[must_use]
    pub const fn new(cadence: Cadence) -> Self {
        Self {
            cfg: ScheduleConfig::new(cadence),
        }
    }

    /// Start from a full configuration, e.g. one loaded with serde.
    #[must_use]
    pub const fn from_config(cfg: ScheduleConfig) -> Self {
        Self { cfg }
    }

    /// Override whether the callback runs once at the alignment boundary.
    #[must_use]
    pub const fn fire_on_alignment(mut self, fire: bool) -> Self {
        self.cfg.fire_on_alignment = fire;
        self
    }

    /// The configuration this builder will spawn.
    #[must_use]
    pub const fn config(&self) -> &ScheduleConfig {
        &self.cfg
    }

    /// Spawn the schedule, aligned against the local wall clock.
    ///
    /// # Errors
    /// Returns `Err(WickError::InvalidArg)` if the cadence has a zero-minute period.
    ///
    /// # Panics
    /// Panics if called outside of a Tokio runtime.
    pub fn spawn<F>(self, f: F) -> Result<ScheduleHandle, WickError>
    where
        F: FnMut() + Send + 'static,
    {
        let alignment = alignment_at(&self.cfg, &Local::now())?;
        #[cfg(feature = "tracing")]
        tracing::debug!(
            cadence = ?self.cfg.cadence,
            initial_delay = ?alignment.initial_delay(),
            period_s = alignment.period().as_secs(),
            fire_on_alignment = alignment.fire_on_alignment(),
            "registering schedule"
        );
        Ok(spawn_periodic(alignment, f))
    }
}

/// Run `f` every minute, starting from the top of the next minute.
///
/// The boundary itself does not invoke `f`; the first call happens one minute
/// after it. Use [`Schedule`] with `fire_on_alignment(true)` to also run at
/// the boundary.
///
/// # Panics
/// Panics if called outside of a Tokio runtime.
pub fn every_new_1st_minute<F>(f: F) -> ScheduleHandle
where
    F: FnMut() + Send + 'static,
{
    spawn_fixed(Cadence::EveryMinute, f)
}

/// Run `f` at the next minute divisible by five, then every five minutes.
///
/// # Panics
/// Panics if called outside of a Tokio runtime.
pub fn every_new_5th_minute<F>(f: F) -> ScheduleHandle
where
    F: FnMut() + Send + 'static,
{
    spawn_fixed(Cadence::EveryFifthMinute, f)
}

/// Run `f` at `target_minute` past the current hour (or `n` minutes after it
/// if that has passed), then every `n` minutes.
///
/// `target_minute` is not checked against `n`.
///
/// # Errors
/// Returns `Err(WickError::InvalidArg)` if `n` is zero.
///
/// # Panics
/// Panics if called outside of a Tokio runtime.
pub fn every_new_nth_minute<F>(
    n: u32,
    target_minute: u32,
    f: F,
) -> Result<ScheduleHandle, WickError>
where
    F: FnMut() + Send + 'static,
{
    Schedule::new(Cadence::EveryNthMinute {
        every_minutes: n,
        anchor_minute: target_minute,
    })
    .spawn(f)
}

// Fixed cadences always have a non-zero period.
fn spawn_fixed<F>(cadence: Cadence, f: F) -> ScheduleHandle
where
    F: FnMut() + Send + 'static,
{
    let cfg = ScheduleConfig::new(cadence);
    spawn_periodic(alignment::align(&cfg, &Local::now()), f)
}

/// Spawn a task that waits `alignment.initial_delay()`, optionally invokes
/// `f`, then invokes `f` every `alignment.period()`.
///
/// Late ticks are delayed rather than replayed in a burst. A tick that finds
/// another schedule's callback running waits for it to return.
///
/// # Panics
/// Panics if called outside of a Tokio runtime.
pub fn spawn_periodic<F>(alignment: Alignment, f: F) -> ScheduleHandle
where
    F: FnMut() + Send + 'static,
{
    let (stop_tx, stop_rx) = oneshot::channel::<()>();
    let join = tokio::spawn(run(alignment, f, stop_rx));
    ScheduleHandle::new(join, stop_tx)
}

async fn run<F>(alignment: Alignment, mut f: F, stop_rx: oneshot::Receiver<()>)
where
    F: FnMut(),
{
    let mut stop = StopSignal { rx: Some(stop_rx) };

    if stop
        .guard(tokio::time::sleep(alignment.initial_delay()))
        .await
        .is_none()
    {
        return;
    }
    if alignment.fire_on_alignment() && !stop.fire(&mut f).await {
        return;
    }

    let mut ticker =
        tokio::time::interval_at(Instant::now() + alignment.period(), alignment.period());
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    while stop.guard(ticker.tick()).await.is_some() {
        if !stop.fire(&mut f).await {
            return;
        }
    }
}

struct StopSignal {
    // `None` once the handle was detached.
    rx: Option<oneshot::Receiver<()>>,
}

impl StopSignal {
    /// Invoke `f` under the dispatch lock; `false` if stopped while waiting.
    async fn fire<F: FnMut()>(&mut self, f: &mut F) -> bool {
        let Some(_turn) = self.guard(DISPATCH.lock()).await else {
            return false;
        };
        #[cfg(feature = "tracing")]
        tracing::trace!("schedule tick");
        f();
        true
    }

    /// Drive `fut` to completion unless a stop arrives first; `None` on stop.
    async fn guard<T>(&mut self, fut: impl Future<Output = T>) -> Option<T> {
        tokio::pin!(fut);
        loop {
            let Some(rx) = self.rx.as_mut() else {
                return Some(fut.await);
            };
            let stopped = tokio::select! {
                biased;
                res = rx => res.is_ok(),
                out = &mut fut => return Some(out),
            };
            if stopped {
                return None;
            }
            self.rx = None;
        }
    }
}
