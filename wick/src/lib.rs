//! wick
//!
//! Candlestick analysis helpers plus clock-aligned periodic scheduling.
//!
//! The pure helpers (moving average, slope estimators, candle classification,
//! CSV records) live in `wick-core` and are re-exported here. This crate adds
//! the `scheduler` module, which runs a callback on a wall-clock cadence
//! (every minute, every fifth minute, or every N minutes from an anchor minute)
//! and hands back a [`ScheduleHandle`] to stop it.
//!
//! Async runtime (Tokio)
//! ---------------------
//! Schedules run as Tokio tasks. Every function that starts a schedule calls
//! `tokio::spawn` and must be invoked from within a Tokio 1.x runtime.
//!
//! ```no_run
//! # #[tokio::main]
//! # async fn main() -> Result<(), wick::WickError> {
//! let handle = wick::every_new_nth_minute(15, 0, || println!("quarter hour"))?;
//! // ...
//! handle.cancel().await;
//! # Ok(())
//! # }
//! ```
#![warn(missing_docs)]

/// Clock-aligned periodic callbacks.
pub mod scheduler;

pub use scheduler::{
    Alignment, Schedule, ScheduleHandle, alignment_at, every_new_1st_minute, every_new_5th_minute,
    every_new_nth_minute, spawn_periodic,
};
pub use wick_core::*;
