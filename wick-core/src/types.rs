//! Re-export of the shared data model from `wick-types`.
// Consolidated re-exports so downstream crates can depend on `wick-core` only

pub use wick_types::{Cadence, Candle, CandleColor, Record, ScheduleConfig, WickError};
