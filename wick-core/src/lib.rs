//! wick-core
//!
//! Stateless helpers for candlestick (OHLC) analysis. Every function here is
//! pure: it reads its inputs, recomputes from scratch, and returns a value.
//!
//! - `round`: two-decimal rounding used by the averaging helpers.
//! - `average`: trailing simple moving average with a shrinking warm-up window.
//! - `slope`: least-squares regression slope and a two-point line slope.
//! - `classify`: candle color and color-flip (traffic-light) detection.
//! - `records`: CSV text to header-keyed records, and records to candles/JSON.
//!
#![warn(missing_docs)]

/// Simple moving average.
pub mod average;
/// Candle color predicates.
pub mod classify;
/// CSV record conversion.
pub mod records;
/// Rounding helpers.
pub mod round;
/// Slope estimators.
pub mod slope;
pub mod types;

pub use average::sma;
pub use classify::{is_green, is_red, is_traffic_light_pair};
pub use records::{candles_from_records, csv_to_records, records_to_json};
pub use round::round2;
pub use slope::{line_slope, sma_slope};
pub use types::*;
