//! Data transfer objects and configuration primitives shared across the wick workspace.
#![warn(missing_docs)]

mod candle;
mod config;
mod error;
mod record;

pub use candle::{Candle, CandleColor};
pub use config::{Cadence, ScheduleConfig};
pub use error::WickError;
pub use record::Record;
