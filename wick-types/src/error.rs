use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the wick workspace.
///
/// Arithmetic degeneration (division by zero, `NaN`, infinities) is never
/// reported through this type; it propagates as plain `f64` values.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum WickError {
    /// Fewer data points were supplied than the requested window needs.
    #[error("insufficient data: need {needed} points, got {available}")]
    InsufficientData {
        /// Number of points the computation requires.
        needed: usize,
        /// Number of points actually supplied.
        available: usize,
    },

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// Issues with the supplied data (missing fields, unparsable values, etc.).
    #[error("data issue: {0}")]
    Data(String),
}

impl WickError {
    /// Helper: build an `InsufficientData` error.
    #[must_use]
    pub const fn insufficient_data(needed: usize, available: usize) -> Self {
        Self::InsufficientData { needed, available }
    }

    /// Helper: build an `InvalidArg` error from a message.
    pub fn invalid_arg(msg: impl Into<String>) -> Self {
        Self::InvalidArg(msg.into())
    }

    /// Helper: build a `Data` error from a message.
    pub fn data(msg: impl Into<String>) -> Self {
        Self::Data(msg.into())
    }
}
