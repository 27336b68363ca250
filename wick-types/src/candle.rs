use serde::{Deserialize, Serialize};

/// One OHLC(V) bar.
///
/// Field names follow the compact wire keys used by charting feeds
/// (`t`, `o`, `h`, `l`, `c`, `v`). The timestamp is kept as the raw string the
/// producer supplied; no parsing or timezone handling is applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    /// Optional timestamp, verbatim.
    #[serde(rename = "t", default, skip_serializing_if = "Option::is_none")]
    pub ts: Option<String>,
    /// Opening price.
    #[serde(rename = "o")]
    pub open: f64,
    /// Highest price.
    #[serde(rename = "h")]
    pub high: f64,
    /// Lowest price.
    #[serde(rename = "l")]
    pub low: f64,
    /// Closing price.
    #[serde(rename = "c")]
    pub close: f64,
    /// Optional traded volume.
    #[serde(rename = "v", default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
}

/// Bullish/bearish classification of a single candle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CandleColor {
    /// `close > open`.
    Green,
    /// `close < open`.
    Red,
    /// Neither: `close == open`, or a comparison involving `NaN`.
    Doji,
}

impl Candle {
    /// Build a candle from OHLC prices with no timestamp or volume.
    #[must_use]
    pub const fn new(open: f64, high: f64, low: f64, close: f64) -> Self {
        Self {
            ts: None,
            open,
            high,
            low,
            close,
            volume: None,
        }
    }

    /// Attach a timestamp.
    #[must_use]
    pub fn with_ts(mut self, ts: impl Into<String>) -> Self {
        self.ts = Some(ts.into());
        self
    }

    /// Attach a volume.
    #[must_use]
    pub const fn with_volume(mut self, volume: f64) -> Self {
        self.volume = Some(volume);
        self
    }

    /// Three-way color of this candle.
    #[must_use]
    pub fn color(&self) -> CandleColor {
        if self.close > self.open {
            CandleColor::Green
        } else if self.close < self.open {
            CandleColor::Red
        } else {
            CandleColor::Doji
        }
    }
}
