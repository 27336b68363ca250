use crate::types::Candle;

/// `true` if the candle closed above its open.
#[must_use]
pub fn is_green(candle: &Candle) -> bool {
    candle.close > candle.open
}

/// `true` if the candle closed below its open.
///
/// A doji (`close == open`) is neither green nor red.
#[must_use]
pub fn is_red(candle: &Candle) -> bool {
    candle.close < candle.open
}

/// `true` if exactly one of `prev` and `next` is green.
///
/// This compares green against not-green only: red and doji candles fall on
/// the same side, so a doji followed by a red candle is not a flip.
///
/// ```
/// use wick_core::{is_traffic_light_pair, Candle};
///
/// let green = Candle::new(1.0, 2.0, 1.0, 2.0);
/// let red = Candle::new(2.0, 2.0, 1.0, 1.0);
/// let doji = Candle::new(1.0, 1.0, 1.0, 1.0);
/// assert!(is_traffic_light_pair(&green, &red));
/// assert!(!is_traffic_light_pair(&doji, &red));
/// ```
#[must_use]
pub fn is_traffic_light_pair(prev: &Candle, next: &Candle) -> bool {
    is_green(prev) != is_green(next)
}
