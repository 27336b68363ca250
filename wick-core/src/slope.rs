use crate::types::{Candle, WickError};

/// Least-squares slope over the last `period` values of `data`.
///
/// Within the window the x-coordinates run backwards: the oldest selected
/// value sits at `x = period - 1` and the newest at `x = 0`. A series rising
/// over time therefore yields a negative slope.
///
/// `period == 1` leaves the x-variance at zero and yields `NaN`; this is
/// returned as-is rather than reported as an error.
///
/// # Errors
/// Returns `Err(WickError::InsufficientData)` if `data.len() < period`.
///
/// ```
/// use wick_core::sma_slope;
///
/// assert_eq!(sma_slope(&[1.0, 2.0, 3.0, 4.0, 5.0], 5).unwrap(), -1.0);
/// assert!(sma_slope(&[1.0, 2.0], 3).is_err());
/// ```
pub fn sma_slope(data: &[f64], period: usize) -> Result<f64, WickError> {
    if data.len() < period {
        return Err(WickError::insufficient_data(period, data.len()));
    }

    let values = &data[data.len() - period..];
    let n = period as f64;
    let x_of = |i: usize| (period - 1 - i) as f64;

    let x_bar = (n - 1.0) / 2.0;
    let y_bar = values.iter().sum::<f64>() / n;

    let (numerator, denominator) =
        values
            .iter()
            .enumerate()
            .fold((0.0, 0.0), |(num, den), (i, &y)| {
                let dx = x_of(i) - x_bar;
                (num + dx * (y - y_bar), den + dx * dx)
            });

    Ok(numerator / denominator)
}

/// Two-point slope heuristic from the first to the last candle close.
///
/// Computes `(last.close - first.close) / (candles.len() / period)`. The run
/// is the candle count scaled by `period`, not the index distance between the
/// two candles. A single candle is both first and last and yields `0.0`.
///
/// Returns `None` only for an empty slice.
///
/// ```
/// use wick_core::{line_slope, Candle};
///
/// let candles = [Candle::new(1.0, 1.0, 1.0, 10.0), Candle::new(1.0, 1.0, 1.0, 14.0)];
/// assert_eq!(line_slope(&candles, 1.0), Some(2.0));
/// assert_eq!(line_slope(&[], 1.0), None);
/// ```
#[must_use]
pub fn line_slope(candles: &[Candle], period: f64) -> Option<f64> {
    let (first, last) = (candles.first()?, candles.last()?);
    Some((last.close - first.close) / (candles.len() as f64 / period))
}
