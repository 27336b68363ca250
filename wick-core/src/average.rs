use crate::round::round2;

/// Trailing simple moving average over `data`.
///
/// Output `i` is the mean of `data[i + 1 - period ..= i]`. While fewer than
/// `period` points are available the window shrinks to whatever precedes
/// `i`, so the warm-up outputs are averages over `1, 2, .., period - 1`
/// points instead of placeholders. Each output is rounded with [`round2`].
///
/// The output always has the same length as `data`.
///
/// `period` must be non-zero. A zero period is not normalized: every output is
/// `NaN`.
///
/// ```
/// use wick_core::sma;
///
/// assert_eq!(sma(&[1.0, 2.0, 3.0, 4.0], 2), vec![1.0, 1.5, 2.5, 3.5]);
/// ```
#[must_use]
pub fn sma(data: &[f64], period: usize) -> Vec<f64> {
    (0..data.len())
        .map(|i| {
            let start = (i + 1).saturating_sub(period);
            let window = &data[start..=i];
            // newest first
            let sum: f64 = window.iter().rev().sum();
            round2(sum / window.len() as f64)
        })
        .collect()
}
