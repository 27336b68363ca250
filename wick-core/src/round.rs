/// Round `x` to two decimal places.
///
/// Computes `(x * 100).round() / 100`. Ties on the scaled value round away
/// from zero. `NaN` and infinities pass through unchanged.
///
/// ```
/// use wick_core::round2;
///
/// assert_eq!(round2(1.005_f64 + 0.001), 1.01);
/// assert_eq!(round2(2.345_6), 2.35);
/// assert_eq!(round2(-0.125), -0.13);
/// assert!(round2(f64::NAN).is_nan());
/// ```
#[must_use]
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
