use proptest::prelude::*;
use wick_core::{Candle, WickError, line_slope, sma_slope};

fn close(c: f64) -> Candle {
    Candle::new(c, c, c, c)
}

#[test]
fn rising_series_has_negative_regression_slope() {
    let s = sma_slope(&[1.0, 2.0, 3.0, 4.0, 5.0], 5).unwrap();
    assert_eq!(s, -1.0);
}

#[test]
fn regression_uses_only_the_trailing_window() {
    // Last three values fall by 2 per step; the leading noise is ignored.
    let s = sma_slope(&[100.0, -7.0, 10.0, 8.0, 6.0], 3).unwrap();
    assert_eq!(s, 2.0);
}

#[test]
fn flat_series_has_zero_slope() {
    assert_eq!(sma_slope(&[4.0; 6], 4).unwrap(), 0.0);
}

#[test]
fn period_one_degenerates_to_nan() {
    assert!(sma_slope(&[1.0, 2.0, 3.0], 1).unwrap().is_nan());
}

#[test]
fn insufficient_data_is_reported() {
    let err = sma_slope(&[1.0, 2.0], 3).unwrap_err();
    assert_eq!(err, WickError::insufficient_data(3, 2));
}

#[test]
fn line_slope_uses_candle_count_over_period() {
    let candles = [close(5.0), close(9.0), close(7.0), close(13.0)];
    // (13 - 5) / (4 / 2)
    assert_eq!(line_slope(&candles, 2.0), Some(4.0));
}

#[test]
fn line_slope_single_candle_is_zero() {
    assert_eq!(line_slope(&[close(5.0)], 1.0), Some(0.0));
}

#[test]
fn line_slope_empty_is_none() {
    assert_eq!(line_slope(&[], 3.0), None);
}

proptest! {
    #[test]
    fn fails_whenever_period_exceeds_len(
        data in proptest::collection::vec(-1e3f64..1e3, 0..50),
        extra in 1usize..20,
    ) {
        let period = data.len() + extra;
        let is_insufficient = matches!(
            sma_slope(&data, period),
            Err(WickError::InsufficientData { .. })
        );
        prop_assert!(is_insufficient);
    }

    #[test]
    fn linear_series_recovers_negated_step(
        start in -100i32..100,
        step in -10i32..10,
        period in 2usize..30,
    ) {
        let data: Vec<f64> = (0..period).map(|i| f64::from(start) + f64::from(step) * i as f64).collect();
        let s = sma_slope(&data, period).unwrap();
        prop_assert!((s + f64::from(step)).abs() < 1e-9);
    }
}
