//! Unit tests for the MACD indicator

use tactix::indicators::momentum::macd::{compute_macd, compute_macd_default};
use tactix::models::indicators::{MacdMomentum, MacdTrend};

fn exponential_uptrend(len: usize) -> Vec<f64> {
    (0..len).map(|i| 100.0 * 1.01f64.powi(i as i32)).collect()
}

fn exponential_downtrend(len: usize) -> Vec<f64> {
    (0..len).map(|i| 100.0 * 0.99f64.powi(i as i32)).collect()
}

#[test]
fn requires_slow_plus_signal_prices() {
    // Defaults are 12/26/9, so 35 prices is the minimum.
    assert!(compute_macd_default(&exponential_uptrend(34)).is_none());
    assert!(compute_macd_default(&exponential_uptrend(35)).is_some());
}

#[test]
fn rejects_degenerate_periods() {
    let prices = exponential_uptrend(50);
    assert!(compute_macd(&prices, 26, 12, 9).is_none());
    assert!(compute_macd(&prices, 12, 12, 9).is_none());
    assert!(compute_macd(&prices, 0, 26, 9).is_none());
    assert!(compute_macd(&prices, 12, 26, 0).is_none());
}

#[test]
fn accelerating_uptrend_is_bullish_with_positive_momentum() {
    let summary = compute_macd_default(&exponential_uptrend(60)).unwrap();
    assert!(summary.macd_line > summary.signal_line);
    assert_eq!(summary.trend, MacdTrend::Bullish);
    assert!(summary.histogram > 0.0);
    assert_eq!(summary.momentum, MacdMomentum::Positive);
}

#[test]
fn accelerating_downtrend_is_bearish_with_negative_momentum() {
    let summary = compute_macd_default(&exponential_downtrend(60)).unwrap();
    assert!(summary.macd_line < summary.signal_line);
    assert_eq!(summary.trend, MacdTrend::Bearish);
    assert!(summary.histogram < 0.0);
    assert_eq!(summary.momentum, MacdMomentum::Negative);
}

#[test]
fn histogram_is_macd_minus_signal() {
    let summary = compute_macd_default(&exponential_uptrend(60)).unwrap();
    let expected = summary.macd_line - summary.signal_line;
    assert!((summary.histogram - expected).abs() < 1e-12);
}

#[test]
fn flat_series_yields_zero_macd() {
    let prices = vec![100.0; 60];
    let summary = compute_macd_default(&prices).unwrap();
    assert!(summary.macd_line.abs() < 1e-9);
    assert!(summary.signal_line.abs() < 1e-9);
    assert!(summary.histogram.abs() < 1e-9);
}
