//! Unit tests for the Bollinger Bands indicator

use tactix::indicators::volatility::bollinger::{compute_bollinger, compute_bollinger_default};
use tactix::models::indicators::BollingerSignal;

const EPS: f64 = 1e-9;

#[test]
fn golden_value_regression() {
    // Known 20-point series with default parameters; values verified against
    // an independent calculation.
    let prices = [
        100.0, 102.0, 101.0, 105.0, 107.0, 103.0, 110.0, 108.0, 112.0, 115.0, 111.0, 117.0,
        120.0, 118.0, 122.0, 125.0, 121.0, 128.0, 130.0, 127.0,
    ];
    let bands = compute_bollinger_default(&prices).unwrap();
    assert!((bands.sma - 114.1).abs() < EPS);
    assert!((bands.upper_band - 132.76440462484672).abs() < 1e-9);
    assert!((bands.lower_band - 95.43559537515327).abs() < 1e-9);
    assert!((bands.band_position - 0.8455775916588055).abs() < 1e-9);
    assert_eq!(bands.signal, BollingerSignal::NearUpper);
}

#[test]
fn insufficient_history_yields_none() {
    let prices = vec![100.0; 19];
    assert!(compute_bollinger_default(&prices).is_none());
}

#[test]
fn zero_volatility_holds_position_at_middle() {
    let prices = vec![100.0; 20];
    let bands = compute_bollinger_default(&prices).unwrap();
    assert_eq!(bands.upper_band, bands.lower_band);
    assert_eq!(bands.band_position, 0.5);
    assert_eq!(bands.signal, BollingerSignal::Middle);
}

#[test]
fn band_position_is_clamped() {
    // A final spike lands far above the upper band; the position must still
    // be within [0, 1].
    let mut prices = vec![100.0; 19];
    prices.push(200.0);
    let bands = compute_bollinger_default(&prices).unwrap();
    assert_eq!(bands.band_position, 1.0);
    assert_eq!(bands.signal, BollingerSignal::NearUpper);
}

#[test]
fn near_lower_classification() {
    let mut prices = vec![100.0; 19];
    prices.push(50.0);
    let bands = compute_bollinger_default(&prices).unwrap();
    assert_eq!(bands.band_position, 0.0);
    assert_eq!(bands.signal, BollingerSignal::NearLower);
}

#[test]
fn custom_period_uses_latest_window() {
    let prices: Vec<f64> = (0..30).map(|i| 100.0 + i as f64).collect();
    let bands = compute_bollinger(&prices, 10, 2.0).unwrap();
    // SMA of the last 10 values 120..=129.
    assert!((bands.sma - 124.5).abs() < EPS);
}
