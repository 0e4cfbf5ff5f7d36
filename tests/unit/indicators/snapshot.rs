//! Unit tests for snapshot assembly and configured RSI thresholds

use tactix::config::Config;
use tactix::indicators::compute_snapshot;
use tactix::models::indicators::RsiSignal;

fn rising_tape(len: usize) -> Vec<f64> {
    (0..len).map(|i| 100.0 + i as f64).collect()
}

#[test]
fn default_thresholds_flag_a_rising_tape_overbought() {
    let snapshot = compute_snapshot(&rising_tape(60), &Config::default()).unwrap();
    assert_eq!(snapshot.rsi.signal, RsiSignal::Overbought);
}

#[test]
fn configured_overbought_threshold_is_honored() {
    // RSI tops out at 100, so a threshold above that can never be crossed.
    let config = Config {
        rsi_overbought: 150.0,
        ..Config::default()
    };
    let snapshot = compute_snapshot(&rising_tape(60), &config).unwrap();
    assert_eq!(snapshot.rsi.signal, RsiSignal::Neutral);
}

#[test]
fn configured_oversold_threshold_is_honored() {
    let prices: Vec<f64> = (0..60).map(|i| 200.0 - i as f64).collect();
    let config = Config {
        rsi_oversold: -1.0,
        ..Config::default()
    };
    let snapshot = compute_snapshot(&prices, &config).unwrap();
    assert_eq!(snapshot.rsi.signal, RsiSignal::Neutral);
}

#[test]
fn short_series_yields_no_snapshot() {
    assert!(compute_snapshot(&rising_tape(10), &Config::default()).is_none());
}
