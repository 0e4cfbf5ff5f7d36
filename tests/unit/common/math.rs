//! Unit tests for shared math helpers

use tactix::common::math;

#[test]
fn sma_uses_most_recent_window() {
    let values = [1.0, 2.0, 3.0, 4.0, 5.0];
    assert_eq!(math::sma(&values, 2), Some(4.5));
    assert_eq!(math::sma(&values, 5), Some(3.0));
}

#[test]
fn sma_insufficient_data() {
    assert_eq!(math::sma(&[1.0, 2.0], 3), None);
    assert_eq!(math::sma(&[1.0], 0), None);
}

#[test]
fn std_dev_is_population_not_sample() {
    // Population σ of [2, 4, 4, 4, 5, 5, 7, 9] is exactly 2.
    let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
    let sigma = math::std_dev(&values, 8).unwrap();
    assert!((sigma - 2.0).abs() < 1e-12);
}

#[test]
fn std_dev_zero_for_constant_series() {
    let values = [3.0; 10];
    assert_eq!(math::std_dev(&values, 10), Some(0.0));
}

#[test]
fn ema_series_seeded_with_sma() {
    let values = [1.0, 2.0, 3.0, 4.0];
    let series = math::ema_series(&values, 2).unwrap();
    // Seed = SMA(1, 2) = 1.5; multiplier = 2/3.
    assert!((series[0] - 1.5).abs() < 1e-12);
    assert!((series[1] - (1.5 + (3.0 - 1.5) * (2.0 / 3.0))).abs() < 1e-12);
    assert_eq!(series.len(), 3);
}

#[test]
fn ema_series_insufficient_data() {
    assert!(math::ema_series(&[1.0, 2.0], 3).is_none());
}

#[test]
fn simple_returns_values() {
    let returns = math::simple_returns(&[100.0, 110.0, 99.0]);
    assert_eq!(returns.len(), 2);
    assert!((returns[0] - 0.1).abs() < 1e-12);
    assert!((returns[1] - (-0.1)).abs() < 1e-12);
}
