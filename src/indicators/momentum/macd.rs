//! MACD (Moving Average Convergence Divergence) indicator

use crate::common::math;
use crate::models::indicators::{MacdMomentum, MacdSummary, MacdTrend};

/// Calculate the latest MACD reading.
///
/// MACD = EMA(fast) - EMA(slow)
/// Signal = EMA(signal_period) of the MACD series
/// Histogram = MACD - Signal
///
/// Needs `prices.len() >= slow_period + signal_period` so the signal-line EMA
/// has a full seed window.
pub fn compute_macd(
    prices: &[f64],
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
) -> Option<MacdSummary> {
    if fast_period == 0 || fast_period >= slow_period || signal_period == 0 {
        return None;
    }
    if prices.len() < slow_period + signal_period {
        return None;
    }

    let fast_ema = math::ema_series(prices, fast_period)?;
    let slow_ema = math::ema_series(prices, slow_period)?;

    // Both series run to the end of `prices`; align them from the point the
    // slow EMA starts.
    let offset = slow_period - fast_period;
    let macd_series: Vec<f64> = slow_ema
        .iter()
        .enumerate()
        .map(|(i, slow)| fast_ema[i + offset] - slow)
        .collect();

    let signal_series = math::ema_series(&macd_series, signal_period)?;

    let macd_line = *macd_series.last()?;
    let signal_line = *signal_series.last()?;
    let histogram = macd_line - signal_line;

    Some(MacdSummary {
        macd_line,
        signal_line,
        histogram,
        trend: if macd_line > signal_line {
            MacdTrend::Bullish
        } else {
            MacdTrend::Bearish
        },
        momentum: if histogram > 0.0 {
            MacdMomentum::Positive
        } else {
            MacdMomentum::Negative
        },
    })
}

/// Calculate MACD with default periods (12, 26, 9)
pub fn compute_macd_default(prices: &[f64]) -> Option<MacdSummary> {
    compute_macd(prices, 12, 26, 9)
}
