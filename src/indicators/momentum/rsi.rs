//! RSI (Relative Strength Index) indicator

use crate::models::indicators::{RsiPoint, RsiSignal};

/// Calculate Wilder's smoothed RSI over a price series.
///
/// RSI = 100 - (100 / (1 + RS))
/// RS = Average Gain / Average Loss
///
/// The seed averages cover the first `period` deltas; every later point uses
/// Wilder's smoothing `avg = (avg * (period - 1) + new) / period`. Returns the
/// full aligned series, where each point's `index` refers back into `prices`.
/// When the average loss is zero, RSI is defined as 100.
pub fn compute_rsi(prices: &[f64], period: usize) -> Option<Vec<RsiPoint>> {
    if period == 0 || prices.len() < period + 1 {
        return None;
    }

    let mut gains = Vec::with_capacity(prices.len() - 1);
    let mut losses = Vec::with_capacity(prices.len() - 1);
    for pair in prices.windows(2) {
        let change = pair[1] - pair[0];
        if change > 0.0 {
            gains.push(change);
            losses.push(0.0);
        } else {
            gains.push(0.0);
            losses.push(change.abs());
        }
    }

    let mut avg_gain: f64 = gains[..period].iter().sum::<f64>() / period as f64;
    let mut avg_loss: f64 = losses[..period].iter().sum::<f64>() / period as f64;

    let mut series = Vec::with_capacity(prices.len() - period);
    series.push(point(period, avg_gain, avg_loss));

    for i in period..gains.len() {
        avg_gain = (avg_gain * (period as f64 - 1.0) + gains[i]) / period as f64;
        avg_loss = (avg_loss * (period as f64 - 1.0) + losses[i]) / period as f64;
        series.push(point(i + 1, avg_gain, avg_loss));
    }

    Some(series)
}

/// Calculate RSI with default period (14)
pub fn compute_rsi_default(prices: &[f64]) -> Option<Vec<RsiPoint>> {
    compute_rsi(prices, 14)
}

fn point(index: usize, avg_gain: f64, avg_loss: f64) -> RsiPoint {
    let value = if avg_loss == 0.0 {
        100.0
    } else {
        let rs = avg_gain / avg_loss;
        100.0 - (100.0 / (1.0 + rs))
    };
    RsiPoint {
        index,
        value,
        signal: RsiSignal::from_value(value),
    }
}
