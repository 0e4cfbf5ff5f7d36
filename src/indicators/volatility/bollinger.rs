//! Bollinger Bands indicator

use crate::common::math;
use crate::models::indicators::{BollingerSignal, BollingerSummary};

/// Calculate Bollinger Bands over the latest window.
///
/// Middle Band = SMA(period)
/// Upper Band = Middle + (std_dev * population σ)
/// Lower Band = Middle - (std_dev * population σ)
///
/// `band_position` locates the latest price between the bands, clamped to
/// [0, 1]. When the bands collapse (zero volatility) the position is held at
/// 0.5 with a `middle` signal instead of dividing by zero.
pub fn compute_bollinger(prices: &[f64], period: usize, std_dev: f64) -> Option<BollingerSummary> {
    if period == 0 || prices.len() < period {
        return None;
    }

    let sma = math::sma(prices, period)?;
    let sigma = math::std_dev(prices, period)?;

    let upper_band = sma + std_dev * sigma;
    let lower_band = sma - std_dev * sigma;
    let price = *prices.last()?;

    let band_position = if upper_band == lower_band {
        0.5
    } else {
        ((price - lower_band) / (upper_band - lower_band)).clamp(0.0, 1.0)
    };

    let signal = if band_position > 0.8 {
        BollingerSignal::NearUpper
    } else if band_position < 0.2 {
        BollingerSignal::NearLower
    } else {
        BollingerSignal::Middle
    };

    Some(BollingerSummary {
        sma,
        upper_band,
        lower_band,
        band_position,
        signal,
    })
}

/// Calculate Bollinger Bands with default parameters (20 SMA, 2σ)
pub fn compute_bollinger_default(prices: &[f64]) -> Option<BollingerSummary> {
    compute_bollinger(prices, 20, 2.0)
}
