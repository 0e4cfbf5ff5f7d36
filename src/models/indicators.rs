//! Computed indicator values for one evaluation cycle.
//!
//! An `IndicatorSnapshot` is derived from the market snapshot, never mutated
//! in place; each cycle replaces it wholesale.

use serde::{Deserialize, Serialize};

/// RSI zone classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RsiSignal {
    Overbought,
    Oversold,
    Neutral,
}

impl RsiSignal {
    /// Classify with the standard 70/30 thresholds.
    pub fn from_value(value: f64) -> Self {
        Self::from_value_with(value, 70.0, 30.0)
    }

    /// Classify against configured overbought/oversold thresholds.
    pub fn from_value_with(value: f64, overbought: f64, oversold: f64) -> Self {
        if value > overbought {
            Self::Overbought
        } else if value < oversold {
            Self::Oversold
        } else {
            Self::Neutral
        }
    }
}

/// One point of the aligned RSI series. `index` refers back into the price
/// series the RSI was computed from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RsiPoint {
    pub index: usize,
    pub value: f64,
    pub signal: RsiSignal,
}

/// Latest RSI reading.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RsiSummary {
    pub value: f64,
    pub signal: RsiSignal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MacdTrend {
    Bullish,
    Bearish,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MacdMomentum {
    Positive,
    Negative,
}

/// Latest MACD reading.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MacdSummary {
    pub macd_line: f64,
    pub signal_line: f64,
    pub histogram: f64,
    pub trend: MacdTrend,
    pub momentum: MacdMomentum,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BollingerSignal {
    NearUpper,
    NearLower,
    Middle,
}

/// Latest Bollinger Bands reading.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BollingerSummary {
    pub sma: f64,
    pub upper_band: f64,
    pub lower_band: f64,
    /// Where the latest price sits between the bands, clamped to [0, 1].
    pub band_position: f64,
    pub signal: BollingerSignal,
}

/// All indicator values for the current cycle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct IndicatorSnapshot {
    pub rsi: RsiSummary,
    pub macd: MacdSummary,
    pub bollinger: BollingerSummary,
}
