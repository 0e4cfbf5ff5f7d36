//! Assembles the per-cycle indicator snapshot.

use crate::config::Config;
use crate::indicators::momentum::{macd, rsi};
use crate::indicators::volatility::bollinger;
use crate::models::indicators::{IndicatorSnapshot, RsiSignal, RsiSummary};

/// Compute all indicators for one cycle. Returns `None` if any indicator
/// lacks sufficient history; callers must treat that as "insufficient data"
/// rather than scoring a partial set.
pub fn compute_snapshot(prices: &[f64], config: &Config) -> Option<IndicatorSnapshot> {
    let rsi_series = rsi::compute_rsi(prices, config.rsi_period)?;
    let latest_rsi = rsi_series.last()?;

    let macd = macd::compute_macd(
        prices,
        config.macd_fast,
        config.macd_slow,
        config.macd_signal,
    )?;

    let bollinger =
        bollinger::compute_bollinger(prices, config.bollinger_period, config.bollinger_std_dev)?;

    Some(IndicatorSnapshot {
        rsi: RsiSummary {
            value: latest_rsi.value,
            // Reclassified here so configured thresholds apply; the raw
            // series keeps the standard 70/30 zones.
            signal: RsiSignal::from_value_with(
                latest_rsi.value,
                config.rsi_overbought,
                config.rsi_oversold,
            ),
        },
        macd,
        bollinger,
    })
}
