//! Hybrid strategy: adaptive selection between traditional and advisory.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::advisory::AdvisoryPort;
use crate::common::math;
use crate::config::Config;
use crate::models::indicators::IndicatorSnapshot;
use crate::models::market::MarketSnapshot;
use crate::models::signal::{Signal, StrategyType};
use crate::performance::PerformanceTracker;
use crate::strategies::{AiLearningStrategy, SignalStrategy, TraditionalStrategy};

/// Trailing sample count for the volatility metric.
const VOLATILITY_LOOKBACK: usize = 20;
/// Trailing sample count for the mean-volume baseline.
const VOLUME_LOOKBACK: usize = 10;

/// Market-condition metrics the selector decides on. Recorded in the signal
/// metadata so a selection is auditable from market history alone.
#[derive(Debug, Clone, Copy)]
pub struct MarketConditions {
    /// Population standard deviation of simple returns over the trailing
    /// [`VOLATILITY_LOOKBACK`] samples.
    pub volatility: f64,
    /// Latest volume relative to the mean of the last [`VOLUME_LOOKBACK`].
    pub volume_ratio: f64,
}

/// Compute the selector's two metrics from a snapshot.
pub fn assess_conditions(snapshot: &MarketSnapshot) -> MarketConditions {
    let price_start = snapshot.prices.len().saturating_sub(VOLATILITY_LOOKBACK);
    let returns = math::simple_returns(&snapshot.prices[price_start..]);
    let volatility = math::std_dev(&returns, returns.len()).unwrap_or(0.0);

    let volume_start = snapshot.volumes.len().saturating_sub(VOLUME_LOOKBACK);
    let mean_volume = math::mean(&snapshot.volumes[volume_start..]).unwrap_or(0.0);
    let volume_ratio = if mean_volume > 0.0 {
        snapshot.latest_volume() / mean_volume
    } else {
        0.0
    };

    MarketConditions {
        volatility,
        volume_ratio,
    }
}

/// Chooses per cycle which path to run, from volatility, volume anomaly, and
/// the advisory path's historical win rate.
pub struct HybridStrategy {
    traditional: TraditionalStrategy,
    ai_learning: AiLearningStrategy,
    tracker: Arc<PerformanceTracker>,
    config: Config,
}

impl HybridStrategy {
    pub fn new(
        port: Arc<dyn AdvisoryPort>,
        tracker: Arc<PerformanceTracker>,
        config: Config,
    ) -> Self {
        Self {
            traditional: TraditionalStrategy::new(config.clone()),
            ai_learning: AiLearningStrategy::new(port, config.clone()),
            tracker,
            config,
        }
    }

    /// Selection policy, evaluated in order. Rule 1 short-circuits the rest.
    async fn select(&self, conditions: &MarketConditions) -> (StrategyType, String) {
        if conditions.volatility > self.config.volatility_threshold {
            return (
                StrategyType::Traditional,
                format!(
                    "high volatility ({:.4}) favors stable rule-based signal",
                    conditions.volatility
                ),
            );
        }

        if conditions.volume_ratio > self.config.volume_ratio_threshold {
            return (
                StrategyType::AiLearning,
                format!(
                    "volume anomaly ({:.2}x average) favors pattern analysis",
                    conditions.volume_ratio
                ),
            );
        }

        let advisory_stats = self
            .tracker
            .stats(Some(StrategyType::AiLearning), self.config.stats_window)
            .await;
        if advisory_stats.total_trades > 0
            && advisory_stats.win_rate > self.config.advisory_win_rate_threshold
        {
            return (
                StrategyType::AiLearning,
                format!(
                    "advisory win rate {:.2} over {} trades exceeds threshold",
                    advisory_stats.win_rate, advisory_stats.total_trades
                ),
            );
        }

        (
            StrategyType::Traditional,
            "default selection: no condition favors advisory".to_string(),
        )
    }
}

#[async_trait]
impl SignalStrategy for HybridStrategy {
    fn kind(&self) -> StrategyType {
        StrategyType::Hybrid
    }

    async fn evaluate(
        &self,
        snapshot: &MarketSnapshot,
        indicators: Option<&IndicatorSnapshot>,
    ) -> Signal {
        let conditions = assess_conditions(snapshot);
        let (selected, selection_reason) = self.select(&conditions).await;

        debug!(
            symbol = %snapshot.symbol,
            selected = ?selected,
            volatility = conditions.volatility,
            volume_ratio = conditions.volume_ratio,
            "hybrid selection"
        );

        let mut signal = match selected {
            StrategyType::AiLearning => self.ai_learning.evaluate(snapshot, indicators).await,
            _ => self.traditional.generate(snapshot, indicators),
        };

        // A fallback tag from the advisory path stays visible; everything
        // else is reported as hybrid with the chosen path in the metadata.
        if signal.metadata.strategy_type != StrategyType::TraditionalFallback {
            signal.metadata.strategy_type = StrategyType::Hybrid;
        }
        signal.metadata.selected_strategy = Some(selected);
        signal.metadata.selection_reason = Some(selection_reason);
        signal.metadata.volatility = Some(conditions.volatility);
        signal.metadata.volume_ratio = Some(conditions.volume_ratio);
        signal
    }
}
