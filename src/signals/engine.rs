//! Main signal evaluation engine.
//!
//! One engine owns one strategy variant, the performance tracker, and the
//! advisory port handed in at construction. `evaluate` only errors on caller
//! contract violations; every market or advisory condition resolves to a
//! valid signal.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info};

use crate::advisory::AdvisoryPort;
use crate::config::Config;
use crate::indicators::compute_snapshot;
use crate::models::market::MarketSnapshot;
use crate::models::performance::{PerformanceRecord, PerformanceStats};
use crate::models::signal::{Signal, StrategyType};
use crate::performance::PerformanceTracker;
use crate::strategies::{build_strategy, SignalStrategy};

/// Contract violations by the caller. These are the only errors `evaluate`
/// surfaces; insufficient history and advisory failures become hold or
/// fallback signals instead.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("snapshot contains no prices")]
    EmptyPriceSeries,
    #[error("price/volume series length mismatch: {prices} prices vs {volumes} volumes")]
    SeriesLengthMismatch { prices: usize, volumes: usize },
    #[error("snapshot contains a non-positive or non-finite price: {0}")]
    NonPositivePrice(f64),
    #[error("snapshot contains a negative or non-finite volume")]
    NegativeVolume,
}

pub struct SignalEngine {
    config: Config,
    strategy: Box<dyn SignalStrategy>,
    tracker: Arc<PerformanceTracker>,
}

impl SignalEngine {
    /// Build an engine running the given strategy variant. The advisory port
    /// is caller-owned; pass the same client to several engines if they
    /// should share a connection pool.
    pub fn new(mode: StrategyType, port: Arc<dyn AdvisoryPort>, config: Config) -> Self {
        let tracker = Arc::new(PerformanceTracker::new(config.history_capacity));
        let strategy = build_strategy(mode, port, Arc::clone(&tracker), &config);
        Self {
            config,
            strategy,
            tracker,
        }
    }

    /// Evaluate one market snapshot into a trading signal.
    pub async fn evaluate(&self, snapshot: &MarketSnapshot) -> Result<Signal, EngineError> {
        snapshot.validate()?;

        let indicators = if snapshot.prices.len() < self.config.min_samples() {
            debug!(
                required = self.config.min_samples(),
                available = snapshot.prices.len(),
                "not enough history for the full indicator set"
            );
            None
        } else {
            compute_snapshot(&snapshot.prices, &self.config)
        };
        let signal = self.strategy.evaluate(snapshot, indicators.as_ref()).await;

        info!(
            symbol = %signal.symbol,
            action = ?signal.action,
            confidence = signal.confidence,
            strategy = ?signal.metadata.strategy_type,
            "signal evaluated"
        );
        Ok(signal)
    }

    /// Record a realized outcome reported by the execution collaborator.
    pub async fn record_outcome(&self, record: PerformanceRecord) {
        self.tracker.record(record).await;
    }

    /// Rolling statistics over the configured window, optionally restricted
    /// to one strategy type.
    pub async fn stats(&self, strategy_type: Option<StrategyType>) -> PerformanceStats {
        self.tracker.stats(strategy_type, self.config.stats_window).await
    }

    /// Which strategy variant this engine runs.
    pub fn strategy_kind(&self) -> StrategyType {
        self.strategy.kind()
    }
}
