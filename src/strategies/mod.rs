//! Strategy variants behind a single evaluation contract.
//!
//! One implementation per strategy type, selected through [`build_strategy`]
//! instead of string branching at call sites.

pub mod ai_learning;
pub mod hybrid;
pub mod traditional;

use std::sync::Arc;

use async_trait::async_trait;

use crate::advisory::AdvisoryPort;
use crate::config::Config;
use crate::models::indicators::IndicatorSnapshot;
use crate::models::market::MarketSnapshot;
use crate::models::signal::{Signal, StrategyType};
use crate::performance::PerformanceTracker;

pub use ai_learning::AiLearningStrategy;
pub use hybrid::HybridStrategy;
pub use traditional::TraditionalStrategy;

/// Common evaluation contract shared by every strategy variant.
///
/// `indicators` is `None` when the snapshot is too short for the full
/// indicator set; implementations must degrade to an explanatory hold.
#[async_trait]
pub trait SignalStrategy: Send + Sync {
    fn kind(&self) -> StrategyType;

    async fn evaluate(
        &self,
        snapshot: &MarketSnapshot,
        indicators: Option<&IndicatorSnapshot>,
    ) -> Signal;
}

/// Construct the strategy for a given type.
pub fn build_strategy(
    kind: StrategyType,
    port: Arc<dyn AdvisoryPort>,
    tracker: Arc<PerformanceTracker>,
    config: &Config,
) -> Box<dyn SignalStrategy> {
    match kind {
        StrategyType::Traditional | StrategyType::TraditionalFallback => {
            Box::new(TraditionalStrategy::new(config.clone()))
        }
        StrategyType::AiLearning => Box::new(AiLearningStrategy::new(port, config.clone())),
        StrategyType::Hybrid => Box::new(HybridStrategy::new(port, tracker, config.clone())),
    }
}
