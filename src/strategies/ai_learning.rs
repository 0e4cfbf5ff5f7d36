//! Advisory-augmented strategy: traditional signal plus external opinion.

use std::sync::Arc;

use async_trait::async_trait;

use crate::advisory::{AdvisoryAdapter, AdvisoryPort};
use crate::config::Config;
use crate::models::indicators::IndicatorSnapshot;
use crate::models::market::MarketSnapshot;
use crate::models::signal::{Signal, StrategyType};
use crate::strategies::{SignalStrategy, TraditionalStrategy};

/// Always computes the traditional signal first so a fallback exists, then
/// lets the advisory adapter blend in the external opinion.
pub struct AiLearningStrategy {
    traditional: TraditionalStrategy,
    adapter: AdvisoryAdapter,
}

impl AiLearningStrategy {
    pub fn new(port: Arc<dyn AdvisoryPort>, config: Config) -> Self {
        Self {
            traditional: TraditionalStrategy::new(config.clone()),
            adapter: AdvisoryAdapter::new(port, config),
        }
    }
}

#[async_trait]
impl SignalStrategy for AiLearningStrategy {
    fn kind(&self) -> StrategyType {
        StrategyType::AiLearning
    }

    async fn evaluate(
        &self,
        snapshot: &MarketSnapshot,
        indicators: Option<&IndicatorSnapshot>,
    ) -> Signal {
        let traditional = self.traditional.generate(snapshot, indicators);

        // Without a full indicator set there is nothing for the advisory
        // service to weigh in on; surface the insufficient-data hold as is.
        let Some(ind) = indicators else {
            return traditional;
        };

        self.adapter.augment(snapshot, ind, &traditional).await
    }
}
