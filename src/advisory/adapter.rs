//! Wraps the advisory port behind a contract that degrades gracefully.

use std::sync::Arc;

use backon::{ExponentialBuilder, Retryable};
use tracing::{debug, warn};

use crate::advisory::{AdvisoryError, AdvisoryPort, AdvisoryRequest, AdvisoryResponse};
use crate::config::Config;
use crate::models::indicators::IndicatorSnapshot;
use crate::models::market::MarketSnapshot;
use crate::models::signal::{RiskLevel, Signal, SignalMetadata, StrategyType};

/// Hard bound on how far the external opinion may move local confidence.
const MAX_CONFIDENCE_ADJUSTMENT: f64 = 0.3;
const HIGH_RISK_SCALE: f64 = 0.5;
const LOW_RISK_SCALE: f64 = 1.2;

/// Smallest position the blended signal may recommend. Keeps a degenerate
/// hint from producing a zero or negative position size.
const MIN_POSITION_SIZE: f64 = 0.05;

/// How many trailing samples the advisory request carries.
const REQUEST_TAIL: usize = 50;

/// Augments a traditional signal with the external advisory opinion.
///
/// Never fails: exhausted retries, timeouts, and malformed responses all
/// resolve to the traditional signal marked as a fallback.
pub struct AdvisoryAdapter {
    port: Arc<dyn AdvisoryPort>,
    config: Config,
}

impl AdvisoryAdapter {
    pub fn new(port: Arc<dyn AdvisoryPort>, config: Config) -> Self {
        Self { port, config }
    }

    /// Consult the advisory service and blend its opinion into the
    /// traditional signal. Transient failures retry with exponential backoff
    /// (base delay doubling, bounded attempts); anything unrecoverable
    /// returns the traditional signal tagged `traditional_fallback`.
    pub async fn augment(
        &self,
        snapshot: &MarketSnapshot,
        indicators: &IndicatorSnapshot,
        traditional: &Signal,
    ) -> Signal {
        let request = self.build_request(snapshot, indicators, traditional);

        let backoff = ExponentialBuilder::default()
            .with_min_delay(self.config.advisory_retry_base_delay)
            .with_max_times(self.config.advisory_max_attempts.saturating_sub(1));

        let result = (|| async { self.call_once(&request).await })
            .retry(backoff)
            .when(AdvisoryError::is_transient)
            .notify(|err: &AdvisoryError, delay| {
                warn!(error = %err, retry_in_ms = delay.as_millis(), "advisory call failed, retrying");
            })
            .await;

        match result {
            Ok(response) => {
                debug!(symbol = %snapshot.symbol, "advisory opinion received");
                self.blend(snapshot, indicators, traditional, response)
            }
            Err(err) => {
                warn!(symbol = %snapshot.symbol, error = %err, "advisory unavailable, falling back");
                fallback(traditional, &err)
            }
        }
    }

    async fn call_once(&self, request: &AdvisoryRequest) -> Result<AdvisoryResponse, AdvisoryError> {
        match tokio::time::timeout(self.config.advisory_timeout, self.port.analyze(request)).await {
            Ok(result) => result,
            Err(_) => Err(AdvisoryError::Timeout(self.config.advisory_timeout)),
        }
    }

    fn build_request(
        &self,
        snapshot: &MarketSnapshot,
        indicators: &IndicatorSnapshot,
        traditional: &Signal,
    ) -> AdvisoryRequest {
        let tail_start = snapshot.prices.len().saturating_sub(REQUEST_TAIL);
        AdvisoryRequest {
            symbol: snapshot.symbol.clone(),
            latest_price: snapshot.latest_price(),
            latest_volume: snapshot.latest_volume(),
            recent_prices: snapshot.prices[tail_start..].to_vec(),
            recent_volumes: snapshot.volumes[tail_start..].to_vec(),
            indicators: *indicators,
            traditional_action: traditional.action,
            traditional_confidence: traditional.confidence,
            risk_tolerance: self.config.risk_tolerance,
        }
    }

    fn blend(
        &self,
        snapshot: &MarketSnapshot,
        indicators: &IndicatorSnapshot,
        traditional: &Signal,
        response: AdvisoryResponse,
    ) -> Signal {
        let adjustment = response
            .confidence_adjustment
            .clamp(-MAX_CONFIDENCE_ADJUSTMENT, MAX_CONFIDENCE_ADJUSTMENT);
        let confidence = (traditional.confidence + adjustment)
            .clamp(self.config.confidence_floor, self.config.confidence_ceiling);

        // A hint that is zero, negative, or not finite is treated as absent.
        let hint = response
            .position_size_hint
            .filter(|h| h.is_finite() && *h > 0.0)
            .unwrap_or(self.config.base_position_size);
        let scale = match response.risk_level {
            RiskLevel::High => HIGH_RISK_SCALE,
            RiskLevel::Low => LOW_RISK_SCALE,
            RiskLevel::Medium => 1.0,
        };
        let position_size = (hint * scale).clamp(MIN_POSITION_SIZE, 1.0);

        let mut metadata =
            SignalMetadata::new(StrategyType::AiLearning).with_indicators(*indicators);
        metadata.advisory_factors = response.additional_factors;

        Signal {
            symbol: snapshot.symbol.clone(),
            action: response.action,
            confidence,
            reasoning: format!("{} | advisory: {}", traditional.reasoning, response.rationale),
            risk_level: response.risk_level,
            position_size,
            metadata,
        }
    }
}

/// Traditional signal, re-tagged so callers can tell "the system concluded
/// hold" apart from "the advisory path was unreachable".
fn fallback(traditional: &Signal, err: &AdvisoryError) -> Signal {
    let mut signal = traditional.clone();
    signal.metadata.strategy_type = StrategyType::TraditionalFallback;
    signal.reasoning = format!(
        "{} [advisory unavailable: {}; using traditional signal]",
        signal.reasoning, err
    );
    signal
}
