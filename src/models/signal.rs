//! Signal output model shared by every strategy variant.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::indicators::IndicatorSnapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalAction {
    Buy,
    Sell,
    Hold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

/// Which strategy produced (or was supposed to produce) a signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyType {
    Traditional,
    AiLearning,
    Hybrid,
    TraditionalFallback,
}

/// One scored contribution to a signal's rationale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalReason {
    pub description: String,
    pub weight: f64,
}

/// Audit trail attached to every signal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalMetadata {
    pub strategy_type: StrategyType,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_indicators: Option<IndicatorSnapshot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_strategy: Option<StrategyType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selection_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volatility: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_ratio: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advisory_factors: Option<Value>,
    /// Scored contributions behind the decision, in evaluation order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reasons: Vec<SignalReason>,
}

impl SignalMetadata {
    pub fn new(strategy_type: StrategyType) -> Self {
        Self {
            strategy_type,
            timestamp: Utc::now(),
            source_indicators: None,
            selected_strategy: None,
            selection_reason: None,
            volatility: None,
            volume_ratio: None,
            advisory_factors: None,
            reasons: Vec::new(),
        }
    }

    pub fn with_indicators(mut self, indicators: IndicatorSnapshot) -> Self {
        self.source_indicators = Some(indicators);
        self
    }

    pub fn with_reasons(mut self, reasons: Vec<SignalReason>) -> Self {
        self.reasons = reasons;
        self
    }
}

/// A discrete trading decision for one evaluation cycle. Immutable after
/// creation; consumers outside the engine only ever read it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Signal {
    pub symbol: String,
    pub action: SignalAction,
    /// Bounded [0, 1] strength of conviction, not a probability.
    pub confidence: f64,
    pub reasoning: String,
    pub risk_level: RiskLevel,
    /// Fraction of available capital to deploy, in (0, 1].
    pub position_size: f64,
    pub metadata: SignalMetadata,
}
