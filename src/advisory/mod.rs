//! External advisory port: contract, error taxonomy, and adapters.
//!
//! The engine never talks to the analysis service directly. It goes through
//! the [`AdvisoryPort`] trait so callers own the client lifecycle, and
//! through [`adapter::AdvisoryAdapter`] so every failure mode degrades to a
//! valid traditional signal instead of an error.

pub mod adapter;
pub mod http;

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::models::indicators::IndicatorSnapshot;
use crate::models::signal::{RiskLevel, SignalAction};

pub use adapter::AdvisoryAdapter;
pub use http::HttpAdvisoryClient;

/// Failures the advisory port can signal. Transient variants are retried
/// with backoff; permanent variants fall back immediately.
#[derive(Debug, Error)]
pub enum AdvisoryError {
    #[error("advisory transport error: {0}")]
    Transport(String),
    #[error("advisory service unavailable: status {0}")]
    ServiceUnavailable(u16),
    #[error("advisory request timed out after {0:?}")]
    Timeout(Duration),
    #[error("advisory rejected request: status {0}")]
    Rejected(u16),
    #[error("advisory response failed validation: {0}")]
    Malformed(String),
    #[error("advisory configuration invalid: {0}")]
    Configuration(String),
}

impl AdvisoryError {
    /// Transient failures (network, 5xx, rate limiting, timeout) are worth
    /// retrying; everything else is not.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::Transport(_) | Self::ServiceUnavailable(_) | Self::Timeout(_)
        )
    }
}

/// Market context handed to the advisory service alongside the traditional
/// signal it is asked to second-guess.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvisoryRequest {
    pub symbol: String,
    pub latest_price: f64,
    pub latest_volume: f64,
    pub recent_prices: Vec<f64>,
    pub recent_volumes: Vec<f64>,
    pub indicators: IndicatorSnapshot,
    pub traditional_action: SignalAction,
    pub traditional_confidence: f64,
    pub risk_tolerance: RiskLevel,
}

/// Structured opinion returned by the advisory service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvisoryResponse {
    pub action: SignalAction,
    /// Bounded nudge applied to the traditional confidence, in [-0.3, 0.3].
    pub confidence_adjustment: f64,
    pub risk_level: RiskLevel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_size_hint: Option<f64>,
    pub rationale: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_factors: Option<Value>,
}

/// The external analysis service, seen from the engine.
#[async_trait]
pub trait AdvisoryPort: Send + Sync {
    async fn analyze(&self, request: &AdvisoryRequest) -> Result<AdvisoryResponse, AdvisoryError>;
}
