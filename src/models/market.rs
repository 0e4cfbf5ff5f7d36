//! Market snapshot supplied by the market-data collaborator.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::signals::engine::EngineError;

/// One evaluation cycle's worth of ordered price/volume history for a symbol.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketSnapshot {
    pub symbol: String,
    pub timestamps: Vec<DateTime<Utc>>,
    pub prices: Vec<f64>,
    pub volumes: Vec<f64>,
}

impl MarketSnapshot {
    pub fn new(
        symbol: impl Into<String>,
        timestamps: Vec<DateTime<Utc>>,
        prices: Vec<f64>,
        volumes: Vec<f64>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            timestamps,
            prices,
            volumes,
        }
    }

    /// Latest traded price. Only valid on a validated snapshot.
    pub fn latest_price(&self) -> f64 {
        self.prices.last().copied().unwrap_or(0.0)
    }

    /// Latest traded volume.
    pub fn latest_volume(&self) -> f64 {
        self.volumes.last().copied().unwrap_or(0.0)
    }

    /// Contract check performed at the engine boundary. A failing snapshot is
    /// a caller bug, not a market condition, so this is the one place the
    /// engine surfaces an error instead of a hold signal.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.prices.is_empty() {
            return Err(EngineError::EmptyPriceSeries);
        }
        if self.prices.len() != self.volumes.len() {
            return Err(EngineError::SeriesLengthMismatch {
                prices: self.prices.len(),
                volumes: self.volumes.len(),
            });
        }
        if let Some(&bad) = self.prices.iter().find(|p| !p.is_finite() || **p <= 0.0) {
            return Err(EngineError::NonPositivePrice(bad));
        }
        if self.volumes.iter().any(|v| !v.is_finite() || *v < 0.0) {
            return Err(EngineError::NegativeVolume);
        }
        Ok(())
    }
}
