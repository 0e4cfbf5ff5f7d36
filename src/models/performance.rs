//! Realized signal outcomes and the statistics derived from them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::signal::StrategyType;

/// One realized outcome, reported out of band by the execution collaborator
/// once a signal's real-world result is known.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceRecord {
    pub strategy_type: StrategyType,
    pub success: bool,
    pub profit_loss: f64,
    pub timestamp: DateTime<Utc>,
}

impl PerformanceRecord {
    pub fn new(strategy_type: StrategyType, success: bool, profit_loss: f64) -> Self {
        Self {
            strategy_type,
            success,
            profit_loss,
            timestamp: Utc::now(),
        }
    }
}

/// Read-only rolling statistics, recomputed on demand from the record window.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PerformanceStats {
    pub win_rate: f64,
    pub avg_return: f64,
    pub max_drawdown: f64,
    pub total_trades: usize,
}
