//! Bounded rolling window of realized signal outcomes.

use std::collections::VecDeque;

use tokio::sync::RwLock;
use tracing::debug;

use crate::models::performance::{PerformanceRecord, PerformanceStats};
use crate::models::signal::StrategyType;

/// Append-only outcome history with FIFO eviction past capacity.
///
/// Writes serialize behind the lock so concurrent `record` calls cannot lose
/// updates or break eviction order; `stats` reads observe a consistent
/// window through the read guard.
pub struct PerformanceTracker {
    capacity: usize,
    records: RwLock<VecDeque<PerformanceRecord>>,
}

impl PerformanceTracker {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            records: RwLock::new(VecDeque::with_capacity(capacity)),
        }
    }

    /// Append a realized outcome, evicting the oldest record on overflow.
    pub async fn record(&self, record: PerformanceRecord) {
        let mut records = self.records.write().await;
        records.push_back(record);
        while records.len() > self.capacity {
            records.pop_front();
        }
        debug!(total = records.len(), "performance outcome recorded");
    }

    /// Rolling statistics over the most recent `window` records, optionally
    /// restricted to one strategy type. An empty selection returns all-zero
    /// stats rather than dividing by zero.
    pub async fn stats(
        &self,
        strategy_type: Option<StrategyType>,
        window: usize,
    ) -> PerformanceStats {
        let records = self.records.read().await;
        let matching: Vec<&PerformanceRecord> = records
            .iter()
            .filter(|r| strategy_type.map_or(true, |t| r.strategy_type == t))
            .collect();

        let start = matching.len().saturating_sub(window);
        let selected = &matching[start..];
        if selected.is_empty() {
            return PerformanceStats::default();
        }

        let total = selected.len();
        let successes = selected.iter().filter(|r| r.success).count();
        let avg_return =
            selected.iter().map(|r| r.profit_loss).sum::<f64>() / total as f64;

        // Peak-to-trough over cumulative P/L in chronological order.
        let mut cumulative = 0.0_f64;
        let mut peak = 0.0_f64;
        let mut max_drawdown = 0.0_f64;
        for record in selected {
            cumulative += record.profit_loss;
            peak = peak.max(cumulative);
            max_drawdown = max_drawdown.max(peak - cumulative);
        }

        PerformanceStats {
            win_rate: successes as f64 / total as f64,
            avg_return,
            max_drawdown,
            total_trades: total,
        }
    }

    /// Number of records currently retained.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}
