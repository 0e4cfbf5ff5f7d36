//! Shared data models spanning the engine layers.

pub mod indicators;
pub mod market;
pub mod performance;
pub mod signal;

pub use indicators::{
    BollingerSignal, BollingerSummary, IndicatorSnapshot, MacdMomentum, MacdSummary, MacdTrend,
    RsiPoint, RsiSignal, RsiSummary,
};
pub use market::MarketSnapshot;
pub use performance::{PerformanceRecord, PerformanceStats};
pub use signal::{RiskLevel, Signal, SignalAction, SignalMetadata, SignalReason, StrategyType};
