//! Engine configuration loaded from the environment with sane defaults.

use std::time::Duration;

use crate::models::signal::RiskLevel;

/// Current deployment environment (`ENVIRONMENT`, defaults to "sandbox").
pub fn get_environment() -> String {
    std::env::var("ENVIRONMENT").unwrap_or_else(|_| "sandbox".to_string())
}

/// Tunable parameters for indicators, strategy selection, and the advisory
/// port. Defaults reproduce the reference behavior exactly.
#[derive(Debug, Clone)]
pub struct Config {
    pub default_symbol: String,

    // Indicator periods
    pub rsi_period: usize,
    pub rsi_overbought: f64,
    pub rsi_oversold: f64,
    pub macd_fast: usize,
    pub macd_slow: usize,
    pub macd_signal: usize,
    pub bollinger_period: usize,
    pub bollinger_std_dev: f64,

    // Traditional voting rule
    pub hold_confidence: f64,
    pub max_directional_confidence: f64,

    // Advisory blending
    pub confidence_floor: f64,
    pub confidence_ceiling: f64,
    pub base_position_size: f64,
    pub advisory_timeout: Duration,
    pub advisory_max_attempts: usize,
    pub advisory_retry_base_delay: Duration,
    pub risk_tolerance: RiskLevel,

    // Hybrid selection thresholds
    pub volatility_threshold: f64,
    pub volume_ratio_threshold: f64,
    pub advisory_win_rate_threshold: f64,

    // Performance tracking
    pub history_capacity: usize,
    pub stats_window: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_symbol: "BTC".to_string(),
            rsi_period: 14,
            rsi_overbought: 70.0,
            rsi_oversold: 30.0,
            macd_fast: 12,
            macd_slow: 26,
            macd_signal: 9,
            bollinger_period: 20,
            bollinger_std_dev: 2.0,
            hold_confidence: 0.3,
            max_directional_confidence: 0.9,
            confidence_floor: 0.1,
            confidence_ceiling: 0.95,
            base_position_size: 0.3,
            advisory_timeout: Duration::from_secs(10),
            advisory_max_attempts: 3,
            advisory_retry_base_delay: Duration::from_millis(500),
            risk_tolerance: RiskLevel::Medium,
            volatility_threshold: 0.05,
            volume_ratio_threshold: 1.5,
            advisory_win_rate_threshold: 0.7,
            history_capacity: 100,
            stats_window: 30,
        }
    }
}

impl Config {
    /// Build a config from environment variables, falling back to defaults
    /// for anything unset or unparsable. Call `dotenvy::dotenv()` first if a
    /// `.env` file should be honored.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            default_symbol: env_or("TACTIX_SYMBOL", defaults.default_symbol.clone()),
            rsi_period: env_parsed("TACTIX_RSI_PERIOD", defaults.rsi_period),
            rsi_overbought: env_parsed("TACTIX_RSI_OVERBOUGHT", defaults.rsi_overbought),
            rsi_oversold: env_parsed("TACTIX_RSI_OVERSOLD", defaults.rsi_oversold),
            macd_fast: env_parsed("TACTIX_MACD_FAST", defaults.macd_fast),
            macd_slow: env_parsed("TACTIX_MACD_SLOW", defaults.macd_slow),
            macd_signal: env_parsed("TACTIX_MACD_SIGNAL", defaults.macd_signal),
            bollinger_period: env_parsed("TACTIX_BOLLINGER_PERIOD", defaults.bollinger_period),
            bollinger_std_dev: env_parsed("TACTIX_BOLLINGER_STD_DEV", defaults.bollinger_std_dev),
            advisory_timeout: Duration::from_millis(env_parsed(
                "TACTIX_ADVISORY_TIMEOUT_MS",
                defaults.advisory_timeout.as_millis() as u64,
            )),
            advisory_max_attempts: env_parsed(
                "TACTIX_ADVISORY_MAX_ATTEMPTS",
                defaults.advisory_max_attempts,
            ),
            advisory_retry_base_delay: Duration::from_millis(env_parsed(
                "TACTIX_ADVISORY_RETRY_BASE_MS",
                defaults.advisory_retry_base_delay.as_millis() as u64,
            )),
            ..defaults
        }
    }

    /// Longest lookback any indicator needs before the snapshot can be scored.
    pub fn min_samples(&self) -> usize {
        let rsi = self.rsi_period + 1;
        let macd = self.macd_slow + self.macd_signal;
        let bollinger = self.bollinger_period;
        rsi.max(macd).max(bollinger)
    }
}

fn env_or(key: &str, default: String) -> String {
    std::env::var(key).unwrap_or(default)
}

fn env_parsed<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
