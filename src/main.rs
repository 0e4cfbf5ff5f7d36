use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{Duration as ChronoDuration, Utc};

use tactix::advisory::{
    AdvisoryError, AdvisoryPort, AdvisoryRequest, AdvisoryResponse, HttpAdvisoryClient,
};
use tactix::config::Config;
use tactix::logging::init_logging;
use tactix::models::market::MarketSnapshot;
use tactix::models::performance::PerformanceRecord;
use tactix::models::signal::{RiskLevel, Signal, StrategyType};
use tactix::signals::SignalEngine;

/// Canned advisory opinion for running the demo without a live service.
struct DemoAdvisoryPort;

#[async_trait]
impl AdvisoryPort for DemoAdvisoryPort {
    async fn analyze(&self, request: &AdvisoryRequest) -> Result<AdvisoryResponse, AdvisoryError> {
        Ok(AdvisoryResponse {
            action: request.traditional_action,
            confidence_adjustment: 0.1,
            risk_level: RiskLevel::Medium,
            position_size_hint: Some(0.25),
            rationale: "demo advisory agrees with the traditional read".to_string(),
            additional_factors: None,
        })
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    init_logging();

    let config = Config::from_env();
    let port: Arc<dyn AdvisoryPort> = match std::env::var("TACTIX_ADVISORY_URL") {
        Ok(url) => {
            let api_key = std::env::var("TACTIX_ADVISORY_API_KEY").ok();
            Arc::new(HttpAdvisoryClient::new(
                url,
                api_key,
                Duration::from_secs(10),
            )?)
        }
        Err(_) => Arc::new(DemoAdvisoryPort),
    };

    let engine = SignalEngine::new(StrategyType::Hybrid, port, config.clone());

    let snapshot = demo_snapshot(&config.default_symbol);
    let signal = engine.evaluate(&snapshot).await?;
    print_signal(&signal);

    // Pretend some earlier signals resolved, then show the rolling stats.
    engine
        .record_outcome(PerformanceRecord::new(StrategyType::AiLearning, true, 1.8))
        .await;
    engine
        .record_outcome(PerformanceRecord::new(StrategyType::AiLearning, false, -0.6))
        .await;
    engine
        .record_outcome(PerformanceRecord::new(StrategyType::Traditional, true, 0.9))
        .await;

    let stats = engine.stats(None).await;
    println!();
    println!("Rolling stats ({} trades):", stats.total_trades);
    println!("  Win rate:     {:.1}%", stats.win_rate * 100.0);
    println!("  Avg return:   {:.2}", stats.avg_return);
    println!("  Max drawdown: {:.2}", stats.max_drawdown);

    Ok(())
}

/// A gently trending synthetic tape long enough for every indicator.
fn demo_snapshot(symbol: &str) -> MarketSnapshot {
    let now = Utc::now();
    let mut timestamps = Vec::new();
    let mut prices = Vec::new();
    let mut volumes = Vec::new();
    for i in 0..60i64 {
        timestamps.push(now - ChronoDuration::minutes(60 - i));
        let wave = ((i as f64) * 0.4).sin() * 1.5;
        prices.push(100.0 + (i as f64) * 0.2 + wave);
        volumes.push(1000.0 + (i as f64 % 7.0) * 50.0);
    }
    MarketSnapshot::new(symbol, timestamps, prices, volumes)
}

fn print_signal(signal: &Signal) {
    println!("Signal for {}:", signal.symbol);
    println!("  Action:     {:?}", signal.action);
    println!("  Confidence: {:.2}%", signal.confidence * 100.0);
    println!("  Risk:       {:?}", signal.risk_level);
    println!("  Size:       {:.2}", signal.position_size);
    println!("  Strategy:   {:?}", signal.metadata.strategy_type);
    if let Some(reason) = &signal.metadata.selection_reason {
        println!("  Selection:  {}", reason);
    }
    println!("  Reasoning:  {}", signal.reasoning);
    for (i, reason) in signal.metadata.reasons.iter().enumerate() {
        println!("    {}. {} (weight {:.2})", i + 1, reason.description, reason.weight);
    }
}
