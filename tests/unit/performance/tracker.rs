//! Unit tests for the performance tracker

use tactix::models::performance::PerformanceRecord;
use tactix::models::signal::StrategyType;
use tactix::performance::PerformanceTracker;

#[tokio::test]
async fn empty_tracker_returns_zeroed_stats() {
    let tracker = PerformanceTracker::new(100);
    let stats = tracker.stats(None, 30).await;
    assert_eq!(stats.total_trades, 0);
    assert_eq!(stats.win_rate, 0.0);
    assert_eq!(stats.avg_return, 0.0);
    assert_eq!(stats.max_drawdown, 0.0);
}

#[tokio::test]
async fn window_evicts_oldest_past_capacity() {
    let tracker = PerformanceTracker::new(100);
    // 50 losing records first, then 100 winners; the losers must all be
    // evicted once 150 have been inserted.
    for _ in 0..50 {
        tracker
            .record(PerformanceRecord::new(StrategyType::Traditional, false, -1.0))
            .await;
    }
    for _ in 0..100 {
        tracker
            .record(PerformanceRecord::new(StrategyType::Traditional, true, 1.0))
            .await;
    }

    assert_eq!(tracker.len().await, 100);
    let stats = tracker.stats(None, 100).await;
    assert_eq!(stats.total_trades, 100);
    assert_eq!(stats.win_rate, 1.0);
}

#[tokio::test]
async fn stats_take_most_recent_window() {
    let tracker = PerformanceTracker::new(100);
    for i in 0..50 {
        // First 20 are losers, the last 30 winners.
        let win = i >= 20;
        tracker
            .record(PerformanceRecord::new(
                StrategyType::Traditional,
                win,
                if win { 1.0 } else { -1.0 },
            ))
            .await;
    }
    let stats = tracker.stats(None, 30).await;
    assert_eq!(stats.total_trades, 30);
    assert_eq!(stats.win_rate, 1.0);
    assert!((stats.avg_return - 1.0).abs() < 1e-12);
}

#[tokio::test]
async fn stats_filter_by_strategy_type() {
    let tracker = PerformanceTracker::new(100);
    for i in 0..10 {
        let strategy = if i % 2 == 0 {
            StrategyType::Traditional
        } else {
            StrategyType::AiLearning
        };
        tracker
            .record(PerformanceRecord::new(strategy, i % 2 == 1, 0.5))
            .await;
    }
    let advisory = tracker.stats(Some(StrategyType::AiLearning), 30).await;
    assert_eq!(advisory.total_trades, 5);
    assert_eq!(advisory.win_rate, 1.0);

    let traditional = tracker.stats(Some(StrategyType::Traditional), 30).await;
    assert_eq!(traditional.total_trades, 5);
    assert_eq!(traditional.win_rate, 0.0);
}

#[tokio::test]
async fn max_drawdown_is_peak_to_trough() {
    let tracker = PerformanceTracker::new(100);
    // Cumulative P/L: 10, 5, 0, 20; deepest drop from the 10 peak is 10.
    for pnl in [10.0, -5.0, -5.0, 20.0] {
        tracker
            .record(PerformanceRecord::new(StrategyType::Traditional, pnl > 0.0, pnl))
            .await;
    }
    let stats = tracker.stats(None, 30).await;
    assert!((stats.max_drawdown - 10.0).abs() < 1e-12);
    assert!((stats.avg_return - 5.0).abs() < 1e-12);
}

#[tokio::test]
async fn concurrent_writers_lose_no_records() {
    let tracker = std::sync::Arc::new(PerformanceTracker::new(1000));
    let mut handles = Vec::new();
    for _ in 0..10 {
        let tracker = std::sync::Arc::clone(&tracker);
        handles.push(tokio::spawn(async move {
            for _ in 0..20 {
                tracker
                    .record(PerformanceRecord::new(StrategyType::Hybrid, true, 0.1))
                    .await;
            }
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }
    assert_eq!(tracker.len().await, 200);
}
