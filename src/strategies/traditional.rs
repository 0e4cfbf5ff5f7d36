//! Rule-based traditional strategy: three buy votes, three sell votes.

use async_trait::async_trait;

use crate::config::Config;
use crate::models::indicators::{
    BollingerSignal, IndicatorSnapshot, MacdMomentum, MacdTrend, RsiSignal,
};
use crate::models::market::MarketSnapshot;
use crate::models::signal::{
    RiskLevel, Signal, SignalAction, SignalMetadata, SignalReason, StrategyType,
};
use crate::strategies::SignalStrategy;

const CONDITION_COUNT: f64 = 3.0;
const CONFIDENCE_PER_FULL_SCORE: f64 = 0.8;

pub struct TraditionalStrategy {
    config: Config,
}

impl TraditionalStrategy {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Apply the fixed voting rule to the latest indicator values.
    ///
    /// A direction needs at least two of its three conditions and strictly
    /// more votes than the opposite direction; ties always hold. Missing
    /// indicators produce a zero-confidence hold without partial scoring.
    pub fn generate(
        &self,
        snapshot: &MarketSnapshot,
        indicators: Option<&IndicatorSnapshot>,
    ) -> Signal {
        let Some(ind) = indicators else {
            return self.insufficient_data(snapshot);
        };

        let mut reasons: Vec<SignalReason> = Vec::new();
        let mut buy_score = 0u32;
        let mut sell_score = 0u32;

        if ind.rsi.signal == RsiSignal::Oversold {
            buy_score += 1;
            reasons.push(reason(format!("RSI oversold: {:.2}", ind.rsi.value)));
        } else if ind.rsi.signal == RsiSignal::Overbought {
            sell_score += 1;
            reasons.push(reason(format!("RSI overbought: {:.2}", ind.rsi.value)));
        }

        if ind.macd.trend == MacdTrend::Bullish && ind.macd.momentum == MacdMomentum::Positive {
            buy_score += 1;
            reasons.push(reason(format!(
                "MACD bullish with positive momentum: histogram={:.4}",
                ind.macd.histogram
            )));
        } else if ind.macd.trend == MacdTrend::Bearish
            && ind.macd.momentum == MacdMomentum::Negative
        {
            sell_score += 1;
            reasons.push(reason(format!(
                "MACD bearish with negative momentum: histogram={:.4}",
                ind.macd.histogram
            )));
        }

        if ind.bollinger.signal == BollingerSignal::NearLower && ind.bollinger.band_position < 0.3 {
            buy_score += 1;
            reasons.push(reason(format!(
                "price near lower Bollinger band: position={:.2}",
                ind.bollinger.band_position
            )));
        } else if ind.bollinger.signal == BollingerSignal::NearUpper
            && ind.bollinger.band_position > 0.7
        {
            sell_score += 1;
            reasons.push(reason(format!(
                "price near upper Bollinger band: position={:.2}",
                ind.bollinger.band_position
            )));
        }

        let (action, confidence) = self.decide(buy_score, sell_score);

        let reasoning = if reasons.is_empty() {
            "no strong indicator agreement".to_string()
        } else {
            let lines: Vec<String> = reasons.iter().map(|r| r.description.clone()).collect();
            lines.join("; ")
        };

        Signal {
            symbol: snapshot.symbol.clone(),
            action,
            confidence,
            reasoning,
            risk_level: RiskLevel::Medium,
            position_size: self.config.base_position_size,
            metadata: SignalMetadata::new(StrategyType::Traditional)
                .with_indicators(*ind)
                .with_reasons(reasons),
        }
    }

    /// Map vote counts to a decision. A tie never produces a directional
    /// action, even at 2-2 or 3-3.
    pub fn decide(&self, buy_score: u32, sell_score: u32) -> (SignalAction, f64) {
        if buy_score >= 2 && buy_score > sell_score {
            (SignalAction::Buy, self.directional_confidence(buy_score))
        } else if sell_score >= 2 && sell_score > buy_score {
            (SignalAction::Sell, self.directional_confidence(sell_score))
        } else {
            (SignalAction::Hold, self.config.hold_confidence)
        }
    }

    fn directional_confidence(&self, score: u32) -> f64 {
        (score as f64 / CONDITION_COUNT * CONFIDENCE_PER_FULL_SCORE)
            .min(self.config.max_directional_confidence)
    }

    fn insufficient_data(&self, snapshot: &MarketSnapshot) -> Signal {
        Signal {
            symbol: snapshot.symbol.clone(),
            action: SignalAction::Hold,
            confidence: 0.0,
            reasoning: "insufficient data".to_string(),
            risk_level: RiskLevel::Medium,
            position_size: self.config.base_position_size,
            metadata: SignalMetadata::new(StrategyType::Traditional),
        }
    }
}

fn reason(description: String) -> SignalReason {
    SignalReason {
        description,
        weight: 1.0,
    }
}

#[async_trait]
impl SignalStrategy for TraditionalStrategy {
    fn kind(&self) -> StrategyType {
        StrategyType::Traditional
    }

    async fn evaluate(
        &self,
        snapshot: &MarketSnapshot,
        indicators: Option<&IndicatorSnapshot>,
    ) -> Signal {
        self.generate(snapshot, indicators)
    }
}
