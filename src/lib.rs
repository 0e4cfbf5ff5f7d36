//! Tactix: technical indicator and strategy signal engine.
//!
//! Ingests a price/volume series for an instrument and produces a discrete
//! trading decision (buy / sell / hold) with confidence, risk parameters,
//! and supporting rationale. Three strategy variants share one evaluation
//! contract: a rule-based traditional strategy, an advisory-augmented
//! strategy backed by an external analysis service, and a hybrid mode that
//! adaptively picks between them from observed market conditions and
//! historical signal performance.

pub mod advisory;
pub mod common;
pub mod config;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod performance;
pub mod signals;
pub mod strategies;
