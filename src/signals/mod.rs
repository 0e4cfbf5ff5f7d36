//! Top-level signal evaluation surface.

pub mod engine;

pub use engine::{EngineError, SignalEngine};
