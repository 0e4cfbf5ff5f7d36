//! Signal outcome history and rolling performance statistics.

pub mod tracker;

pub use tracker::PerformanceTracker;
