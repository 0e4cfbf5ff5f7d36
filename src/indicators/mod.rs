//! Pure technical indicator computations.
//!
//! Every function here is deterministic and side-effect free: identical
//! price input must produce identical output. Insufficient history yields
//! `None`, never a partial value.

pub mod momentum;
pub mod snapshot;
pub mod volatility;

pub use snapshot::compute_snapshot;
