//! Meeting cost analytics: per-meeting cost, period trends, summary
//! statistics, optimization heuristics, and velocity correlation.
//!
//! Everything here is a pure value transformation over meetings and rates
//! handed in by the caller. Nothing reads from or writes to the store, and
//! every division is guarded so degenerate input resolves to zero.

pub mod correlation;
pub mod cost;
pub mod optimize;
pub mod periods;
pub mod stats;
