//! Comparative and sweep analysis over the engine.
//!
//! # Components
//! - [`compare_all`] - Every policy over one input, ranked by faults
//! - [`sweep_faults`] - One policy over a rising frame budget
//! - [`SweepSeries::anomalies`] - Belady's-anomaly extraction from a sweep

mod compare;
mod sweep;

pub use compare::{compare_all, ComparisonResult, PolicyRun};
pub use sweep::{sweep_faults, SweepPoint, SweepSeries};
