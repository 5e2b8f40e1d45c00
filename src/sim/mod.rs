//! The replacement policy engine.
//!
//! # Components
//! - [`Policy`] - Closed enumeration of eviction disciplines
//! - [`simulate`] - One deterministic run over a reference string
//! - [`StepRecord`] / [`StepEvent`] - The per-reference trace
//! - [`SimulationResult`] - Trace plus hit/fault totals

mod engine;
mod policy;

pub use engine::{simulate, SimulationResult, StepEvent, StepRecord};
pub use policy::Policy;
