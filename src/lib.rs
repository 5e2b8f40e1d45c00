//! pagesim - A page-replacement policy simulator with comparative analysis.
//!
//! # Architecture
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                         pagesim                           │
//! ├───────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────┐  │
//! │  │           Analysis Layer (analysis/)                │  │
//! │  │   compare_all (policy ranking)                      │  │
//! │  │   sweep_faults (Belady's-anomaly capacity sweep)    │  │
//! │  └─────────────────────────────────────────────────────┘  │
//! │                            ↓                              │
//! │  ┌─────────────────────────────────────────────────────┐  │
//! │  │        Simulation Engine (sim/)                     │  │
//! │  │   ┌─────────────────────────────────────────────┐   │  │
//! │  │   │   Policies: FIFO | LRU | Optimal            │   │  │
//! │  │   └─────────────────────────────────────────────┘   │  │
//! │  │   simulate → StepRecord trace + hit/fault totals    │  │
//! │  └─────────────────────────────────────────────────────┘  │
//! │                            ↓                              │
//! │  ┌─────────────────────────────────────────────────────┐  │
//! │  │        Projection Layer (timeline/)                 │  │
//! │  │   trace → frame-slot × step grid (hit/fault/stale)  │  │
//! │  └─────────────────────────────────────────────────────┘  │
//! └───────────────────────────────────────────────────────────┘
//! ```
//!
//! Every operation is a pure function: plain data in, plain data out, no
//! state across calls. Rendering, playback pacing, and input parsing belong
//! to the caller; this crate computes traces, rankings, sweeps, and grids.
//!
//! # Modules
//! - [`common`] - Shared primitives (PageId, Error, config)
//! - [`sim`] - The replacement policy engine
//! - [`analysis`] - Policy comparison and capacity sweeps
//! - [`timeline`] - Trace-to-grid projection
//! - [`workload`] - Random demo workload generation
//!
//! # Quick Start
//! ```
//! use pagesim::{simulate, PageId, Policy};
//!
//! let refs: Vec<PageId> = [1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5]
//!     .iter()
//!     .map(|&p| PageId::new(p))
//!     .collect();
//!
//! let result = simulate(Policy::Fifo, &refs, 3).unwrap();
//! assert_eq!(result.faults, 9);
//! assert_eq!(result.hits, 3);
//! ```

// Core modules
pub mod analysis;
pub mod common;
pub mod sim;
pub mod timeline;
pub mod workload;

// Re-export commonly used items at crate root for convenience
pub use common::{Error, PageId, Result};

pub use analysis::{compare_all, sweep_faults, ComparisonResult, PolicyRun, SweepPoint, SweepSeries};
pub use sim::{simulate, Policy, SimulationResult, StepEvent, StepRecord};
pub use timeline::{project, CellKind, TimelineCell, TimelineGrid};
