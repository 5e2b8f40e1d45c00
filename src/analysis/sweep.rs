//! Fault-count sweep across frame capacities.
//!
//! Sweeping one policy over an increasing frame budget exposes the fault
//! curve, and for FIFO the occasional non-monotonic segment known as
//! Belady's anomaly.

use std::collections::HashSet;

use crate::common::config::{MIN_SWEEP_CAPACITIES, SWEEP_HEADROOM};
use crate::common::{Error, PageId, Result};
use crate::sim::{simulate, Policy};

/// One sweep sample: the fault count observed at one capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepPoint {
    /// Frame capacity simulated.
    pub capacity: usize,
    /// Total faults at that capacity.
    pub faults: usize,
}

/// The raw fault series of one sweep, capacities `1..=max`.
///
/// The series is plain data; callers chart it, tabulate it, or scan it for
/// anomalies as they see fit. [`SweepSeries::anomalies`] is a convenience
/// over the same points, not extra state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepSeries {
    /// The policy that was swept.
    pub policy: Policy,
    /// One point per capacity, in strictly increasing capacity order.
    pub points: Vec<SweepPoint>,
}

impl SweepSeries {
    /// Capacities where the fault count rose over the previous capacity.
    ///
    /// A non-empty return is Belady's anomaly: more frames, more faults.
    /// Monotonically reasonable policies (LRU, Optimal) never produce one.
    pub fn anomalies(&self) -> Vec<SweepPoint> {
        self.points
            .windows(2)
            .filter(|pair| pair[1].faults > pair[0].faults)
            .map(|pair| pair[1])
            .collect()
    }
}

/// Number of distinct pages in a reference string.
fn distinct_pages(references: &[PageId]) -> usize {
    references.iter().collect::<HashSet<_>>().len()
}

/// Sweep `policy` over capacities `1..=max` and collect the fault counts.
///
/// `max` is `max(MIN_SWEEP_CAPACITIES, distinct + SWEEP_HEADROOM)`: large
/// enough that the curve always reaches its compulsory-miss floor, and at
/// least ten points for small inputs.
///
/// # Example
/// ```
/// use pagesim::{sweep_faults, PageId, Policy};
///
/// let refs: Vec<PageId> = [1, 2, 3, 1].iter().map(|&p| PageId::new(p)).collect();
/// let series = sweep_faults(Policy::Fifo, &refs).unwrap();
/// assert_eq!(series.points.len(), 10);
/// ```
pub fn sweep_faults(policy: Policy, references: &[PageId]) -> Result<SweepSeries> {
    if references.is_empty() {
        return Err(Error::EmptyReferenceString);
    }

    let max_capacity =
        MIN_SWEEP_CAPACITIES.max(distinct_pages(references) + SWEEP_HEADROOM);

    let mut points = Vec::with_capacity(max_capacity);
    for capacity in 1..=max_capacity {
        let result = simulate(policy, references, capacity)?;
        points.push(SweepPoint {
            capacity,
            faults: result.faults,
        });
    }

    Ok(SweepSeries { policy, points })
}
