//! Configuration constants for pagesim.

/// Minimum number of capacities an anomaly sweep evaluates.
///
/// Small reference strings would otherwise produce a chart with two or
/// three points, too few to show a fault curve. Ten points is enough to
/// make the knee of the curve visible.
pub const MIN_SWEEP_CAPACITIES: usize = 10;

/// Extra capacities swept past the distinct-page count.
///
/// Once capacity reaches the number of distinct pages, every page fits and
/// faults bottom out at the compulsory-miss floor. Sweeping two capacities
/// beyond that guarantees the series visibly flattens.
pub const SWEEP_HEADROOM: usize = 2;
