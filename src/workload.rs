//! Random workload generation.
//!
//! Produces demo reference strings and frame budgets for callers that want
//! an instant input instead of typing one. The RNG is a parameter, so
//! callers (and tests) control determinism.

use rand::Rng;

use crate::common::PageId;

/// Length of a default demo reference string.
pub const DEMO_LENGTH: usize = 20;

/// Exclusive upper bound on page numbers in a demo string.
pub const DEMO_PAGE_RANGE: u32 = 10;

/// Generate `len` uniformly random references over pages `0..page_range`.
///
/// # Example
/// ```
/// use pagesim::workload::{random_references, DEMO_LENGTH, DEMO_PAGE_RANGE};
///
/// let mut rng = rand::thread_rng();
/// let refs = random_references(DEMO_LENGTH, DEMO_PAGE_RANGE, &mut rng);
/// assert_eq!(refs.len(), DEMO_LENGTH);
/// ```
pub fn random_references(len: usize, page_range: u32, rng: &mut impl Rng) -> Vec<PageId> {
    (0..len)
        .map(|_| PageId::new(rng.gen_range(0..page_range)))
        .collect()
}

/// Pick a demo frame capacity, uniformly in `3..=5`.
///
/// Small enough that demo strings actually fault, large enough to show
/// more than thrashing.
pub fn random_capacity(rng: &mut impl Rng) -> usize {
    rng.gen_range(3..=5)
}
