//! Side-by-side policy comparison.

use crate::common::{PageId, Result};
use crate::sim::{simulate, Policy, SimulationResult};

/// One policy's outcome within a comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct PolicyRun {
    /// The policy that produced this result.
    pub policy: Policy,
    /// Its full simulation result.
    pub result: SimulationResult,
}

impl PolicyRun {
    /// This policy's hit rate over the shared input, in `[0, 1]`.
    pub fn hit_rate(&self) -> f64 {
        self.result.hit_rate()
    }
}

/// Results of running every policy over the same input.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonResult {
    /// One entry per policy, in [`Policy::ALL`] order.
    pub runs: Vec<PolicyRun>,
    /// The minimum-fault policy; earlier evaluation order wins ties.
    pub best: Policy,
}

impl ComparisonResult {
    /// Look up one policy's run.
    pub fn run(&self, policy: Policy) -> Option<&PolicyRun> {
        self.runs.iter().find(|r| r.policy == policy)
    }
}

/// Run every policy in [`Policy::ALL`] over the same input and rank them.
///
/// The best policy is the one with the fewest faults; on a tie, the policy
/// appearing earlier in the fixed evaluation order is reported.
///
/// # Example
/// ```
/// use pagesim::{compare_all, PageId, Policy};
///
/// let refs: Vec<PageId> = [1, 2, 3, 1].iter().map(|&p| PageId::new(p)).collect();
/// let comparison = compare_all(&refs, 2).unwrap();
/// assert_eq!(comparison.runs.len(), 3);
/// ```
pub fn compare_all(references: &[PageId], capacity: usize) -> Result<ComparisonResult> {
    let mut runs = Vec::with_capacity(Policy::ALL.len());
    for policy in Policy::ALL {
        let result = simulate(policy, references, capacity)?;
        runs.push(PolicyRun { policy, result });
    }

    // Strict < keeps the first minimum, giving first-seen-wins ties.
    let mut best = runs[0].policy;
    let mut fewest = runs[0].result.faults;
    for run in &runs[1..] {
        if run.result.faults < fewest {
            fewest = run.result.faults;
            best = run.policy;
        }
    }

    Ok(ComparisonResult { runs, best })
}
