//! The replacement policy engine.
//!
//! [`simulate`] replays a reference string against a fixed pool of frames
//! under one [`Policy`] and returns the full step-by-step trace. It is a
//! pure function: no state survives a call, so repeated calls with the same
//! arguments return identical results and concurrent callers need no
//! synchronization.

use crate::common::{Error, PageId, Result};
use crate::sim::Policy;

/// What happened when one reference was processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepEvent {
    /// The referenced page was already resident.
    Hit,
    /// The referenced page had to be loaded, possibly evicting a victim.
    Fault,
}

/// The outcome of processing one page reference.
///
/// `frames` is an owned snapshot of the frame set *after* this step's
/// mutation. Later steps never alter an already-emitted record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRecord {
    /// The page that was referenced.
    pub page: PageId,
    /// Hit or fault.
    pub event: StepEvent,
    /// Resident pages after this step, in policy-significant order.
    pub frames: Vec<PageId>,
}

/// The complete result of one simulation run.
///
/// Invariant: `hits + faults == steps.len() == `length of the input
/// reference string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationResult {
    /// Number of references found resident.
    pub hits: usize,
    /// Number of references that missed.
    pub faults: usize,
    /// One record per reference, in order.
    pub steps: Vec<StepRecord>,
}

impl SimulationResult {
    /// Fraction of references that hit, in `[0, 1]`.
    ///
    /// Unrounded; formatting (e.g. as a percentage) is the caller's job.
    pub fn hit_rate(&self) -> f64 {
        if self.steps.is_empty() {
            0.0
        } else {
            self.hits as f64 / self.steps.len() as f64
        }
    }
}

/// Simulate `references` against `capacity` frames under `policy`.
///
/// Returns the ordered trace plus hit/fault totals. Validation happens
/// before any simulation work: an empty reference string or a zero
/// capacity is rejected outright.
///
/// # Example
/// ```
/// use pagesim::{simulate, PageId, Policy};
///
/// let refs: Vec<PageId> = [1, 2, 1, 3].iter().map(|&p| PageId::new(p)).collect();
/// let result = simulate(Policy::Lru, &refs, 2).unwrap();
/// assert_eq!(result.hits, 1);
/// assert_eq!(result.faults, 3);
/// ```
pub fn simulate(
    policy: Policy,
    references: &[PageId],
    capacity: usize,
) -> Result<SimulationResult> {
    if references.is_empty() {
        return Err(Error::EmptyReferenceString);
    }
    if capacity == 0 {
        return Err(Error::ZeroCapacity);
    }

    let mut run = Run {
        policy,
        references,
        capacity,
        frames: Vec::with_capacity(capacity),
        next_victim: 0,
    };

    let mut hits = 0;
    let mut faults = 0;
    let mut steps = Vec::with_capacity(references.len());

    for (position, &page) in references.iter().enumerate() {
        let event = run.step(position, page);
        match event {
            StepEvent::Hit => hits += 1,
            StepEvent::Fault => faults += 1,
        }
        steps.push(StepRecord {
            page,
            event,
            frames: run.frames.clone(),
        });
    }

    Ok(SimulationResult { hits, faults, steps })
}

/// State owned by one simulation run.
///
/// The FIFO rotation pointer lives here, not in any global: every call to
/// [`simulate`] starts with a fresh pointer at slot 0.
struct Run<'a> {
    policy: Policy,
    references: &'a [PageId],
    capacity: usize,
    /// Resident pages. Order is policy-significant: for LRU the front is
    /// the least recently used; for FIFO order is insertion order with
    /// `next_victim` marking the rotation point.
    frames: Vec<PageId>,
    /// FIFO rotation pointer; advances (mod capacity) after each FIFO
    /// fault-eviction and is untouched by hits.
    next_victim: usize,
}

impl Run<'_> {
    /// Process the reference at `position` and mutate the frame set.
    fn step(&mut self, position: usize, page: PageId) -> StepEvent {
        if let Some(index) = self.frames.iter().position(|&f| f == page) {
            // LRU refreshes recency on a hit; FIFO and Optimal leave the
            // slot order alone.
            if self.policy == Policy::Lru {
                self.frames.remove(index);
                self.frames.push(page);
            }
            return StepEvent::Hit;
        }

        if self.frames.len() < self.capacity {
            self.frames.push(page);
            return StepEvent::Fault;
        }

        match self.policy {
            Policy::Fifo => {
                self.frames[self.next_victim] = page;
                self.next_victim = (self.next_victim + 1) % self.capacity;
            }
            Policy::Lru => {
                // Front of the vector is the least recently used.
                self.frames.remove(0);
                self.frames.push(page);
            }
            Policy::Optimal => {
                let victim = self.optimal_victim(position);
                self.frames[victim] = page;
            }
        }
        StepEvent::Fault
    }

    /// Pick the Optimal victim slot for the fault at `position`.
    ///
    /// A resident page that never appears again is evicted immediately.
    /// Otherwise the victim is the resident whose next occurrence is
    /// farthest away; the first slot attaining the maximum wins ties.
    fn optimal_victim(&self, position: usize) -> usize {
        let future = &self.references[position + 1..];
        let mut victim = 0;
        let mut farthest = None;

        for (slot, &resident) in self.frames.iter().enumerate() {
            match future.iter().position(|&f| f == resident) {
                None => return slot,
                Some(distance) => {
                    if farthest.map_or(true, |best| distance > best) {
                        farthest = Some(distance);
                        victim = slot;
                    }
                }
            }
        }
        victim
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(ids: &[u32]) -> Vec<PageId> {
        ids.iter().map(|&p| PageId::new(p)).collect()
    }

    #[test]
    fn test_rejects_empty_references() {
        let err = simulate(Policy::Fifo, &[], 3).unwrap_err();
        assert_eq!(err, Error::EmptyReferenceString);
    }

    #[test]
    fn test_rejects_zero_capacity() {
        let refs = pages(&[1, 2, 3]);
        let err = simulate(Policy::Lru, &refs, 0).unwrap_err();
        assert_eq!(err, Error::ZeroCapacity);
    }

    #[test]
    fn test_counts_sum_to_length() {
        let refs = pages(&[1, 2, 3, 2, 1, 4, 1]);
        for policy in Policy::ALL {
            let result = simulate(policy, &refs, 2).unwrap();
            assert_eq!(result.hits + result.faults, refs.len());
            assert_eq!(result.steps.len(), refs.len());
        }
    }

    #[test]
    fn test_fills_before_evicting() {
        let refs = pages(&[1, 2, 3]);
        let result = simulate(Policy::Fifo, &refs, 3).unwrap();
        assert_eq!(result.faults, 3);
        assert_eq!(result.steps[2].frames, pages(&[1, 2, 3]));
    }

    #[test]
    fn test_fifo_pointer_rotates_through_slots() {
        // After the fill, FIFO replaces slot 0, then 1, then 2, in place.
        let refs = pages(&[1, 2, 3, 4, 5, 6]);
        let result = simulate(Policy::Fifo, &refs, 3).unwrap();
        assert_eq!(result.steps[3].frames, pages(&[4, 2, 3]));
        assert_eq!(result.steps[4].frames, pages(&[4, 5, 3]));
        assert_eq!(result.steps[5].frames, pages(&[4, 5, 6]));
    }

    #[test]
    fn test_fifo_hit_does_not_advance_pointer() {
        // Hitting page 1 must not move the rotation point off slot 0.
        let refs = pages(&[1, 2, 3, 1, 4]);
        let result = simulate(Policy::Fifo, &refs, 3).unwrap();
        assert_eq!(result.steps[3].event, StepEvent::Hit);
        assert_eq!(result.steps[4].frames, pages(&[4, 2, 3]));
    }

    #[test]
    fn test_lru_hit_refreshes_recency() {
        // 1 is touched again, so 2 becomes the LRU victim.
        let refs = pages(&[1, 2, 1, 3]);
        let result = simulate(Policy::Lru, &refs, 2).unwrap();
        assert_eq!(result.steps[3].frames, pages(&[1, 3]));
    }

    #[test]
    fn test_optimal_evicts_page_without_future() {
        // At the fault on 4, page 3 never recurs and goes first.
        let refs = pages(&[1, 2, 3, 4, 1, 2]);
        let result = simulate(Policy::Optimal, &refs, 3).unwrap();
        assert_eq!(result.steps[3].frames, pages(&[1, 2, 4]));
    }

    #[test]
    fn test_optimal_evicts_farthest_next_use() {
        // Future of the fault on 4 is [1, 2, 3]: 3 is farthest.
        let refs = pages(&[1, 2, 3, 4, 1, 2, 3]);
        let result = simulate(Policy::Optimal, &refs, 3).unwrap();
        assert_eq!(result.steps[3].frames, pages(&[1, 2, 4]));
    }

    #[test]
    fn test_optimal_tie_break_prefers_first_slot() {
        // Neither 1 nor 2 recurs; slot 0 must win.
        let refs = pages(&[1, 2, 3]);
        let result = simulate(Policy::Optimal, &refs, 2).unwrap();
        assert_eq!(result.steps[2].frames, pages(&[3, 2]));
    }

    #[test]
    fn test_snapshots_are_independent() {
        // Mutations in later steps must not rewrite earlier snapshots.
        let refs = pages(&[1, 2, 3]);
        let result = simulate(Policy::Lru, &refs, 2).unwrap();
        assert_eq!(result.steps[0].frames, pages(&[1]));
        assert_eq!(result.steps[1].frames, pages(&[1, 2]));
        assert_eq!(result.steps[2].frames, pages(&[2, 3]));
    }

    #[test]
    fn test_simulate_is_idempotent() {
        let refs = pages(&[4, 7, 4, 1, 7, 9, 4]);
        for policy in Policy::ALL {
            let a = simulate(policy, &refs, 3).unwrap();
            let b = simulate(policy, &refs, 3).unwrap();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_hit_rate() {
        let refs = pages(&[1, 1, 1, 2]);
        let result = simulate(Policy::Fifo, &refs, 1).unwrap();
        assert_eq!(result.hits, 2);
        assert_eq!(result.hit_rate(), 0.5);
    }
}
