//! Timeline projection of a simulation trace.
//!
//! [`project`] turns the per-step frame snapshots of a run into a
//! frame-slot × step grid, each occupied cell classified as hit, fault, or
//! stale. The grid is render-ready plain data for a table or heatmap; no
//! formatting happens here.

use crate::common::{Error, PageId, Result};
use crate::sim::{StepEvent, StepRecord};

/// Classification of an occupied timeline cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    /// The slot holds the step's referenced page and the step was a hit.
    Hit,
    /// The slot holds the step's referenced page and the step was a fault.
    Fault,
    /// The slot holds a page unrelated to the step's reference.
    Stale,
}

/// One occupied cell of the timeline grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineCell {
    /// The page resident in this slot at this step.
    pub page: PageId,
    /// How the occupant relates to the step's reference.
    pub kind: CellKind,
}

/// A frame-slot × step occupancy grid.
///
/// Rows are frame slots `0..capacity`, columns are simulation steps.
/// `None` means the slot was not yet filled at that step. Within one
/// column at most one cell is `Hit` or `Fault` (frame contents are unique),
/// and it matches the step's own event and page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineGrid {
    /// Frame capacity the run used (number of rows).
    pub capacity: usize,
    /// `rows[slot][step]`, row-major.
    pub rows: Vec<Vec<Option<TimelineCell>>>,
}

impl TimelineGrid {
    /// Number of steps (columns) in the grid.
    pub fn steps(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// The cell at `slot`, `step`, if occupied.
    pub fn cell(&self, slot: usize, step: usize) -> Option<TimelineCell> {
        self.rows.get(slot)?.get(step).copied()?
    }
}

/// Project a trace into a [`TimelineGrid`].
///
/// Each step's snapshot decides column contents; classification follows the
/// step's own event, so a faulting page shows as `Fault` in the slot it
/// landed in and every other occupant of that column is `Stale`.
///
/// # Example
/// ```
/// use pagesim::{project, simulate, CellKind, PageId, Policy};
///
/// let refs: Vec<PageId> = [1, 2, 1].iter().map(|&p| PageId::new(p)).collect();
/// let result = simulate(Policy::Fifo, &refs, 2).unwrap();
/// let grid = project(&result.steps, 2).unwrap();
/// assert_eq!(grid.cell(0, 2).unwrap().kind, CellKind::Hit);
/// ```
pub fn project(steps: &[StepRecord], capacity: usize) -> Result<TimelineGrid> {
    if capacity == 0 {
        return Err(Error::ZeroCapacity);
    }

    let mut rows = Vec::with_capacity(capacity);
    for slot in 0..capacity {
        let mut row = Vec::with_capacity(steps.len());
        for step in steps {
            row.push(step.frames.get(slot).map(|&page| TimelineCell {
                page,
                kind: classify(page, step),
            }));
        }
        rows.push(row);
    }

    Ok(TimelineGrid { capacity, rows })
}

fn classify(occupant: PageId, step: &StepRecord) -> CellKind {
    if occupant != step.page {
        return CellKind::Stale;
    }
    match step.event {
        StepEvent::Hit => CellKind::Hit,
        StepEvent::Fault => CellKind::Fault,
    }
}
