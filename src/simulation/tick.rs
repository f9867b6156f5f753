//! Step engine - advances the board one generation
//!
//! A step is two phases: a read-only pass that computes every cell's next
//! state from the current board, then a single batch write of the cells that
//! differ. No cell ever sees a neighbor that was already updated this step.
//!
//! After the write the new live set is checked against history; a repeat
//! means the board is looping and the caller should stop.

use serde::{Deserialize, Serialize};

use crate::core::types::Change;
use crate::rules;
use crate::simulation::history::{History, Snapshot};
use crate::spatial::Grid;

/// Outcome of one generation
///
/// `changes` is the exact batch applied this step, for observers that
/// redraw only what moved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepResult {
    pub changed: bool,
    pub cycle_detected: bool,
    pub changes: Vec<Change>,
}

impl StepResult {
    /// The board is stable, dead, or looping
    pub fn should_stop(&self) -> bool {
        !self.changed || self.cycle_detected
    }
}

/// Cells whose next state differs from their current one, row-major
///
/// Reads `grid` only; nothing is mutated.
pub fn compute_changes(grid: &Grid) -> Vec<Change> {
    let mut changes = Vec::new();

    grid.for_each(|row, col, alive| {
        let next = rules::next_state(alive, grid.live_neighbors(row, col));
        if next != alive {
            changes.push(Change::new(row, col, next));
        }
    });

    changes
}

/// Advance `grid` one generation and update `history`
pub fn step(grid: &mut Grid, history: &mut History) -> StepResult {
    let changes = compute_changes(grid);

    if changes.is_empty() {
        return StepResult::default();
    }

    grid.apply(&changes);

    let snapshot = Snapshot::from_grid(grid);
    let cycle_detected = history.exists(&snapshot);
    if !cycle_detected {
        history.record(snapshot);
    }

    tracing::debug!(
        changes = changes.len(),
        population = grid.population(),
        history = history.len(),
        cycle_detected,
        "step applied"
    );

    StepResult {
        changed: true,
        cycle_detected,
        changes,
    }
}
