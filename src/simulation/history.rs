//! Population snapshots and the bounded history used for cycle detection
//!
//! A snapshot is the sorted list of live-cell coordinates for one
//! generation. Two generations with the same live set produce equal
//! snapshots, so finding the current snapshot in history means the board
//! has entered a loop.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::core::config::DEFAULT_HISTORY_CAPACITY;
use crate::core::types::Coord;
use crate::spatial::Grid;

/// Sorted live-cell coordinates of one generation
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Snapshot(Vec<Coord>);

impl Snapshot {
    /// Capture the live cells of a grid
    pub fn from_grid(grid: &Grid) -> Self {
        // Row-major traversal already yields canonical order
        Self(grid.live_cells().collect())
    }

    /// Build from arbitrary coordinates, normalizing order and duplicates
    pub fn from_cells<I>(cells: I) -> Self
    where
        I: IntoIterator<Item = Coord>,
    {
        let mut cells: Vec<Coord> = cells.into_iter().collect();
        cells.sort_unstable();
        cells.dedup();
        Self(cells)
    }

    pub fn cells(&self) -> &[Coord] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Bounded FIFO of past snapshots, oldest first
#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<Snapshot>,
    capacity: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }

    /// History holding at most `capacity` snapshots (at least one)
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Whether an identical snapshot was recorded before
    ///
    /// Equality is whole-sequence: lengths must match before any element is
    /// compared, so a shorter entry that happens to be a prefix of the
    /// current snapshot never counts as a repeat.
    pub fn exists(&self, snapshot: &Snapshot) -> bool {
        self.entries.iter().any(|entry| entry == snapshot)
    }

    /// Append a snapshot, evicting the oldest entry past capacity
    ///
    /// Empty snapshots are dropped. Returns whether the snapshot was stored.
    pub fn record(&mut self, snapshot: Snapshot) -> bool {
        if snapshot.is_empty() {
            return false;
        }

        self.entries.push_back(snapshot);
        if self.entries.len() > self.capacity {
            self.entries.pop_front();
            tracing::trace!(capacity = self.capacity, "history full, evicted oldest snapshot");
        }
        true
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Most recently recorded snapshot
    pub fn latest(&self) -> Option<&Snapshot> {
        self.entries.back()
    }

    /// Snapshots oldest first
    pub fn iter(&self) -> impl Iterator<Item = &Snapshot> {
        self.entries.iter()
    }
}
