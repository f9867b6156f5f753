//! Toroidal cell grid
//!
//! Cells are stored row-major in a flat `Vec<bool>`. The board wraps at
//! every edge: the last row is adjacent to the first and the last column is
//! adjacent to the first.

use std::fmt;

use crate::core::error::{LifeError, Result};
use crate::core::types::{Change, Coord};

/// Offsets of the eight surrounding cells, row-major, center excluded
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Fixed-size toroidal grid of live/dead cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Allocate a `rows` x `cols` grid with every cell dead
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(LifeError::InvalidDimensions { rows, cols });
        }

        Ok(Self {
            rows,
            cols,
            cells: vec![false; rows * cols],
        })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells
    #[inline]
    pub fn area(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> Result<usize> {
        if self.contains(row, col) {
            Ok(row * self.cols + col)
        } else {
            Err(LifeError::OutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Current state of an in-range cell
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Result<bool> {
        let idx = self.index(row, col)?;
        Ok(self.cells[idx])
    }

    /// Directly overwrite one cell (seeding, manual edits, applying changes)
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, alive: bool) -> Result<()> {
        let idx = self.index(row, col)?;
        self.cells[idx] = alive;
        Ok(())
    }

    /// Flip one cell and return its new state
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<bool> {
        let idx = self.index(row, col)?;
        self.cells[idx] = !self.cells[idx];
        Ok(self.cells[idx])
    }

    /// Write a batch of changes computed against this grid
    ///
    /// Every change must target an in-range cell; the step engine only ever
    /// produces such changes from a read-only pass over the same grid.
    pub(crate) fn apply(&mut self, changes: &[Change]) {
        for change in changes {
            let Coord { row, col } = change.coord;
            debug_assert!(self.contains(row, col), "change ({}, {}) off-grid", row, col);
            self.cells[row * self.cols + col] = change.alive;
        }
    }

    /// Kill every cell
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// States of the eight cells around `(row, col)`, in `NEIGHBOR_OFFSETS` order
    ///
    /// `(row, col)` must be in range. Lookups past an edge wrap to the
    /// opposite edge; only a single step of overflow is ever handled.
    pub fn neighbors(&self, row: usize, col: usize) -> [bool; 8] {
        debug_assert!(self.contains(row, col), "neighbors() called off-grid");

        NEIGHBOR_OFFSETS.map(|(dr, dc)| {
            let r = wrap_step(row, dr, self.rows);
            let c = wrap_step(col, dc, self.cols);
            self.cells[r * self.cols + c]
        })
    }

    /// Number of live cells among the eight neighbors
    #[inline]
    pub fn live_neighbors(&self, row: usize, col: usize) -> u8 {
        self.neighbors(row, col).iter().filter(|&&alive| alive).count() as u8
    }

    /// Visit every cell in row-major order
    pub fn for_each<F>(&self, mut callback: F)
    where
        F: FnMut(usize, usize, bool),
    {
        for row in 0..self.rows {
            for col in 0..self.cols {
                callback(row, col, self.cells[row * self.cols + col]);
            }
        }
    }

    /// Row-major iterator over `(coord, alive)`
    pub fn iter(&self) -> impl Iterator<Item = (Coord, bool)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, &alive)| (Coord::new(idx / cols, idx % cols), alive))
    }

    /// Coordinates of every live cell, row-major
    pub fn live_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.iter()
            .filter_map(|(coord, alive)| if alive { Some(coord) } else { None })
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }
}

/// Move one step along an axis of length `len`, wrapping at either end
#[inline]
fn wrap_step(index: usize, delta: isize, len: usize) -> usize {
    match delta {
        -1 if index == 0 => len - 1,
        -1 => index - 1,
        1 if index + 1 >= len => 0,
        1 => index + 1,
        _ => index,
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols) {
            for &alive in row {
                f.write_str(if alive { "#" } else { "." })?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}
