//! Named starting patterns
//!
//! Cells are offsets from the pattern's top-left corner.

use crate::core::error::{LifeError, Result};
use crate::core::types::Coord;
use crate::spatial::Grid;

pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "block",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
    },
    Pattern {
        name: "blinker",
        cells: &[(0, 0), (0, 1), (0, 2)],
    },
    Pattern {
        name: "toad",
        cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
    },
    Pattern {
        name: "beacon",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
    },
    Pattern {
        name: "glider",
        cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    },
    Pattern {
        name: "r-pentomino",
        cells: &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
    },
    Pattern {
        name: "pulsar",
        cells: &[
            (0, 2), (0, 3), (0, 4), (0, 8), (0, 9), (0, 10),
            (2, 0), (2, 5), (2, 7), (2, 12),
            (3, 0), (3, 5), (3, 7), (3, 12),
            (4, 0), (4, 5), (4, 7), (4, 12),
            (5, 2), (5, 3), (5, 4), (5, 8), (5, 9), (5, 10),
            (7, 2), (7, 3), (7, 4), (7, 8), (7, 9), (7, 10),
            (8, 0), (8, 5), (8, 7), (8, 12),
            (9, 0), (9, 5), (9, 7), (9, 12),
            (10, 0), (10, 5), (10, 7), (10, 12),
            (12, 2), (12, 3), (12, 4), (12, 8), (12, 9), (12, 10),
        ],
    },
];

impl Pattern {
    /// Bounding box as (height, width)
    pub fn extent(&self) -> (usize, usize) {
        self.cells.iter().fold((0, 0), |(h, w), &(r, c)| {
            (h.max(r + 1), w.max(c + 1))
        })
    }

    /// Set this pattern's cells alive with its top-left corner at `origin`
    ///
    /// Other cells are left untouched. Fails without writing anything if the
    /// pattern would cross an edge.
    pub fn place(&self, grid: &mut Grid, origin: Coord) -> Result<()> {
        let (height, width) = self.extent();
        if origin.row + height > grid.rows() || origin.col + width > grid.cols() {
            return Err(LifeError::PatternOutOfBounds {
                name: self.name.to_string(),
                row: origin.row,
                col: origin.col,
                rows: grid.rows(),
                cols: grid.cols(),
            });
        }

        for &(r, c) in self.cells {
            grid.set(origin.row + r, origin.col + c, true)?;
        }
        Ok(())
    }

    /// Origin that centers this pattern on `grid` (clamped at the top-left)
    pub fn centered_origin(&self, grid: &Grid) -> Coord {
        let (height, width) = self.extent();
        Coord::new(
            grid.rows().saturating_sub(height) / 2,
            grid.cols().saturating_sub(width) / 2,
        )
    }
}

/// Look up a pattern by name, ignoring case
pub fn find(name: &str) -> Result<&'static Pattern> {
    PATTERNS
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| LifeError::UnknownPattern(name.to_string()))
}

/// Names of every built-in pattern
pub fn names() -> impl Iterator<Item = &'static str> {
    PATTERNS.iter().map(|p| p.name)
}
