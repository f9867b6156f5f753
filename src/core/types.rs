//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

/// Generation counter (simulation time unit)
pub type Generation = u64;

/// A cell position on the grid
///
/// Field order matters: the derived `Ord` is row-major, which is the
/// canonical ordering used for snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

/// A proposed mutation: cell `coord` becomes `alive`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Change {
    pub coord: Coord,
    pub alive: bool,
}

impl Change {
    pub const fn new(row: usize, col: usize, alive: bool) -> Self {
        Self {
            coord: Coord::new(row, col),
            alive,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coord_orders_row_major() {
        let mut coords = vec![
            Coord::new(1, 0),
            Coord::new(0, 10),
            Coord::new(0, 2),
            Coord::new(1, 1),
        ];
        coords.sort();
        assert_eq!(
            coords,
            vec![
                Coord::new(0, 2),
                Coord::new(0, 10),
                Coord::new(1, 0),
                Coord::new(1, 1),
            ]
        );
    }
}
