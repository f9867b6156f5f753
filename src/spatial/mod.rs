//! Board storage and neighborhood lookup

pub mod grid;

pub use grid::{Grid, NEIGHBOR_OFFSETS};
