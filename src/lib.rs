//! Torus Life - Conway's Game of Life on a wrap-around grid
//!
//! Runs until the population stabilizes, dies out, or repeats a state
//! already seen in its recent history.

pub mod core;
pub mod rules;
pub mod simulation;
pub mod spatial;
