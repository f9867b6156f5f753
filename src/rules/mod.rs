//! Cell transition rules

pub mod life;

pub use life::{becomes_alive, next_state, stays_alive};
