//! Classic Life transition rule (B3/S23)
//!
//! Pure functions of a cell's current state and its live-neighbor count.

/// Survival: a live cell with two or three live neighbors lives on
#[inline]
pub fn stays_alive(live_neighbors: u8) -> bool {
    matches!(live_neighbors, 2 | 3)
}

/// Birth: a dead cell with exactly three live neighbors comes alive
#[inline]
pub fn becomes_alive(live_neighbors: u8) -> bool {
    live_neighbors == 3
}

/// State of a cell in the next generation
#[inline]
pub fn next_state(was_alive: bool, live_neighbors: u8) -> bool {
    if was_alive {
        stays_alive(live_neighbors)
    } else {
        becomes_alive(live_neighbors)
    }
}
