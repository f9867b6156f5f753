//! Integration tests for the step engine, history, and simulation lifecycle
//!
//! These tests drive whole boards through many generations:
//! - Still lifes stop immediately, oscillators stop on their first repeat
//! - Extinction takes one changing step and one idle step
//! - History stays capped at 100 snapshots with FIFO eviction
//! - Every step is computed from the pre-step board

use torus_life::core::config::SimulationConfig;
use torus_life::core::types::{Change, Coord};
use torus_life::rules;
use torus_life::simulation::{patterns, step, HaltReason, History, Simulation, Snapshot};
use torus_life::spatial::Grid;

fn grid_with(rows: usize, cols: usize, live: &[(usize, usize)]) -> Grid {
    let mut grid = Grid::new(rows, cols).unwrap();
    for &(r, c) in live {
        grid.set(r, c, true).unwrap();
    }
    grid
}

/// Next generation computed from an untouched copy of the board
fn reference_next(grid: &Grid) -> Grid {
    let mut next = grid.clone();
    grid.for_each(|row, col, alive| {
        let n = grid.live_neighbors(row, col);
        next.set(row, col, rules::next_state(alive, n)).unwrap();
    });
    next
}

/// Next generation written cell by cell into the board being read
fn naive_in_place(grid: &Grid) -> Grid {
    let mut g = grid.clone();
    for row in 0..g.rows() {
        for col in 0..g.cols() {
            let alive = g.get(row, col).unwrap();
            let n = g.live_neighbors(row, col);
            g.set(row, col, rules::next_state(alive, n)).unwrap();
        }
    }
    g
}

#[test]
fn test_block_produces_no_change() {
    let mut grid = grid_with(10, 10, &[(4, 4), (4, 5), (5, 4), (5, 5)]);
    let mut history = History::new();
    let result = step(&mut grid, &mut history);
    assert!(!result.changed);
    assert!(!result.cycle_detected);
}

#[test]
fn test_blinker_cycle_detected_exactly_on_second_recurrence() {
    let mut grid = grid_with(7, 7, &[(3, 2), (3, 3), (3, 4)]);
    let mut history = History::new();

    let mut detected_at = None;
    for generation in 1..=10 {
        let result = step(&mut grid, &mut history);
        assert!(result.changed);
        if result.cycle_detected {
            detected_at = Some(generation);
            break;
        }
    }

    assert_eq!(detected_at, Some(3));
}

#[test]
fn test_extinction_sequence() {
    let mut grid = grid_with(9, 9, &[(4, 4)]);
    let mut history = History::new();

    let first = step(&mut grid, &mut history);
    assert!(first.changed);
    assert!(!first.cycle_detected);
    assert_eq!(grid.population(), 0);

    let second = step(&mut grid, &mut history);
    assert!(!second.changed);
    assert!(!second.cycle_detected);
}

#[test]
fn test_history_caps_at_one_hundred_fifo() {
    // A glider on a 40x40 torus takes 160 generations to return home,
    // so the first 160 generations are all distinct.
    let mut grid = Grid::new(40, 40).unwrap();
    patterns::find("glider")
        .unwrap()
        .place(&mut grid, Coord::new(1, 1))
        .unwrap();
    let mut history = History::new();

    let first = step(&mut grid, &mut history);
    assert!(first.changed);
    let gen1 = Snapshot::from_grid(&grid);
    let second = step(&mut grid, &mut history);
    assert!(second.changed);
    let gen2 = Snapshot::from_grid(&grid);

    for _ in 3..=100 {
        let result = step(&mut grid, &mut history);
        assert!(result.changed && !result.cycle_detected);
    }
    assert_eq!(history.len(), 100);
    assert!(history.exists(&gen1));

    let gen101 = step(&mut grid, &mut history);
    assert!(!gen101.cycle_detected);
    assert_eq!(history.len(), 100);
    assert!(!history.exists(&gen1));
    assert!(history.exists(&gen2));

    let gen102 = step(&mut grid, &mut history);
    assert!(!gen102.cycle_detected);
    assert_eq!(history.len(), 100);
    assert!(!history.exists(&gen1));
    assert!(!history.exists(&gen2));

    for _ in 103..=150 {
        step(&mut grid, &mut history);
        assert_eq!(history.len(), 100);
    }
}

#[test]
fn test_step_uses_pre_step_board() {
    // Horizontal blinker: an in-place pass births (2, 3), and (2, 4) then
    // counts it as a neighbor and is wrongly born as well.
    let grid = grid_with(7, 7, &[(3, 2), (3, 3), (3, 4)]);
    let expected = reference_next(&grid);
    assert_ne!(naive_in_place(&grid), expected);

    let mut stepped = grid.clone();
    step(&mut stepped, &mut History::new());
    assert_eq!(stepped, expected);
    let live: Vec<_> = stepped.live_cells().map(|c| (c.row, c.col)).collect();
    assert_eq!(live, vec![(2, 3), (3, 3), (4, 3)]);
}

#[test]
fn test_alternating_row_matches_batch_reference() {
    let mut live = Vec::new();
    for col in (0..12).step_by(2) {
        live.push((5, col));
        live.push((6, col + 1));
    }
    let grid = grid_with(12, 12, &live);
    let expected = reference_next(&grid);

    let mut stepped = grid.clone();
    let result = step(&mut stepped, &mut History::new());
    assert_eq!(stepped, expected);

    // Every reported change is exactly a cell that differs between boards
    for Change { coord, alive } in &result.changes {
        assert_ne!(grid.get(coord.row, coord.col).unwrap(), *alive);
        assert_eq!(stepped.get(coord.row, coord.col).unwrap(), *alive);
    }
}

#[test]
fn test_wraparound_blinker_on_edge() {
    // Blinker split across the left/right seam
    let mut grid = grid_with(6, 6, &[(0, 5), (0, 0), (0, 1)]);
    let mut history = History::new();
    step(&mut grid, &mut history);
    let live: Vec<_> = grid.live_cells().map(|c| (c.row, c.col)).collect();
    assert_eq!(live, vec![(0, 0), (1, 0), (5, 0)]);
}

#[test]
fn test_random_soup_eventually_halts() {
    let mut config = SimulationConfig::default();
    config.seeding.seed = Some(12345);
    let mut sim = Simulation::new(config).unwrap();
    sim.randomize_from_config();

    let summary = sim.run(Some(5000));
    assert!(summary.halt_reason.is_some());
    assert!(summary.history_len <= 100);
}

#[test]
fn test_restart_after_halt() {
    let mut sim = Simulation::with_dimensions(10, 10).unwrap();
    sim.load_pattern(patterns::find("blinker").unwrap(), Coord::new(4, 3))
        .unwrap();
    let first = sim.run(None);
    assert_eq!(first.halt_reason, Some(HaltReason::Cycle));

    // Running again without reseeding: history still holds both phases
    let again = sim.run(None);
    assert_eq!(again.halt_reason, Some(HaltReason::Cycle));
    assert_eq!(again.generations, first.generations + 1);

    sim.reset();
    sim.load_pattern(patterns::find("blinker").unwrap(), Coord::new(4, 3))
        .unwrap();
    let fresh = sim.run(None);
    assert_eq!(fresh.generations, 3);
}

#[test]
fn test_config_file_drives_simulation() {
    let dir = std::env::temp_dir().join("torus_life_config_test");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("life.toml");
    std::fs::write(
        &path,
        "history_capacity = 10\n[grid]\nrows = 12\ncols = 15\n[seeding]\nmin_alive = 5\nmax_alive = 10\nseed = 9\n",
    )
    .unwrap();

    let config = SimulationConfig::load_from_toml(&path).unwrap();
    let mut sim = Simulation::new(config).unwrap();
    assert_eq!(sim.grid().rows(), 12);
    assert_eq!(sim.grid().cols(), 15);
    assert_eq!(sim.history().capacity(), 10);

    let population = sim.randomize_from_config();
    assert!(population >= 1 && population < 10);
}
