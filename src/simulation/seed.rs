//! Random initial population

use rand::Rng;

use crate::core::config::SeedingConfig;
use crate::spatial::Grid;

/// Half-open range of indices seeding may use along an axis of length `len`
///
/// Falls back to the whole axis when the margin would leave nothing.
fn seed_band(len: usize, margin: usize) -> (usize, usize) {
    if len > margin * 2 {
        (margin, len - margin)
    } else {
        (0, len)
    }
}

/// Clear `grid` and bring a random number of cells alive
///
/// Draws a count from `[min_alive, max_alive)` and that many coordinates
/// inside the margin band. Repeated draws of the same cell are not retried.
/// Returns the resulting population.
pub fn randomize<R: Rng + ?Sized>(grid: &mut Grid, config: &SeedingConfig, rng: &mut R) -> usize {
    grid.clear();

    let count = if config.min_alive < config.max_alive {
        rng.gen_range(config.min_alive..config.max_alive)
    } else {
        config.min_alive
    };

    let (row_lo, row_hi) = seed_band(grid.rows(), config.margin);
    let (col_lo, col_hi) = seed_band(grid.cols(), config.margin);

    for _ in 0..count {
        let row = rng.gen_range(row_lo..row_hi);
        let col = rng.gen_range(col_lo..col_hi);
        // Both ranges sit inside the grid
        let _ = grid.set(row, col, true);
    }

    let population = grid.population();
    tracing::debug!(drawn = count, population, "randomized grid");
    population
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_population_within_drawn_range() {
        let mut grid = Grid::new(50, 50).unwrap();
        let config = SeedingConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        let population = randomize(&mut grid, &config, &mut rng);
        assert!(population > 0);
        assert!(population < config.max_alive);
        assert_eq!(population, grid.population());
    }

    #[test]
    fn test_margin_is_respected() {
        let mut grid = Grid::new(30, 40).unwrap();
        let config = SeedingConfig {
            min_alive: 200,
            max_alive: 300,
            margin: 5,
            seed: None,
        };
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        randomize(&mut grid, &config, &mut rng);

        for coord in grid.live_cells() {
            assert!((5..25).contains(&coord.row), "row {} in margin", coord.row);
            assert!((5..35).contains(&coord.col), "col {} in margin", coord.col);
        }
    }

    #[test]
    fn test_small_grid_ignores_margin() {
        let mut grid = Grid::new(4, 4).unwrap();
        let config = SeedingConfig {
            min_alive: 3,
            max_alive: 6,
            margin: 5,
            seed: None,
        };
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let population = randomize(&mut grid, &config, &mut rng);
        assert!(population >= 1);
    }

    #[test]
    fn test_same_seed_same_board() {
        let config = SeedingConfig::default();
        let mut a = Grid::new(50, 50).unwrap();
        let mut b = Grid::new(50, 50).unwrap();
        randomize(&mut a, &config, &mut ChaCha8Rng::seed_from_u64(42));
        randomize(&mut b, &config, &mut ChaCha8Rng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_randomize_clears_previous_cells() {
        let mut grid = Grid::new(20, 20).unwrap();
        grid.set(0, 0, true).unwrap();
        let config = SeedingConfig {
            min_alive: 1,
            max_alive: 2,
            margin: 5,
            seed: None,
        };
        randomize(&mut grid, &config, &mut ChaCha8Rng::seed_from_u64(3));
        assert!(!grid.get(0, 0).unwrap());
        assert_eq!(grid.population(), 1);
    }
}
