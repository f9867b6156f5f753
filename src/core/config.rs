//! Simulation configuration with documented constants
//!
//! Every tunable number lives here. Values can be loaded from a TOML file;
//! any field left out falls back to its default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::{LifeError, Result};

/// Maximum number of snapshots kept for cycle detection
pub const DEFAULT_HISTORY_CAPACITY: usize = 100;

/// Configuration for a simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Board dimensions, fixed for the lifetime of a simulation
    pub grid: GridConfig,

    /// Delay between generations when driven by the scheduler (milliseconds)
    ///
    /// At 200ms the board advances five generations per second.
    pub tick_interval_ms: u64,

    /// How many past snapshots are compared against for cycle detection
    ///
    /// Oscillators with a period longer than this go undetected and only
    /// stop at `max_generations`.
    pub history_capacity: usize,

    /// Random seeding parameters
    pub seeding: SeedingConfig,

    /// Optional cap on generations for unattended runs
    pub max_generations: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub rows: usize,
    pub cols: usize,
}

/// Parameters for random initial population
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedingConfig {
    /// Lower bound (inclusive) on the number of cells to bring alive
    pub min_alive: usize,

    /// Upper bound (exclusive) on the number of cells to bring alive
    ///
    /// Picks may land on the same cell twice, so the actual population
    /// can come out lower than the number drawn.
    pub max_alive: usize,

    /// Width of the border band that seeding never touches
    ///
    /// Keeps the initial soup away from the seam of the torus. Shrinks to
    /// zero on boards too small to honor it.
    pub margin: usize,

    /// Fixed RNG seed for reproducible boards; entropy when absent
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            tick_interval_ms: 200,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            seeding: SeedingConfig::default(),
            max_generations: None,
        }
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self { rows: 50, cols: 50 }
    }
}

impl Default for SeedingConfig {
    fn default() -> Self {
        Self {
            min_alive: 100,
            max_alive: 500,
            margin: 5,
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load and validate a config from a TOML file
    pub fn load_from_toml(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse_toml(&content)
    }

    /// Parse and validate a config from a TOML string
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: SimulationConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.grid.rows == 0 || self.grid.cols == 0 {
            return Err(LifeError::InvalidDimensions {
                rows: self.grid.rows,
                cols: self.grid.cols,
            });
        }

        if self.tick_interval_ms == 0 {
            return Err(LifeError::InvalidConfig(
                "tick_interval_ms must be positive".into(),
            ));
        }

        if self.history_capacity == 0 {
            return Err(LifeError::InvalidConfig(
                "history_capacity must be positive".into(),
            ));
        }

        if self.seeding.min_alive >= self.seeding.max_alive {
            return Err(LifeError::InvalidConfig(format!(
                "seeding.min_alive ({}) should be < seeding.max_alive ({})",
                self.seeding.min_alive, self.seeding.max_alive
            )));
        }

        Ok(())
    }
}
