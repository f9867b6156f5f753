//! Simulation instance - one board, its history, and run state
//!
//! Each `Simulation` owns its grid and history outright, so any number of
//! independent boards can exist side by side. Stepping and editing both take
//! `&mut self`; a toggle can never land in the middle of a step.

use std::time::Instant;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::core::config::SimulationConfig;
use crate::core::error::Result;
use crate::core::types::{Coord, Generation};
use crate::simulation::history::History;
use crate::simulation::output::{HaltReason, RunSummary};
use crate::simulation::patterns::Pattern;
use crate::simulation::seed;
use crate::simulation::tick::{self, StepResult};
use crate::spatial::Grid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RunState {
    Running,
    Stopped,
}

#[derive(Debug, Clone)]
pub struct Simulation {
    config: SimulationConfig,
    grid: Grid,
    history: History,
    generation: Generation,
    state: RunState,
    halt_reason: Option<HaltReason>,
}

impl Simulation {
    /// Build a stopped simulation with an all-dead board
    pub fn new(config: SimulationConfig) -> Result<Self> {
        config.validate()?;
        let grid = Grid::new(config.grid.rows, config.grid.cols)?;
        let history = History::with_capacity(config.history_capacity);

        Ok(Self {
            config,
            grid,
            history,
            generation: 0,
            state: RunState::Stopped,
            halt_reason: None,
        })
    }

    /// Default config with the given board size
    pub fn with_dimensions(rows: usize, cols: usize) -> Result<Self> {
        let mut config = SimulationConfig::default();
        config.grid.rows = rows;
        config.grid.cols = cols;
        Self::new(config)
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    /// Why the last run stopped, if it stopped on its own
    pub fn halt_reason(&self) -> Option<HaltReason> {
        self.halt_reason
    }

    pub fn population(&self) -> usize {
        self.grid.population()
    }

    pub fn is_alive(&self, row: usize, col: usize) -> Result<bool> {
        self.grid.get(row, col)
    }

    /// Write one cell directly
    pub fn set_cell(&mut self, row: usize, col: usize, alive: bool) -> Result<()> {
        self.grid.set(row, col, alive)
    }

    /// Flip one cell, as a click on the board would
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<bool> {
        self.grid.toggle(row, col)
    }

    /// Stamp a pattern onto the current board
    pub fn load_pattern(&mut self, pattern: &Pattern, origin: Coord) -> Result<()> {
        pattern.place(&mut self.grid, origin)
    }

    pub fn start(&mut self) {
        if self.state == RunState::Stopped {
            tracing::info!(generation = self.generation, "simulation started");
        }
        self.state = RunState::Running;
        self.halt_reason = None;
    }

    pub fn stop(&mut self) {
        self.state = RunState::Stopped;
    }

    /// Stop and record why
    pub fn halt(&mut self, reason: HaltReason) {
        self.state = RunState::Stopped;
        self.halt_reason = Some(reason);
        tracing::info!(
            generation = self.generation,
            population = self.grid.population(),
            reason = reason.describe(),
            "simulation halted"
        );
    }

    /// Kill every cell, forget history, and stop
    pub fn reset(&mut self) {
        self.grid.clear();
        self.history.clear();
        self.generation = 0;
        self.state = RunState::Stopped;
        self.halt_reason = None;
    }

    /// Reset, then seed a random population from `rng`
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) -> usize {
        self.reset();
        seed::randomize(&mut self.grid, &self.config.seeding, rng)
    }

    /// Reset, then seed reproducibly from `seed`
    pub fn randomize_with_seed(&mut self, seed: u64) -> usize {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.randomize(&mut rng)
    }

    /// Reset, then seed from the configured seed or from entropy
    pub fn randomize_from_config(&mut self) -> usize {
        match self.config.seeding.seed {
            Some(seed) => self.randomize_with_seed(seed),
            None => self.randomize(&mut ChaCha8Rng::from_entropy()),
        }
    }

    /// Advance one generation
    ///
    /// Works whether or not the simulation is running. A result that calls
    /// for stopping moves the simulation to `Stopped` and records why.
    pub fn step(&mut self) -> StepResult {
        let result = tick::step(&mut self.grid, &mut self.history);

        if result.changed {
            self.generation += 1;
        }

        if !result.changed {
            let reason = if self.grid.population() == 0 {
                HaltReason::Extinct
            } else {
                HaltReason::Stable
            };
            self.halt(reason);
        } else if result.cycle_detected {
            self.halt(HaltReason::Cycle);
        }

        result
    }

    /// Step until the board halts or `max_generations` steps have run
    pub fn run(&mut self, max_generations: Option<u64>) -> RunSummary {
        let start = Instant::now();
        let mut steps: u64 = 0;

        self.start();
        while self.is_running() {
            if max_generations.is_some_and(|limit| steps >= limit) {
                self.halt(HaltReason::GenerationLimit);
                break;
            }
            self.step();
            steps += 1;
        }

        self.summary(start.elapsed().as_millis() as u64)
    }

    pub fn summary(&self, elapsed_ms: u64) -> RunSummary {
        RunSummary {
            rows: self.grid.rows(),
            cols: self.grid.cols(),
            generations: self.generation,
            halt_reason: self.halt_reason,
            final_population: self.grid.population(),
            history_len: self.history.len(),
            elapsed_ms,
        }
    }
}
