//! Torus Life - Entry Point
//!
//! Builds a board from config and command-line flags, seeds it (randomly or
//! from a named pattern), then drives one step per timer tick until the
//! population stabilizes, dies out, or starts repeating.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use tokio::runtime::Runtime;
use tracing_subscriber::EnvFilter;

use torus_life::core::config::SimulationConfig;
use torus_life::core::error::Result;
use torus_life::simulation::{patterns, HaltReason, RunSummary, Simulation};

/// Conway's Game of Life on a wrap-around board
#[derive(Parser, Debug)]
#[command(name = "torus-life")]
#[command(about = "Run Game of Life on a toroidal grid until it stabilizes or cycles")]
struct Args {
    /// TOML config file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Board height
    #[arg(long)]
    rows: Option<usize>,

    /// Board width
    #[arg(long)]
    cols: Option<usize>,

    /// RNG seed for a reproducible random board
    #[arg(long)]
    seed: Option<u64>,

    /// Start from a named pattern instead of a random board
    #[arg(long)]
    pattern: Option<String>,

    /// Milliseconds between generations
    #[arg(long)]
    interval_ms: Option<u64>,

    /// Stop after this many generations
    #[arg(long)]
    max_generations: Option<u64>,

    /// Step as fast as possible instead of on a timer
    #[arg(long, default_value_t = false)]
    no_delay: bool,

    /// Print the board after every generation
    #[arg(long, default_value_t = false)]
    print: bool,

    /// Emit the run summary as JSON
    #[arg(long, default_value_t = false)]
    json: bool,

    /// List built-in patterns and exit
    #[arg(long, default_value_t = false)]
    list_patterns: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("torus_life=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if args.list_patterns {
        for name in patterns::names() {
            println!("{}", name);
        }
        return Ok(());
    }

    let config = build_config(&args)?;
    tracing::info!(
        rows = config.grid.rows,
        cols = config.grid.cols,
        interval_ms = config.tick_interval_ms,
        "Torus Life starting"
    );

    let mut sim = Simulation::new(config)?;
    seed_board(&mut sim, args.pattern.as_deref())?;

    if args.print {
        print!("{}", sim.grid());
    }

    let summary = if args.no_delay && !args.print {
        let limit = sim.config().max_generations;
        sim.run(limit)
    } else {
        let rt = Runtime::new()?;
        rt.block_on(drive(&mut sim, args.no_delay, args.print))
    };

    if args.json {
        println!("{}", summary.to_json()?);
    } else {
        println!("{}", summary.summary());
    }

    Ok(())
}

/// Layer command-line overrides on top of the config file (or defaults)
fn build_config(args: &Args) -> Result<SimulationConfig> {
    let mut config = match &args.config {
        Some(path) => SimulationConfig::load_from_toml(path)?,
        None => SimulationConfig::default(),
    };

    if let Some(rows) = args.rows {
        config.grid.rows = rows;
    }
    if let Some(cols) = args.cols {
        config.grid.cols = cols;
    }
    if let Some(seed) = args.seed {
        config.seeding.seed = Some(seed);
    }
    if let Some(interval) = args.interval_ms {
        config.tick_interval_ms = interval;
    }
    if let Some(limit) = args.max_generations {
        config.max_generations = Some(limit);
    }

    config.validate()?;
    Ok(config)
}

fn seed_board(sim: &mut Simulation, pattern: Option<&str>) -> Result<()> {
    match pattern {
        Some(name) => {
            let pattern = patterns::find(name)?;
            let origin = pattern.centered_origin(sim.grid());
            sim.load_pattern(pattern, origin)?;
            tracing::info!(pattern = pattern.name, "loaded pattern");
        }
        None => {
            let population = sim.randomize_from_config();
            tracing::info!(population, "seeded random board");
        }
    }
    Ok(())
}

/// Step once per timer tick until the board halts, the cap is hit, or Ctrl-C
async fn drive(sim: &mut Simulation, no_delay: bool, print: bool) -> RunSummary {
    let started = Instant::now();
    let limit = sim.config().max_generations;
    let period = if no_delay {
        Duration::from_millis(1)
    } else {
        Duration::from_millis(sim.config().tick_interval_ms)
    };
    let mut ticker = tokio::time::interval(period);
    let mut steps: u64 = 0;

    sim.start();
    while sim.is_running() {
        tokio::select! {
            _ = ticker.tick() => {
                if limit.is_some_and(|limit| steps >= limit) {
                    sim.halt(HaltReason::GenerationLimit);
                } else {
                    let result = sim.step();
                    steps += 1;
                    if print && result.changed {
                        println!("-- generation {} --", sim.generation());
                        print!("{}", sim.grid());
                    }
                }
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::warn!(generation = sim.generation(), "interrupted");
                sim.stop();
            }
        }
    }

    sim.summary(started.elapsed().as_millis() as u64)
}
