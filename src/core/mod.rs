pub mod config;
pub mod error;
pub mod types;

pub use config::{GridConfig, SeedingConfig, SimulationConfig};
pub use error::{LifeError, Result};
pub use types::{Change, Coord, Generation};
