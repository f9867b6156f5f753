use thiserror::Error;

#[derive(Error, Debug)]
pub enum LifeError {
    #[error("Invalid grid dimensions: {rows}x{cols} (both must be positive)")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("Cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("Unknown pattern: {0}")]
    UnknownPattern(String),

    #[error("Pattern {name} does not fit at ({row}, {col}) on a {rows}x{cols} grid")]
    PatternOutOfBounds {
        name: String,
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LifeError>;
