use thiserror::Error;

/// Errors surfaced by the simulation engine and its adapters.
#[derive(Error, Debug)]
pub enum LifeError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Cell ({x}, {y}) is outside a {size}x{size} grid")]
    OutOfBounds { x: usize, y: usize, size: usize },
    #[error("Cell at row {row}, column {col} is not a boolean")]
    MalformedCell { row: usize, col: usize },
    #[error("Failed to parse grid: {0}")]
    Deserialization(String),
    #[error("Failed to encode grid: {0}")]
    Serialization(String),
    #[error("Grid file I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for LifeError {
    fn from(err: serde_json::Error) -> Self {
        LifeError::Deserialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, LifeError>;
