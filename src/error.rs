//! Error types for the delivery planner.

use thiserror::Error;

use crate::grid::Position;

/// Errors raised for malformed input or configuration.
///
/// "No path found" is never an error: planners signal it with an empty path.
#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("Unknown algorithm '{0}' (expected one of: bfs, ucs, astar)")]
    UnknownAlgorithm(String),

    #[error("Invalid grid: {0}")]
    InvalidGrid(String),

    #[error("Position {pos} is outside the {rows}x{cols} grid")]
    OutOfBounds { pos: Position, rows: usize, cols: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<toml::de::Error> for PlannerError {
    fn from(e: toml::de::Error) -> Self {
        PlannerError::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PlannerError>;
