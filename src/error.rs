use std::io;

use thiserror::Error;

use crate::config::{MAX_GRID_SIZE, MIN_GRID_SIZE};

/// Rejected engine construction input.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum GameError {
    #[error("grid size {0} is too small; the starting snake needs at least {}", MIN_GRID_SIZE)]
    GridTooSmall(u16),
    #[error("grid size {0} is too large; at most {} is supported", MAX_GRID_SIZE)]
    GridTooLarge(u16),
}

/// Raised when a raw name is not one of `up`, `down`, `left`, `right`.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[error("unrecognized direction `{0}`")]
pub struct DirectionParseError(pub String);

/// Failures while loading or saving the score history file.
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("score history I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("score history is malformed: {0}")]
    Parse(#[from] serde_json::Error),
}
