use std::path::PathBuf;

use clap::Parser;

use crate::error::GameError;

/// Board side length used when none is given.
pub const DEFAULT_GRID_SIZE: u16 = 20;

/// Smallest board that fits the three-segment starting snake, whose tail sits
/// at `floor(side / 2) - 2`.
pub const MIN_GRID_SIZE: u16 = 4;

/// Largest board accepted; food placement scans every cell each time it runs.
pub const MAX_GRID_SIZE: u16 = 100;

/// Fixed tick interval in milliseconds.
pub const TICK_INTERVAL_MS: u64 = 120;

/// Frame/input polling interval in milliseconds.
pub const FRAME_POLL_MS: u64 = 16;

/// Number of finished games kept in the score history.
pub const HISTORY_LIMIT: usize = 10;

/// Length of a freshly created snake.
pub const INITIAL_SNAKE_LEN: usize = 3;

/// Terminal columns per logical cell, so cells render roughly square.
pub const CELL_WIDTH: u16 = 2;

pub const GLYPH_SNAKE_HEAD: &str = "██";
pub const GLYPH_SNAKE_BODY: &str = "▓▓";
pub const GLYPH_FOOD: &str = "◖◗";

/// Side length of the square board, fixed for the lifetime of one game.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct GridSize(u16);

impl GridSize {
    /// Validates a side length. Boards smaller than [`MIN_GRID_SIZE`] cannot
    /// hold the starting snake; boards larger than [`MAX_GRID_SIZE`] are
    /// rejected as well.
    pub fn new(side: u16) -> Result<Self, GameError> {
        if side < MIN_GRID_SIZE {
            return Err(GameError::GridTooSmall(side));
        }
        if side > MAX_GRID_SIZE {
            return Err(GameError::GridTooLarge(side));
        }
        Ok(Self(side))
    }

    #[must_use]
    pub fn get(self) -> u16 {
        self.0
    }

    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.0) * usize::from(self.0)
    }

    /// Center coordinate on either axis (`floor(side / 2)`).
    #[must_use]
    pub fn center(self) -> i32 {
        i32::from(self.0 / 2)
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self(DEFAULT_GRID_SIZE)
    }
}

/// Command-line options for the terminal front end.
#[derive(Debug, Clone, Parser)]
#[command(name = "grid-snake", version, about)]
pub struct Cli {
    /// Side length of the square board.
    #[arg(long = "grid-size", default_value_t = DEFAULT_GRID_SIZE, value_parser = parse_grid_size)]
    pub grid_size: u16,

    /// Milliseconds between ticks.
    #[arg(long = "tick-ms", default_value_t = TICK_INTERVAL_MS)]
    pub tick_ms: u64,

    /// Seed for reproducible food placement.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Do not load or record the score history.
    #[arg(long = "no-history")]
    pub no_history: bool,

    /// Score history file; defaults to the platform data directory.
    #[arg(long = "history-file")]
    pub history_file: Option<PathBuf>,

    /// Write tracing output to this file (filtered by `RUST_LOG`).
    #[arg(long = "log-file")]
    pub log_file: Option<PathBuf>,
}

fn parse_grid_size(raw: &str) -> Result<u16, String> {
    let side: u16 = raw.parse().map_err(|e| format!("{e}"))?;
    GridSize::new(side)
        .map(GridSize::get)
        .map_err(|e| e.to_string())
}
