//! Deterministic grid Snake.
//!
//! The engine (`direction`, `snake`, `food`, `random`, `game`) is pure: every
//! operation takes a [`game::GameState`] by reference and returns a fresh one.
//! The remaining modules are the terminal glue that drives it.

pub mod config;
pub mod direction;
pub mod error;
pub mod food;
pub mod game;
pub mod input;
pub mod logging;
pub mod random;
pub mod renderer;
pub mod score;
pub mod session;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
