use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use grid_snake::config::{Cli, GridSize, FRAME_POLL_MS};
use grid_snake::input::InputHandler;
use grid_snake::logging;
use grid_snake::random::{RandomSource, RngSource};
use grid_snake::renderer;
use grid_snake::score::{history_path, ScoreHistory};
use grid_snake::session::Session;
use grid_snake::terminal_runtime::{install_panic_hook, TerminalGuard};
use tracing::{info, warn};

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_file.as_deref())?;

    let grid_size = GridSize::new(cli.grid_size)
        .map_err(|error| io::Error::new(io::ErrorKind::InvalidInput, error))?;
    let (history, history_file) = load_history(&cli);

    let rng = match cli.seed {
        Some(seed) => RngSource::seeded(seed),
        None => RngSource::from_entropy(),
    };
    let mut session = Session::new(grid_size, rng, history);
    if let Some(path) = history_file {
        session = session.with_history_path(path);
    }

    info!(
        grid_size = grid_size.get(),
        tick_ms = cli.tick_ms,
        seed = ?cli.seed,
        "starting session"
    );

    install_panic_hook();
    let mut guard = TerminalGuard::enter()?;
    run(&mut guard, &mut session, Duration::from_millis(cli.tick_ms))
}

/// Loads the score history before raw mode so problems can be reported on
/// the normal terminal. A broken file is not fatal: play continues with an
/// empty history and the file is left untouched.
fn load_history(cli: &Cli) -> (ScoreHistory, Option<PathBuf>) {
    if cli.no_history {
        return (ScoreHistory::default(), None);
    }

    let path = cli.history_file.clone().unwrap_or_else(history_path);
    match ScoreHistory::load_from_path(&path) {
        Ok(history) => (history, Some(path)),
        Err(error) => {
            eprintln!("Warning: ignoring score history at {}: {error}", path.display());
            warn!(path = %path.display(), %error, "score history unreadable");
            (ScoreHistory::default(), None)
        }
    }
}

fn run<R: RandomSource>(
    guard: &mut TerminalGuard,
    session: &mut Session<R>,
    tick_interval: Duration,
) -> io::Result<()> {
    let mut input = InputHandler::new();
    let frame_poll = Duration::from_millis(FRAME_POLL_MS);
    let mut last_tick = Instant::now();

    loop {
        guard.terminal_mut().draw(|frame| {
            renderer::render(frame, session.state(), session.history(), session.page());
        })?;

        if let Some(game_input) = input.poll_input(frame_poll)? {
            if !session.apply(game_input) {
                break;
            }
        }

        if last_tick.elapsed() >= tick_interval {
            session.tick();
            last_tick = Instant::now();
        }
    }

    info!(best = session.history().best_score(), "session ended");
    Ok(())
}
