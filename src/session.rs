use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::config::GridSize;
use crate::game::{GameState, GameStatus};
use crate::input::GameInput;
use crate::random::RandomSource;
use crate::score::{unix_millis, HistoryEntry, ScoreHistory};

/// Which screen the presenter shows.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub enum Page {
    #[default]
    Game,
    Leaderboard,
}

/// The single current game plus everything that outlives it.
///
/// Every engine call replaces `state` wholesale. Finished games are recorded
/// into the history the moment a tick turns a running game into game over.
#[derive(Debug)]
pub struct Session<R> {
    state: GameState,
    rng: R,
    history: ScoreHistory,
    history_path: Option<PathBuf>,
    page: Page,
}

impl<R: RandomSource> Session<R> {
    pub fn new(grid_size: GridSize, mut rng: R, history: ScoreHistory) -> Self {
        let state = GameState::new(grid_size, &mut rng);
        Self {
            state,
            rng,
            history,
            history_path: None,
            page: Page::Game,
        }
    }

    /// Persists the history to `path` after every recorded game.
    #[must_use]
    pub fn with_history_path(mut self, path: PathBuf) -> Self {
        self.history_path = Some(path);
        self
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn history(&self) -> &ScoreHistory {
        &self.history
    }

    #[must_use]
    pub fn page(&self) -> Page {
        self.page
    }

    /// Applies one input event. Returns `false` when the player asked to quit.
    pub fn apply(&mut self, input: GameInput) -> bool {
        match input {
            GameInput::Direction(direction) => {
                self.state = self.state.set_queued_direction(direction);
            }
            GameInput::TogglePause => {
                self.state = self.state.toggle_pause();
                debug!(status = ?self.state.status(), "pause toggled");
            }
            GameInput::Restart => {
                self.state = self.state.restart(&mut self.rng);
                info!(grid_size = self.state.grid_size.get(), "game restarted");
            }
            GameInput::SwitchPage => {
                self.page = match self.page {
                    Page::Game => Page::Leaderboard,
                    Page::Leaderboard => Page::Game,
                };
            }
            GameInput::Quit => return false,
        }
        true
    }

    /// Advances the game by one tick, stamping any finished game with the
    /// current wall-clock time.
    pub fn tick(&mut self) -> Option<HistoryEntry> {
        self.tick_at(unix_millis())
    }

    /// Advances the game by one tick. When the tick ends the game, the score
    /// is recorded with `played_at` and the new entry is returned.
    pub fn tick_at(&mut self, played_at: u64) -> Option<HistoryEntry> {
        let was_running = self.state.status() == GameStatus::Running;
        self.state = self.state.step(&mut self.rng);

        if !(was_running && self.state.game_over) {
            return None;
        }

        info!(
            score = self.state.score,
            length = self.state.snake.len(),
            ticks = self.state.tick_count,
            reason = ?self.state.death_reason,
            "game over"
        );

        let entry = HistoryEntry::new(self.state.score, played_at);
        self.history.record(entry.clone());
        self.persist_history();
        Some(entry)
    }

    fn persist_history(&self) {
        let Some(path) = &self.history_path else {
            return;
        };

        if let Err(error) = self.history.save_to_path(path) {
            warn!(path = %path.display(), %error, "failed to save score history");
        }
    }
}
