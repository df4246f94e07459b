use crate::config::{GridSize, INITIAL_SNAKE_LEN};
use crate::direction::{can_turn, Direction};
use crate::food::place_food;
use crate::random::RandomSource;
use crate::snake::{Position, Snake};

/// High-level gameplay state derived from the two flags.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Running,
    Paused,
    GameOver,
}

/// What ended the game.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
}

/// Snapshot of one game.
///
/// Operations never modify a state in place: each returns a new value and the
/// caller decides which snapshot is current. A no-op returns a value equal to
/// its input.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct GameState {
    pub grid_size: GridSize,
    pub snake: Snake,
    /// Direction applied on the most recent tick.
    pub direction: Direction,
    /// Direction the next tick will apply.
    pub queued_direction: Direction,
    pub food: Option<Position>,
    pub score: u32,
    pub game_over: bool,
    pub paused: bool,
    pub death_reason: Option<DeathReason>,
    /// Number of committed ticks since the game started.
    pub tick_count: u64,
}

impl GameState {
    /// Creates a fresh game: a three-segment snake centered on the board
    /// heading right, and one food item.
    #[must_use]
    pub fn new<R: RandomSource + ?Sized>(grid_size: GridSize, rng: &mut R) -> Self {
        let center = grid_size.center();
        let snake = Snake::horizontal(Position::new(center, center), INITIAL_SNAKE_LEN);
        let food = place_food(&snake, grid_size, rng);

        Self {
            grid_size,
            snake,
            direction: Direction::Right,
            queued_direction: Direction::Right,
            food,
            score: 0,
            game_over: false,
            paused: false,
            death_reason: None,
            tick_count: 0,
        }
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.game_over {
            GameStatus::GameOver
        } else if self.paused {
            GameStatus::Paused
        } else {
            GameStatus::Running
        }
    }

    /// Queues `next` for the following tick.
    ///
    /// Reversals of the applied direction and requests after game over are
    /// ignored.
    #[must_use]
    pub fn set_queued_direction(&self, next: Direction) -> Self {
        if self.game_over || !can_turn(self.direction, next) {
            return self.clone();
        }

        Self {
            queued_direction: next,
            ..self.clone()
        }
    }

    /// Like [`GameState::set_queued_direction`] for a raw direction name;
    /// unknown names leave the state unchanged.
    #[must_use]
    pub fn set_queued_direction_named(&self, next: &str) -> Self {
        match next.parse::<Direction>() {
            Ok(direction) => self.set_queued_direction(direction),
            Err(_) => self.clone(),
        }
    }

    /// Flips the pause flag. Has no effect once the game is over.
    #[must_use]
    pub fn toggle_pause(&self) -> Self {
        if self.game_over {
            return self.clone();
        }

        Self {
            paused: !self.paused,
            ..self.clone()
        }
    }

    /// Starts over on a board of the same size.
    #[must_use]
    pub fn restart<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Self {
        Self::new(self.grid_size, rng)
    }

    /// Advances the game by one tick.
    ///
    /// The tail cell counts as free for the collision test because it moves
    /// away this tick; this holds even when the snake is about to grow.
    #[must_use]
    pub fn step<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Self {
        if self.game_over || self.paused {
            return self.clone();
        }

        let direction = self.queued_direction;
        let next_head = self.snake.head().stepped(direction);

        let collision = if !next_head.is_within_bounds(self.grid_size) {
            Some(DeathReason::WallCollision)
        } else if self.snake.body_without_tail().any(|segment| *segment == next_head) {
            Some(DeathReason::SelfCollision)
        } else {
            None
        };

        if let Some(reason) = collision {
            return Self {
                direction,
                game_over: true,
                death_reason: Some(reason),
                ..self.clone()
            };
        }

        let ate_food = self.food == Some(next_head);
        let snake = self.snake.advanced(next_head, ate_food);
        let (food, score) = if ate_food {
            (place_food(&snake, self.grid_size, rng), self.score + 1)
        } else {
            (self.food, self.score)
        };

        Self {
            grid_size: self.grid_size,
            snake,
            direction,
            queued_direction: self.queued_direction,
            food,
            score,
            game_over: false,
            paused: false,
            death_reason: None,
            tick_count: self.tick_count + 1,
        }
    }
}
