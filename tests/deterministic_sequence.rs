use grid_snake::config::GridSize;
use grid_snake::direction::Direction;
use grid_snake::game::{DeathReason, GameState, GameStatus};
use grid_snake::random::{RngSource, SequenceSource};
use grid_snake::snake::{Position, Snake};

fn grid(side: u16) -> GridSize {
    GridSize::new(side).expect("valid grid")
}

fn scenario_state(food: Option<Position>) -> GameState {
    let mut state = GameState::new(grid(5), &mut || 0.0);
    state.snake = Snake::from_segments(vec![
        Position::new(2, 2),
        Position::new(1, 2),
        Position::new(0, 2),
    ]);
    state.food = food;
    state
}

fn segments(state: &GameState) -> Vec<Position> {
    state.snake.segments().copied().collect()
}

#[test]
fn plain_move_drops_the_tail() {
    let state = scenario_state(Some(Position::new(0, 0)));

    let next = state.step(&mut || 0.0);

    assert_eq!(
        segments(&next),
        vec![Position::new(3, 2), Position::new(2, 2), Position::new(1, 2)]
    );
    assert_eq!(next.score, 0);
    assert_eq!(next.food, Some(Position::new(0, 0)));
}

#[test]
fn eating_grows_scores_and_replaces_food() {
    let state = scenario_state(Some(Position::new(3, 2)));

    let next = state.step(&mut || 0.99);

    assert_eq!(
        segments(&next),
        vec![
            Position::new(3, 2),
            Position::new(2, 2),
            Position::new(1, 2),
            Position::new(0, 2),
        ]
    );
    assert_eq!(next.score, 1);
    let food = next.food.expect("board still has room");
    assert!(!next.snake.occupies(food));
    assert_eq!(food, Position::new(4, 4));
}

#[test]
fn running_off_the_board_ends_the_game() {
    let mut state = scenario_state(None);
    state.snake = Snake::from_segments(vec![
        Position::new(4, 2),
        Position::new(3, 2),
        Position::new(2, 2),
    ]);

    let next = state.step(&mut || 0.0);

    assert_eq!(next.status(), GameStatus::GameOver);
    assert_eq!(next.death_reason, Some(DeathReason::WallCollision));
    assert_eq!(next.snake, state.snake);
}

#[test]
fn reversal_is_rejected_by_the_queue() {
    let mut state = scenario_state(None);
    state.direction = Direction::Down;
    state.queued_direction = Direction::Down;

    assert_eq!(state.set_queued_direction(Direction::Up), state);
    assert_eq!(state.set_queued_direction_named("up"), state);
}

#[test]
fn stepwise_food_collection_and_wall_collision() {
    let mut state = GameState::new(grid(6), &mut || 0.0);
    state.food = Some(Position::new(4, 3));

    state = state.step(&mut SequenceSource::new(vec![0.0]));
    assert_eq!(state.status(), GameStatus::Running);
    assert_eq!(state.score, 1);
    assert_eq!(state.snake.len(), 4);
    assert_eq!(state.snake.head(), Position::new(4, 3));

    state = state.set_queued_direction(Direction::Up);
    for expected_y in (0..3).rev() {
        state = state.step(&mut || 0.0);
        assert_eq!(state.status(), GameStatus::Running);
        assert_eq!(state.snake.head(), Position::new(4, expected_y));
    }

    state = state.step(&mut || 0.0);
    assert_eq!(state.status(), GameStatus::GameOver);
    assert_eq!(state.direction, Direction::Up);
    assert_eq!(state.snake.head(), Position::new(4, 0));
}

#[test]
fn identical_inputs_replay_identically() {
    let script = [
        Direction::Down,
        Direction::Left,
        Direction::Up,
        Direction::Up,
        Direction::Right,
        Direction::Down,
    ];

    let play = |seed: u64| {
        let mut rng = RngSource::seeded(seed);
        let mut state = GameState::new(grid(12), &mut rng);
        let mut history = vec![state.clone()];
        for turn in script.iter().cycle().take(60) {
            state = state.set_queued_direction(*turn).step(&mut rng);
            history.push(state.clone());
        }
        history
    };

    assert_eq!(play(99), play(99));
}
