use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::config::{GridSize, CELL_WIDTH, GLYPH_FOOD, GLYPH_SNAKE_BODY, GLYPH_SNAKE_HEAD};
use crate::game::{GameState, GameStatus};
use crate::score::ScoreHistory;
use crate::session::Page;
use crate::snake::Position;
use crate::ui::hud::render_hud;
use crate::ui::leaderboard::render_leaderboard;
use crate::ui::menu::{render_game_over_menu, render_pause_menu};

/// Renders the full frame from immutable state.
pub fn render(frame: &mut Frame<'_>, state: &GameState, history: &ScoreHistory, page: Page) {
    let area = frame.area();
    let content = render_hud(frame, area, state, history.best_score());

    if page == Page::Leaderboard {
        render_leaderboard(frame, content, history);
        return;
    }

    let board = board_area(content, state.grid_size);
    let block = Block::bordered()
        .title(" snake ")
        .border_style(Style::new().fg(Color::DarkGray));
    let inner = block.inner(board);
    frame.render_widget(block, board);

    render_food(frame, inner, state);
    render_snake(frame, inner, state);

    match state.status() {
        GameStatus::Paused => render_pause_menu(frame, board),
        GameStatus::GameOver => render_game_over_menu(
            frame,
            board,
            state.score,
            history.best_score(),
            state.death_reason,
        ),
        GameStatus::Running => {}
    }
}

/// Centers a bordered board of `grid` cells inside `area`.
fn board_area(area: Rect, grid: GridSize) -> Rect {
    let width = grid.get().saturating_mul(CELL_WIDTH).saturating_add(2);
    let height = grid.get().saturating_add(2);

    let [column] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    let [board] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(column);
    board
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, state: &GameState) {
    let Some(food) = state.food else {
        return;
    };
    let Some((x, y)) = logical_to_terminal(inner, state.grid_size, food) else {
        return;
    };

    frame
        .buffer_mut()
        .set_string(x, y, GLYPH_FOOD, Style::new().fg(Color::Red));
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, state: &GameState) {
    let body_color = if state.game_over {
        Color::DarkGray
    } else {
        Color::Green
    };

    let buffer = frame.buffer_mut();
    for (index, segment) in state.snake.segments().enumerate() {
        let Some((x, y)) = logical_to_terminal(inner, state.grid_size, *segment) else {
            continue;
        };

        if index == 0 {
            buffer.set_string(
                x,
                y,
                GLYPH_SNAKE_HEAD,
                Style::new().fg(Color::LightGreen).add_modifier(Modifier::BOLD),
            );
        } else {
            buffer.set_string(x, y, GLYPH_SNAKE_BODY, Style::new().fg(body_color));
        }
    }
}

fn logical_to_terminal(inner: Rect, grid: GridSize, position: Position) -> Option<(u16, u16)> {
    if !position.is_within_bounds(grid) {
        return None;
    }

    let x_offset = u16::try_from(position.x).ok()?.checked_mul(CELL_WIDTH)?;
    let y_offset = u16::try_from(position.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x.saturating_add(CELL_WIDTH) > inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
