use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::game::{GameState, GameStatus};

const SEPARATOR: &str = " │ ";

/// Renders the one-line HUD at the bottom and returns the area above it.
#[must_use]
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, state: &GameState, best_score: u32) -> Rect {
    let [content, hud_row, help_row] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(info_line(state, best_score)).alignment(Alignment::Center),
        hud_row,
    );
    frame.render_widget(
        Paragraph::new(Line::from(
            "arrows/WASD move · space pause · r restart · tab scores · q quit",
        ))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray)),
        help_row,
    );

    content
}

fn info_line(state: &GameState, best_score: u32) -> Line<'static> {
    let value = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
    let label = Style::default().fg(Color::DarkGray);
    let best = best_score.max(state.score);

    Line::from(vec![
        Span::styled("Score ", label),
        Span::styled(state.score.to_string(), value),
        Span::styled(SEPARATOR, label),
        Span::styled("Length ", label),
        Span::styled(state.snake.len().to_string(), value),
        Span::styled(SEPARATOR, label),
        Span::styled("Best ", label),
        Span::styled(best.to_string(), value),
        Span::styled(SEPARATOR, label),
        status_span(state.status()),
    ])
}

fn status_span(status: GameStatus) -> Span<'static> {
    match status {
        GameStatus::Running => Span::styled("Running", Style::default().fg(Color::Green)),
        GameStatus::Paused => Span::styled("Paused", Style::default().fg(Color::Yellow)),
        GameStatus::GameOver => Span::styled("Game over", Style::default().fg(Color::Red)),
    }
}
