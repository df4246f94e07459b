use chrono::{DateTime, Local, Utc};
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use crate::score::{RankedEntry, ScoreHistory};

const PANEL_WIDTH: u16 = 44;

/// Draws the recent games ranked by score.
pub fn render_leaderboard(frame: &mut Frame<'_>, area: Rect, history: &ScoreHistory) {
    let [panel] = Layout::horizontal([Constraint::Length(PANEL_WIDTH)])
        .flex(Flex::Center)
        .areas(area);
    let block = Block::bordered().title(" last games ");

    let ranked = history.ranked();
    if ranked.is_empty() {
        frame.render_widget(
            Paragraph::new(vec![
                Line::from(""),
                Line::from("No games yet. Finish one to see it here."),
            ])
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(block),
            panel,
        );
        return;
    }

    let lines: Vec<Line<'static>> = ranked.iter().map(entry_line).collect();
    frame.render_widget(Paragraph::new(lines).block(block), panel);
}

fn entry_line(entry: &RankedEntry) -> Line<'static> {
    let crown = if entry.rank == 1 { " 👑" } else { "" };
    let avatar = Style::default()
        .fg(Color::Black)
        .bg(hue_color(entry.avatar_hue))
        .add_modifier(Modifier::BOLD);

    Line::from(vec![
        Span::raw(format!("{:>2}. ", entry.rank)),
        Span::styled(format!(" {} ", entry.initials), avatar),
        Span::raw(format!(" {:<16}", format!("{}{crown}", entry.player_name))),
        Span::styled(
            format!("Score {:>3}", entry.score),
            Style::default().fg(Color::White),
        ),
        Span::styled(
            format!("  {}", played_at_label(entry.played_at)),
            Style::default().fg(Color::DarkGray),
        ),
    ])
}

/// `HH:MM` in local time.
fn played_at_label(played_at: u64) -> String {
    i64::try_from(played_at)
        .ok()
        .and_then(DateTime::<Utc>::from_timestamp_millis)
        .map(|utc| utc.with_timezone(&Local).format("%H:%M").to_string())
        .unwrap_or_else(|| "--:--".to_owned())
}

/// Fully saturated, mid-lightness color for `hue` degrees.
fn hue_color(hue: u16) -> Color {
    let h = f64::from(hue % 360) / 60.0;
    let x = 1.0 - (h % 2.0 - 1.0).abs();
    let (r, g, b) = match h as u16 {
        0 => (1.0, x, 0.0),
        1 => (x, 1.0, 0.0),
        2 => (0.0, 1.0, x),
        3 => (0.0, x, 1.0),
        4 => (x, 0.0, 1.0),
        _ => (1.0, 0.0, x),
    };
    let channel = |value: f64| (value * 200.0 + 40.0).round() as u8;
    Color::Rgb(channel(r), channel(g), channel(b))
}
