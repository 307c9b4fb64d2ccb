//! Title and game over panels drawn over the play field.

use super::game_common::render_modal;
use crate::core::game_state::FlyWarriorGame;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};

fn controls_line(pairs: &[(&'static str, &'static str)]) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, (key, action)) in pairs.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(*key, Style::default().fg(Color::White)));
        spans.push(Span::styled(
            format!(" {}", action),
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(spans)
}

/// Render the title panel.
pub fn render_menu(frame: &mut Frame, area: Rect) {
    let body = vec![
        Line::from(Span::styled(
            "Jump over bombs, grab coins!",
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            "Speed rises the longer you last.",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        controls_line(&[("[Enter]", "Start"), ("[Q]", "Quit")]),
        controls_line(&[("[Space/Up/Click]", "Fly")]),
    ];
    render_modal(frame, area, "FLY WARRIOR", Color::LightYellow, body);
}

/// Render the game over panel with the final tallies.
pub fn render_game_over(frame: &mut Frame, area: Rect, game: &FlyWarriorGame) {
    let body = vec![
        Line::from(vec![
            Span::styled("Final score: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                game.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Coins: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                game.coins.to_string(),
                Style::default().fg(Color::Rgb(255, 215, 0)),
            ),
        ]),
        Line::from(""),
        controls_line(&[("[Enter]", "Play again"), ("[M]", "Menu")]),
    ];
    render_modal(frame, area, "GAME OVER", Color::Red, body);
}
