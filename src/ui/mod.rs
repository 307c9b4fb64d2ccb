pub mod cell_buffer;
pub mod game_common;
pub mod menu_scene;
pub mod play_scene;
pub mod sprites;

use crate::core::game_state::FlyWarriorGame;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

/// Smallest terminal the game lays out in.
pub const MIN_WIDTH: u16 = 50;
pub const MIN_HEIGHT: u16 = 14;

fn fits(size: Rect) -> bool {
    size.width >= MIN_WIDTH && size.height >= MIN_HEIGHT
}

/// Play field rectangle for a terminal of `size`, or `None` when the
/// terminal is too small to lay the game out.
pub fn play_field_area(size: Rect) -> Option<Rect> {
    fits(size).then(|| play_scene::play_field_area(size))
}

/// Main UI drawing function.
pub fn draw_ui(frame: &mut Frame, game: &FlyWarriorGame) {
    let size = frame.size();

    if !fits(size) {
        let msg = Paragraph::new(format!(
            "Terminal too small ({}x{}), need {}x{}",
            size.width, size.height, MIN_WIDTH, MIN_HEIGHT
        ))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center);
        frame.render_widget(msg, size);
        return;
    }

    play_scene::render_play_scene(frame, size, game);
}
