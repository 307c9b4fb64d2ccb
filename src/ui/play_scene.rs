//! Play field rendering.
//!
//! Uses a cell buffer for per-character colour control. The sky and ground
//! gradients, the warrior, and the scrolling objects are drawn into a 2D
//! grid scaled from world units, then stamped row by row.

use super::cell_buffer::CellBuffer;
use super::game_common::{
    create_game_layout, format_number_short, render_info_panel_frame, render_status_bar,
    split_game_layout,
};
use super::menu_scene::{render_game_over, render_menu};
use super::sprites::{bomb_sprite, draw_sprite, warrior_sprite, COIN};
use crate::core::game_state::{FlyWarriorGame, ObjectKind, Phase};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

// ── Palette ─────────────────────────────────────────────────────────
const SKY_TOP: (u8, u8, u8) = (135, 206, 235);
const SKY_BOTTOM: (u8, u8, u8) = (152, 216, 232);
const GROUND_TOP: (u8, u8, u8) = (139, 69, 19);
const GROUND_BOTTOM: (u8, u8, u8) = (160, 82, 45);
const GROUND_TEXTURE: Color = Color::Rgb(116, 68, 27);
const GROUND_TEXTURE_CHAR: char = '▀';
const HUD_COLOR: Color = Color::Rgb(25, 25, 60);

// Ground texture dashes (world units)
const TEXTURE_SPACING: f64 = 40.0;
const TEXTURE_LENGTH: f64 = 35.0;
const TEXTURE_DEPTH: f64 = 10.0;

const INFO_PANEL_WIDTH: u16 = 22;
const MIN_FIELD_HEIGHT: u16 = 8;

/// Render the whole game screen for the current phase.
pub fn render_play_scene(frame: &mut Frame, area: Rect, game: &FlyWarriorGame) {
    let layout = create_game_layout(
        frame,
        area,
        " Fly Warrior ",
        Color::LightYellow,
        MIN_FIELD_HEIGHT,
        INFO_PANEL_WIDTH,
    );

    render_play_field(frame, layout.content, game);

    match game.phase {
        Phase::Menu => render_menu(frame, layout.content),
        Phase::GameOver => render_game_over(frame, layout.content, game),
        Phase::Playing => {}
    }

    render_status_bar_content(frame, layout.status_bar, game);
    render_info_panel(frame, layout.info_panel, game);
}

/// Where the play field lands inside a screen of the given size.
pub fn play_field_area(area: Rect) -> Rect {
    split_game_layout(area, MIN_FIELD_HEIGHT, INFO_PANEL_WIDTH).content
}

/// World-to-cell scale factors for a play field of the given size.
fn scales(game: &FlyWarriorGame, width: u16, height: u16) -> (f64, f64) {
    (
        width as f64 / game.config.world_width,
        height as f64 / game.config.world_height,
    )
}

/// Cell rectangle (col, row, width, height) covered by a world rectangle.
/// Sizes are rounded independently of position so sprites don't jitter, and
/// rows are anchored at the bottom edge so grounded things touch the ground.
fn cell_rect(x: f64, y: f64, w: f64, h: f64, x_scale: f64, y_scale: f64) -> (i32, i32, i32, i32) {
    let width = ((w * x_scale).round() as i32).max(1);
    let height = ((h * y_scale).round() as i32).max(1);
    let bottom = ((y + h) * y_scale).round() as i32;
    ((x * x_scale).round() as i32, bottom - height, width, height)
}

fn lerp_color(a: (u8, u8, u8), b: (u8, u8, u8), t: f64) -> Color {
    let t = t.clamp(0.0, 1.0);
    let mix = |x: u8, y: u8| (x as f64 + (y as f64 - x as f64) * t).round() as u8;
    Color::Rgb(mix(a.0, b.0), mix(a.1, b.1), mix(a.2, b.2))
}

/// Build the play field buffer: background always, actors only while playing.
pub fn build_play_field(game: &FlyWarriorGame, width: u16, height: u16) -> CellBuffer {
    let mut buffer = CellBuffer::new(width, height);
    if width == 0 || height == 0 {
        return buffer;
    }
    let (x_scale, y_scale) = scales(game, width, height);

    draw_background(&mut buffer, game, x_scale, y_scale);

    if game.phase == Phase::Playing {
        draw_warrior(&mut buffer, game, x_scale, y_scale);
        draw_objects(&mut buffer, game, x_scale, y_scale);
        draw_hud(&mut buffer, game);
    }

    buffer
}

fn render_play_field(frame: &mut Frame, area: Rect, game: &FlyWarriorGame) {
    if area.height < 2 || area.width < 10 {
        return;
    }
    build_play_field(game, area.width, area.height).render(frame, area);
}

fn draw_background(buffer: &mut CellBuffer, game: &FlyWarriorGame, x_scale: f64, y_scale: f64) {
    let height = buffer.height() as i32;
    let ground_row = ((game.config.ground_top() * y_scale).round() as i32).clamp(1, height);

    // ── Sky gradient ──────────────────────────────────────────────────
    let sky_span = (ground_row - 1).max(1) as f64;
    for row in 0..ground_row {
        buffer.fill_row(row, lerp_color(SKY_TOP, SKY_BOTTOM, row as f64 / sky_span));
    }

    // ── Ground gradient ───────────────────────────────────────────────
    let ground_span = (height - ground_row - 1).max(1) as f64;
    for row in ground_row..height {
        let t = (row - ground_row) as f64 / ground_span;
        buffer.fill_row(row, lerp_color(GROUND_TOP, GROUND_BOTTOM, t));
    }

    // ── Ground texture ────────────────────────────────────────────────
    let texture_row = ((game.config.ground_top() + TEXTURE_DEPTH) * y_scale) as i32;
    if texture_row >= ground_row && texture_row < height {
        let mut x = 0.0;
        while x < game.config.world_width {
            let start = (x * x_scale).round() as i32;
            let end = ((x + TEXTURE_LENGTH) * x_scale).round() as i32;
            for col in start..end.max(start + 1) {
                buffer.put(col, texture_row, GROUND_TEXTURE_CHAR, GROUND_TEXTURE);
            }
            x += TEXTURE_SPACING;
        }
    }
}

fn draw_warrior(buffer: &mut CellBuffer, game: &FlyWarriorGame, x_scale: f64, y_scale: f64) {
    let w = &game.warrior;
    let (col, row, width, height) = cell_rect(w.x, w.y, w.width, w.height, x_scale, y_scale);
    draw_sprite(
        buffer,
        &warrior_sprite(w.is_jumping),
        col,
        row,
        width,
        height,
    );
}

fn draw_objects(buffer: &mut CellBuffer, game: &FlyWarriorGame, x_scale: f64, y_scale: f64) {
    let bomb = bomb_sprite(game.clock_ms);
    for obj in &game.objects {
        let (col, row, width, height) =
            cell_rect(obj.x, obj.y, obj.width, obj.height, x_scale, y_scale);
        let sprite = match obj.kind {
            ObjectKind::Coin => &COIN,
            ObjectKind::Bomb => &bomb,
        };
        draw_sprite(buffer, sprite, col, row, width, height);
    }
}

/// Score and coin counters in the top-left corner.
fn draw_hud(buffer: &mut CellBuffer, game: &FlyWarriorGame) {
    let text = format!(
        " Score: {}  Coins: {} ",
        format_number_short(game.score),
        game.coins
    );
    buffer.put_str(0, 0, &text, HUD_COLOR);
}

/// Render the status bar below the play field.
fn render_status_bar_content(frame: &mut Frame, area: Rect, game: &FlyWarriorGame) {
    match game.phase {
        Phase::Menu => render_status_bar(
            frame,
            area,
            "Ready",
            Color::LightYellow,
            &[("[Enter]", "Start"), ("[Q]", "Quit")],
        ),
        Phase::Playing => render_status_bar(
            frame,
            area,
            "Fly!",
            Color::LightYellow,
            &[("[Space/Up/Click]", "Fly"), ("[Q]", "Quit")],
        ),
        Phase::GameOver => render_status_bar(
            frame,
            area,
            "Game over",
            Color::Red,
            &[("[Enter]", "Play again"), ("[M]", "Menu"), ("[Q]", "Quit")],
        ),
    }
}

/// Render the info panel on the right side.
fn render_info_panel(frame: &mut Frame, area: Rect, game: &FlyWarriorGame) {
    let inner = render_info_panel_frame(frame, area);

    let speed_pct = (game.speed_fraction() * 100.0).round() as u32;

    let lines: Vec<Line> = vec![
        Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::DarkGray)),
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
        Line::from(vec![
            Span::styled("Speed: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{:.2} ({}%)", game.game_speed, speed_pct),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Legend:",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(" ^ ", Style::default().fg(Color::Rgb(255, 215, 0))),
            Span::styled("Warrior", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(vec![
            Span::styled(" $ ", Style::default().fg(Color::Rgb(255, 215, 0))),
            Span::styled("Coin +10", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(vec![
            Span::styled(" ! ", Style::default().fg(Color::Rgb(255, 69, 0))),
            Span::styled("Bomb", Style::default().fg(Color::DarkGray)),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
