//! Terminal input mapping.
//!
//! Translates crossterm events into `GameInput` so the game logic never
//! sees terminal types.

use crate::core::game_logic::GameInput;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

/// Map a key press to a game input. Releases and repeats map to `None`.
pub fn map_key(key: KeyEvent) -> Option<GameInput> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(GameInput::Quit);
    }

    let input = match key.code {
        KeyCode::Char(' ') | KeyCode::Up => GameInput::Fly,
        KeyCode::Enter => GameInput::Start,
        KeyCode::Char('m') | KeyCode::Char('M') => GameInput::Menu,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => GameInput::Quit,
        _ => GameInput::Other,
    };
    Some(input)
}

fn in_rect(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x && column < area.right() && row >= area.y && row < area.bottom()
}

/// Map a mouse event. Only a left-button press inside the play field
/// counts as flying; clicks on the panels and status bar are ignored.
pub fn map_mouse(mouse: MouseEvent, play_field: Option<Rect>) -> Option<GameInput> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left)
            if play_field.is_some_and(|area| in_rect(area, mouse.column, mouse.row)) =>
        {
            Some(GameInput::Fly)
        }
        _ => None,
    }
}

/// Map any terminal event to a game input. `play_field` is where the
/// play field currently sits on screen, if it is shown at all.
pub fn map_event(event: Event, play_field: Option<Rect>) -> Option<GameInput> {
    match event {
        Event::Key(key) => map_key(key),
        Event::Mouse(mouse) => map_mouse(mouse, play_field),
        _ => None,
    }
}
