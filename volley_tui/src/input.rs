//! Keyboard input handling

use crossterm::event::KeyCode;
use volley_core::{Action, Dir, Side};

/// Translate a key press into a named game action.
pub fn map_key(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Char('a') | KeyCode::Char('A') => Some(Action::Paddle {
            side: Side::Left,
            dir: Dir::Up,
        }),
        KeyCode::Char('z') | KeyCode::Char('Z') => Some(Action::Paddle {
            side: Side::Left,
            dir: Dir::Down,
        }),
        KeyCode::Char('k') | KeyCode::Char('K') => Some(Action::Paddle {
            side: Side::Right,
            dir: Dir::Up,
        }),
        KeyCode::Char('m') | KeyCode::Char('M') => Some(Action::Paddle {
            side: Side::Right,
            dir: Dir::Down,
        }),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Action::Reset),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}
