//! Key mapping from terminal events to game actions.

use crate::types::{Direction, GameAction};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map keyboard input to game actions.
///
/// Arrows, vi keys (`hjkl`) and `wasd` all move; `r` restarts.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    let dir = match key.code {
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Direction::Left
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Direction::Right
        }
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w') | KeyCode::Char('W') => {
            Direction::Up
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Direction::Down
        }

        KeyCode::Char('r') | KeyCode::Char('R') => return Some(GameAction::Restart),

        _ => return None,
    };
    Some(GameAction::Move(dir))
}

/// Map a full key event, honouring the event kind.
///
/// Releases are dropped. Auto-repeat counts as another move, except for
/// restart, which must be a deliberate press.
pub fn action_for_event(key: KeyEvent) -> Option<GameAction> {
    match key.kind {
        KeyEventKind::Press => handle_key_event(key),
        KeyEventKind::Repeat => match handle_key_event(key) {
            Some(GameAction::Restart) => None,
            other => other,
        },
        KeyEventKind::Release => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
