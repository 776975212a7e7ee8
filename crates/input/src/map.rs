//! Key mapping from terminal events to game and session actions.

use blockfall_types::GameCommand;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press asks of the running game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// A movement command for the active piece.
    Game(GameCommand),
    TogglePause,
    Restart,
}

/// Map keyboard input to an action.
pub fn handle_key_event(key: KeyEvent) -> Option<KeyAction> {
    match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('a') => {
            Some(KeyAction::Game(GameCommand::MoveLeft))
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('d') => {
            Some(KeyAction::Game(GameCommand::MoveRight))
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('s') => {
            Some(KeyAction::Game(GameCommand::SoftDrop))
        }

        // Rotation
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('w') => {
            Some(KeyAction::Game(GameCommand::Rotate))
        }

        // Session controls
        KeyCode::Char('p') | KeyCode::Char('P') => Some(KeyAction::TogglePause),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(KeyAction::Restart),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
