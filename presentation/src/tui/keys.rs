//! Key bindings
//!
//! Maps terminal key events onto chat actions. The binding table is
//! modeless: a key means the same thing at all times, and unbound keys
//! map to nothing.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// User action derived from a key event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Submit the input buffer as one user turn
    Submit,
    /// Quit the application
    Quit,
    /// Insert a character at the cursor
    InsertChar(char),
    /// Delete the character before the cursor
    DeleteChar,
    /// Move the cursor one character left
    CursorLeft,
    /// Move the cursor one character right
    CursorRight,
    /// Move the cursor to the start of the input
    CursorHome,
    /// Move the cursor to the end of the input
    CursorEnd,
    /// Scroll the transcript towards older messages
    ScrollUp,
    /// Scroll the transcript towards newer messages
    ScrollDown,
    /// Jump back to the newest message and resume following
    ScrollToBottom,
}

/// Map a key event to an action, if the key is bound.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Some(Action::Quit),
        (KeyCode::Enter, _) => Some(Action::Submit),
        (KeyCode::Backspace, _) => Some(Action::DeleteChar),
        (KeyCode::Left, _) => Some(Action::CursorLeft),
        (KeyCode::Right, _) => Some(Action::CursorRight),
        (KeyCode::Home, _) => Some(Action::CursorHome),
        (KeyCode::End, _) => Some(Action::CursorEnd),
        (KeyCode::Up, _) => Some(Action::ScrollUp),
        (KeyCode::Down, _) => Some(Action::ScrollDown),
        (KeyCode::Esc, _) => Some(Action::ScrollToBottom),
        (KeyCode::Char(c), m) if m.is_empty() || m == KeyModifiers::SHIFT => {
            Some(Action::InsertChar(c))
        }
        _ => None,
    }
}
