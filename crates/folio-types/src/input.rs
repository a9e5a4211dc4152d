//! Platform-agnostic input event types.
//!
//! Front-ends map their native key events to these enums. The terminal core
//! never sees raw platform input.

use serde::{Deserialize, Serialize};

/// A key event relevant to the terminal input line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Character typed.
    Char(char),
    /// Backspace / delete-left.
    Backspace,
    /// Submit the current draft.
    Enter,
    /// Navigate to an older history entry.
    Up,
    /// Navigate to a newer history entry.
    Down,
    /// Accept the inline completion.
    Tab,
    /// Clear the scrollback (title-bar clear button or Ctrl+L).
    ClearScreen,
    /// User requested quit.
    Quit,
}
