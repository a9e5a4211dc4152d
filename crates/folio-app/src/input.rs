//! crossterm key events to terminal input events.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use folio_types::input::InputEvent;

/// Translate a key press. Releases and unmapped keys yield `None`.
pub fn map_key(key: &KeyEvent) -> Option<InputEvent> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c' | 'd') if ctrl => Some(InputEvent::Quit),
        KeyCode::Char('l') if ctrl => Some(InputEvent::ClearScreen),
        KeyCode::Char(_) if ctrl => None,
        KeyCode::Char(ch) => Some(InputEvent::Char(ch)),
        KeyCode::Backspace => Some(InputEvent::Backspace),
        KeyCode::Enter => Some(InputEvent::Enter),
        KeyCode::Up => Some(InputEvent::Up),
        KeyCode::Down => Some(InputEvent::Down),
        KeyCode::Tab => Some(InputEvent::Tab),
        KeyCode::Esc => Some(InputEvent::Quit),
        _ => None,
    }
}
