//! Keyboard input handling
//!
//! Maps crossterm key events to messages. Keys with no binding map to `None`.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::messages::{AppMsg, Direction, DocumentMsg, EditorMsg, Msg};

/// Translate a key press into a message
pub fn map_key(key: KeyEvent) -> Option<Msg> {
    // Release events are only reported with keyboard enhancement flags enabled
    if key.kind == KeyEventKind::Release {
        return None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    if ctrl {
        return match key.code {
            KeyCode::Char('q') => Some(Msg::App(AppMsg::Quit)),
            KeyCode::Char('s') => Some(Msg::App(AppMsg::SaveFile)),
            KeyCode::Char('z') => Some(Msg::Document(DocumentMsg::Undo)),
            KeyCode::Char('y') => Some(Msg::Document(DocumentMsg::Redo)),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Esc => Some(Msg::App(AppMsg::Quit)),
        KeyCode::Enter => Some(Msg::Document(DocumentMsg::InsertNewline)),
        KeyCode::Tab => Some(Msg::Document(DocumentMsg::InsertTab)),
        KeyCode::Backspace => Some(Msg::Document(DocumentMsg::DeleteBackward)),
        KeyCode::Delete => Some(Msg::Document(DocumentMsg::DeleteForward)),
        KeyCode::Up => Some(Msg::Editor(EditorMsg::MoveCursor(Direction::Up))),
        KeyCode::Down => Some(Msg::Editor(EditorMsg::MoveCursor(Direction::Down))),
        KeyCode::Left => Some(Msg::Editor(EditorMsg::MoveCursor(Direction::Left))),
        KeyCode::Right => Some(Msg::Editor(EditorMsg::MoveCursor(Direction::Right))),
        KeyCode::Char(ch) if !alt && !ch.is_control() => {
            Some(Msg::Document(DocumentMsg::InsertChar(ch)))
        }
        _ => None,
    }
}
