//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use std::path::PathBuf;

use crate::storage::StorageError;

pub use crate::model::cursor::Direction;

/// Cursor movement
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorMsg {
    /// Move cursor in a direction
    MoveCursor(Direction),
}

/// Document edits and history
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentMsg {
    /// Insert a single character at cursor
    InsertChar(char),
    /// Insert a paragraph break at cursor
    InsertNewline,
    /// Insert spaces for the Tab key
    InsertTab,
    /// Insert arbitrary text at cursor (e.g. a paste)
    InsertText(String),
    /// Delete character before cursor (Backspace)
    DeleteBackward,
    /// Delete character at cursor (Delete key)
    DeleteForward,
    Undo,
    Redo,
}

/// Application-level messages
#[derive(Debug, Clone)]
pub enum AppMsg {
    /// Terminal resized (in cells)
    Resize { width: usize, height: usize },
    /// Save the document
    SaveFile,
    /// Save finished
    SaveCompleted(Result<PathBuf, StorageError>),
    /// Quit, asking for confirmation when there are unsaved changes
    Quit,
}

/// Top-level message type
#[derive(Debug, Clone)]
pub enum Msg {
    Editor(EditorMsg),
    Document(DocumentMsg),
    App(AppMsg),
}
