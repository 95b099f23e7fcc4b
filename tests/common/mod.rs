//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use quire::config::EditorConfig;
use quire::model::{AppModel, Document, EditorSession, Position};

/// Create a session over `text` at `width` with the cursor at (row, column)
pub fn test_session(text: &str, width: usize, row: usize, column: usize) -> EditorSession {
    let mut session = EditorSession::new(Document::new("The Title", text), width, 1000).unwrap();
    session.set_position(Position::new(row, column));
    session
}

/// Create an app model over `text` in an 80x24 terminal
pub fn test_model(text: &str) -> AppModel {
    AppModel::new(
        Document::new("The Title", text),
        EditorConfig::default(),
        (80, 24),
    )
    .unwrap()
}

/// Current cursor in body coordinates as (row, column)
pub fn cursor_of(session: &EditorSession) -> (usize, usize) {
    let pos = session.position();
    (pos.row, pos.column)
}
