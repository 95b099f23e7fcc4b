//! Model module - application state
//!
//! The editing core lives in the leaf modules: [`buffer`], [`layout`],
//! [`cursor`], [`history`], and [`session`] which ties them together.
//! [`AppModel`] wraps a session with the terminal-facing state.

pub mod buffer;
pub mod cursor;
pub mod document;
pub mod history;
pub mod layout;
pub mod session;

pub use buffer::Buffer;
pub use cursor::{Cursor, Direction, Position, MARGIN};
pub use document::Document;
pub use history::History;
pub use layout::{reflow, unreflow, Break, DisplayLine, Layout};
pub use session::EditorSession;

use crate::config::EditorConfig;
use crate::error::EditError;

/// Columns taken by the border and margin on each side of the body
const HORIZONTAL_CHROME: usize = 2 * MARGIN;

/// Body width for a terminal `terminal_width` columns wide (at least 1)
pub fn body_width(terminal_width: usize) -> usize {
    terminal_width.saturating_sub(HORIZONTAL_CHROME).max(1)
}

/// Application state
#[derive(Debug, Clone)]
pub struct AppModel {
    pub session: EditorSession,
    pub config: EditorConfig,
    /// Terminal size in cells (width, height)
    pub terminal_size: (usize, usize),
    /// Message shown in the status row
    pub status: Option<String>,
    /// Set after a save was refused because the file exists
    pub pending_overwrite: bool,
    /// Set after a quit was refused because of unsaved changes
    pub pending_quit: bool,
}

impl AppModel {
    pub fn new(
        document: Document,
        config: EditorConfig,
        terminal_size: (usize, usize),
    ) -> Result<Self, EditError> {
        let session = EditorSession::new(
            document,
            body_width(terminal_size.0),
            config.history_limit,
        )?;
        Ok(Self {
            session,
            config,
            terminal_size,
            status: None,
            pending_overwrite: false,
            pending_quit: false,
        })
    }

    pub fn document(&self) -> &Document {
        self.session.document()
    }
}
