//! Editor session - the document, its layout, cursor and history
//!
//! `EditorSession` is the only mutator of a document. Every edit goes through
//! the same steps: mutate the buffer at the cursor's body offset, rebuild the
//! layout, place the cursor, commit the new body to history. An edit either
//! completes all of them or changes nothing.

use std::path::PathBuf;

use tracing::debug;

use super::cursor::{Cursor, Direction, Position};
use super::document::Document;
use super::history::History;
use super::layout::{Break, Layout};
use crate::error::EditError;

#[derive(Debug, Clone)]
pub struct EditorSession {
    document: Document,
    layout: Layout,
    cursor: Cursor,
    history: History,
}

impl EditorSession {
    /// Open `document` at `width`, keeping at most `max_versions` history entries
    ///
    /// The starting body is committed as version 0.
    pub fn new(document: Document, width: usize, max_versions: usize) -> Result<Self, EditError> {
        let body = document.body();
        let layout = Layout::new(&body, width)?;
        let cursor = Cursor::from_body(layout.default_position());
        Ok(Self {
            document,
            layout,
            cursor,
            history: History::with_max_versions(body, max_versions),
        })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Record a successful save to `path`
    pub fn mark_saved(&mut self, path: PathBuf) {
        debug!(path = %path.display(), "saved");
        self.document.file_path = Some(path);
        self.document.is_modified = false;
    }

    pub fn body(&self) -> String {
        self.document.body()
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn width(&self) -> usize {
        self.layout.width()
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Cursor in body coordinates
    pub fn position(&self) -> Position {
        self.cursor.to_body()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Place the cursor, clamped onto the layout
    pub fn set_position(&mut self, pos: Position) {
        self.cursor = Cursor::from_body(self.layout.clamp(pos));
    }

    pub fn move_cursor(&mut self, direction: Direction) {
        self.cursor = self.cursor.moved(direction, &self.layout);
    }

    /// Move by a direction name (`up`, `down`, `left`, `right`)
    pub fn move_cursor_named(&mut self, name: &str) -> Result<(), EditError> {
        let direction: Direction = name.parse()?;
        self.move_cursor(direction);
        Ok(())
    }

    /// Insert `text` at the cursor and advance past it
    pub fn insert(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        let offset = self.layout.offset_of(self.position());
        self.document.buffer.insert(offset, text);
        self.relayout();

        let mut pos = self.layout.position_of(offset);
        for _ in text.chars() {
            pos = pos.moved(Direction::Right, &self.layout);
        }
        self.cursor = Cursor::from_body(pos);

        debug!(offset, len = text.chars().count(), "insert");
        self.commit();
    }

    /// Backspace: move left, then delete forward
    ///
    /// Nothing happens at the start of the document.
    pub fn delete_backward(&mut self) -> bool {
        let before = self.position();
        let after = before.moved(Direction::Left, &self.layout);
        if after == self.layout.clamp(before) {
            return false;
        }
        self.cursor = Cursor::from_body(after);
        self.delete_forward()
    }

    /// Delete the char under the cursor, or join the next paragraph at end of line
    pub fn delete_forward(&mut self) -> bool {
        if self.document.buffer.is_empty() {
            return false;
        }
        let pos = self.layout.clamp(self.position());
        let Some(line) = self.layout.line(pos.row) else {
            return false;
        };
        let offset = line.start + pos.column;

        // Past the last char only a paragraph break can be removed
        let removable = pos.column < line.len || line.break_after == Break::Paragraph;
        if !removable {
            return false;
        }
        let Some(removed) = self.document.buffer.remove(offset) else {
            return false;
        };

        self.relayout();
        self.cursor = Cursor::from_body(self.layout.position_of(offset));

        debug!(offset, ?removed, "delete");
        self.commit();
        true
    }

    /// Restore the previous version; the cursor goes to the default position
    pub fn undo(&mut self) -> bool {
        let Some(body) = self.history.undo().map(str::to_owned) else {
            return false;
        };
        debug!(version = self.history.current_version(), "undo");
        self.restore(&body);
        true
    }

    /// Restore the next version; the cursor goes to the default position
    pub fn redo(&mut self) -> bool {
        let Some(body) = self.history.redo().map(str::to_owned) else {
            return false;
        };
        debug!(version = self.history.current_version(), "redo");
        self.restore(&body);
        true
    }

    /// Reflow at a new width
    pub fn resize(&mut self, width: usize) -> Result<(), EditError> {
        let layout = Layout::new(&self.document.body(), width)?;
        self.layout = layout;
        self.cursor = Cursor::from_body(self.layout.default_position());
        Ok(())
    }

    /// Replace the document and start a fresh history
    pub fn load(&mut self, document: Document) {
        let body = document.body();
        self.layout = Layout::build(&body, self.layout.width());
        self.cursor = Cursor::from_body(self.layout.default_position());
        self.history = History::with_max_versions(body, self.history.max_versions());
        self.document = document;
    }

    fn restore(&mut self, body: &str) {
        self.document.buffer.set_text(body);
        self.document.is_modified = true;
        self.relayout();
        self.cursor = Cursor::from_body(self.layout.default_position());
    }

    fn relayout(&mut self) {
        self.layout = Layout::build(&self.document.body(), self.layout.width());
    }

    fn commit(&mut self) {
        self.document.is_modified = true;
        self.history.commit(self.document.body());
    }
}
