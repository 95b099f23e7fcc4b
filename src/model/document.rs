//! Document model - the text buffer and its file state

use std::path::PathBuf;

use chrono::{DateTime, Local};

use super::buffer::Buffer;

/// Title used for documents that were not loaded from a file
pub const UNTITLED: &str = "Untitled";

/// A titled document body
#[derive(Debug, Clone)]
pub struct Document {
    pub title: String,
    pub author: Option<String>,
    pub created: DateTime<Local>,
    pub(super) buffer: Buffer,
    /// Where the document was loaded from or last saved to
    pub file_path: Option<PathBuf>,
    /// Whether the body has changed since it was loaded or saved
    pub is_modified: bool,
}

impl Default for Document {
    fn default() -> Self {
        Self::new(UNTITLED, "")
    }
}

impl Document {
    pub fn new(title: impl Into<String>, body: &str) -> Self {
        Self {
            title: title.into(),
            author: None,
            created: Local::now(),
            buffer: Buffer::from_text(body),
            file_path: None,
            is_modified: false,
        }
    }

    pub fn with_path(mut self, path: PathBuf) -> Self {
        self.file_path = Some(path);
        self
    }

    pub fn with_author(mut self, author: Option<String>) -> Self {
        self.author = author;
        self
    }

    pub fn with_created(mut self, created: DateTime<Local>) -> Self {
        self.created = created;
        self
    }

    pub fn body(&self) -> String {
        self.buffer.text()
    }

    /// Title as shown in the title bar, with a marker for unsaved changes
    pub fn display_title(&self) -> String {
        if self.is_modified {
            format!("{} *", self.title)
        } else {
            self.title.clone()
        }
    }

    /// Author and creation date, e.g. `by Ada, 2024-03-01`
    pub fn byline(&self) -> String {
        let date = self.created.format("%Y-%m-%d");
        match &self.author {
            Some(author) => format!("by {}, {}", author, date),
            None => date.to_string(),
        }
    }
}
