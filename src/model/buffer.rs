//! Text buffer backing a document body

use ropey::Rope;

/// Raw document text, addressed by char offset
#[derive(Debug, Clone, Default)]
pub struct Buffer {
    rope: Rope,
}

impl Buffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }

    /// Number of chars in the body
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    /// Char at `char_idx`, or `None` past the end
    pub fn char_at(&self, char_idx: usize) -> Option<char> {
        self.rope.get_char(char_idx)
    }

    /// Insert `text` before the char at `char_idx` (clamped to the end)
    pub fn insert(&mut self, char_idx: usize, text: &str) {
        let idx = char_idx.min(self.rope.len_chars());
        self.rope.insert(idx, text);
    }

    /// Remove the char at `char_idx`, returning it
    ///
    /// Out-of-range offsets remove nothing.
    pub fn remove(&mut self, char_idx: usize) -> Option<char> {
        let ch = self.rope.get_char(char_idx)?;
        self.rope.remove(char_idx..char_idx + 1);
        Some(ch)
    }

    /// Replace the whole body (used when restoring history snapshots)
    pub fn set_text(&mut self, text: &str) {
        self.rope = Rope::from_str(text);
    }

    pub fn text(&self) -> String {
        self.rope.to_string()
    }
}

impl std::fmt::Display for Buffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for chunk in self.rope.chunks() {
            f.write_str(chunk)?;
        }
        Ok(())
    }
}
