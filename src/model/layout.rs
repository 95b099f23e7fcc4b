//! Reflow of a document body into fixed-width display lines
//!
//! `reflow` and `unreflow` are the pure string-level pair used by renderers.
//! [`Layout`] is the same line sequence annotated with body offsets, which is
//! what cursor mapping and editing work against.

use super::cursor::Position;
use crate::error::EditError;

fn check_width(width: usize) -> Result<(), EditError> {
    if width < 1 {
        return Err(EditError::InvalidWidth(width));
    }
    Ok(())
}

/// Hard-split one paragraph into chunks of at most `width` chars
///
/// An empty paragraph yields a single empty line.
fn wrap_paragraph(paragraph: &str, width: usize) -> Vec<String> {
    let chars: Vec<char> = paragraph.chars().collect();
    if chars.is_empty() {
        return vec![String::new()];
    }
    chars
        .chunks(width)
        .map(|chunk| chunk.iter().collect())
        .collect()
}

/// Split `body` into display lines no longer than `width` chars
pub fn reflow(body: &str, width: usize) -> Result<Vec<String>, EditError> {
    check_width(width)?;
    Ok(body
        .split('\n')
        .flat_map(|paragraph| wrap_paragraph(paragraph, width))
        .collect())
}

/// Join display lines back into a body
///
/// A line shorter than `width` ends a paragraph and is followed by `\n`,
/// unless it is the last line. A line of `width` chars or more is a hard
/// split and joins the next line directly.
pub fn unreflow<S: AsRef<str>>(lines: &[S], width: usize) -> Result<String, EditError> {
    check_width(width)?;
    let last = lines.len().saturating_sub(1);
    let mut body = String::new();
    for (i, line) in lines.iter().enumerate() {
        let line = line.as_ref();
        body.push_str(line);
        if i < last && line.chars().count() < width {
            body.push('\n');
        }
    }
    Ok(body)
}

/// What follows a display line in the body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Break {
    /// A `\n` in the body
    Paragraph,
    /// A hard split; the next line continues the same paragraph
    Wrap,
    /// End of the document
    End,
}

/// One reflowed row with its position in the body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayLine {
    pub text: String,
    /// Char offset of the first char of this line in the body
    pub start: usize,
    /// Length in chars
    pub len: usize,
    pub break_after: Break,
}

/// Display lines for a body at a given width
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    width: usize,
    lines: Vec<DisplayLine>,
}

impl Layout {
    /// Reflow `body` at `width`
    ///
    /// Lines match [`reflow`] exactly, except that a full last line is
    /// followed by an implicit empty line so the append position stays
    /// inside the visible width.
    pub fn new(body: &str, width: usize) -> Result<Self, EditError> {
        check_width(width)?;
        Ok(Self::build(body, width))
    }

    /// Reflow with a width already known to be at least 1
    pub(crate) fn build(body: &str, width: usize) -> Self {
        debug_assert!(width >= 1);

        let mut lines = Vec::new();
        let mut start = 0;
        let mut paragraphs = body.split('\n').peekable();
        while let Some(paragraph) = paragraphs.next() {
            let is_last_paragraph = paragraphs.peek().is_none();
            let chunks = wrap_paragraph(paragraph, width);
            let chunk_count = chunks.len();
            for (i, text) in chunks.into_iter().enumerate() {
                let len = text.chars().count();
                let break_after = if i + 1 < chunk_count {
                    Break::Wrap
                } else if is_last_paragraph {
                    Break::End
                } else {
                    Break::Paragraph
                };
                lines.push(DisplayLine {
                    text,
                    start,
                    len,
                    break_after,
                });
                start += len;
            }
            // Skip the newline
            start += 1;
        }

        if let Some(last) = lines.last_mut() {
            if last.len >= width {
                last.break_after = Break::Wrap;
                let start = last.start + last.len;
                lines.push(DisplayLine {
                    text: String::new(),
                    start,
                    len: 0,
                    break_after: Break::End,
                });
            }
        }

        Self { width, lines }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn lines(&self) -> &[DisplayLine] {
        &self.lines
    }

    pub fn line(&self, row: usize) -> Option<&DisplayLine> {
        self.lines.get(row)
    }

    /// Always at least 1
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Line texts, for rendering
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(|line| line.text.as_str())
    }

    /// Last valid cursor column on `row`
    ///
    /// One past the last char for paragraph and end lines. On a hard-split
    /// line the position after the last char is column 0 of the next row,
    /// so the last char itself is the end.
    pub fn end_column(&self, row: usize) -> usize {
        match self.lines.get(row) {
            Some(line) if line.break_after == Break::Wrap => line.len.saturating_sub(1),
            Some(line) => line.len,
            None => 0,
        }
    }

    /// Clamp a position onto the layout
    pub fn clamp(&self, pos: Position) -> Position {
        let row = pos.row.min(self.line_count() - 1);
        Position::new(row, pos.column.min(self.end_column(row)))
    }

    /// Body char offset addressed by `pos`
    pub fn offset_of(&self, pos: Position) -> usize {
        let pos = self.clamp(pos);
        self.lines[pos.row].start + pos.column
    }

    /// Body position of the char offset `offset`
    ///
    /// Offsets past the end of the body map to the default position.
    pub fn position_of(&self, offset: usize) -> Position {
        for (row, line) in self.lines.iter().enumerate() {
            if offset < line.start {
                break;
            }
            if offset - line.start <= self.end_column(row) {
                return Position::new(row, offset - line.start);
            }
        }
        self.default_position()
    }

    /// Cursor position after load, resize, undo and redo
    pub fn default_position(&self) -> Position {
        let row = self.line_count() - 1;
        Position::new(row, self.end_column(row))
    }
}
