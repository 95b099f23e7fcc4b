//! Frame building for the terminal
//!
//! `render_frame` turns the model into rows of text plus a cursor position.
//! It does no I/O; the runtime paints the frame.
//!
//! Screen layout, top to bottom: title bar, border, body rows starting at
//! the margin, border, status line. Body rows carry a border cell on both
//! edges.

use crate::model::{AppModel, MARGIN};

/// Rows below the body: bottom border and status line
const FOOTER_ROWS: usize = 2;

const APP_NAME: &str = "quire";

const HELP_HINT: &str = "^S save  ^Z undo  ^Y redo  ^Q quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Title,
    Border,
    Body,
    Status,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameRow {
    pub kind: RowKind,
    /// Exactly the frame width in chars
    pub text: String,
}

/// One full screen of output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub width: usize,
    pub height: usize,
    pub rows: Vec<FrameRow>,
    /// Screen position (x, y) of the cursor, when it is on screen
    pub cursor: Option<(usize, usize)>,
}

/// Number of body rows visible in a terminal `terminal_height` rows tall
pub fn body_height(terminal_height: usize) -> usize {
    terminal_height.saturating_sub(MARGIN + FOOTER_ROWS)
}

/// First visible body row that keeps `cursor_row` on screen
pub fn scroll_top(cursor_row: usize, visible_rows: usize) -> usize {
    (cursor_row + 1).saturating_sub(visible_rows)
}

/// Truncate or pad `text` to exactly `width` chars
fn fit(text: &str, width: usize) -> String {
    let mut out: String = text.chars().take(width).collect();
    let len = out.chars().count();
    out.push_str(&" ".repeat(width - len));
    out
}

fn status_text(model: &AppModel) -> String {
    let session = &model.session;
    let pos = session.position();
    let history = session.history();
    let message = model.status.as_deref().unwrap_or(HELP_HINT);
    format!(
        " Ln {}, Col {}  v{}/{}  {}",
        pos.row + 1,
        pos.column + 1,
        history.current_version() + 1,
        history.len(),
        message
    )
}

/// Title on the left, byline right-aligned when both fit
fn title_text(model: &AppModel, width: usize) -> String {
    let document = model.session.document();
    let title = format!("  {} - {}", document.display_title(), APP_NAME);
    let byline = format!("{}  ", document.byline());
    let used = title.chars().count() + byline.chars().count();
    if used < width {
        format!("{}{}{}", title, " ".repeat(width - used), byline)
    } else {
        title
    }
}

/// Build the frame for the current model state
pub fn render_frame(model: &AppModel) -> Frame {
    let (width, height) = model.terminal_size;
    let session = &model.session;
    let layout = session.layout();
    let pos = session.position();

    let visible = body_height(height);
    let top = scroll_top(pos.row, visible);

    let margin = " ".repeat(MARGIN);

    let rows = (0..height)
        .map(|y| {
            if y == 0 {
                FrameRow {
                    kind: RowKind::Title,
                    text: fit(&title_text(model, width), width),
                }
            } else if y + 1 == height {
                FrameRow {
                    kind: RowKind::Status,
                    text: fit(&status_text(model), width),
                }
            } else if y < MARGIN || y + FOOTER_ROWS == height {
                FrameRow {
                    kind: RowKind::Border,
                    text: fit("", width),
                }
            } else {
                let line = layout
                    .line(top + y - MARGIN)
                    .map(|line| line.text.as_str())
                    .unwrap_or("");
                FrameRow {
                    kind: RowKind::Body,
                    text: fit(&format!("{}{}", margin, line), width),
                }
            }
        })
        .collect();

    let cursor = (visible > 0).then(|| (pos.column + MARGIN, pos.row - top + MARGIN));

    Frame {
        width,
        height,
        rows,
        cursor,
    }
}
