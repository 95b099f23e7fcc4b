//! Cursor positions and directional movement
//!
//! Two coordinate spaces are in play. Editor coordinates are screen-relative
//! and include the border margin; body coordinates address rows and columns of
//! the reflowed [`Layout`].

use std::str::FromStr;

use super::layout::Layout;
use crate::error::EditError;

/// Border margin between the screen edge and the body, on both axes
pub const MARGIN: usize = 2;

/// Direction for cursor movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl FromStr for Direction {
    type Err = EditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            other => Err(EditError::InvalidDirection(other.to_string())),
        }
    }
}

/// A position in body coordinates (row and column, both 0-indexed)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub row: usize,
    pub column: usize,
}

impl Position {
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Move one step in `direction`, wrapping across display lines
    pub fn moved(self, direction: Direction, layout: &Layout) -> Self {
        let Position { row, column } = layout.clamp(self);
        let last_row = layout.line_count() - 1;

        match direction {
            Direction::Right => {
                if column >= layout.end_column(row) {
                    if row < last_row {
                        Self::new(row + 1, 0)
                    } else {
                        Self::new(row, column)
                    }
                } else {
                    Self::new(row, column + 1)
                }
            }
            Direction::Left => {
                if column == 0 {
                    if row > 0 {
                        Self::new(row - 1, layout.end_column(row - 1))
                    } else {
                        Self::new(row, column)
                    }
                } else {
                    Self::new(row, column - 1)
                }
            }
            Direction::Up => {
                if row == 0 {
                    Self::new(0, 0)
                } else {
                    Self::new(row - 1, column.min(layout.end_column(row - 1)))
                }
            }
            Direction::Down => {
                if row == last_row {
                    Self::new(row, layout.end_column(row))
                } else {
                    Self::new(row + 1, column.min(layout.end_column(row + 1)))
                }
            }
        }
    }
}

/// The cursor in editor (screen) coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub x: usize,
    pub y: usize,
}

impl Default for Cursor {
    fn default() -> Self {
        Self::from_body(Position::default())
    }
}

impl Cursor {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Editor coordinates for a body position
    pub const fn from_body(pos: Position) -> Self {
        Self {
            x: pos.column + MARGIN,
            y: pos.row + MARGIN,
        }
    }

    /// Body coordinates of this cursor
    ///
    /// Points inside the margin map to the first row/column.
    pub const fn to_body(self) -> Position {
        Position {
            row: self.y.saturating_sub(MARGIN),
            column: self.x.saturating_sub(MARGIN),
        }
    }

    pub fn moved(self, direction: Direction, layout: &Layout) -> Self {
        Self::from_body(self.to_body().moved(direction, layout))
    }
}

impl From<Position> for Cursor {
    fn from(pos: Position) -> Self {
        Self::from_body(pos)
    }
}

impl From<Cursor> for Position {
    fn from(cursor: Cursor) -> Self {
        cursor.to_body()
    }
}
