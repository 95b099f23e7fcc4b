//! Error types for the editing core
//!
//! Only programmer errors are reported here. Edits at structural edges
//! (empty body, first/last line, history boundaries) are no-ops, not errors.

/// Errors returned by the editing core
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    /// Movement command that is not one of `up`, `down`, `left`, `right`
    InvalidDirection(String),
    /// Reflow width below 1
    InvalidWidth(usize),
}

impl std::fmt::Display for EditError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDirection(name) => write!(f, "invalid direction: {:?}", name),
            Self::InvalidWidth(width) => write!(f, "invalid width {} (must be at least 1)", width),
        }
    }
}

impl std::error::Error for EditError {}
