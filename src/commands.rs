//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.

use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    /// Request a redraw
    Redraw,
    /// Write a document to `<dir>/<title>.txt`
    SaveFile {
        title: String,
        body: String,
        dir: PathBuf,
        overwrite: bool,
    },
    /// Request application exit
    Quit,
}
