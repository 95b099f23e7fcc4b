//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod app;
mod document;
mod editor;

use crate::commands::Cmd;
use crate::messages::{AppMsg, Msg};
use crate::model::AppModel;

pub use app::update_app;
pub use document::update_document;
pub use editor::update_editor;

/// Main update function - dispatches to sub-handlers
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    tracing::trace!(?msg, "update");

    // Confirmations only hold for the very next message
    let confirming_save = matches!(msg, Msg::App(AppMsg::SaveFile));
    let confirming_quit = matches!(msg, Msg::App(AppMsg::Quit));
    if !confirming_save {
        model.pending_overwrite = false;
    }
    if !confirming_quit {
        model.pending_quit = false;
    }

    match msg {
        Msg::Editor(m) => editor::update_editor(model, m),
        Msg::Document(m) => document::update_document(model, m),
        Msg::App(m) => app::update_app(model, m),
    }
}
