//! App message handlers (file operations, terminal events)

use crate::commands::Cmd;
use crate::messages::AppMsg;
use crate::model::{body_width, AppModel};
use crate::storage::{document_path, filename_for_display, StorageError};

/// Handle app messages (file operations, terminal events)
pub fn update_app(model: &mut AppModel, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::Resize { width, height } => {
            model.terminal_size = (width, height);
            // body_width never returns 0
            if let Err(e) = model.session.resize(body_width(width)) {
                tracing::warn!("Resize to {}x{} rejected: {}", width, height, e);
            }
            Some(Cmd::Redraw)
        }

        AppMsg::SaveFile => {
            let document = model.session.document();
            let dir = document
                .file_path
                .as_deref()
                .and_then(|path| path.parent())
                .map(|parent| parent.to_path_buf())
                .unwrap_or_else(|| model.config.resolved_save_dir());

            // Only the document's own file is replaced without asking
            let target = document_path(&dir, &document.title);
            let is_own_file = document.file_path.as_deref() == Some(target.as_path());
            let overwrite = model.pending_overwrite || is_own_file;
            model.pending_overwrite = false;

            Some(Cmd::SaveFile {
                title: document.title.clone(),
                body: document.body(),
                dir,
                overwrite,
            })
        }

        AppMsg::SaveCompleted(result) => {
            match result {
                Ok(path) => {
                    model.status = Some(format!("Saved: {}", path.display()));
                    model.session.mark_saved(path);
                }
                Err(StorageError::AlreadyExists(path)) => {
                    model.pending_overwrite = true;
                    model.status = Some(format!(
                        "{} exists - press Ctrl+S again to overwrite",
                        filename_for_display(&path)
                    ));
                }
                Err(e) => {
                    tracing::warn!("Save failed: {}", e);
                    let title = model.session.document().title.clone();
                    model.status = Some(e.user_message(&title));
                }
            }
            Some(Cmd::Redraw)
        }

        AppMsg::Quit => {
            if model.session.document().is_modified && !model.pending_quit {
                model.pending_quit = true;
                model.status =
                    Some("Unsaved changes - press Ctrl+Q again to quit".to_string());
                return Some(Cmd::Redraw);
            }
            Some(Cmd::Quit)
        }
    }
}
