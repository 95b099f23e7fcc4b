//! Document update functions: insertion, deletion, undo/redo

use crate::commands::Cmd;
use crate::messages::DocumentMsg;
use crate::model::AppModel;

/// Handle document messages
pub fn update_document(model: &mut AppModel, msg: DocumentMsg) -> Option<Cmd> {
    let session = &mut model.session;
    let changed = match msg {
        DocumentMsg::InsertChar(ch) => {
            let mut buf = [0u8; 4];
            session.insert(ch.encode_utf8(&mut buf));
            true
        }
        DocumentMsg::InsertNewline => {
            session.insert("\n");
            true
        }
        DocumentMsg::InsertTab => {
            session.insert(&model.config.tab_text());
            true
        }
        DocumentMsg::InsertText(text) => {
            session.insert(&text.replace("\r\n", "\n"));
            !text.is_empty()
        }
        DocumentMsg::DeleteBackward => session.delete_backward(),
        DocumentMsg::DeleteForward => session.delete_forward(),
        DocumentMsg::Undo => {
            let undone = session.undo();
            if !undone {
                model.status = Some("Nothing to undo".to_string());
            }
            undone
        }
        DocumentMsg::Redo => {
            let redone = session.redo();
            if !redone {
                model.status = Some("Nothing to redo".to_string());
            }
            redone
        }
    };

    if changed {
        model.status = None;
    }
    Some(Cmd::Redraw)
}
