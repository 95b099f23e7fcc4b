//! Editor update functions for cursor movement

use crate::commands::Cmd;
use crate::messages::EditorMsg;
use crate::model::AppModel;

/// Handle editor messages (cursor movement)
pub fn update_editor(model: &mut AppModel, msg: EditorMsg) -> Option<Cmd> {
    match msg {
        EditorMsg::MoveCursor(direction) => {
            model.session.move_cursor(direction);
            Some(Cmd::Redraw)
        }
    }
}
