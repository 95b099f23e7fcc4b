//! Undo/redo tests through the session and the update loop

mod common;

use std::path::PathBuf;

use common::{cursor_of, test_model, test_session};
use quire::config::EditorConfig;
use quire::messages::DocumentMsg;
use quire::model::{AppModel, Document, EditorSession, Position};
use quire::update::update;
use quire::Msg;

#[test]
fn test_undo_redo_restore_exact_bodies() {
    let mut session = test_session("The Body", 80, 0, 8);
    session.insert("!");
    session.insert("?");
    assert_eq!(session.body(), "The Body!?");

    assert!(session.undo());
    assert_eq!(session.body(), "The Body!");
    assert!(session.undo());
    assert_eq!(session.body(), "The Body");
    assert!(!session.undo());

    assert!(session.redo());
    assert_eq!(session.body(), "The Body!");
    assert!(session.redo());
    assert_eq!(session.body(), "The Body!?");
    assert!(!session.redo());
}

#[test]
fn test_undo_then_edit_discards_redo() {
    let mut session = test_session("abc", 80, 0, 3);
    session.insert("d");
    session.insert("e");
    session.undo();
    session.undo();
    assert_eq!(session.body(), "abc");

    session.set_position(Position::new(0, 0));
    session.insert("X");
    assert_eq!(session.body(), "Xabc");
    assert_eq!(session.history().len(), 2);
    assert!(!session.redo());
}

#[test]
fn test_undo_moves_cursor_to_default_position() {
    let mut session = test_session("hello\nworld", 80, 0, 0);
    session.insert("X");
    assert_eq!(cursor_of(&session), (0, 1));

    session.undo();
    assert_eq!(session.body(), "hello\nworld");
    assert_eq!(cursor_of(&session), (1, 5));
}

#[test]
fn test_undo_marks_document_modified() {
    let mut session = test_session("abc", 80, 0, 3);
    session.insert("d");
    session.mark_saved(PathBuf::from("abcd.txt"));
    assert!(!session.document().is_modified);

    session.undo();
    assert!(session.document().is_modified);
}

#[test]
fn test_mark_saved_leaves_body_and_history_alone() {
    let mut session = test_session("abc", 80, 0, 3);
    session.insert("d");
    session.mark_saved(PathBuf::from("notes.txt"));

    assert_eq!(session.body(), "abcd");
    assert_eq!(session.history().current(), "abcd");
    assert_eq!(session.history().len(), 2);
    assert_eq!(
        session.document().file_path,
        Some(PathBuf::from("notes.txt"))
    );
    assert!(session.undo());
    assert_eq!(session.body(), "abc");
}

#[test]
fn test_delete_is_undoable() {
    let mut session = test_session("ab\ncd", 80, 1, 0);
    session.delete_backward();
    assert_eq!(session.body(), "abcd");

    session.undo();
    assert_eq!(session.body(), "ab\ncd");
}

#[test]
fn test_history_limit_from_config() {
    let config = EditorConfig {
        history_limit: 3,
        ..EditorConfig::default()
    };
    let mut model = AppModel::new(Document::new("Capped", ""), config, (80, 24)).unwrap();
    for ch in ['a', 'b', 'c', 'd', 'e'] {
        update(&mut model, Msg::Document(DocumentMsg::InsertChar(ch)));
    }
    assert_eq!(model.session.history().len(), 3);

    while model.session.undo() {}
    assert_eq!(model.session.body(), "abc");
}

#[test]
fn test_load_starts_fresh_history() {
    let mut session = EditorSession::new(Document::new("One", "first"), 80, 10).unwrap();
    session.insert("!");
    session.load(Document::new("Two", "second"));

    assert_eq!(session.body(), "second");
    assert_eq!(session.history().len(), 1);
    assert_eq!(session.history().max_versions(), 10);
    assert!(!session.undo());
    assert_eq!(cursor_of(&session), (0, 6));
}

#[test]
fn test_undo_with_nothing_to_undo_sets_status() {
    let mut model = test_model("abc");
    update(&mut model, Msg::Document(DocumentMsg::Undo));
    assert_eq!(model.status.as_deref(), Some("Nothing to undo"));

    update(&mut model, Msg::Document(DocumentMsg::Redo));
    assert_eq!(model.status.as_deref(), Some("Nothing to redo"));

    update(&mut model, Msg::Document(DocumentMsg::InsertChar('d')));
    assert_eq!(model.status, None);
}
