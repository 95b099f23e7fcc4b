//! End-to-end message flow through `update`, including save and quit

mod common;

use std::path::PathBuf;

use common::test_model;
use quire::config::EditorConfig;
use quire::messages::{AppMsg, Direction, DocumentMsg, EditorMsg};
use quire::model::{AppModel, Document};
use quire::storage::{self, StorageError};
use quire::update::update;
use quire::view::{render_frame, RowKind};
use quire::{Cmd, Msg};
use tempfile::TempDir;

fn type_text(model: &mut AppModel, text: &str) {
    for ch in text.chars() {
        let msg = if ch == '\n' {
            DocumentMsg::InsertNewline
        } else {
            DocumentMsg::InsertChar(ch)
        };
        update(model, Msg::Document(msg));
    }
}

/// Execute a save command the way the runtime does and feed the result back
fn run_save(model: &mut AppModel) -> Option<Cmd> {
    let cmd = update(model, Msg::App(AppMsg::SaveFile));
    let Some(Cmd::SaveFile {
        title,
        body,
        dir,
        overwrite,
    }) = cmd
    else {
        panic!("expected a save command, got {:?}", cmd);
    };
    let result = storage::save_document(&title, &body, &dir, overwrite);
    update(model, Msg::App(AppMsg::SaveCompleted(result)))
}

fn model_saving_to(dir: &TempDir, title: &str) -> AppModel {
    let config = EditorConfig {
        save_dir: Some(dir.path().to_path_buf()),
        ..EditorConfig::default()
    };
    AppModel::new(Document::new(title, ""), config, (80, 24)).unwrap()
}

#[test]
fn test_typing_and_moving() {
    let mut model = test_model("");
    type_text(&mut model, "hello\nworld");
    assert_eq!(model.session.body(), "hello\nworld");

    update(&mut model, Msg::Editor(EditorMsg::MoveCursor(Direction::Up)));
    update(&mut model, Msg::Document(DocumentMsg::DeleteBackward));
    assert_eq!(model.session.body(), "hell\nworld");
    assert!(model.session.document().is_modified);
}

#[test]
fn test_tab_inserts_configured_spaces() {
    let mut model = test_model("x");
    update(&mut model, Msg::Document(DocumentMsg::InsertTab));
    assert_eq!(model.session.body(), "x    ");

    model.config.tab_width = 2;
    update(&mut model, Msg::Document(DocumentMsg::InsertTab));
    assert_eq!(model.session.body(), "x      ");
}

#[test]
fn test_pasted_text_normalizes_line_endings() {
    let mut model = test_model("");
    update(
        &mut model,
        Msg::Document(DocumentMsg::InsertText("one\r\ntwo".to_string())),
    );
    assert_eq!(model.session.body(), "one\ntwo");
    assert_eq!(model.session.history().len(), 2);
}

#[test]
fn test_resize_reflows_body() {
    let mut model = test_model("abcdefghij");
    let cmd = update(
        &mut model,
        Msg::App(AppMsg::Resize {
            width: 9,
            height: 10,
        }),
    );
    assert_eq!(cmd, Some(Cmd::Redraw));
    assert_eq!(model.terminal_size, (9, 10));
    assert_eq!(model.session.width(), 5);

    let lines: Vec<&str> = model.session.layout().texts().collect();
    assert_eq!(lines, vec!["abcde", "fghij", ""]);
    assert_eq!(model.session.body(), "abcdefghij");
}

#[test]
fn test_resize_to_tiny_terminal_keeps_width_positive() {
    let mut model = test_model("abc");
    update(
        &mut model,
        Msg::App(AppMsg::Resize {
            width: 2,
            height: 3,
        }),
    );
    assert_eq!(model.session.width(), 1);
}

#[test]
fn test_save_new_document() {
    let dir = TempDir::new().unwrap();
    let mut model = model_saving_to(&dir, "Letter");
    type_text(&mut model, "Dear reader");

    assert_eq!(run_save(&mut model), Some(Cmd::Redraw));

    let path = dir.path().join("Letter.txt");
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "Dear reader");
    assert_eq!(model.session.document().file_path, Some(path));
    assert!(!model.session.document().is_modified);
}

#[test]
fn test_save_over_existing_file_needs_confirmation() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("Letter.txt");
    std::fs::write(&path, "old").unwrap();

    let mut model = model_saving_to(&dir, "Letter");
    type_text(&mut model, "new");

    run_save(&mut model);
    assert!(model.pending_overwrite);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "old");
    assert!(model
        .status
        .as_deref()
        .is_some_and(|s| s.contains("Ctrl+S again")));

    run_save(&mut model);
    assert!(!model.pending_overwrite);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
}

#[test]
fn test_overwrite_confirmation_expires_after_other_input() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("Letter.txt"), "old").unwrap();

    let mut model = model_saving_to(&dir, "Letter");
    run_save(&mut model);
    assert!(model.pending_overwrite);

    type_text(&mut model, "x");
    assert!(!model.pending_overwrite);

    let cmd = update(&mut model, Msg::App(AppMsg::SaveFile));
    assert!(matches!(
        cmd,
        Some(Cmd::SaveFile {
            overwrite: false,
            ..
        })
    ));
}

#[test]
fn test_document_with_path_saves_in_place() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, "draft").unwrap();

    let document = storage::open_document(&path).unwrap();
    let mut model = AppModel::new(document, EditorConfig::default(), (80, 24)).unwrap();
    type_text(&mut model, "!");

    let cmd = update(&mut model, Msg::App(AppMsg::SaveFile));
    assert_eq!(
        cmd,
        Some(Cmd::SaveFile {
            title: "notes.txt".to_string(),
            body: "draft!".to_string(),
            dir: dir.path().to_path_buf(),
            overwrite: true,
        })
    );
}

#[test]
fn test_loaded_non_txt_file_does_not_silently_replace_sibling() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("notes.md");
    let sibling = dir.path().join("notes.md.txt");
    std::fs::write(&path, "original").unwrap();
    std::fs::write(&sibling, "keep me").unwrap();

    let document = storage::open_document(&path).unwrap();
    let mut model = AppModel::new(document, EditorConfig::default(), (80, 24)).unwrap();
    type_text(&mut model, "!");

    let cmd = update(&mut model, Msg::App(AppMsg::SaveFile));
    assert!(matches!(
        cmd,
        Some(Cmd::SaveFile {
            overwrite: false,
            ..
        })
    ));

    run_save(&mut model);
    assert!(model.pending_overwrite);
    assert_eq!(std::fs::read_to_string(&sibling).unwrap(), "keep me");
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "original");

    run_save(&mut model);
    assert_eq!(std::fs::read_to_string(&sibling).unwrap(), "original!");
    assert_eq!(model.session.document().file_path, Some(sibling));
}

#[test]
fn test_failed_save_reports_status() {
    let mut model = test_model("text");
    let cmd = update(
        &mut model,
        Msg::App(AppMsg::SaveCompleted(Err(StorageError::PermissionDenied))),
    );
    assert_eq!(cmd, Some(Cmd::Redraw));
    assert!(model.status.is_some());
    assert!(!model.pending_overwrite);
    assert_eq!(model.session.document().file_path, None::<PathBuf>);
}

#[test]
fn test_quit_without_changes() {
    let mut model = test_model("text");
    assert_eq!(update(&mut model, Msg::App(AppMsg::Quit)), Some(Cmd::Quit));
}

#[test]
fn test_quit_with_unsaved_changes_asks_first() {
    let mut model = test_model("text");
    type_text(&mut model, "!");

    assert_eq!(update(&mut model, Msg::App(AppMsg::Quit)), Some(Cmd::Redraw));
    assert!(model.pending_quit);
    assert_eq!(update(&mut model, Msg::App(AppMsg::Quit)), Some(Cmd::Quit));
}

#[test]
fn test_quit_confirmation_expires_after_edit() {
    let mut model = test_model("text");
    type_text(&mut model, "!");
    update(&mut model, Msg::App(AppMsg::Quit));
    type_text(&mut model, "?");

    assert_eq!(update(&mut model, Msg::App(AppMsg::Quit)), Some(Cmd::Redraw));
}

#[test]
fn test_frame_reflects_edits() {
    let mut model = test_model("");
    type_text(&mut model, "Hi");

    let frame = render_frame(&model);
    assert_eq!(frame.rows.len(), 24);
    assert_eq!(frame.rows[0].kind, RowKind::Title);
    assert!(frame.rows[0].text.starts_with("  The Title * - quire"));
    assert!(frame.rows[2].text.starts_with("  Hi"));
    assert_eq!(frame.cursor, Some((4, 2)));
    assert!(frame.rows[23].text.contains("Ln 1, Col 3"));
}
