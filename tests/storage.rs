//! Storage tests - saving and reopening documents on disk

use quire::model::Document;
use quire::storage::{document_path, open_document, save_document, StorageError};
use tempfile::TempDir;

#[test]
fn test_save_then_open_round_trip() {
    let dir = TempDir::new().unwrap();
    let body = "First paragraph.\n\nSecond paragraph, ünïcödé.";

    let path = save_document("Chapter 1", body, dir.path(), false).unwrap();
    assert_eq!(path, dir.path().join("Chapter 1.txt"));

    let doc = open_document(&path).unwrap();
    assert_eq!(doc.title, "Chapter 1.txt");
    assert_eq!(doc.body(), body);
    assert_eq!(doc.file_path, Some(path));
}

#[test]
fn test_save_refuses_to_overwrite() {
    let dir = TempDir::new().unwrap();
    save_document("memo", "one", dir.path(), false).unwrap();

    let result = save_document("memo", "two", dir.path(), false);
    assert!(matches!(result, Err(StorageError::AlreadyExists(_))));
    assert_eq!(
        std::fs::read_to_string(dir.path().join("memo.txt")).unwrap(),
        "one"
    );

    save_document("memo", "two", dir.path(), true).unwrap();
    assert_eq!(
        std::fs::read_to_string(dir.path().join("memo.txt")).unwrap(),
        "two"
    );
}

#[test]
fn test_save_creates_missing_directory() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("drafts").join("2024");

    let path = save_document("idea", "text", &nested, false).unwrap();
    assert!(path.starts_with(&nested));
    assert!(path.is_file());
}

#[test]
fn test_reopened_title_saves_to_same_file() {
    let dir = TempDir::new().unwrap();
    let path = save_document("log", "a", dir.path(), false).unwrap();

    let doc = open_document(&path).unwrap();
    assert_eq!(document_path(dir.path(), &doc.title), path);
}

#[test]
fn test_open_missing_file() {
    let dir = TempDir::new().unwrap();
    let result = open_document(&dir.path().join("absent.txt"));
    assert!(matches!(result, Err(StorageError::NotFound)));
}

#[test]
fn test_empty_document_saves_empty_file() {
    let dir = TempDir::new().unwrap();
    let doc = Document::new("blank", "");
    let path = save_document(&doc.title, &doc.body(), dir.path(), false).unwrap();
    assert_eq!(std::fs::metadata(&path).unwrap().len(), 0);
}
