//! Opening and saving documents
//!
//! The editing core never touches the filesystem. These functions are the
//! boundary: they turn a path into a [`Document`] and write one back out.
//! Both block until done.

use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::model::document::Document;

/// Maximum file size in bytes (50 MB)
pub const MAX_FILE_SIZE: u64 = 50 * 1024 * 1024;

/// Extension given to saved documents
pub const DOCUMENT_EXTENSION: &str = "txt";

/// Errors from opening or saving a document
#[derive(Debug, Clone)]
pub enum StorageError {
    /// File does not exist
    NotFound,
    /// Permission denied
    PermissionDenied,
    /// Path is a directory, not a file
    IsDirectory,
    /// File appears to be binary (contains null bytes)
    BinaryFile,
    /// File exceeds size limit
    TooLarge { size_mb: f64 },
    /// Save target exists and overwriting was not requested
    AlreadyExists(PathBuf),
    /// Other I/O error
    Io(String),
}

impl StorageError {
    /// Get a user-friendly error message
    pub fn user_message(&self, filename: &str) -> String {
        match self {
            Self::NotFound => format!("File not found: {}", filename),
            Self::PermissionDenied => format!("Permission denied: {}", filename),
            Self::IsDirectory => format!("Cannot open directory: {}", filename),
            Self::BinaryFile => format!("Cannot open binary file: {}", filename),
            Self::TooLarge { size_mb } => {
                format!(
                    "{} is too large ({:.1} MB, max {} MB)",
                    filename,
                    size_mb,
                    MAX_FILE_SIZE / (1024 * 1024)
                )
            }
            Self::AlreadyExists(path) => format!("{} already exists", path.display()),
            Self::Io(msg) => format!("Error accessing {}: {}", filename, msg),
        }
    }
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound => write!(f, "file not found"),
            Self::PermissionDenied => write!(f, "permission denied"),
            Self::IsDirectory => write!(f, "is a directory"),
            Self::BinaryFile => write!(f, "binary file"),
            Self::TooLarge { size_mb } => write!(f, "file too large ({:.1} MB)", size_mb),
            Self::AlreadyExists(path) => write!(f, "{} already exists", path.display()),
            Self::Io(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<std::io::Error> for StorageError {
    fn from(e: std::io::Error) -> Self {
        match e.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound,
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied,
            _ => Self::Io(e.to_string()),
        }
    }
}

/// Check that `path` is an existing, readable file within the size limit
///
/// Does NOT check for binary content (use `is_likely_binary` separately after this passes)
pub fn validate_file_for_opening(path: &Path) -> Result<(), StorageError> {
    let metadata = fs::metadata(path)?;

    if metadata.is_dir() {
        return Err(StorageError::IsDirectory);
    }

    if metadata.len() > MAX_FILE_SIZE {
        return Err(StorageError::TooLarge {
            size_mb: metadata.len() as f64 / (1024.0 * 1024.0),
        });
    }

    Ok(())
}

/// Check if a file is likely binary by scanning the first 8KB for null bytes
///
/// Returns `false` on any read error (let the actual open fail with a better error).
pub fn is_likely_binary(path: &Path) -> bool {
    let Ok(mut file) = File::open(path) else {
        return false;
    };

    let mut buffer = [0u8; 8192];
    let Ok(bytes_read) = file.read(&mut buffer) else {
        return false;
    };

    buffer[..bytes_read].contains(&0)
}

/// Get the filename from a path for display in messages
pub fn filename_for_display(path: &Path) -> String {
    path.file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string()
}

/// Open the document at `path`; its title is the file name
///
/// Windows line endings are normalized to `\n`. The creation date comes from
/// the file's birth time where the platform records one, else its mtime.
pub fn open_document(path: &Path) -> Result<Document, StorageError> {
    validate_file_for_opening(path)?;
    if is_likely_binary(path) {
        return Err(StorageError::BinaryFile);
    }

    let content = fs::read_to_string(path)?;
    let body = content.replace("\r\n", "\n");
    tracing::info!(
        "Opened {} ({} chars)",
        path.display(),
        body.chars().count()
    );
    let created = fs::metadata(path)
        .and_then(|meta| meta.created().or_else(|_| meta.modified()))
        .map(DateTime::<Local>::from)
        .unwrap_or_else(|_| Local::now());
    Ok(Document::new(filename_for_display(path), &body)
        .with_path(path.to_path_buf())
        .with_created(created))
}

/// Path a document with `title` is saved to inside `dir`
pub fn document_path(dir: &Path, title: &str) -> PathBuf {
    let has_extension = Path::new(title)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(DOCUMENT_EXTENSION));
    if has_extension {
        dir.join(title)
    } else {
        dir.join(format!("{}.{}", title, DOCUMENT_EXTENSION))
    }
}

/// Write `body` as `<dir>/<title>.txt`, creating `dir` if needed
///
/// An existing file is only replaced when `overwrite` is set.
pub fn save_document(
    title: &str,
    body: &str,
    dir: &Path,
    overwrite: bool,
) -> Result<PathBuf, StorageError> {
    fs::create_dir_all(dir)?;
    let path = document_path(dir, title);
    if path.is_dir() {
        return Err(StorageError::IsDirectory);
    }
    if path.exists() && !overwrite {
        return Err(StorageError::AlreadyExists(path));
    }

    fs::write(&path, body)?;
    tracing::info!("Saved {} ({} chars)", path.display(), body.chars().count());
    Ok(path)
}
