//! Command-line argument parsing for the editor
//!
//! Supports:
//! - Opening an existing text file
//! - Starting a new file at a path that does not exist yet
//! - New empty document with an optional title
//! - Naming the author
//! - Overriding the save directory

use clap::Parser;
use std::path::PathBuf;

use crate::model::document::{Document, UNTITLED};
use crate::storage::{self, StorageError};

/// A small terminal word processor
#[derive(Parser, Debug)]
#[command(name = "quire", version, about = "A small terminal word processor")]
pub struct CliArgs {
    /// Text file to open
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Title for a new document (ignored when opening a file)
    #[arg(short = 't', long)]
    pub title: Option<String>,

    /// Author shown in the title bar
    #[arg(short = 'a', long)]
    pub author: Option<String>,

    /// Start with an empty document even if PATH is given
    #[arg(short = 'n', long)]
    pub new: bool,

    /// Directory new documents are saved to
    #[arg(long, value_name = "DIR")]
    pub save_dir: Option<PathBuf>,
}

/// What to open at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartupMode {
    /// Start with an empty document
    Empty { title: String },
    /// Open a file, or start a new one at that path
    File(PathBuf),
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub mode: StartupMode,
    pub author: Option<String>,
    pub save_dir: Option<PathBuf>,
}

impl CliArgs {
    /// Convert parsed CLI args into startup configuration
    pub fn into_config(self) -> Result<StartupConfig, String> {
        if let Some(title) = &self.title {
            if title.trim().is_empty() {
                return Err("Title must not be empty".to_string());
            }
        }
        if let Some(author) = &self.author {
            if author.trim().is_empty() {
                return Err("Author must not be empty".to_string());
            }
        }

        let mode = match self.path {
            Some(path) if !self.new => StartupMode::File(path),
            _ => StartupMode::Empty {
                title: self.title.unwrap_or_else(|| UNTITLED.to_string()),
            },
        };

        Ok(StartupConfig {
            mode,
            author: self.author,
            save_dir: self.save_dir,
        })
    }
}

impl StartupConfig {
    /// Build the document to edit
    ///
    /// A file path that does not exist yet gives an empty document that will
    /// be created on save.
    pub fn initial_document(&self) -> Result<Document, StorageError> {
        let document = match &self.mode {
            StartupMode::Empty { title } => Ok(Document::new(title.clone(), "")),
            StartupMode::File(path) => match storage::open_document(path) {
                Ok(document) => Ok(document),
                Err(StorageError::NotFound) => {
                    tracing::info!("{} does not exist, starting a new file", path.display());
                    let mut document = Document::new(storage::filename_for_display(path), "")
                        .with_path(path.clone());
                    document.is_modified = true;
                    Ok(document)
                }
                Err(e) => Err(e),
            },
        }?;
        Ok(document.with_author(self.author.clone()))
    }
}
