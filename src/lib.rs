//! quire - a terminal word processor
//!
//! The editing core (buffer, reflow, cursor mapping, undo history) lives in
//! [`model`]. Everything else follows the Elm Architecture: key events become
//! [`messages::Msg`], [`update::update`] applies them and returns side effects
//! as [`commands::Cmd`], and [`view`] builds frames for the terminal runtime.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod error;
pub mod messages;
pub mod model;
pub mod runtime;
pub mod storage;
pub mod tracing;
pub mod update;
pub mod view;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::EditorConfig;
pub use error::EditError;
pub use messages::Msg;
pub use model::{reflow, unreflow, AppModel, EditorSession};
