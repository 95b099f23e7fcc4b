//! Runtime module - terminal integration
//!
//! - `app` - terminal setup, the event loop and command execution
//! - `input` - key event to message mapping

pub mod app;
pub mod input;

pub use app::run;
