//! Logging setup
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=quire::model::session=debug` - edit operations only
//!
//! Logs are also written to `~/.config/quire/logs/quire.log` with daily
//! rotation. Console output goes to stderr, and only when stderr is redirected
//! away from the terminal the editor draws on (e.g. `quire 2>quire.err`).

use std::io::IsTerminal;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Stderr logging would draw over the editor when stderr is the terminal
fn console_enabled(stderr_is_terminal: bool) -> bool {
    !stderr_is_terminal
}

/// Initialize tracing subscriber with file logging, plus stderr when redirected
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = console_enabled(std::io::stderr().is_terminal()).then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(false)
            .with_target(true)
            .with_line_number(true)
            .with_filter(console_filter)
    });

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender =
                tracing_appender::rolling::daily(logs_dir, crate::config_paths::LOG_FILE_NAME);
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}
