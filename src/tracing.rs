//! Logging setup for the command-line tool
//!
//! Configure via the RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs, including every fallback decision
//! - `RUST_LOG=treelight::highlighter=trace` - module-level filtering
//!
//! # Log Files
//!
//! With a log directory, logs are also written to `<dir>/treelight.log` with
//! daily rotation. File logging uses debug level regardless of RUST_LOG.

use std::path::Path;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Initialize the global subscriber.
///
/// Console output goes to stderr so highlighted HTML on stdout stays clean.
pub fn init(log_dir: Option<&Path>) {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = log_dir.and_then(|dir| match crate::config_paths::ensure_dir(dir) {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "treelight.log");
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
    });

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}
