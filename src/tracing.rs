//! Logging setup
//!
//! Two layers:
//! - console, filtered by `RUST_LOG` (default `warn`)
//! - `log/editor_errors.log`, append-only, never rotated, `info` and above
//!
//! Examples:
//! - `RUST_LOG=debug` - all debug logs on the console
//! - `RUST_LOG=quill::update=debug,message=debug` - update dispatch only

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config_paths::{ensure_log_dir, LOG_FILE_NAME};

/// Initialize the subscriber.
///
/// Keep the returned guard alive for the whole run; dropping it flushes the
/// log file. Returns `None` when the log directory could not be created, in
/// which case only console logging is active.
pub fn init() -> Option<WorkerGuard> {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let (file_layer, guard) = match ensure_log_dir() {
        Ok(log_dir) => {
            let appender = tracing_appender::rolling::never(log_dir, LOG_FILE_NAME);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(false)
                .with_filter(EnvFilter::new("info"));
            (Some(layer), Some(guard))
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            (None, None)
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();

    guard
}
