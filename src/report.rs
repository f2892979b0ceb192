//! Error reporter
//!
//! Logs a failed operation and, when the user should see it, builds the
//! message box command for the runtime to show.

use std::backtrace::Backtrace;
use std::error::Error;
use std::fmt::Write;

use crate::commands::{Cmd, MessageLevel};
use crate::config_paths::log_file;

/// Log `error` for `operation`. Returns a message box command when `visible`.
pub fn report(operation: &str, error: &dyn Error, visible: bool) -> Option<Cmd> {
    tracing::error!("Error in {}: {}", operation, error);
    let detail = format!("{:?}", error);
    tracing::debug!(
        "{}",
        error_detail(operation, &detail, &causes(error), &Backtrace::capture())
    );

    visible.then(|| {
        Cmd::message(
            MessageLevel::Error,
            "Error",
            message_body(operation, &error.to_string()),
        )
    })
}

/// Same as [`report`] for errors that only survive as text (e.g. from the runtime)
pub fn report_text(operation: &str, error: &str, visible: bool) -> Option<Cmd> {
    tracing::error!("Error in {}: {}", operation, error);
    tracing::debug!("{}", error_detail(operation, error, &[], &Backtrace::capture()));

    visible.then(|| Cmd::message(MessageLevel::Error, "Error", message_body(operation, error)))
}

fn message_body(operation: &str, error: &str) -> String {
    format!(
        "An error occurred in: {}\n\n{}\n\nDetails were written to {}",
        operation,
        error,
        log_file().display()
    )
}

/// Messages of the errors behind `error`, nearest first
fn causes<'a>(error: &'a dyn Error) -> Vec<String> {
    std::iter::successors(error.source(), |&cause: &&'a (dyn Error + 'static)| cause.source())
        .map(|cause| cause.to_string())
        .collect()
}

/// Debug-level detail: the error, its cause chain and where it was reported.
///
/// The backtrace is only resolved when `RUST_BACKTRACE` (or
/// `RUST_LIB_BACKTRACE`) enables capturing.
fn error_detail(
    operation: &str,
    detail: &str,
    causes: &[String],
    backtrace: &Backtrace,
) -> String {
    let mut out = format!("Error detail for {}: {}", operation, detail);
    for (depth, cause) in causes.iter().enumerate() {
        let _ = write!(out, "\n  caused by [{}]: {}", depth + 1, cause);
    }
    let _ = write!(out, "\nBacktrace:\n{}", backtrace);
    out
}
