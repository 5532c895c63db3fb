use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{filter::Directive, EnvFilter};

use crate::error::{Error, Result};

const LOG_FILE_PREFIX: &str = "aiml-course.log";

/// Filter used when `RUST_LOG` is not set.
pub fn default_directive(debug: bool) -> &'static str {
    if debug {
        "aiml_course=debug"
    } else {
        "aiml_course=info"
    }
}

/// Sends tracing output to a daily rolling file under `logs_dir`.
///
/// The terminal belongs to the UI, so nothing is written to stdout. Keep the
/// returned guard alive until exit or buffered lines are lost.
pub fn init_logging(logs_dir: &Path, debug: bool) -> Result<WorkerGuard> {
    let file_appender = tracing_appender::rolling::daily(logs_dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let directive: Directive = default_directive(debug)
        .parse()
        .map_err(|e| Error::platform(format!("Invalid log directive: {}", e)))?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| Error::platform(format!("Failed to install log subscriber: {}", e)))?;

    Ok(guard)
}
