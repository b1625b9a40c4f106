//! Structured logging setup using the `tracing` ecosystem.
//!
//! The library itself only emits events; binaries and tests decide where they
//! go. Console output always goes to stderr so command output on stdout stays
//! machine-readable.

use std::path::Path;

use tracing_appender::rolling;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::RwResult;

/// File name prefix for rotated log files.
const LOG_FILE_NAME: &str = "rewrite.log";

/// Build the level filter. `RUST_LOG` wins over the configured level.
fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize the global tracing subscriber.
///
/// Installs a compact stderr layer and a daily-rotated file layer in
/// `log_dir`. With `json_output` the file layer writes one JSON object per
/// event, including span fields such as `method` and `url`.
pub fn init_logging(level: &str, log_dir: &Path, json_output: bool) -> RwResult<LogGuard> {
    std::fs::create_dir_all(log_dir)?;

    let (writer, guard) = tracing_appender::non_blocking(rolling::daily(log_dir, LOG_FILE_NAME));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let registry = tracing_subscriber::registry()
        .with(build_filter(level))
        .with(console_layer);

    if json_output {
        registry
            .with(fmt::layer().with_writer(writer).json().with_current_span(true))
            .try_init()
            .map_err(|e| anyhow::anyhow!("failed to install subscriber: {e}"))?;
    } else {
        registry
            .with(fmt::layer().with_writer(writer).with_ansi(false).with_line_number(true))
            .try_init()
            .map_err(|e| anyhow::anyhow!("failed to install subscriber: {e}"))?;
    }

    tracing::debug!(level, dir = %log_dir.display(), "logging initialized");

    Ok(LogGuard { _guard: guard })
}

/// Keeps the non-blocking file writer alive; dropping it flushes the log.
pub struct LogGuard {
    _guard: tracing_appender::non_blocking::WorkerGuard,
}

/// Initialize a console-only logger for tests and short-lived tools.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_console_logging(level: &str) {
    let _ = tracing_subscriber::registry()
        .with(build_filter(level))
        .with(fmt::layer().with_test_writer().compact())
        .try_init();
}
