//! Tracing configuration and log routing.
//!
//! Logs go to stdout with a compact formatter and, when a writable target
//! exists, to a file as well: `RAGLINE_LOG_FILE` names an explicit path,
//! otherwise `logs/ragline.log` is used. File logging rides a non-blocking
//! writer so slow disks never stall the chat loop.
use std::fs::OpenOptions;
use std::sync::OnceLock;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Keeps the non-blocking writer alive for the process lifetime.
static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

const DEFAULT_LOG_DIR: &str = "logs";
const DEFAULT_LOG_FILE: &str = "ragline.log";

/// Configure tracing subscribers for stdout and optional file logging.
///
/// Filtering respects `RUST_LOG` and defaults to `info`. When no log file can
/// be opened the process still runs with stdout logging alone.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let stdout_layer = fmt::layer().with_target(false).compact();
    let registry = tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer);

    match open_log_writer() {
        Some((writer, guard)) => {
            let _ = LOG_GUARD.set(guard);
            let file_layer = fmt::layer()
                .with_writer(writer)
                .with_target(true)
                .with_ansi(false)
                .compact();
            registry.with(file_layer).init();
        }
        None => registry.init(),
    }
}

fn open_log_writer() -> Option<(tracing_appender::non_blocking::NonBlocking, WorkerGuard)> {
    if let Ok(path) = std::env::var("RAGLINE_LOG_FILE") {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|err| eprintln!("Failed to open log file {path}: {err}"))
            .ok()?;
        return Some(tracing_appender::non_blocking(file));
    }

    if let Err(err) = std::fs::create_dir_all(DEFAULT_LOG_DIR) {
        eprintln!("Failed to create logs directory: {err}");
        return None;
    }
    let appender = tracing_appender::rolling::never(DEFAULT_LOG_DIR, DEFAULT_LOG_FILE);
    Some(tracing_appender::non_blocking(appender))
}
