//! Logging
//!
//! The clients log through the `log` facade; those records are routed into a
//! `tracing_subscriber` formatter installed at startup. `RUST_LOG` filters
//! what gets written and also sets the threshold for dashboard events.

pub use crate::error_classifier::LogLevel;
use std::error::Error;
use std::fs::{self, File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::util::SubscriberInitExt;

/// Filter used for written records when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "warn";

/// Threshold for dashboard events, read from `RUST_LOG` (default `info`).
pub fn get_rust_log_level() -> LogLevel {
    let rust_log = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    parse_rust_log_level(&rust_log)
}

pub fn parse_rust_log_level(rust_log: &str) -> LogLevel {
    // First directive wins; `target=level` and bare `level` both work
    let level_str = rust_log
        .split(',')
        .next()
        .unwrap_or(rust_log)
        .split('=')
        .next_back()
        .unwrap_or(rust_log)
        .to_lowercase();

    match level_str.as_str() {
        "trace" => LogLevel::Trace,
        "debug" => LogLevel::Debug,
        "info" => LogLevel::Info,
        "warn" | "warning" => LogLevel::Warn,
        "error" => LogLevel::Error,
        _ => LogLevel::Info,
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Formatter writing records accepted by `filter` to `writer`.
pub fn subscriber<W>(
    filter: EnvFilter,
    writer: W,
    ansi: bool,
) -> impl tracing::Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(ansi)
        .finish()
}

/// Write records to stderr, keeping stdout for command output.
pub fn init_stderr() -> Result<(), Box<dyn Error>> {
    subscriber(env_filter(), std::io::stderr, true).try_init()?;
    Ok(())
}

/// Append records to `path`; the terminal belongs to the dashboard.
pub fn init_file(path: &Path) -> Result<(), Box<dyn Error>> {
    let file = open_log_file(path)?;
    subscriber(env_filter(), Mutex::new(file), false).try_init()?;
    Ok(())
}

fn open_log_file(path: &Path) -> std::io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}
