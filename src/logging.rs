//! Logging setup for applications embedding jira-session.
//!
//! The library itself only emits `tracing` events; nothing is recorded until
//! a subscriber is installed. [`init`] installs one that writes to a daily
//! rotated file, which suits terminal tools that own stdout.

use std::path::PathBuf;

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

/// Default log level if RUST_LOG is not set.
const DEFAULT_LOG_FILTER: &str = "jira_session=info,warn";

/// File name prefix of the rotated log files.
const LOG_FILE_NAME: &str = "jira-session.log";

/// Initialize file logging.
///
/// Log files go to the platform-specific local data directory:
/// - Linux: `~/.local/share/jira-session/logs/`
/// - macOS: `~/Library/Application Support/jira-session/logs/`
/// - Windows: `C:\Users\<User>\AppData\Local\jira-session\logs\`
///
/// Configure the level via `RUST_LOG`, e.g. `RUST_LOG=jira_session=debug`
/// to see every request and response status.
///
/// # Errors
///
/// Returns an error if:
/// - The log directory cannot be determined or created
/// - A global tracing subscriber is already set
///
/// # Example
///
/// ```no_run
/// jira_session::logging::init().expect("Failed to initialize logging");
/// ```
pub fn init() -> anyhow::Result<()> {
    let log_dir = get_log_directory()?;
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_NAME);

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let subscriber = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true),
        )
        .with(filter);

    tracing::subscriber::set_global_default(subscriber)?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "jira-session logging started");
    tracing::debug!(log_dir = %log_dir.display(), "Log directory");

    Ok(())
}

/// Get the log directory path.
fn get_log_directory() -> anyhow::Result<PathBuf> {
    let base_dir = dirs::data_local_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine local data directory"))?;

    Ok(base_dir.join("jira-session").join("logs"))
}

/// Get the path where logs are stored, if the platform has one.
pub fn log_directory() -> Option<PathBuf> {
    get_log_directory().ok()
}
