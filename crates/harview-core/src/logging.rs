//! Logging configuration using tracing

use std::path::PathBuf;

use chrono::{NaiveDate, Utc};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::{Result, ResultExt};

/// Environment variable holding `EnvFilter` directives.
pub const LOG_FILTER_ENV: &str = "HARVIEW_LOG";

/// Environment variable overriding the log directory.
pub const LOG_DIR_ENV: &str = "HARVIEW_LOG_DIR";

const LOG_FILE_NAME: &str = "harview.log";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/harview/logs/` (or `$HARVIEW_LOG_DIR`)
/// and never to the terminal, which belongs to the dashboard.
/// Log level is controlled by the `HARVIEW_LOG` environment variable.
///
/// # Examples
/// ```bash
/// HARVIEW_LOG=debug harview capture.har
/// HARVIEW_LOG_DIR=/tmp/harview HARVIEW_LOG=trace harview capture.har
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory();
    std::fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_NAME);

    // Default to info, allow override via HARVIEW_LOG
    let env_filter = EnvFilter::try_from_env(LOG_FILTER_ENV)
        .unwrap_or_else(|_| EnvFilter::new("harview=info,warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("═══════════════════════════════════════════════════════");
    tracing::info!("harview starting");
    tracing::info!("Log directory: {}", log_dir.display());
    tracing::info!("═══════════════════════════════════════════════════════");

    Ok(())
}

/// Get the log directory path
fn get_log_directory() -> PathBuf {
    if let Some(dir) = std::env::var_os(LOG_DIR_ENV).filter(|d| !d.is_empty()) {
        return PathBuf::from(dir);
    }
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("harview").join("logs")
}

/// Get the log file path for the current day
///
/// Daily rotation suffixes the file with the UTC date.
pub fn get_current_log_file() -> PathBuf {
    get_log_directory().join(log_file_name(Utc::now().date_naive()))
}

fn log_file_name(date: NaiveDate) -> String {
    format!("{LOG_FILE_NAME}.{}", date.format("%Y-%m-%d"))
}
