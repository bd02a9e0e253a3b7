//! Logging Infrastructure
//!
//! Structured logging setup. Console output goes to stderr because stdout
//! carries the dashboard's JSON responses.

use std::path::Path;
use std::time::{Duration, SystemTime};

/// File name prefix of the daily rolling log files
pub const LOG_FILE_PREFIX: &str = "dashboard";

/// Initialize the logger
pub fn init_logger() {
    init_logger_with_file(None, None, None);
}

/// Initialize the logger with optional JSON formatting and file output
pub fn init_logger_with_file(log_level: Option<&str>, json: Option<bool>, log_dir: Option<&str>) {
    let level = log_level
        .and_then(|l| l.parse().ok())
        .unwrap_or(tracing::Level::INFO);
    let json = json.unwrap_or(false);

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    // File output only when the directory already exists
    let log_dir = log_dir.map(Path::new).filter(|p| p.exists());

    let result = match (log_dir, json) {
        (Some(dir), true) => subscriber
            .json()
            .with_writer(tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX))
            .try_init(),
        (Some(dir), false) => subscriber
            .with_ansi(false)
            .with_writer(tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX))
            .try_init(),
        (None, true) => subscriber.json().with_writer(std::io::stderr).try_init(),
        (None, false) => subscriber.with_writer(std::io::stderr).try_init(),
    };

    if let Err(e) = result {
        // A global subscriber is already installed (tests, embedding hosts)
        tracing::debug!("Logger already initialized: {}", e);
    }
}

/// Remove rolled log files older than `days`
///
/// Only files whose name starts with [`LOG_FILE_PREFIX`] are touched.
/// Returns how many files were removed.
pub fn cleanup_old_logs(log_dir: &str, days: u64) -> std::io::Result<usize> {
    let max_age = Duration::from_secs(days.saturating_mul(24 * 60 * 60));
    let now = SystemTime::now();
    let mut removed = 0;

    for entry in std::fs::read_dir(log_dir)? {
        let entry = entry?;
        let is_log = entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with(LOG_FILE_PREFIX));
        if !is_log || !entry.file_type()?.is_file() {
            continue;
        }

        let modified = entry.metadata()?.modified()?;
        let age = now.duration_since(modified).unwrap_or_default();
        if age > max_age {
            std::fs::remove_file(entry.path())?;
            removed += 1;
        }
    }

    if removed > 0 {
        tracing::info!(removed, log_dir, "Removed old log files");
    }
    Ok(removed)
}
