//! File logging setup
//!
//! The terminal is owned by the TUI, so tracing output goes to a log file
//! through a non-blocking writer. Keep the returned guard alive until exit or
//! buffered lines are lost.

use crate::config::DemoConfig;
use crate::{MinerError, Result};
use std::fs::{self, OpenOptions};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Guard that flushes the log file when dropped
pub struct LogGuard {
    _guard: WorkerGuard,
}

/// Build the filter: `RUST_LOG` wins over the configured level
pub fn build_filter(default_level: &str) -> Result<EnvFilter> {
    match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(directives) if !directives.trim().is_empty() => EnvFilter::try_new(directives)
            .map_err(|e| MinerError::Logging(format!("Invalid RUST_LOG: {}", e))),
        _ => EnvFilter::try_new(default_level)
            .map_err(|e| MinerError::Logging(format!("Invalid log level: {}", e))),
    }
}

/// Install the global subscriber writing to the configured log file
pub fn init(config: &DemoConfig) -> Result<LogGuard> {
    let path = config.log_file_path()?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            MinerError::Logging(format!(
                "Failed to create log directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|e| {
            MinerError::Logging(format!("Failed to open log file {}: {}", path.display(), e))
        })?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(build_filter(&config.logging.level)?)
        .with(file_layer)
        .try_init()
        .map_err(|e| MinerError::Logging(format!("Failed to install subscriber: {}", e)))?;

    tracing::info!(log_file = %path.display(), "logging initialized");

    Ok(LogGuard { _guard: guard })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_from_configured_level() {
        if std::env::var(EnvFilter::DEFAULT_ENV).is_ok() {
            return;
        }
        assert!(build_filter("debug").is_ok());
        assert!(build_filter("artifact_miner=trace,info").is_ok());
    }
}
