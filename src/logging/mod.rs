//! Diagnostic logging setup.
//!
//! The terminal view owns the screen, so when logging is enabled the
//! `tracing` output is appended to `maintcal.log` in the configured log
//! directory (default: `~/.local/share/maintcal/logs/`). Plain mode writes
//! to stderr instead.

use crate::config::{expand_home, LoggingConfig};
use anyhow::{anyhow, Context, Result};
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const LOG_FILE_NAME: &str = "maintcal.log";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    File,
    Stderr,
}

pub fn log_file_path(config: &LoggingConfig) -> PathBuf {
    expand_home(&config.log_dir).join(LOG_FILE_NAME)
}

fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level))
}

/// Stderr output is shown to the user, so it stays off unless enabled in
/// config or requested through `RUST_LOG`.
fn stderr_enabled(config: &LoggingConfig, rust_log_set: bool) -> bool {
    config.enabled || rust_log_set
}

/// Install the global subscriber. Returns the log file path when logging to
/// a file, `None` when nothing was installed or output goes to stderr.
pub fn init(config: &LoggingConfig, target: LogTarget) -> Result<Option<PathBuf>> {
    match target {
        LogTarget::Stderr => {
            let rust_log_set = std::env::var_os(EnvFilter::DEFAULT_ENV).is_some();
            if !stderr_enabled(config, rust_log_set) {
                return Ok(None);
            }
            tracing_subscriber::fmt()
                .with_env_filter(env_filter(config))
                .with_writer(std::io::stderr)
                .try_init()
                .map_err(|e| anyhow!("Failed to install logger: {}", e))?;
            Ok(None)
        }
        LogTarget::File => {
            if !config.enabled {
                return Ok(None);
            }
            let path = log_file_path(config);
            if let Some(dir) = path.parent() {
                fs::create_dir_all(dir)
                    .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(env_filter(config))
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .try_init()
                .map_err(|e| anyhow!("Failed to install logger: {}", e))?;
            Ok(Some(path))
        }
    }
}
