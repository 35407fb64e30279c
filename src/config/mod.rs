pub mod model;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub use model::{ApiConfig, AppConfig, LoggingConfig};

pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("maintcal")
        .join("config.toml")
}

/// Load the config at `path`, or the default location when `None`.
///
/// A missing file at the default location yields the defaults; an explicitly
/// requested file must exist.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    let (path, explicit) = match path {
        Some(p) => (p.to_path_buf(), true),
        None => (default_config_path(), false),
    };
    if !explicit && !path.exists() {
        return Ok(AppConfig::default());
    }
    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    parse_config(&contents).with_context(|| format!("Failed to parse config file {}", path.display()))
}

pub fn parse_config(contents: &str) -> Result<AppConfig> {
    let config: AppConfig = toml::from_str(contents)?;
    Ok(config)
}

/// Expand a leading `~/` to the user's home directory.
pub fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}
