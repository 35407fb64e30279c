//! Configuration data model.
//!
//! The config is only ever read. Every field has a default so the viewer
//! works without a config file.

use crate::calendar::MonthOrder;
use serde::Deserialize;

pub const DEFAULT_ENDPOINT: &str =
    "https://xjvq5wtiye.execute-api.us-east-1.amazonaws.com/interview/api/v1/challenge";

/// Root application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the calendar is fetched from.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Upper bound on the whole request, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    #[serde(default)]
    pub month_order: MonthOrder,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            month_order: MonthOrder::default(),
        }
    }
}

/// Diagnostic log settings. The log file lives in `log_dir`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
            level: default_log_level(),
        }
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}
fn default_timeout_secs() -> u64 {
    30
}
fn default_tick_rate_ms() -> u64 {
    100
}
fn default_log_dir() -> String {
    "~/.local/share/maintcal/logs".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}
