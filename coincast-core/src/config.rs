//! Dashboard configuration — supported tickers, defaults, cache sizing.
//!
//! Stored as a TOML file; every field has a default so a partial config
//! (or none at all) still yields a working dashboard.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The complete dashboard configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Supported ticker identifiers, in selector order.
    #[serde(default = "default_symbols")]
    pub symbols: Vec<String>,

    /// Initial start date for the history picker.
    #[serde(default = "default_start")]
    pub default_start: NaiveDate,

    /// Short forecast horizon in days.
    #[serde(default = "default_short_horizon")]
    pub short_horizon_days: u32,

    /// Long forecast horizon in days.
    #[serde(default = "default_long_horizon")]
    pub long_horizon_days: u32,

    /// Max entries in the in-memory history cache.
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: usize,

    /// Default destination for the CSV export.
    #[serde(default = "default_export_path")]
    pub export_path: PathBuf,
}

fn default_symbols() -> Vec<String> {
    ["BTC-USD", "ETH-USD", "ADA-USD", "DOGE-USD", "SOL-USD"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2015, 1, 1).unwrap()
}

fn default_short_horizon() -> u32 {
    30
}

fn default_long_horizon() -> u32 {
    365
}

fn default_cache_capacity() -> usize {
    32
}

fn default_export_path() -> PathBuf {
    PathBuf::from("crypto_forecast.csv")
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            symbols: default_symbols(),
            default_start: default_start(),
            short_horizon_days: default_short_horizon(),
            long_horizon_days: default_long_horizon(),
            cache_capacity: default_cache_capacity(),
            export_path: default_export_path(),
        }
    }
}

impl DashboardConfig {
    /// Load a config from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, String> {
        let content =
            std::fs::read_to_string(path).map_err(|e| format!("read config file: {e}"))?;
        Self::from_toml(&content)
    }

    /// Parse a config from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| format!("parse config TOML: {e}"))
    }

    /// Serialize the config to TOML.
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("serialize config: {e}"))
    }

    /// The configured horizon pair, short first.
    pub fn horizons(&self) -> (u32, u32) {
        (self.short_horizon_days, self.long_horizon_days)
    }
}
