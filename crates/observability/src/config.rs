//! Tracing configuration, read from the environment.

use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Env var holding the filter directive (e.g. `parkade_parking=debug`).
pub const LOG_FILTER_ENV: &str = "PARKADE_LOG";
/// Env var selecting the output format (`json`, `pretty`, `compact`).
pub const LOG_FORMAT_ENV: &str = "PARKADE_LOG_FORMAT";

const DEFAULT_FILTER: &str = "info";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown log format: {0}")]
    UnknownLogFormat(String),
}

/// Output format of the fmt subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
    Compact,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" => Ok(Self::Pretty),
            "compact" => Ok(Self::Compact),
            other => Err(ConfigError::UnknownLogFormat(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TracingConfig {
    pub filter: String,
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            format: LogFormat::default(),
        }
    }
}

impl TracingConfig {
    /// Read `PARKADE_LOG` (falling back to `RUST_LOG`) and `PARKADE_LOG_FORMAT`.
    ///
    /// An unknown format falls back to JSON.
    pub fn from_env() -> Self {
        Self::from_env_checked().0
    }

    /// Like [`TracingConfig::from_env`], also returning the error behind a
    /// format fallback so it can be logged once a subscriber is installed.
    pub fn from_env_checked() -> (Self, Option<ConfigError>) {
        Self::from_lookup_checked(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self::from_lookup_checked(lookup).0
    }

    fn from_lookup_checked(lookup: impl Fn(&str) -> Option<String>) -> (Self, Option<ConfigError>) {
        let filter = lookup(LOG_FILTER_ENV)
            .or_else(|| lookup("RUST_LOG"))
            .filter(|f| !f.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_FILTER.to_string());

        let (format, fallback) = match lookup(LOG_FORMAT_ENV).map(|raw| raw.parse::<LogFormat>()) {
            Some(Ok(format)) => (format, None),
            Some(Err(e)) => (LogFormat::Json, Some(e)),
            None => (LogFormat::default(), None),
        };

        (Self { filter, format }, fallback)
    }
}
