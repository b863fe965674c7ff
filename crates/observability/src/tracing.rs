//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

use crate::config::{ConfigError, LogFormat, TracingConfig};

/// Initialize tracing from [`TracingConfig::from_env`].
///
/// Safe to call multiple times (subsequent calls are no-ops). A log format
/// fallback is reported through the freshly installed subscriber.
pub fn init() {
    let (config, fallback) = TracingConfig::from_env_checked();
    if init_with(&config) {
        report_fallback(fallback.as_ref());
    }
}

fn report_fallback(fallback: Option<&ConfigError>) {
    if let Some(e) = fallback {
        ::tracing::warn!(error = %e, "falling back to json log format");
    }
}

/// Initialize tracing with an explicit configuration.
///
/// Returns `false` when a global subscriber was already installed.
pub fn init_with(config: &TracingConfig) -> bool {
    let filter = EnvFilter::try_new(&config.filter).unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false);

    let result = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
    };

    let installed = result.is_ok();
    if installed {
        ::tracing::debug!(filter = %config.filter, format = ?config.format, "tracing initialized");
    }
    installed
}
