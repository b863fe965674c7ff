//! Tracing/logging setup shared by binaries and test harnesses.

pub mod config;
pub mod tracing;

pub use config::{ConfigError, LogFormat, TracingConfig};

/// Initialize process-wide tracing from the environment.
///
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}
