//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

use crate::config::{DEFAULT_FILTER, LogConfig, LogFormat};

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init(config: &LogConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false);

    // Logs go to stderr; stdout belongs to the program's own output.
    let installed = match config.format {
        LogFormat::Json => builder.json().with_writer(std::io::stderr).try_init().is_ok(),
        LogFormat::Pretty => builder.pretty().with_writer(std::io::stderr).try_init().is_ok(),
    };

    if installed {
        if let Some(raw) = &config.rejected_format {
            ::tracing::warn!(value = %raw, "unknown log format; using json");
        }
    }
}
