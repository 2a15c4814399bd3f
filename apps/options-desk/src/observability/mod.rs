//! Logging setup.
//!
//! Installs a `tracing-subscriber` fmt subscriber. `RUST_LOG` wins when set;
//! otherwise the configured level applies to this crate only. Output goes to
//! stderr so command results on stdout stay machine-readable.

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Error returned when a global subscriber is already installed.
pub type InitError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Filter directive used when `RUST_LOG` is unset.
#[must_use]
pub fn default_directive(config: &LoggingConfig) -> String {
    format!("options_desk={}", config.level.to_ascii_lowercase())
}

/// Initialize the global tracing subscriber.
///
/// # Errors
///
/// Returns error if a global subscriber has already been set.
pub fn init_logging(config: &LoggingConfig) -> Result<(), InitError> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(config)));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr);

    if config.format == "json" {
        builder.json().try_init()
    } else {
        builder.pretty().try_init()
    }
}
