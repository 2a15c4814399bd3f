//! Configuration for the options desk.
//!
//! YAML with `${VAR}` / `${VAR:-default}` environment interpolation.
//!
//! # Usage
//!
//! ```rust,ignore
//! use options_desk::config::load_config;
//!
//! // Load from default path (options-desk.yaml)
//! let config = load_config(None)?;
//! println!("risk-free rate: {}", config.pricing.risk_free_rate);
//! ```

mod observability;
mod pricing;
mod strategies;

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use observability::{LoggingConfig, ObservabilityConfig};
pub use pricing::PricingConfig;
pub use strategies::StrategiesConfig;

/// Default config file name.
pub const DEFAULT_CONFIG_PATH: &str = "options-desk.yaml";

/// Log levels accepted in `observability.logging.level`.
const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Log formats accepted in `observability.logging.format`.
const VALID_LOG_FORMATS: [&str; 2] = ["json", "pretty"];

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        /// Path to the config file.
        path: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Failed to parse YAML configuration.
    #[error("Failed to parse config YAML: {0}")]
    ParseError(#[from] serde_yaml_bw::Error),

    /// Configuration validation failed.
    #[error("Config validation failed: {0}")]
    ValidationError(String),
}

/// Root configuration structure. Every section is optional.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Pricing model configuration.
    #[serde(default)]
    pub pricing: PricingConfig,
    /// Strategy composition configuration.
    #[serde(default)]
    pub strategies: StrategiesConfig,
    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

// ============================================
// Configuration Loading
// ============================================

/// Load configuration from a YAML file with environment variable interpolation.
///
/// # Arguments
///
/// * `path` - Optional path to the config file. Defaults to [`DEFAULT_CONFIG_PATH`].
///
/// # Errors
///
/// Returns a `ConfigError` if the file cannot be read, parsed, or validated.
pub fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    let path = path.unwrap_or(DEFAULT_CONFIG_PATH);

    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_string(),
        source: e,
    })?;

    load_config_from_string(&contents)
}

/// Load configuration, falling back to defaults when the file does not exist.
///
/// Returns the config and whether it came from the file.
///
/// # Errors
///
/// Returns a `ConfigError` if the file exists but cannot be read, parsed, or
/// validated.
pub fn load_config_or_default(path: Option<&str>) -> Result<(Config, bool), ConfigError> {
    let resolved = path.unwrap_or(DEFAULT_CONFIG_PATH);

    if !Path::new(resolved).exists() {
        return Ok((Config::default(), false));
    }

    load_config(Some(resolved)).map(|config| (config, true))
}

/// Load configuration from a YAML string (useful for testing).
///
/// # Errors
///
/// Returns a `ConfigError` if the YAML cannot be parsed or validated.
pub fn load_config_from_string(yaml: &str) -> Result<Config, ConfigError> {
    let interpolated = interpolate_env_vars(yaml);

    // An empty document means "all defaults"
    let config: Config = if interpolated.trim().is_empty() {
        Config::default()
    } else {
        serde_yaml_bw::from_str(&interpolated)?
    };

    validate_config(&config)?;
    Ok(config)
}

/// Interpolate environment variables in a string.
///
/// Supports both `${VAR}` and `${VAR:-default}` syntax. A variable that is
/// unset or empty takes its default, or the empty string without one.
#[allow(clippy::expect_used)] // Regex is compile-time constant
fn interpolate_env_vars(input: &str) -> String {
    use std::sync::OnceLock;

    static ENV_VAR_REGEX: OnceLock<regex::Regex> = OnceLock::new();

    let re = ENV_VAR_REGEX.get_or_init(|| {
        regex::Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}")
            .expect("env var regex is valid")
    });

    re.replace_all(input, |cap: &regex::Captures<'_>| {
        let default_value = cap.get(2).map_or("", |m| m.as_str());

        match std::env::var(&cap[1]) {
            Ok(v) if !v.is_empty() => v,
            _ => default_value.to_string(),
        }
    })
    .into_owned()
}

/// Validate configuration values.
fn validate_config(config: &Config) -> Result<(), ConfigError> {
    let pricing = &config.pricing;

    if !pricing.risk_free_rate.is_finite() || !(-1.0..=1.0).contains(&pricing.risk_free_rate) {
        return Err(ConfigError::ValidationError(
            "pricing.risk_free_rate must be between -1.0 and 1.0".to_string(),
        ));
    }

    if pricing.day_count_basis == 0 {
        return Err(ConfigError::ValidationError(
            "pricing.day_count_basis must be positive".to_string(),
        ));
    }

    if !pricing.default_volatility.is_finite() || pricing.default_volatility <= 0.0 {
        return Err(ConfigError::ValidationError(
            "pricing.default_volatility must be positive".to_string(),
        ));
    }

    let logging = &config.observability.logging;

    if !VALID_LOG_LEVELS.contains(&logging.level.to_ascii_lowercase().as_str()) {
        return Err(ConfigError::ValidationError(format!(
            "observability.logging.level must be one of: {VALID_LOG_LEVELS:?}"
        )));
    }

    if !VALID_LOG_FORMATS.contains(&logging.format.as_str()) {
        return Err(ConfigError::ValidationError(format!(
            "observability.logging.format must be one of: {VALID_LOG_FORMATS:?}"
        )));
    }

    Ok(())
}
