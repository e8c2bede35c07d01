//! # Runtime Configuration Module
//!
//! Environment-variable configuration for the `url-mapper` binary and for
//! applications that want the same logging setup.
//!
//! ## Environment Variables
//!
//! ### `URL_MAPPER_LOG_LEVEL`
//!
//! Default level for the `tracing` filter when `RUST_LOG` is not set:
//! `trace`, `debug`, `info`, `warn` or `error`.
//!
//! Default: `warn`. The router logs every successful match and generation
//! at `info`, which is noisy for a command-line tool.
//!
//! ### `URL_MAPPER_LOG_FORMAT`
//!
//! `pretty` for human-readable output, `json` for one JSON object per event.
//!
//! Default: `pretty`
//!
//! ## Usage
//!
//! ```rust
//! use url_mapper::runtime_config::RuntimeConfig;
//!
//! let config = RuntimeConfig::from_env();
//! println!("log level: {}", config.log_level);
//! ```

use std::env;

use crate::logging::LogFormat;

const DEFAULT_LOG_LEVEL: &str = "warn";

/// Runtime configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Fallback filter level (default: `warn`)
    pub log_level: String,
    /// Output format (default: pretty)
    pub log_format: LogFormat,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}

impl RuntimeConfig {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let log_level = lookup("URL_MAPPER_LOG_LEVEL")
            .map(|v| v.trim().to_ascii_lowercase())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());
        let log_format = lookup("URL_MAPPER_LOG_FORMAT")
            .map_or(LogFormat::Pretty, |v| LogFormat::parse(&v));
        Self {
            log_level,
            log_format,
        }
    }
}
