//! Error types for pattern compilation, recognition and route-file loading.
//!
//! Negative outcomes that are not failures are not errors: recognition that
//! finds nothing returns `Ok(None)` and generation that finds no compatible
//! route returns `None`.

use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

use crate::route::RouteSpec;

/// A pattern could not be compiled.
///
/// Raised at registration time; the route is not added to the table.
#[derive(Debug, Error)]
pub enum PatternError {
    /// A grouped parameter `:(name` or `*(name` was never closed.
    #[error("unbalanced group in pattern '{pattern}'")]
    UnbalancedGroup {
        /// The offending pattern text
        pattern: String,
    },

    /// A `:` or `*` sigil was not followed by a parameter name.
    #[error("empty parameter name in pattern '{pattern}'")]
    EmptyName {
        /// The offending pattern text
        pattern: String,
    },

    /// A parameter name contains characters other than word characters,
    /// or starts with a digit.
    #[error("invalid parameter name '{name}' in pattern '{pattern}'")]
    InvalidName {
        /// The offending pattern text
        pattern: String,
        /// The rejected name
        name: String,
    },

    /// The same parameter name appears twice in one pattern.
    #[error("duplicate parameter '{name}' in pattern '{pattern}'")]
    DuplicateName {
        /// The offending pattern text
        pattern: String,
        /// The repeated name
        name: String,
    },

    /// A validator fragment did not compile once embedded in the matcher.
    #[error("validator for pattern '{pattern}' does not compile: {source}")]
    InvalidValidator {
        /// The offending pattern text
        pattern: String,
        /// Underlying regex error
        #[source]
        source: regex::Error,
    },
}

/// A route of the right shape exists but the URL content violates its
/// validators.
#[derive(Debug, Clone, Error)]
#[error("route '{}' matches the shape of '{url}' but its values are invalid", .route.pattern())]
pub struct InvalidRouteError {
    /// The first route whose structural probe accepted the URL
    pub route: Arc<RouteSpec>,
    /// The raw URL as supplied by the caller
    pub url: String,
}

/// A route file could not be read or turned into a route table.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("failed to read route file {path}: {source}")]
    Io {
        /// Path of the route file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The file extension is not one of yaml, yml, toml or json.
    #[error("unsupported route file extension: {path}")]
    UnsupportedFormat {
        /// Path of the route file
        path: PathBuf,
    },

    /// YAML syntax or shape error.
    #[error("invalid YAML route file: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// TOML syntax or shape error.
    #[error("invalid TOML route file: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON syntax or shape error.
    #[error("invalid JSON route file: {0}")]
    Json(#[from] serde_json::Error),

    /// A route entry failed to compile.
    #[error("route #{index} ('{pattern}') is invalid: {source}")]
    Route {
        /// Zero-based position of the entry in the file
        index: usize,
        /// Pattern text of the entry
        pattern: String,
        /// Compilation failure
        #[source]
        source: PatternError,
    },
}
