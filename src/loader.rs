//! # Loader Module
//!
//! Declarative route files. A route file describes one namespace:
//!
//! ```yaml
//! prefix: /en
//! script_name: index.php
//! routes:
//!   - pattern: archive/:year/:month/:day
//!     alias: archive
//!     defaults: { controller: blog, action: view, month: null, day: null }
//!     validators: { month: '\d{1,2}', day: '\d{1,2}' }
//!   - pattern: :controller/:action/:id
//! ```
//!
//! The same shape is accepted as TOML (`[[routes]]` tables) or JSON. Routes
//! are registered in file order, so file order is match order. TOML has no
//! null; write `false` or `""` for an absent default.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::LoadError;
use crate::router::Mapper;
use crate::value::ParameterSet;
use crate::Validators;

/// One namespace as written in a route file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RouteFile {
    /// URL prefix, e.g. `/en`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    /// Script name for deployments without URL rewriting
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script_name: Option<String>,
    /// Routes in match order
    #[serde(default)]
    pub routes: Vec<RouteEntry>,
}

/// One route entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RouteEntry {
    pub pattern: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(default)]
    pub defaults: ParameterSet,
    #[serde(default)]
    pub validators: Validators,
}

impl RouteFile {
    /// Parse YAML text.
    ///
    /// # Errors
    ///
    /// [`LoadError::Yaml`] on syntax or shape errors.
    pub fn from_str_yaml(text: &str) -> Result<Self, LoadError> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Parse TOML text.
    ///
    /// # Errors
    ///
    /// [`LoadError::Toml`] on syntax or shape errors.
    pub fn from_str_toml(text: &str) -> Result<Self, LoadError> {
        Ok(toml::from_str(text)?)
    }

    /// Parse JSON text.
    ///
    /// # Errors
    ///
    /// [`LoadError::Json`] on syntax or shape errors.
    pub fn from_str_json(text: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read a file, picking the format from its extension.
    ///
    /// # Errors
    ///
    /// [`LoadError::Io`] if the file cannot be read,
    /// [`LoadError::UnsupportedFormat`] for an unknown extension, or the
    /// parse error of the chosen format.
    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        let parse: fn(&str) -> Result<Self, LoadError> = match extension.as_deref() {
            Some("yaml" | "yml") => Self::from_str_yaml,
            Some("toml") => Self::from_str_toml,
            Some("json") => Self::from_str_json,
            _ => {
                return Err(LoadError::UnsupportedFormat {
                    path: path.to_path_buf(),
                })
            }
        };
        let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        parse(&text)
    }

    /// Register every entry into `mapper`, in order, after applying the
    /// file's prefix and script name.
    ///
    /// # Errors
    ///
    /// [`LoadError::Route`] for the first entry that fails to compile.
    /// Entries before it stay registered.
    pub fn apply(&self, mapper: &mut Mapper) -> Result<(), LoadError> {
        if let Some(prefix) = &self.prefix {
            mapper.set_prefix(prefix);
        }
        if let Some(script_name) = &self.script_name {
            mapper.set_script_name(script_name);
        }
        for (index, entry) in self.routes.iter().enumerate() {
            mapper
                .register(
                    &entry.pattern,
                    entry.defaults.clone(),
                    entry.validators.clone(),
                    entry.alias.as_deref(),
                )
                .map_err(|source| LoadError::Route {
                    index,
                    pattern: entry.pattern.clone(),
                    source,
                })?;
        }
        Ok(())
    }

    /// Build a fresh default namespace from this file.
    ///
    /// # Errors
    ///
    /// See [`apply`](Self::apply).
    pub fn into_mapper(self) -> Result<Mapper, LoadError> {
        let mut mapper = Mapper::new();
        self.apply(&mut mapper)?;
        Ok(mapper)
    }
}

/// Load a route file into a new default namespace.
///
/// # Errors
///
/// Any [`LoadError`]; a failing entry leaves no partially built namespace
/// behind.
pub fn load_routes(path: impl AsRef<Path>) -> Result<Mapper, LoadError> {
    let path = path.as_ref();
    let mapper = RouteFile::from_path(path)?.into_mapper()?;
    info!(
        path = %path.display(),
        routes_count = mapper.len(),
        prefix = %mapper.prefix(),
        "Route file loaded"
    );
    Ok(mapper)
}
