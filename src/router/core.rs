//! Mapper core: one namespace's configuration and route table.

use std::sync::Arc;

use tracing::{debug, info};

use super::table::RouteTable;
use crate::error::PatternError;
use crate::registry::DEFAULT_NAMESPACE;
use crate::route::{normalize_pattern, RouteSpec};
use crate::value::ParameterSet;
use crate::Validators;

/// A namespace: URL prefix, script name, and an ordered route table.
///
/// Recognition ([`Mapper::recognize`]) strips the script name and prefix
/// before scanning the table; generation ([`Mapper::generate`]) prepends
/// them to the rendered path.
///
/// A `Mapper` has no internal synchronization. Populate it first, then share
/// it by reference: recognition and generation only need `&self`.
#[derive(Debug, Clone)]
pub struct Mapper {
    id: String,
    prefix: String,
    script_name: String,
    pub(super) table: RouteTable,
}

impl Default for Mapper {
    fn default() -> Self {
        Self::with_id(DEFAULT_NAMESPACE)
    }
}

impl Mapper {
    /// Create the default namespace.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a namespace with the given identifier.
    #[must_use]
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            prefix: String::new(),
            script_name: String::new(),
            table: RouteTable::new(),
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Compile and register a route.
    ///
    /// A route whose normalized pattern equals an already registered one
    /// replaces it at the same position in the table.
    ///
    /// # Arguments
    ///
    /// * `pattern` - Pattern text, e.g. `archive/:year/:month/:day`
    /// * `defaults` - Default values; a pattern parameter listed here is optional
    /// * `validators` - Regex fragments per parameter name
    /// * `alias` - Name for [`generate_by_alias`](Self::generate_by_alias)
    ///
    /// # Errors
    ///
    /// [`PatternError`] for malformed pattern text; the table is left unchanged.
    pub fn register(
        &mut self,
        pattern: &str,
        defaults: ParameterSet,
        validators: Validators,
        alias: Option<&str>,
    ) -> Result<Arc<RouteSpec>, PatternError> {
        let route = Arc::new(RouteSpec::new(
            pattern,
            defaults,
            validators,
            alias.map(str::to_string),
        )?);
        let replaced = self.table.insert(Arc::clone(&route));

        info!(
            namespace = %self.id,
            pattern = %route.pattern(),
            alias = ?route.alias(),
            required = ?route.required(),
            replaced,
            routes_count = self.table.len(),
            "Route registered"
        );
        Ok(route)
    }

    /// Register a pattern with no defaults, validators or alias.
    ///
    /// # Errors
    ///
    /// [`PatternError`] for malformed pattern text.
    pub fn connect(&mut self, pattern: &str) -> Result<Arc<RouteSpec>, PatternError> {
        self.register(pattern, ParameterSet::new(), Validators::new(), None)
    }

    /// Set the URL prefix, e.g. `/en`.
    ///
    /// Stored with one leading slash and no trailing slash; text that is
    /// empty once trimmed clears the prefix.
    pub fn set_prefix(&mut self, prefix: &str) {
        let trimmed = prefix.trim_matches('/');
        self.prefix = if trimmed.is_empty() {
            String::new()
        } else {
            format!("/{trimmed}")
        };
        debug!(namespace = %self.id, prefix = %self.prefix, "Prefix set");
    }

    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Set the script name for deployments without URL rewriting, e.g.
    /// `index.php`. It is prepended verbatim to generated URLs.
    pub fn set_script_name(&mut self, script_name: &str) {
        self.script_name = script_name.to_string();
        debug!(namespace = %self.id, script_name = %self.script_name, "Script name set");
    }

    #[must_use]
    pub fn script_name(&self) -> &str {
        &self.script_name
    }

    /// Clear the route table and the prefix. The script name and identity
    /// are kept.
    pub fn reset(&mut self) {
        self.table.clear();
        self.prefix.clear();
        debug!(namespace = %self.id, "Namespace reset");
    }

    /// Registered routes in table order.
    pub fn routes(&self) -> impl Iterator<Item = &Arc<RouteSpec>> {
        self.table.iter()
    }

    /// First route in table order registered under `alias`.
    #[must_use]
    pub fn route_by_alias(&self, alias: &str) -> Option<&Arc<RouteSpec>> {
        self.table.by_alias(alias)
    }

    /// Route registered under the given pattern text.
    #[must_use]
    pub fn route_by_pattern(&self, pattern: &str) -> Option<&Arc<RouteSpec>> {
        self.table.get(&normalize_pattern(pattern))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Human-readable listing of the table.
    #[must_use]
    pub fn dump_routes(&self) -> String {
        let mut out = format!(
            "[routes] namespace={} prefix={:?} script_name={:?} count={}\n",
            self.id,
            self.prefix,
            self.script_name,
            self.table.len()
        );
        for route in &self.table {
            out.push_str(&format!(
                "[route] {} alias={} required={:?} defaults={:?}\n",
                route.pattern(),
                route.alias().unwrap_or("-"),
                route.required(),
                route.defaults(),
            ));
        }
        out
    }

    /// Strip query, fragment, script name and prefix from a raw URL.
    ///
    /// Returns `None` when a prefix is configured and the URL is outside it.
    pub(super) fn normalize(&self, url: &str) -> Option<String> {
        let path = url.split(['?', '#']).next().unwrap_or_default();
        let mut path = format!("/{}", path.trim_matches('/'));

        let script = self.script_name.trim_matches('/');
        if !script.is_empty() {
            if let Some(rest) = path[1..].strip_prefix(script) {
                if rest.is_empty() || rest.starts_with('/') {
                    path = format!("/{}", rest.trim_matches('/'));
                }
            }
        }

        if !self.prefix.is_empty() {
            let rest = path.strip_prefix(self.prefix.as_str())?;
            if !rest.is_empty() && !rest.starts_with('/') {
                return None;
            }
            path = if rest.is_empty() {
                "/".to_string()
            } else {
                rest.to_string()
            };
        }

        Some(path)
    }
}
