//! Generation: parameter set to URL text.

use std::sync::Arc;

use tracing::{debug, info};

use super::core::Mapper;
use crate::route::encoding::encode_query;
use crate::route::RouteSpec;
use crate::value::ParameterSet;

/// Query pairs and fragment appended to a generated URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlSuffix {
    pub query: Vec<(String, String)>,
    pub fragment: Option<String>,
}

impl UrlSuffix {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one query pair.
    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    #[must_use]
    pub fn fragment(mut self, fragment: impl Into<String>) -> Self {
        self.fragment = Some(fragment.into());
        self
    }

    fn render(&self) -> String {
        let mut out = encode_query(&self.query);
        if let Some(fragment) = self.fragment.as_deref().filter(|f| !f.is_empty()) {
            out.push('#');
            out.push_str(fragment);
        }
        out
    }
}

impl Mapper {
    /// Build a URL from parameters using the first compatible route.
    ///
    /// A route is compatible when every supplied key is either one of its
    /// parameters (with text its slot accepts) or a default-only key supplied
    /// with its default value, and every required parameter is supplied.
    /// Absent values (`false`, `null`, `""`) count as supplied keys but
    /// render nothing.
    ///
    /// # Returns
    ///
    /// `Some(url)` prefixed with the script name and prefix, or `None` when no
    /// route is compatible.
    ///
    /// # Example
    ///
    /// ```rust
    /// use url_mapper::{params, validators, Mapper};
    ///
    /// let mut mapper = Mapper::new();
    /// mapper
    ///     .register("hi/:action", params! { "action" => "test" }, validators! {}, None)
    ///     .unwrap();
    ///
    /// assert_eq!(mapper.generate(&params! {}).as_deref(), Some("/hi/test"));
    /// assert_eq!(
    ///     mapper.generate(&params! { "action" => "index" }).as_deref(),
    ///     Some("/hi/index")
    /// );
    /// ```
    #[must_use]
    pub fn generate(&self, params: &ParameterSet) -> Option<String> {
        self.generate_with(params, &UrlSuffix::default())
    }

    /// [`generate`](Self::generate) with query pairs and a fragment.
    #[must_use]
    pub fn generate_with(&self, params: &ParameterSet, suffix: &UrlSuffix) -> Option<String> {
        if params.is_empty() {
            if let Some(root) = self.table.get("/") {
                return Some(self.finish(root, &ParameterSet::new(), suffix));
            }
        }
        self.scan(None, params, suffix)
    }

    /// Build a URL using only routes registered under `alias`.
    #[must_use]
    pub fn generate_by_alias(&self, alias: &str, params: &ParameterSet) -> Option<String> {
        self.generate_by_alias_with(alias, params, &UrlSuffix::default())
    }

    /// [`generate_by_alias`](Self::generate_by_alias) with query pairs and a
    /// fragment.
    #[must_use]
    pub fn generate_by_alias_with(
        &self,
        alias: &str,
        params: &ParameterSet,
        suffix: &UrlSuffix,
    ) -> Option<String> {
        self.scan(Some(alias), params, suffix)
    }

    fn scan(&self, alias: Option<&str>, params: &ParameterSet, suffix: &UrlSuffix) -> Option<String> {
        debug!(
            namespace = %self.id(),
            alias = ?alias,
            params = ?params,
            "Route generation attempt"
        );

        let candidates = self
            .table
            .iter()
            .filter(|route| alias.map_or(true, |wanted| route.alias() == Some(wanted)));

        for route in candidates {
            if let Some(accepted) = route.accept(params) {
                return Some(self.finish(route, &accepted, suffix));
            }
        }

        debug!(
            namespace = %self.id(),
            alias = ?alias,
            params = ?params,
            "No route can generate these parameters"
        );
        None
    }

    fn finish(&self, route: &Arc<RouteSpec>, accepted: &ParameterSet, suffix: &UrlSuffix) -> String {
        let url = format!(
            "{}{}{}{}",
            self.script_name(),
            self.prefix(),
            route.render(accepted),
            suffix.render()
        );
        info!(
            namespace = %self.id(),
            route_pattern = %route.pattern(),
            alias = ?route.alias(),
            url = %url,
            "URL generated"
        );
        url
    }
}
