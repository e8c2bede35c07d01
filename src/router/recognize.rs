//! Recognition: URL text to parameter set.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info, warn};

use super::core::Mapper;
use crate::error::InvalidRouteError;
use crate::route::encoding::unescape_path;
use crate::route::RouteSpec;
use crate::value::ParameterSet;

impl Mapper {
    /// Match a URL against the table.
    ///
    /// The URL is normalized first: query string and fragment are dropped,
    /// slashes are collapsed to one leading slash, then the script name and
    /// prefix are stripped. Percent-escapes other than `%2F` and `%25` are
    /// resolved before matching, so validators see decoded text. The table
    /// is scanned twice:
    ///
    /// 1. every route whose structural probe accepts the path is a shape
    ///    candidate
    /// 2. the first candidate whose strict validator accepts the path wins;
    ///    its captures are merged onto a copy of its defaults
    ///
    /// # Returns
    ///
    /// * `Ok(Some(params))` - A route matched
    /// * `Ok(None)` - Nothing of this shape is registered, or the URL lies
    ///   outside the configured prefix
    ///
    /// # Errors
    ///
    /// [`InvalidRouteError`] when a route of this shape exists but the URL
    /// values violate its validators. The error carries the first shape
    /// candidate.
    ///
    /// # Example
    ///
    /// ```rust
    /// use url_mapper::{params, validators, Mapper};
    ///
    /// let mut mapper = Mapper::new();
    /// mapper
    ///     .register("hi/:name", params! {}, validators! { "name" => "[a-z]+" }, None)
    ///     .unwrap();
    ///
    /// let found = mapper.recognize("/hi/fox?x=1").unwrap().unwrap();
    /// assert_eq!(found.get_str("name").as_deref(), Some("fox"));
    /// assert!(mapper.recognize("/hi/fox5").is_err());
    /// assert!(mapper.recognize("/bye").unwrap().is_none());
    /// ```
    pub fn recognize(&self, url: &str) -> Result<Option<ParameterSet>, InvalidRouteError> {
        debug!(namespace = %self.id(), url = %url, "Route match attempt");
        let match_start = Instant::now();

        let Some(path) = self.normalize(url) else {
            debug!(
                namespace = %self.id(),
                url = %url,
                prefix = %self.prefix(),
                "URL outside namespace prefix"
            );
            return Ok(None);
        };

        let matched = unescape_path(&path);
        let candidates: Vec<&Arc<RouteSpec>> = self
            .table
            .iter()
            .filter(|route| route.matches_shape(&matched))
            .collect();

        for route in &candidates {
            if let Some(params) = route.capture(&matched) {
                info!(
                    namespace = %self.id(),
                    url = %url,
                    path = %path,
                    route_pattern = %route.pattern(),
                    alias = ?route.alias(),
                    params = ?params,
                    duration_us = match_start.elapsed().as_micros(),
                    "Route matched"
                );
                return Ok(Some(params));
            }
        }

        if let Some(&first) = candidates.first() {
            warn!(
                namespace = %self.id(),
                url = %url,
                path = %path,
                route_pattern = %first.pattern(),
                shape_candidates = candidates.len(),
                "Route shape matched but values are invalid"
            );
            return Err(InvalidRouteError {
                route: Arc::clone(first),
                url: url.to_string(),
            });
        }

        debug!(
            namespace = %self.id(),
            url = %url,
            path = %path,
            duration_us = match_start.elapsed().as_micros(),
            "No route matched"
        );
        Ok(None)
    }
}
