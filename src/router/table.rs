use std::collections::HashMap;
use std::sync::Arc;

use crate::route::RouteSpec;

/// Ordered collection of compiled routes for one namespace.
///
/// Registration order is scan order. Routes are also keyed by their
/// normalized pattern text: registering the same pattern again replaces the
/// earlier route in place, keeping its position.
#[derive(Debug, Default, Clone)]
pub struct RouteTable {
    routes: Vec<Arc<RouteSpec>>,
    by_pattern: HashMap<String, usize>,
}

impl RouteTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a route, or replace the route with the same pattern text.
    ///
    /// Returns true when an existing route was replaced.
    pub fn insert(&mut self, route: Arc<RouteSpec>) -> bool {
        match self.by_pattern.get(route.pattern()) {
            Some(&index) => {
                self.routes[index] = route;
                true
            }
            None => {
                self.by_pattern
                    .insert(route.pattern().to_string(), self.routes.len());
                self.routes.push(route);
                false
            }
        }
    }

    /// Route registered under the exact (normalized) pattern text.
    #[must_use]
    pub fn get(&self, pattern: &str) -> Option<&Arc<RouteSpec>> {
        self.by_pattern.get(pattern).map(|&index| &self.routes[index])
    }

    /// First route in table order carrying `alias`.
    #[must_use]
    pub fn by_alias(&self, alias: &str) -> Option<&Arc<RouteSpec>> {
        self.routes.iter().find(|route| route.alias() == Some(alias))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Arc<RouteSpec>> {
        self.routes.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn clear(&mut self) {
        self.routes.clear();
        self.by_pattern.clear();
    }
}

impl<'a> IntoIterator for &'a RouteTable {
    type Item = &'a Arc<RouteSpec>;
    type IntoIter = std::slice::Iter<'a, Arc<RouteSpec>>;

    fn into_iter(self) -> Self::IntoIter {
        self.routes.iter()
    }
}
