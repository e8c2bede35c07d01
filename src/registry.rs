//! # Registry Module
//!
//! Named namespaces. Each identifier maps to one [`Mapper`] with its own
//! prefix, script name and route table, created on first reference.
//!
//! The registry is an ordinary value owned by the caller. Applications that
//! want one per process hold it where they hold the rest of their state;
//! tests build a fresh one each time.
//!
//! ## Example
//!
//! ```rust
//! use url_mapper::{Registry, DEFAULT_NAMESPACE};
//!
//! let mut registry = Registry::new();
//! registry.get("en").set_prefix("/en");
//! registry.get("en").connect(":controller/:action").unwrap();
//! registry.get_default().connect("home").unwrap();
//!
//! assert_eq!(registry.ids().collect::<Vec<_>>(), vec![DEFAULT_NAMESPACE, "en"]);
//! assert!(registry.lookup("en").unwrap().recognize("/en/blog/view").unwrap().is_some());
//! ```

use std::collections::BTreeMap;

use tracing::debug;

use crate::router::Mapper;

/// Identifier of the namespace used when the caller does not name one.
pub const DEFAULT_NAMESPACE: &str = "__default__";

/// Caller-owned collection of namespaces keyed by identifier.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    namespaces: BTreeMap<String, Mapper>,
}

impl Registry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The namespace for `id`, created empty on first reference.
    pub fn get(&mut self, id: &str) -> &mut Mapper {
        self.namespaces.entry(id.to_string()).or_insert_with(|| {
            debug!(namespace = %id, "Namespace created");
            Mapper::with_id(id)
        })
    }

    /// The namespace for [`DEFAULT_NAMESPACE`].
    pub fn get_default(&mut self) -> &mut Mapper {
        self.get(DEFAULT_NAMESPACE)
    }

    /// Read-only access without creating the namespace.
    #[must_use]
    pub fn lookup(&self, id: &str) -> Option<&Mapper> {
        self.namespaces.get(id)
    }

    /// Add an already populated namespace under its own identifier,
    /// returning the one it replaces.
    pub fn insert(&mut self, mapper: Mapper) -> Option<Mapper> {
        self.namespaces.insert(mapper.id().to_string(), mapper)
    }

    /// Clear the table and prefix of `id`. Unknown identifiers are a no-op.
    pub fn reset(&mut self, id: &str) {
        if let Some(mapper) = self.namespaces.get_mut(id) {
            mapper.reset();
        }
    }

    /// Identifiers of every namespace created so far, sorted.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.namespaces.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.namespaces.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.namespaces.is_empty()
    }
}
