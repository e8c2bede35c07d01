//! # url-mapper
//!
//! **url-mapper** is a bidirectional URL router. It compiles textual path
//! patterns, with named dynamic segments, wildcards, defaults and per-slot
//! validators, into matchers that work both ways:
//!
//! - **recognition**: URL text to a [`ParameterSet`]
//! - **generation**: a [`ParameterSet`] to URL text
//!
//! It produces and consumes parameter sets only. There is no HTTP method
//! handling and no handler dispatch.
//!
//! ## Architecture
//!
//! - **[`route`]** - Pattern grammar, compiled [`RouteSpec`]s and value encoding
//! - **[`router`]** - The [`Mapper`] namespace: route table, recognition and generation
//! - **[`registry`]** - Caller-owned [`Registry`] of named namespaces
//! - **[`loader`]** - Declarative route files in YAML, TOML or JSON
//! - **[`value`]** - [`ParamValue`] and [`ParameterSet`]
//! - **[`error`]** - Typed errors
//! - **[`logging`]** / **[`runtime_config`]** - `tracing` setup from environment variables
//! - **[`cli`]** - The `url-mapper` command-line front end
//!
//! ## Pattern Grammar
//!
//! | Syntax        | Meaning                                                   |
//! |---------------|-----------------------------------------------------------|
//! | `literal`     | Matched and rendered verbatim                             |
//! | `:name`       | One path segment; the name is a run of word characters    |
//! | `:(name)`     | Same, delimited so literal text may follow in the segment |
//! | `*name`       | One or more segments, slashes included                    |
//! | `*(name)`     | Delimited wildcard                                        |
//!
//! A parameter with an entry in the route's defaults is optional. A trailing
//! run of path segments that each hold a single optional parameter may be
//! left out of both recognized and generated URLs.
//!
//! ## Quick Start
//!
//! ```rust
//! use url_mapper::{params, validators, Mapper};
//!
//! let mut mapper = Mapper::new();
//! mapper
//!     .register(
//!         "view/:id",
//!         params! { "controller" => "product", "action" => "view" },
//!         validators! { "id" => r"\d+" },
//!         Some("product"),
//!     )
//!     .unwrap();
//!
//! let found = mapper.recognize("/view/42").unwrap().unwrap();
//! assert_eq!(found.get_str("controller").as_deref(), Some("product"));
//! assert_eq!(found.get_str("id").as_deref(), Some("42"));
//!
//! let url = mapper.generate_by_alias("product", &params! { "id" => 7 });
//! assert_eq!(url.as_deref(), Some("/view/7"));
//! ```
//!
//! ## Outcomes
//!
//! Recognition distinguishes three results:
//!
//! - `Ok(Some(params))`: a route matched
//! - `Ok(None)`: no route of that shape is registered
//! - `Err(InvalidRouteError)`: a route of that shape exists but the values
//!   violate its validators
//!
//! Generation returns `None` when no route is compatible with the supplied
//! parameters.

use std::collections::BTreeMap;

pub mod cli;
pub mod error;
pub mod loader;
pub mod logging;
pub mod registry;
pub mod route;
pub mod router;
pub mod runtime_config;
pub mod value;

pub use error::{InvalidRouteError, LoadError, PatternError};
pub use loader::{load_routes, RouteEntry, RouteFile};
pub use registry::{Registry, DEFAULT_NAMESPACE};
pub use route::RouteSpec;
pub use router::{Mapper, RouteTable, UrlSuffix};
pub use value::{ParamValue, ParameterSet};

/// Validator fragments keyed by parameter name.
///
/// Each fragment is a regex that must match a slot's entire text. It is
/// embedded in a non-capturing group, so alternations are safe.
pub type Validators = BTreeMap<String, String>;
