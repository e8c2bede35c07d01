//! # Route Module
//!
//! Pattern compilation: parsing pattern text into segments and deriving the
//! two matchers every registered route carries.
//!
//! ## Overview
//!
//! - [`pattern`] parses `/`-separated pattern text into [`PathSegment`]s of
//!   literal and parameter parts
//! - [`RouteSpec`] holds a compiled route: segments, defaults, validators,
//!   alias, required names, and the structural probe and strict validator
//!   regexes
//! - [`encoding`] percent-encodes generated values and decodes recognized ones
//!
//! ## Example
//!
//! ```rust
//! use url_mapper::route::RouteSpec;
//! use url_mapper::{params, validators};
//!
//! let route = RouteSpec::new(
//!     "hi/:name",
//!     params! {},
//!     validators! { "name" => "[a-z]+" },
//!     None,
//! )
//! .unwrap();
//!
//! assert!(route.matches_shape("/hi/fox5"));
//! assert!(route.capture("/hi/fox5").is_none());
//! assert_eq!(route.capture("/hi/fox").unwrap().get_str("name").as_deref(), Some("fox"));
//! ```

mod compiled;
pub mod encoding;
pub mod pattern;
#[cfg(test)]
mod tests;

pub use compiled::RouteSpec;
pub use pattern::{normalize_pattern, parse_pattern, PathSegment, Segment};
