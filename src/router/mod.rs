//! # Router Module
//!
//! The router module holds a namespace's route table and the two algorithms
//! that scan it: recognition (URL text to parameters) and generation
//! (parameters to URL text).
//!
//! ## Overview
//!
//! - [`RouteTable`] keeps compiled routes in registration order, keyed
//!   secondarily by pattern text (re-registering a pattern replaces it in
//!   place) and searchable by alias
//! - [`Mapper`] is one namespace: prefix, script name and a table
//! - [`Mapper::recognize`] scans shapes first, then validates, so that "no
//!   such route" (`Ok(None)`) stays distinct from "route exists but the
//!   values are invalid" (`Err(InvalidRouteError)`)
//! - [`Mapper::generate`] picks the first route whose keys cover the supplied
//!   parameters and renders it, eliding absent optional segments
//!
//! ## Example
//!
//! ```rust
//! use url_mapper::{params, validators, Mapper, ParamValue};
//!
//! let mut mapper = Mapper::new();
//! mapper
//!     .register(
//!         "archive/:year/:month/:day",
//!         params! {
//!             "controller" => "blog",
//!             "action" => "view",
//!             "month" => ParamValue::Absent,
//!             "day" => ParamValue::Absent,
//!         },
//!         validators! { "month" => r"\d{1,2}", "day" => r"\d{1,2}" },
//!         Some("archive"),
//!     )
//!     .unwrap();
//! mapper.connect(":controller/:action/:id").unwrap();
//!
//! let url = mapper
//!     .generate(&params! { "controller" => "blog", "action" => "view", "year" => 2004 })
//!     .unwrap();
//! assert_eq!(url, "/archive/2004");
//!
//! let found = mapper.recognize(&url).unwrap().unwrap();
//! assert_eq!(found.get_str("year").as_deref(), Some("2004"));
//! assert_eq!(found.get_str("controller").as_deref(), Some("blog"));
//! ```
//!
//! ## Performance
//!
//! Both scans are linear in the number of routes. Each route's regexes are
//! compiled once, at registration.

mod core;
mod generate;
mod recognize;
mod table;
#[cfg(test)]
mod tests;

pub use core::Mapper;
pub use generate::UrlSuffix;
pub use table::RouteTable;
