//! # CLI Module
//!
//! The `url-mapper` command-line front end: load a route file, then
//! recognize a URL, generate one, or print the table.
//!
//! ## Commands
//!
//! ### `recognize`
//!
//! ```bash
//! url-mapper recognize --routes routes.yaml /archive/2004/02
//! ```
//!
//! Prints the parameters as a JSON object. Absent values print as `null`.
//!
//! ### `generate`
//!
//! ```bash
//! url-mapper generate --routes routes.yaml controller=blog action=view year=2004
//! url-mapper generate --routes routes.yaml --alias archive year=2004 --query page=2 --fragment top
//! ```
//!
//! ### `routes`
//!
//! ```bash
//! url-mapper routes --routes routes.yaml
//! ```
//!
//! ## Exit Codes
//!
//! | Code | Meaning                                                   |
//! |------|-----------------------------------------------------------|
//! | 0    | Success                                                   |
//! | 1    | No matching route (recognize) or no compatible route (generate) |
//! | 2    | A route of the URL's shape exists but the values are invalid |
//! | 3    | The route file could not be loaded                        |
//!
//! Logging goes to stderr and is configured by `URL_MAPPER_LOG_LEVEL`,
//! `URL_MAPPER_LOG_FORMAT` and `RUST_LOG`.

mod commands;


pub use commands::{run, run_cli, Cli, Commands, Outcome};
