use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::debug;

use crate::loader::load_routes;
use crate::router::UrlSuffix;
use crate::value::ParameterSet;

/// Command-line interface for url-mapper
///
/// Loads a route file and recognizes or generates URLs against it.
#[derive(Debug, Parser)]
#[command(name = "url-mapper")]
#[command(about = "Bidirectional URL mapper", long_about = None)]
#[command(version)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Match a URL and print its parameters as JSON
    Recognize {
        /// Route file (YAML, TOML or JSON)
        #[arg(short, long)]
        routes: PathBuf,

        /// URL or path to match
        url: String,
    },
    /// Build a URL from KEY=VALUE parameters
    ///
    /// `KEY=` with nothing after the equals sign supplies an absent value.
    Generate {
        /// Route file (YAML, TOML or JSON)
        #[arg(short, long)]
        routes: PathBuf,

        /// Only consider routes registered under this alias
        #[arg(short, long)]
        alias: Option<String>,

        /// Route parameters
        #[arg(value_parser = parse_pair)]
        params: Vec<(String, String)>,

        /// Query string pair, repeatable
        #[arg(short, long, value_parser = parse_pair)]
        query: Vec<(String, String)>,

        /// Fragment appended after `#`
        #[arg(short, long)]
        fragment: Option<String>,
    },
    /// Print the loaded route table
    Routes {
        /// Route file (YAML, TOML or JSON)
        #[arg(short, long)]
        routes: PathBuf,
    },
}

/// How a command finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A URL was recognized or generated, or the table was printed
    Done,
    /// No route of the URL's shape, or no route for the parameters
    NotFound,
    /// A route of the URL's shape exists but the values are invalid
    Invalid,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Done => ExitCode::SUCCESS,
            Outcome::NotFound => ExitCode::from(1),
            Outcome::Invalid => ExitCode::from(2),
        }
    }
}

fn parse_pair(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, _)) if key.is_empty() => Err(format!("missing key in '{s}'")),
        Some((key, value)) => Ok((key.to_string(), value.to_string())),
        None => Err(format!("expected KEY=VALUE, got '{s}'")),
    }
}

/// Execute a parsed command, writing results to `out`.
///
/// Negative outcomes are reported through the returned [`Outcome`] with a
/// message on stderr; only failures to load routes or write output are
/// errors.
///
/// # Errors
///
/// Returns an error if the route file cannot be loaded or output cannot be
/// written.
pub fn run(cli: Cli, out: &mut impl Write) -> anyhow::Result<Outcome> {
    match cli.command {
        Commands::Recognize { routes, url } => {
            let mapper = load_routes(&routes)
                .with_context(|| format!("loading {}", routes.display()))?;
            match mapper.recognize(&url) {
                Ok(Some(params)) => {
                    writeln!(out, "{}", serde_json::to_string(&params)?)?;
                    Ok(Outcome::Done)
                }
                Ok(None) => {
                    eprintln!("no route matches '{url}'");
                    Ok(Outcome::NotFound)
                }
                Err(err) => {
                    eprintln!("{err}");
                    Ok(Outcome::Invalid)
                }
            }
        }
        Commands::Generate {
            routes,
            alias,
            params,
            query,
            fragment,
        } => {
            let mapper = load_routes(&routes)
                .with_context(|| format!("loading {}", routes.display()))?;
            let params: ParameterSet = params.into_iter().collect();
            let suffix = UrlSuffix { query, fragment };
            debug!(alias = ?alias, params = ?params, "Generating from command line");

            let url = match alias.as_deref() {
                Some(alias) => mapper.generate_by_alias_with(alias, &params, &suffix),
                None => mapper.generate_with(&params, &suffix),
            };
            match url {
                Some(url) => {
                    writeln!(out, "{url}")?;
                    Ok(Outcome::Done)
                }
                None => {
                    eprintln!("no route can generate a URL for these parameters");
                    Ok(Outcome::NotFound)
                }
            }
        }
        Commands::Routes { routes } => {
            let mapper = load_routes(&routes)
                .with_context(|| format!("loading {}", routes.display()))?;
            write!(out, "{}", mapper.dump_routes())?;
            Ok(Outcome::Done)
        }
    }
}

/// Parse the process arguments and execute the command against stdout.
///
/// # Errors
///
/// See [`run`].
pub fn run_cli() -> anyhow::Result<Outcome> {
    let cli = Cli::parse();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run(cli, &mut out)
}
