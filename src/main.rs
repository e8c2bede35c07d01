use std::process::ExitCode;

use url_mapper::cli::run_cli;
use url_mapper::logging::init_logging;
use url_mapper::runtime_config::RuntimeConfig;

fn main() -> ExitCode {
    let config = RuntimeConfig::from_env();
    if let Err(err) = init_logging(&config) {
        eprintln!("warning: {err:#}");
    }

    match run_cli() {
        Ok(outcome) => outcome.into(),
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(3)
        }
    }
}
