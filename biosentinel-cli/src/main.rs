//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use std::process::ExitCode;

use biosentinel_cli::{CliError, run};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
