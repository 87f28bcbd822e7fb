//! Entry point for `update-env-token-address`.
use std::process::ExitCode;

use forge_env_sync::{
    cli::{self, CliExit},
    lib::telemetry,
};

fn main() -> ExitCode {
    match bootstrap() {
        Ok(()) => ExitCode::SUCCESS,
        Err(exit) => exit.report(),
    }
}

fn bootstrap() -> Result<(), CliExit> {
    telemetry::init_tracing().map_err(CliExit::from_error)?;

    let invocation = cli::parse_command(std::env::args_os()).map_err(CliExit::from_usage)?;
    cli::run(&invocation).map_err(CliExit::from_error)?;
    Ok(())
}
