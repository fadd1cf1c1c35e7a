//! Verdant command line tool
//!
//! Lists the plant catalog, shows a plant's detail and quotes a cart against
//! the same API the storefront uses.

use std::{
    io::{self, Write},
    process::ExitCode,
};

use tracing::error;

use verdant::prelude::*;

mod commands;
mod config;
mod errors;
mod logging;
mod render;

use config::Cli;
use errors::CliError;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::load();

    if let Err(error) = logging::init_subscriber(&cli.logging) {
        return report(&error);
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => report(&error),
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let config = cli.api.api_config()?;
    let client = CatalogClient::new(&config);
    let mut out = io::stdout().lock();

    cli.command.run(&client, config.currency, &mut out).await
}

fn report(error: &CliError) -> ExitCode {
    error!(%error, "command failed");

    let mut stderr = io::stderr().lock();

    if let Err(write_error) = writeln!(stderr, "error: {error}") {
        error!(%write_error, "failed to write error");
    }

    ExitCode::FAILURE
}
