//! CLI errors

use std::io;

use thiserror::Error;
use tracing_subscriber::util::TryInitError;

use verdant::prelude::*;

/// Errors surfaced by `verdant` commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid API or currency settings.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The catalog API could not be read.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// A cart id matched no plant in the catalog.
    #[error("no plant with id {0} in the catalog")]
    UnknownPlant(PlantId),

    /// Output could not be written.
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),

    /// The log subscriber could not be installed.
    #[error("failed to initialise logging: {0}")]
    Logging(#[from] TryInitError),
}
