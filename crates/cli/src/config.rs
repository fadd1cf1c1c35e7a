//! Command line configuration

use clap::{Args, Parser};

use verdant::prelude::*;

use crate::commands::Command;

/// Log output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// Compact, human-readable logs.
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Logging settings.
#[derive(Debug, Args)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "warn", global = true)]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(
        long,
        env = "LOG_FORMAT",
        value_enum,
        default_value_t = LogFormat::Compact,
        global = true
    )]
    pub log_format: LogFormat,
}

/// Catalog API settings.
#[derive(Debug, Args)]
pub struct ApiArgs {
    /// Catalog API base URL
    #[arg(long, env = "VERDANT_API_BASE", default_value = DEFAULT_API_BASE, global = true)]
    pub api_base: String,

    /// ISO 4217 code used to display prices
    #[arg(long, env = "VERDANT_CURRENCY", default_value = "BDT", global = true)]
    pub currency: String,
}

impl ApiArgs {
    /// Resolve into the library's API configuration.
    ///
    /// # Errors
    ///
    /// Returns an error for an empty base URL or an unknown currency code.
    pub fn api_config(&self) -> Result<ApiConfig, ConfigError> {
        ApiConfig::new(self.api_base.as_str())?.with_currency_code(&self.currency)
    }
}

/// Verdant plant catalog
#[derive(Debug, Parser)]
#[command(name = "verdant", about = "Browse the plant catalog and quote a cart", long_about = None)]
pub struct Cli {
    /// Catalog API settings.
    #[command(flatten)]
    pub api: ApiArgs,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Command to run.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Load configuration from the environment and command line arguments.
    ///
    /// Exits with usage help when the arguments do not parse.
    pub fn load() -> Self {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::parse()
    }
}
