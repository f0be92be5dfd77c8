//! CLI configuration

use std::path::PathBuf;

use anyhow::Context;
use cartwise::catalog::Catalog;
use clap::{Args, Parser};

use crate::commands::Commands;

/// Cartwise command line configuration
#[derive(Debug, Parser)]
#[command(name = "cartwise", about = "Shopping cart discount calculator", long_about = None)]
pub(crate) struct Config {
    /// Logging output settings.
    #[command(flatten)]
    pub(crate) logging: LoggingConfig,

    /// Command to run.
    #[command(subcommand)]
    pub(crate) command: Commands,
}

/// Log output format.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    /// Compact, human-readable logs.
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Logging settings.
#[derive(Debug, Args)]
pub(crate) struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, global = true, env = "RUST_LOG", default_value = "info")]
    pub(crate) log_level: String,

    /// Log format (compact, json)
    #[arg(long, global = true, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub(crate) log_format: LogFormat,
}

/// Catalog source shared by commands that read rules or products.
#[derive(Debug, Default, Args)]
pub(crate) struct CatalogArgs {
    /// Path to a YAML catalog; the built-in catalog is used when omitted
    #[arg(long, env = "CARTWISE_CATALOG")]
    pub(crate) catalog: Option<PathBuf>,
}

impl CatalogArgs {
    /// Load the configured catalog.
    pub(crate) fn load(&self) -> anyhow::Result<Catalog> {
        match &self.catalog {
            Some(path) => Catalog::load(path)
                .with_context(|| format!("failed to load catalog {}", path.display())),
            None => Catalog::builtin().context("failed to load built-in catalog"),
        }
    }
}
