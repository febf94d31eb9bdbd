//! CLI parse: clap types for hoarder. No behavior; definitions only.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Hoarder - resolve and inspect storage service configuration
#[derive(Parser, Debug)]
#[command(name = "hoarder", version)]
#[command(about = "Resolve and inspect the hoarder storage service configuration")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (defaults to the per-user config.yml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Resolve the configuration and report whether it is valid
    Check,
    /// Print the resolved configuration (token hidden)
    Show {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}
