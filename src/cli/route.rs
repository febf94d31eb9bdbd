//! CLI route: run context and command dispatch.

use crate::cli::parse::{Commands, OutputFormat};
use crate::cli::presentation::{format_check_summary, format_config_json, format_config_text};
use crate::config::{default_config_path, resolve, Resolved};
use anyhow::Context;
use std::path::PathBuf;
use tracing::info;

/// Resolved configuration plus the source it came from.
pub struct RunContext {
    resolved: Resolved,
    source: Option<PathBuf>,
}

impl RunContext {
    /// Resolve configuration from `config_path`, or from the per-user default file when present.
    ///
    /// With neither, the built-in defaults are used.
    pub fn new(config_path: Option<PathBuf>) -> anyhow::Result<Self> {
        let source = config_path.or_else(default_config_path);
        let resolved = match &source {
            Some(path) => resolve(path)
                .with_context(|| format!("Failed to resolve configuration from {}", path.display()))?,
            None => resolve("").context("Failed to resolve default configuration")?,
        };
        Ok(Self { resolved, source })
    }

    pub fn resolved(&self) -> &Resolved {
        &self.resolved
    }

    pub fn execute(&self, command: &Commands) -> anyhow::Result<String> {
        let config = &self.resolved.config;
        match command {
            Commands::Check => {
                info!("Configuration check passed");
                Ok(format_check_summary(config, self.source.as_deref()))
            }
            Commands::Show { format } => match format {
                OutputFormat::Text => Ok(format_config_text(config)),
                OutputFormat::Json => {
                    format_config_json(config).context("Failed to serialize configuration")
                }
            },
        }
    }
}
