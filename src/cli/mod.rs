//! Command-line interface for variant-resolve.
//!
//! The CLI loads a component descriptor, picks one of its configurations as the
//! graph-selected variant, and runs the resolution layer against it.
//!
//! # Commands
//!
//! - `artifacts` - list the variant's artifacts
//! - `lookup` - find one artifact by name, failing if it does not exist
//! - `resolve` - select physical variants by attribute overrides and exclusions
//! - `variants` - show the candidate variants offered to selection
//!
//! # Global Options
//!
//! - `--verbose` / `-v` - debug logging
//! - `--quiet` / `-q` - no logging
//! - `--config` / `-c` - resolution settings file (also `RESOLVE_CONFIG`)
//!
//! # Example
//!
//! ```bash
//! variant-resolve resolve lib.toml --variant runtimeElements --attribute docs=sources
//! RUST_LOG=variant_cache=debug variant-resolve artifacts lib.toml --variant apiElements
//! ```

mod artifacts;
pub mod common;
mod lookup;
mod resolve;
mod variants;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::config::ResolutionSettings;
use common::CommandExecutor;

/// Runtime configuration for CLI execution.
///
/// Collects what the global flags decide so that [`Cli::execute_with_config`]
/// can be driven directly from tests without touching the process environment.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Log filter directive. `None` disables logging unless `RUST_LOG` is set.
    pub log_level: Option<String>,

    /// Resolution settings file, overriding `RESOLVE_CONFIG`.
    pub config_path: Option<PathBuf>,
}

impl CliConfig {
    /// Create a new CLI configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the log filter directive.
    #[must_use]
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = Some(level.into());
        self
    }

    /// Set the settings file.
    #[must_use]
    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    /// Install the global tracing subscriber.
    ///
    /// `RUST_LOG` takes precedence over the configured level. Calling this more
    /// than once is harmless; later calls leave the first subscriber in place.
    pub fn init_logging(&self) {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else if let Some(ref level) = self.log_level {
            EnvFilter::new(level)
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(true)
            .try_init();
    }

    /// Load resolution settings from the configured path, `RESOLVE_CONFIG`, or defaults.
    pub fn load_settings(&self) -> Result<ResolutionSettings> {
        let settings = ResolutionSettings::load_or_default(self.config_path.as_deref())
            .context("Failed to load resolution settings")?;
        settings.validate().context("Invalid resolution settings")?;
        Ok(settings)
    }
}

/// Main CLI structure for variant-resolve.
#[derive(Parser)]
#[command(
    name = "variant-resolve",
    about = "Resolve the artifacts of graph-selected component variants",
    version,
    long_about = "variant-resolve prepares a component's variants once, looks up artifacts by name, \
                  and selects physical variants by attribute overrides and exclusions."
)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all log output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Path to a resolution settings file
    #[arg(short, long, global = true, env = "RESOLVE_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the artifacts of a variant
    Artifacts(artifacts::ArtifactsCommand),

    /// Look up one artifact of a variant by name
    Lookup(lookup::LookupCommand),

    /// Resolve a variant's artifact set
    Resolve(resolve::ResolveCommand),

    /// Show the candidate variants offered to artifact selection
    Variants(variants::VariantsCommand),
}

impl Cli {
    /// Execute the parsed command.
    pub fn execute(self) -> Result<()> {
        let config = self.build_config();
        self.execute_with_config(config)
    }

    /// Derive the runtime configuration from the global flags.
    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            Some("debug".to_string())
        } else if self.quiet {
            None
        } else {
            Some("warn".to_string())
        };

        CliConfig {
            log_level,
            config_path: self.config.clone(),
        }
    }

    /// Execute the command with an explicit configuration.
    pub fn execute_with_config(self, config: CliConfig) -> Result<()> {
        config.init_logging();
        let settings = config.load_settings()?;
        tracing::debug!(target: "config", "effective settings: {:?}", settings);

        match self.command {
            Commands::Artifacts(cmd) => cmd.execute(&settings),
            Commands::Lookup(cmd) => cmd.execute(&settings),
            Commands::Resolve(cmd) => cmd.execute(&settings),
            Commands::Variants(cmd) => cmd.execute(&settings),
        }
    }
}
