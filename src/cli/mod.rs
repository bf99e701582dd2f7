//! Command-line interface for Arkitect UI.
//!
//! # Available Commands
//!
//! - `init` - Create `components.json` for a project
//! - `add` - Install one component, or every component with `--all`
//! - `list` - Show the UI components the registry offers
//!
//! # Global Options
//!
//! - `--verbose` - Enable debug output
//! - `--quiet` - Suppress all output except errors
//! - `--no-progress` - Disable spinners
//!
//! # Basic Workflow
//!
//! ```bash
//! # 1. Initialize the project
//! arkitect-ui init --framework solid
//!
//! # 2. See what is available
//! arkitect-ui list
//!
//! # 3. Install components
//! arkitect-ui add button
//! arkitect-ui add --all --overwrite
//! ```
//!
//! # Configuration Precedence
//!
//! Command-line flags win over environment variables (`REGISTRY_URL`,
//! `ARKITECT_NO_PROGRESS`, `RUST_LOG`), which win over built-in defaults. Flags are
//! resolved once into a [`CliConfig`] and an install context; nothing is written
//! back into the process environment.

pub mod add;
pub mod common;
pub mod init;
pub mod list;

#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::utils::progress::NO_PROGRESS_ENV;

/// Settings derived from the global flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Filter directive for the log subscriber (`debug`, `warn`, `error`)
    pub log_level: String,

    /// Suppress progress lines
    pub quiet: bool,

    /// Disable spinners
    pub no_progress: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            quiet: false,
            no_progress: false,
        }
    }
}

impl CliConfig {
    /// Whether spinners should be drawn.
    #[must_use]
    pub const fn progress(&self) -> bool {
        !self.no_progress && !self.quiet
    }

    /// Install the global log subscriber.
    ///
    /// `RUST_LOG` takes precedence over the level chosen by flags. Logs go to
    /// stderr so they never mix with command output.
    pub fn init_logging(&self) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&self.log_level));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init();
    }
}

/// Top-level command-line interface.
#[derive(Parser)]
#[command(
    name = "arkitect-ui",
    about = "Add Arkitect UI components to your project",
    version,
    long_about = "Installs Ark UI based components for React and Solid from the Arkitect UI registry."
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only print errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable progress spinners
    #[arg(long, global = true)]
    no_progress: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Create components.json for the project.
    ///
    /// See [`init::InitCommand`] for options.
    Init(init::InitCommand),

    /// Install components from the registry.
    ///
    /// See [`add::AddCommand`] for options.
    Add(add::AddCommand),

    /// List components available in the registry.
    ///
    /// See [`list::ListCommand`] for options.
    List(list::ListCommand),
}

impl Cli {
    /// Set up logging and run the selected command.
    pub async fn execute(self) -> Result<()> {
        let config = self.build_config();
        config.init_logging();
        self.execute_with_config(config).await
    }

    /// Translate the global flags and `ARKITECT_NO_PROGRESS` into a [`CliConfig`].
    ///
    /// This is the only place the environment variable is read.
    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        self.build_config_with(std::env::var_os(NO_PROGRESS_ENV).is_some())
    }

    /// Same as [`Cli::build_config`] with the environment switch passed in.
    ///
    /// - `--verbose` selects `debug`
    /// - `--quiet` selects `error`
    /// - otherwise `warn`
    #[must_use]
    pub fn build_config_with(&self, no_progress_env: bool) -> CliConfig {
        let log_level = if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "warn"
        };

        CliConfig {
            log_level: log_level.to_string(),
            quiet: self.quiet,
            no_progress: self.no_progress || no_progress_env,
        }
    }

    /// Run the selected command with an explicit configuration.
    pub async fn execute_with_config(self, config: CliConfig) -> Result<()> {
        match self.command {
            Commands::Init(cmd) => cmd.execute(&config).await,
            Commands::Add(cmd) => cmd.execute(&config).await,
            Commands::List(cmd) => cmd.execute(&config).await,
        }
    }
}
