//! External process execution
//!
//! The installer launches two kinds of programs: the scaffolding tool (once per
//! component) and a package manager (only when dependencies are missing). Both go
//! through the [`CommandRunner`] trait so the install flow can be exercised without
//! Node.js being present.

pub mod command_builder;

pub use command_builder::{CommandOutput, DEFAULT_TIMEOUT, SCAFFOLD_PACKAGE, ToolCommand};

use anyhow::Result;
use std::future::Future;

/// Environment variable overriding the scaffolding tool's package runner (`npx`).
pub const SCAFFOLD_RUNNER_ENV: &str = "ARKITECT_SCAFFOLD_BIN";

/// Default package runner for the scaffolding tool.
pub const DEFAULT_SCAFFOLD_RUNNER: &str = "npx";

/// Launches [`ToolCommand`]s.
///
/// Implementations return `Err` only when the program could not run at all; a
/// program that ran and failed yields `Ok` with a non-zero [`CommandOutput::code`].
pub trait CommandRunner: Send + Sync {
    fn run(&self, command: &ToolCommand) -> impl Future<Output = Result<CommandOutput>> + Send;
}

/// Runs commands as real child processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    async fn run(&self, command: &ToolCommand) -> Result<CommandOutput> {
        command.execute().await
    }
}
