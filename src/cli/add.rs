//! Install components into the project.
//!
//! # Examples
//!
//! ```bash
//! # One component
//! arkitect-ui add button
//!
//! # Every component for the project's framework, replacing existing files
//! arkitect-ui add --all --overwrite
//!
//! # Show the scaffold commands without running them
//! arkitect-ui add dialog --dry-run
//!
//! # Another project, an explicit framework, and a local registry build
//! arkitect-ui add tabs --cwd ../app --framework solid --registry-url ./public/r
//! ```
//!
//! Components are installed one at a time. For each, the scaffolding tool
//! (`npx shadcn@latest add`) runs first; any file it did not produce is then
//! written from the registry, and dependencies the project lacks are installed.

use anyhow::Result;
use clap::Args;

use super::CliConfig;
use super::common::{ProjectArgs, RegistryArgs};
use crate::core::Framework;
use crate::installer::{ComponentInstaller, InstallContext, InstallContextBuilder, InstallReport, InstallRequest};
use crate::process::{CommandRunner, DEFAULT_SCAFFOLD_RUNNER, SCAFFOLD_RUNNER_ENV, SystemRunner};
use crate::registry::RegistryClient;

/// Command to install components.
#[derive(Args, Debug, Clone)]
pub struct AddCommand {
    /// Component to install, e.g. `button`
    #[arg(value_name = "COMPONENT")]
    pub component: Option<String>,

    /// Install every component available for the framework
    #[arg(short, long)]
    pub all: bool,

    /// Overwrite existing files
    #[arg(short, long)]
    pub overwrite: bool,

    /// Print the commands that would run without changing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Framework to install for, skipping detection
    #[arg(long, value_enum)]
    pub framework: Option<Framework>,

    #[command(flatten)]
    pub project: ProjectArgs,

    #[command(flatten)]
    pub registry: RegistryArgs,

    /// Package runner used to launch the scaffolding tool
    #[arg(long, hide = true, env = SCAFFOLD_RUNNER_ENV, default_value = DEFAULT_SCAFFOLD_RUNNER)]
    pub scaffold_runner: String,
}

impl AddCommand {
    pub async fn execute(self, config: &CliConfig) -> Result<()> {
        self.execute_with_runner(config, &SystemRunner).await.map(|_| ())
    }

    /// Run with a custom process runner.
    pub async fn execute_with_runner<R: CommandRunner>(
        self,
        config: &CliConfig,
        runner: &R,
    ) -> Result<InstallReport> {
        let ctx = self.context(config)?;
        let request = InstallRequest {
            component: self.component,
            all: self.all,
        };

        tracing::debug!(
            "Installing into {} from {}",
            ctx.project_dir.display(),
            ctx.registry_url
        );

        let registry = RegistryClient::new(ctx.registry_url.clone())?;
        ComponentInstaller::new(&ctx, &registry, runner).install(&request).await
    }

    fn context(&self, config: &CliConfig) -> Result<InstallContext> {
        Ok(InstallContextBuilder::new(self.project.project_dir()?)
            .registry_url(self.registry.url()?)
            .framework(self.framework)
            .scaffold_runner(self.scaffold_runner.clone())
            .overwrite(self.overwrite)
            .dry_run(self.dry_run)
            .quiet(config.quiet)
            .progress(config.progress())
            .build())
    }
}
