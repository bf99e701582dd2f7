//! Component installation engine
//!
//! This module turns an install request into files on disk. It is shared by the
//! `add` command and by tests, which drive it with a recording process runner.
//!
//! # Installation Process
//!
//! 1. **Configuration**: `components.json` is loaded; a missing file stops the run
//! 2. **Framework**: taken from `--framework`, else detected from the project
//! 3. **Planning**: one named component, or every UI component the catalog lists
//!    for the framework (see [`planner`])
//! 4. **Per component**, strictly one after another:
//!
//! ```text
//! Invoking ──► Verifying ──► Satisfied ─────────────────────────────► Done
//!                        └─► FallbackWriting ──► DependencyReconciling ──► Done
//! ```
//!
//! - **Invoking** runs `npx shadcn@latest add <itemUrl>` in the project. If the tool
//!   cannot be started or exits unsuccessfully, the failure is recorded as
//!   [`StepOutcome::Recovered`] and installation continues.
//! - **Verifying** fetches the registry item, maps its files onto project paths with
//!   [`crate::resolver::plan_targets`], and checks which of them exist.
//! - **FallbackWriting** writes the registry content of every missing target.
//! - **DependencyReconciling** installs the item's declared dependencies that the
//!   manifest lacks. It only runs after a fallback write, since a successful
//!   scaffold has already handled dependencies itself.
//!
//! The first fatal error aborts the remaining plan. Components finished before it
//! stay installed.
//!
//! # Dry Run
//!
//! With `dry_run` set, each component's scaffold command is printed and nothing
//! else happens: no process, no registry item fetch, no writes.

pub mod context;
pub mod dependencies;
pub mod planner;


pub use context::{InstallContext, InstallContextBuilder};
pub use dependencies::{DependencyReconciler, Reconciliation};
pub use planner::{InstallRequest, components_for, plan};

use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;
use std::time::Duration;

use crate::config::ProjectConfig;
use crate::core::{ArkitectError, Framework};
use crate::detect::{FrameworkDetection, detect_framework};
use crate::process::{CommandRunner, ToolCommand};
use crate::registry::{RegistryClient, RegistryItem};
use crate::resolver::{InstallTarget, plan_targets};
use crate::utils::fs::atomic_write;
use crate::utils::progress::spinner_with_message;

/// Time allowed for one scaffolding tool run, including its own package downloads.
pub const SCAFFOLD_TIMEOUT: Duration = Duration::from_secs(600);

/// Result of a step that may fail without stopping the run.
///
/// Fatal failures are returned as `Err` instead.
#[derive(Debug, Clone)]
pub enum StepOutcome {
    Completed,
    Recovered(ArkitectError),
}

impl StepOutcome {
    #[must_use]
    pub const fn is_recovered(&self) -> bool {
        matches!(self, StepOutcome::Recovered(_))
    }
}

/// Per-component position in the install state machine.
#[derive(Debug)]
enum InstallState {
    Invoking,
    Verifying,
    Satisfied,
    FallbackWriting {
        item: RegistryItem,
        missing: Vec<InstallTarget>,
    },
    DependencyReconciling {
        dependencies: Vec<String>,
    },
    Done,
}

impl InstallState {
    const fn label(&self) -> &'static str {
        match self {
            InstallState::Invoking => "invoking",
            InstallState::Verifying => "verifying",
            InstallState::Satisfied => "satisfied",
            InstallState::FallbackWriting { .. } => "fallback-writing",
            InstallState::DependencyReconciling { .. } => "reconciling-dependencies",
            InstallState::Done => "done",
        }
    }
}

/// What happened to one component.
#[derive(Debug, Clone)]
pub struct ComponentReport {
    pub name: String,
    pub scaffold: StepOutcome,
    /// Files materialized from registry content, in registry order.
    pub written: Vec<PathBuf>,
    /// Packages handed to the package manager.
    pub dependencies_installed: Vec<String>,
}

impl ComponentReport {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            scaffold: StepOutcome::Completed,
            written: Vec::new(),
            dependencies_installed: Vec::new(),
        }
    }

    /// Whether the fallback write ran.
    #[must_use]
    pub fn used_fallback(&self) -> bool {
        !self.written.is_empty()
    }
}

/// Summary of an install run.
#[derive(Debug, Clone)]
pub struct InstallReport {
    pub framework: FrameworkDetection,
    pub components: Vec<ComponentReport>,
}

impl InstallReport {
    /// Whether the plan was empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

/// Drives installation of planned components.
pub struct ComponentInstaller<'a, R: CommandRunner> {
    ctx: &'a InstallContext,
    registry: &'a RegistryClient,
    runner: &'a R,
}

impl<'a, R: CommandRunner> ComponentInstaller<'a, R> {
    pub fn new(ctx: &'a InstallContext, registry: &'a RegistryClient, runner: &'a R) -> Self {
        Self {
            ctx,
            registry,
            runner,
        }
    }

    /// Install everything `request` asks for.
    ///
    /// # Errors
    ///
    /// Any [`ArkitectError`] other than a scaffolding tool failure aborts the run.
    pub async fn install(&self, request: &InstallRequest) -> Result<InstallReport> {
        let config = ProjectConfig::load(&self.ctx.project_dir)?;
        let framework = self.resolve_framework(&config);

        let spinner = spinner_with_message(
            self.ctx.show_progress() && request.all,
            "Fetching registry index...",
        );
        let planned = plan(request, framework.framework, self.registry).await;
        spinner.finish_and_clear();
        let names = planned?;

        let mut report = InstallReport {
            framework,
            components: Vec::with_capacity(names.len()),
        };

        if names.is_empty() {
            self.ctx.status("No components found to install.".yellow());
            return Ok(report);
        }

        self.ctx.status(format!(
            "Installing {} component(s) for {}...",
            names.len(),
            framework.framework
        ));

        for name in &names {
            let component = self.install_component(&config, framework.framework, name).await?;
            report.components.push(component);
        }

        if self.ctx.dry_run {
            self.ctx.status("Dry run complete. No files were changed.".green());
        } else {
            self.ctx.status("All components installed successfully.".green());
        }
        Ok(report)
    }

    fn resolve_framework(&self, config: &ProjectConfig) -> FrameworkDetection {
        if let Some(framework) = self.ctx.framework_override {
            return FrameworkDetection::overridden(framework);
        }

        let detection = detect_framework(&self.ctx.project_dir, Some(config));
        if detection.is_fallback() {
            self.ctx.status(format!(
                "{} no framework detected, using {}. Pass --framework to choose explicitly.",
                "Note:".yellow(),
                detection.framework
            ));
        }
        detection
    }

    /// Run the state machine for one component.
    async fn install_component(
        &self,
        config: &ProjectConfig,
        framework: Framework,
        name: &str,
    ) -> Result<ComponentReport> {
        self.ctx.status(format!("Installing {name}..."));

        let mut report = ComponentReport::new(name);
        let mut state = InstallState::Invoking;

        loop {
            tracing::debug!("{name}: {}", state.label());
            state = match state {
                InstallState::Invoking => {
                    report.scaffold = self.invoke_scaffold(framework, name).await;
                    if self.ctx.dry_run {
                        InstallState::Done
                    } else {
                        InstallState::Verifying
                    }
                }
                InstallState::Verifying => {
                    let spinner = spinner_with_message(
                        self.ctx.show_progress(),
                        format!("Verifying {name}..."),
                    );
                    let fetched = self.registry.fetch_item(framework, name).await;
                    spinner.finish_and_clear();
                    let item = fetched?;

                    let missing: Vec<InstallTarget> =
                        plan_targets(&item, config, &self.ctx.project_dir)?
                            .into_iter()
                            .filter(|target| !target.exists())
                            .collect();

                    if missing.is_empty() {
                        InstallState::Satisfied
                    } else {
                        InstallState::FallbackWriting {
                            item,
                            missing,
                        }
                    }
                }
                InstallState::Satisfied => InstallState::Done,
                InstallState::FallbackWriting {
                    item,
                    missing,
                } => {
                    report.written = self.write_fallback(&missing)?;
                    InstallState::DependencyReconciling {
                        dependencies: item.dependencies,
                    }
                }
                InstallState::DependencyReconciling {
                    dependencies,
                } => {
                    if !dependencies.is_empty() {
                        let reconciliation =
                            DependencyReconciler::new(self.runner, &self.ctx.project_dir)
                                .quiet(self.ctx.quiet)
                                .progress(self.ctx.show_progress())
                                .reconcile(&dependencies)
                                .await?;
                        report.dependencies_installed = reconciliation.installed;
                    }
                    InstallState::Done
                }
                InstallState::Done => break,
            };
        }

        Ok(report)
    }

    async fn invoke_scaffold(&self, framework: Framework, name: &str) -> StepOutcome {
        let command = ToolCommand::scaffold_add(
            &self.ctx.scaffold_runner,
            &self.ctx.item_url(framework, name),
            self.ctx.overwrite,
        )
        .current_dir(&self.ctx.project_dir)
        .timeout(SCAFFOLD_TIMEOUT);

        if self.ctx.dry_run {
            self.ctx.status(format!("[Dry Run] Would execute: {}", command.display_command()));
            return StepOutcome::Completed;
        }

        let spinner = spinner_with_message(
            self.ctx.show_progress(),
            format!("Running {}", command.display_command()),
        );
        let result = self.runner.run(&command).await;
        spinner.finish_and_clear();

        let reason = match result {
            Ok(output) if output.success() => {
                let stdout = output.stdout.trim();
                if !stdout.is_empty() {
                    self.ctx.status(stdout);
                }
                return StepOutcome::Completed;
            }
            Ok(output) => output.failure_reason(),
            Err(e) => e.to_string(),
        };

        let error = ArkitectError::ScaffoldToolFailed {
            component: name.to_string(),
            reason,
        };
        tracing::warn!("{error}");
        self.ctx.status(format!(
            "{} {error}. Verifying files against the registry.",
            "Warning:".yellow()
        ));
        StepOutcome::Recovered(error)
    }

    fn write_fallback(&self, missing: &[InstallTarget]) -> Result<Vec<PathBuf>> {
        self.ctx.status(
            "Missing files after shadcn add. Applying fallback write.".yellow(),
        );

        let mut written = Vec::with_capacity(missing.len());
        for target in missing {
            atomic_write(&target.path, target.file.content.as_bytes()).map_err(|e| {
                ArkitectError::FileWriteFailed {
                    path: target.path.display().to_string(),
                    reason: format!("{e:#}"),
                }
            })?;
            self.ctx.status(format!("{} {}", "Created".green(), target.path.display()));
            written.push(target.path.clone());
        }

        self.ctx.status("Fallback write completed.");
        Ok(written)
    }
}
