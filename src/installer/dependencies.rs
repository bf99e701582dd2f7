//! Dependency reconciliation against `package.json`.

use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use crate::core::ArkitectError;
use crate::detect::{PackageManager, detect_package_manager};
use crate::manifest::PackageManifest;
use crate::process::{CommandRunner, ToolCommand};
use crate::utils::progress::spinner_with_message;

/// What a reconciliation did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reconciliation {
    /// Manager that was invoked; `None` when nothing was missing.
    pub manager: Option<PackageManager>,
    /// Packages passed to the manager, in declaration order.
    pub installed: Vec<String>,
}

impl Reconciliation {
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.installed.is_empty()
    }
}

/// Installs declared dependencies the project does not have yet.
pub struct DependencyReconciler<'a, R: CommandRunner> {
    runner: &'a R,
    project_dir: &'a Path,
    quiet: bool,
    progress: bool,
}

impl<'a, R: CommandRunner> DependencyReconciler<'a, R> {
    pub fn new(runner: &'a R, project_dir: &'a Path) -> Self {
        Self {
            runner,
            project_dir,
            quiet: false,
            progress: false,
        }
    }

    /// Suppress progress lines.
    pub fn quiet(mut self, value: bool) -> Self {
        self.quiet = value;
        self
    }

    /// Show a spinner while the package manager runs.
    pub fn progress(mut self, value: bool) -> Self {
        self.progress = value;
        self
    }

    /// Declared packages absent from both dependency tables of the manifest.
    ///
    /// Order follows `declared`; duplicates are dropped. A project without a
    /// `package.json` has nothing installed.
    ///
    /// # Errors
    ///
    /// [`ArkitectError::ManifestInvalid`] when `package.json` cannot be decoded.
    pub fn missing(&self, declared: &[String]) -> Result<Vec<String>> {
        let manifest = PackageManifest::load(self.project_dir)?.unwrap_or_default();
        let installed = manifest.installed();

        let mut missing: Vec<String> = Vec::new();
        for name in declared {
            if !installed.contains(name.as_str()) && !missing.contains(name) {
                missing.push(name.clone());
            }
        }
        Ok(missing)
    }

    /// Install whatever in `declared` is missing.
    ///
    /// # Errors
    ///
    /// [`ArkitectError::DependencyInstallFailed`] when the package manager cannot
    /// be started or exits unsuccessfully. This is never downgraded.
    pub async fn reconcile(&self, declared: &[String]) -> Result<Reconciliation> {
        let missing = self.missing(declared)?;
        if missing.is_empty() {
            tracing::debug!("All {} declared dependencies already present", declared.len());
            return Ok(Reconciliation::default());
        }

        let manager = detect_package_manager(self.project_dir);
        if !self.quiet {
            println!("{} {}...", "Installing dependencies:".cyan(), missing.join(", "));
        }

        let command = ToolCommand::package_add(manager, &missing).current_dir(self.project_dir);
        let spinner = spinner_with_message(
            self.progress && !self.quiet,
            format!("Running {}", command.display_command()),
        );
        let result = self.runner.run(&command).await;
        spinner.finish_and_clear();

        let failed = |stderr: String| ArkitectError::DependencyInstallFailed {
            manager: manager.to_string(),
            packages: missing.clone(),
            stderr,
        };

        let output = result.map_err(|e| failed(e.to_string()))?;
        if !output.success() {
            return Err(failed(output.failure_reason()).into());
        }

        if !self.quiet {
            println!("{}", "Dependencies installed successfully.".green());
        }

        Ok(Reconciliation {
            manager: Some(manager),
            installed: missing,
        })
    }
}
