//! Installation context threaded through the install flow.

use std::fmt::Display;
use std::path::{Path, PathBuf};

use crate::core::Framework;
use crate::process::DEFAULT_SCAFFOLD_RUNNER;
use crate::registry::RegistryUrl;

/// Immutable settings for one install run.
///
/// Everything the installer would otherwise read from the process environment
/// (working directory, registry URL, flags) is resolved once by the CLI and
/// carried here.
///
/// # Fields
///
/// * `project_dir` - Root of the project receiving components
/// * `registry_url` - Normalized registry base
/// * `framework_override` - Framework forced on the command line, skipping detection
/// * `scaffold_runner` - Package runner used to launch the scaffolding tool
/// * `overwrite` - Pass `--overwrite` to the scaffolding tool
/// * `dry_run` - Print the scaffold commands without running anything
/// * `quiet` - Suppress progress lines
/// * `progress` - Show spinners while waiting
#[derive(Debug, Clone)]
pub struct InstallContext {
    pub project_dir: PathBuf,
    pub registry_url: RegistryUrl,
    pub framework_override: Option<Framework>,
    pub scaffold_runner: String,
    pub overwrite: bool,
    pub dry_run: bool,
    pub quiet: bool,
    pub progress: bool,
}

impl InstallContext {
    /// Print a progress line unless running quietly.
    pub fn status(&self, line: impl Display) {
        if !self.quiet {
            println!("{line}");
        }
    }

    /// Whether spinners should be drawn.
    #[must_use]
    pub const fn show_progress(&self) -> bool {
        self.progress && !self.quiet
    }

    /// Registry location of `name` for `framework`, as passed to the scaffolding tool.
    #[must_use]
    pub fn item_url(&self, framework: Framework, name: &str) -> String {
        self.registry_url.item_location(framework, name)
    }
}

/// Builder for [`InstallContext`].
pub struct InstallContextBuilder {
    // Required
    project_dir: PathBuf,

    // Optional with defaults
    registry_url: RegistryUrl,
    framework_override: Option<Framework>,
    scaffold_runner: String,
    overwrite: bool,
    dry_run: bool,
    quiet: bool,
    progress: bool,
}

impl InstallContextBuilder {
    /// Create a builder for `project_dir` with the public registry and no flags set.
    pub fn new(project_dir: impl AsRef<Path>) -> Self {
        Self {
            project_dir: project_dir.as_ref().to_path_buf(),
            registry_url: RegistryUrl::default(),
            framework_override: None,
            scaffold_runner: DEFAULT_SCAFFOLD_RUNNER.to_string(),
            overwrite: false,
            dry_run: false,
            quiet: false,
            progress: true,
        }
    }

    pub fn registry_url(mut self, url: RegistryUrl) -> Self {
        self.registry_url = url;
        self
    }

    /// Force a framework instead of detecting it.
    pub fn framework(mut self, framework: Option<Framework>) -> Self {
        self.framework_override = framework;
        self
    }

    pub fn scaffold_runner(mut self, runner: impl Into<String>) -> Self {
        self.scaffold_runner = runner.into();
        self
    }

    pub fn overwrite(mut self, value: bool) -> Self {
        self.overwrite = value;
        self
    }

    pub fn dry_run(mut self, value: bool) -> Self {
        self.dry_run = value;
        self
    }

    pub fn quiet(mut self, value: bool) -> Self {
        self.quiet = value;
        self
    }

    pub fn progress(mut self, value: bool) -> Self {
        self.progress = value;
        self
    }

    #[must_use]
    pub fn build(self) -> InstallContext {
        InstallContext {
            project_dir: self.project_dir,
            registry_url: self.registry_url,
            framework_override: self.framework_override,
            scaffold_runner: self.scaffold_runner,
            overwrite: self.overwrite,
            dry_run: self.dry_run,
            quiet: self.quiet,
            progress: self.progress,
        }
    }
}
