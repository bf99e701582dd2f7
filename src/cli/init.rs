//! Initialize a project for Arkitect UI.
//!
//! Writes `components.json` from flags and defaults. Nothing is asked
//! interactively; every prompt of a guided setup maps to a flag here.
//!
//! | Flag | Default |
//! |------|---------|
//! | `--framework` | detected from the project, else `react` |
//! | `--src-dir` | `src` |
//! | `--components-dir` | `<src-dir>/components/ui` |
//! | `--utils-path` | `<src-dir>/lib/utils.ts` |
//! | `--css-path` | `<src-dir>/index.css` |
//!
//! With `--install-deps`, the base packages (`clsx`, `tailwind-merge`,
//! `class-variance-authority` and the framework's Ark UI package) are installed
//! with the project's package manager, skipping any already present.
//!
//! ```bash
//! arkitect-ui init
//! arkitect-ui init --framework solid --src-dir app --install-deps
//! arkitect-ui init --force --components-dir src/ui
//! ```

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::Path;

use super::CliConfig;
use super::common::ProjectArgs;
use crate::config::{
    Aliases, ArkitectSettings, CONFIG_FILE_NAME, CONFIG_SCHEMA_URL, ProjectConfig, TailwindConfig,
};
use crate::core::{ArkitectError, Framework};
use crate::detect::detect_framework;
use crate::installer::{DependencyReconciler, Reconciliation};
use crate::process::{CommandRunner, SystemRunner};
use crate::resolver::{ROOT_IMPORT_MARKER, SOURCE_ROOT};
use crate::utils::fs::write_json_file;

/// Packages every project needs regardless of framework.
pub const BASE_DEPENDENCIES: [&str; 3] = ["clsx", "tailwind-merge", "class-variance-authority"];

/// Command to create `components.json`.
#[derive(Args, Debug, Clone)]
pub struct InitCommand {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Framework the project uses
    #[arg(long, value_enum)]
    pub framework: Option<Framework>,

    /// Source directory
    #[arg(long, value_name = "DIR")]
    pub src_dir: Option<String>,

    /// Directory components are installed into
    #[arg(long, value_name = "DIR")]
    pub components_dir: Option<String>,

    /// Path of the utils module
    #[arg(long, value_name = "FILE")]
    pub utils_path: Option<String>,

    /// Path of the global CSS file
    #[arg(long, value_name = "FILE")]
    pub css_path: Option<String>,

    /// Install the base dependencies after writing the configuration
    #[arg(long)]
    pub install_deps: bool,

    /// Replace an existing components.json
    #[arg(long)]
    pub force: bool,
}

/// Resolved project layout written into `components.json`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    pub framework: Framework,
    pub src_dir: String,
    pub components_dir: String,
    pub utils_path: String,
    pub css_path: String,
}

impl ProjectLayout {
    /// Configuration for this layout.
    #[must_use]
    pub fn to_config(&self) -> ProjectConfig {
        let components = self.alias_for(&self.components_dir);
        let utils_module = Path::new(&self.utils_path).with_extension("");
        let utils = self.alias_for(&utils_module.to_string_lossy());

        ProjectConfig {
            schema: Some(CONFIG_SCHEMA_URL.to_string()),
            style: Some("default".to_string()),
            rsc: Some(self.framework == Framework::React),
            tsx: Some(true),
            tailwind: Some(TailwindConfig {
                config: "tailwind.config.js".to_string(),
                css: self.css_path.clone(),
                base_color: "slate".to_string(),
                css_variables: true,
                prefix: Some(String::new()),
            }),
            aliases: Aliases {
                ui: Some(components.clone()),
                components,
                utils,
                lib: None,
                hooks: None,
            },
            icon_library: None,
            arkitect: Some(ArkitectSettings {
                framework: self.framework,
            }),
        }
    }

    /// Warning for a source directory the `@/` marker does not point at.
    ///
    /// `@/` always resolves under `src/`, so aliases written for another source
    /// directory land in `src/` when components are installed.
    #[must_use]
    pub fn source_dir_warning(&self) -> Option<String> {
        let src = self.src_dir.trim_end_matches('/');
        (src != SOURCE_ROOT).then(|| {
            format!(
                "Source directory '{src}' differs from '{SOURCE_ROOT}'; `{ROOT_IMPORT_MARKER}` aliases \
                 resolve under '{SOURCE_ROOT}/' when installing. Use plain aliases in \
                 {CONFIG_FILE_NAME} (e.g. '{src}/components/ui') to install into '{src}/'."
            )
        })
    }

    /// `@/` alias for a path inside the source directory.
    fn alias_for(&self, path: &str) -> String {
        let src_prefix = format!("{}/", self.src_dir.trim_end_matches('/'));
        let relative = path.strip_prefix(&src_prefix).unwrap_or(path);
        format!("{ROOT_IMPORT_MARKER}{relative}")
    }
}

impl InitCommand {
    pub async fn execute(self, config: &CliConfig) -> Result<()> {
        self.execute_with_runner(config, &SystemRunner).await.map(|_| ())
    }

    /// Run with a custom process runner. Returns the dependency reconciliation,
    /// empty unless `--install-deps` was given.
    pub async fn execute_with_runner<R: CommandRunner>(
        self,
        config: &CliConfig,
        runner: &R,
    ) -> Result<Reconciliation> {
        let project_dir = self.project.project_dir()?;
        let status = |line: String| {
            if !config.quiet {
                println!("{line}");
            }
        };

        status("Initializing Arkitect UI configuration...".cyan().to_string());

        let config_path = ProjectConfig::path_in(&project_dir);
        if config_path.exists() && !self.force {
            return Err(ArkitectError::ConfigAlreadyExists {
                path: config_path.display().to_string(),
            }
            .into());
        }

        let layout = self.layout(&project_dir);
        tracing::debug!("Resolved layout: {layout:?}");
        if let Some(warning) = layout.source_dir_warning() {
            tracing::warn!("{warning}");
            status(format!("{} {warning}", "Warning:".yellow()));
        }

        write_json_file(&config_path, &layout.to_config()).map_err(|e| {
            ArkitectError::FileWriteFailed {
                path: config_path.display().to_string(),
                reason: format!("{e:#}"),
            }
        })?;
        status(format!("{} {CONFIG_FILE_NAME} created successfully.", "✓".green()));

        if !self.install_deps {
            return Ok(Reconciliation::default());
        }

        let mut dependencies: Vec<String> =
            BASE_DEPENDENCIES.iter().map(|name| (*name).to_string()).collect();
        dependencies.push(layout.framework.primitives_package().to_string());

        let reconciliation = DependencyReconciler::new(runner, &project_dir)
            .quiet(config.quiet)
            .progress(config.progress())
            .reconcile(&dependencies)
            .await?;

        if reconciliation.is_noop() {
            status("All base dependencies are already installed.".to_string());
        }
        Ok(reconciliation)
    }

    fn layout(&self, project_dir: &Path) -> ProjectLayout {
        let framework = self.framework.unwrap_or_else(|| {
            let existing = ProjectConfig::load_optional(project_dir);
            detect_framework(project_dir, existing.as_ref()).framework
        });

        let src_dir = self.src_dir.clone().unwrap_or_else(|| "src".to_string());
        let src = src_dir.trim_end_matches('/');

        ProjectLayout {
            framework,
            components_dir: self
                .components_dir
                .clone()
                .unwrap_or_else(|| format!("{src}/components/ui")),
            utils_path: self.utils_path.clone().unwrap_or_else(|| format!("{src}/lib/utils.ts")),
            css_path: self.css_path.clone().unwrap_or_else(|| format!("{src}/index.css")),
            src_dir,
        }
    }
}
