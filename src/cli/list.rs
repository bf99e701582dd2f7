//! List the UI components the registry offers.
//!
//! ```bash
//! arkitect-ui list
//! REGISTRY_URL=http://localhost:4321/r arkitect-ui list
//! ```
//!
//! A `components.json` in the project is optional here. When it names a framework,
//! a note says so; the listing itself is never filtered.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use super::CliConfig;
use super::common::{ProjectArgs, RegistryArgs};
use crate::config::ProjectConfig;
use crate::core::Framework;
use crate::registry::{RegistryClient, RegistryIndex};
use crate::utils::progress::spinner_with_message;

/// Command to list registry components.
#[derive(Args, Debug, Clone)]
pub struct ListCommand {
    #[command(flatten)]
    pub project: ProjectArgs,

    #[command(flatten)]
    pub registry: RegistryArgs,
}

impl ListCommand {
    pub async fn execute(self, config: &CliConfig) -> Result<()> {
        let project_dir = self.project.project_dir()?;
        let framework = ProjectConfig::load_optional(&project_dir).and_then(|c| c.framework());
        let client = RegistryClient::new(self.registry.url()?)?;

        if !config.quiet {
            println!("{}", "Fetching components from Arkitect UI registry...".cyan());
        }
        let spinner = spinner_with_message(config.progress(), "Fetching registry index...");
        let index = client.fetch_index().await;
        spinner.finish_and_clear();

        for line in render_listing(&index?, framework) {
            println!("{line}");
        }
        Ok(())
    }
}

/// Lines printed by `list`.
#[must_use]
pub fn render_listing(index: &RegistryIndex, framework: Option<Framework>) -> Vec<String> {
    let components: Vec<_> = index.items.iter().filter(|entry| entry.is_ui_component()).collect();

    if components.is_empty() {
        return vec!["No components found in the registry.".yellow().to_string()];
    }

    let mut lines = vec![String::new(), "Available components:".bold().to_string()];
    lines.extend(components.iter().map(|entry| match entry.description.as_deref() {
        Some(description) if !description.is_empty() => format!("- {}: {description}", entry.name),
        _ => format!("- {}", entry.name),
    }));

    if let Some(framework) = framework {
        lines.push(String::new());
        lines.push(format!(
            "Project framework: {framework} (installation picks the matching variant)"
        ));
    }

    lines
}
