//! Arguments and helpers shared by several commands

use anyhow::{Context, Result};
use clap::Args;
use std::path::{Path, PathBuf};

use crate::registry::{DEFAULT_REGISTRY_URL, REGISTRY_URL_ENV, RegistryUrl};

/// `--cwd`: the project directory to operate on.
#[derive(Args, Debug, Clone, Default)]
pub struct ProjectArgs {
    /// Project directory (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    pub cwd: Option<PathBuf>,
}

impl ProjectArgs {
    /// Absolute project directory.
    pub fn project_dir(&self) -> Result<PathBuf> {
        resolve_project_dir(self.cwd.as_deref())
    }
}

/// `--registry-url`: base of the component registry.
#[derive(Args, Debug, Clone)]
pub struct RegistryArgs {
    /// Registry base URL or local directory
    #[arg(long, value_name = "URL", env = REGISTRY_URL_ENV, default_value = DEFAULT_REGISTRY_URL)]
    pub registry_url: String,
}

impl RegistryArgs {
    /// Parsed registry base; a relative local directory is anchored at the
    /// process working directory.
    pub fn url(&self) -> Result<RegistryUrl> {
        let current = std::env::current_dir().context("Failed to determine current directory")?;
        Ok(RegistryUrl::parse(&self.registry_url).anchored_at(&current))
    }
}

impl Default for RegistryArgs {
    fn default() -> Self {
        Self {
            registry_url: DEFAULT_REGISTRY_URL.to_string(),
        }
    }
}

/// Resolve `--cwd` against the process working directory.
pub fn resolve_project_dir(cwd: Option<&Path>) -> Result<PathBuf> {
    let current = std::env::current_dir().context("Failed to determine current directory")?;
    Ok(match cwd {
        Some(dir) if dir.is_absolute() => dir.to_path_buf(),
        Some(dir) => current.join(dir),
        None => current,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_project_dir() {
        let current = std::env::current_dir().unwrap();
        assert_eq!(resolve_project_dir(None).unwrap(), current);
        assert_eq!(resolve_project_dir(Some(Path::new("app"))).unwrap(), current.join("app"));

        let absolute = current.join("elsewhere");
        assert_eq!(resolve_project_dir(Some(&absolute)).unwrap(), absolute);
    }

    #[test]
    fn test_registry_args_normalize() {
        let args = RegistryArgs {
            registry_url: "https://example.com/r/".to_string(),
        };
        assert_eq!(args.url().unwrap(), RegistryUrl::Remote("https://example.com/r".to_string()));
    }

    #[test]
    fn test_relative_local_registry_is_anchored_at_process_dir() {
        let args = RegistryArgs {
            registry_url: "./public/r/".to_string(),
        };
        let current = std::env::current_dir().unwrap();
        assert_eq!(args.url().unwrap(), RegistryUrl::Local(current.join("./public/r")));
    }
}
