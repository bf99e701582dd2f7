//! Mapping of registry files onto project paths.

use anyhow::Result;
use std::path::{Path, PathBuf};

use super::{
    AliasStyle, DEFAULT_SOURCE_EXTENSION, SOURCE_ROOT, join_relative, resolve_alias,
    validate_registry_path,
};
use crate::config::ProjectConfig;
use crate::registry::{RegistryFile, RegistryItem};

const UI_PREFIX: &str = "ui/";
const LIB_PREFIX: &str = "lib/";

/// A registry file paired with the path it should occupy in the project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallTarget {
    pub file: RegistryFile,
    pub path: PathBuf,
}

impl InstallTarget {
    /// Whether the target path is already present on disk.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}

/// Compute the install target for every file of `item`, in registry order.
///
/// # Errors
///
/// [`crate::core::ArkitectError::InvalidRegistryPath`] when any file path is
/// absolute or climbs out with `..`. No target is returned in that case.
pub fn plan_targets(
    item: &RegistryItem,
    config: &ProjectConfig,
    cwd: &Path,
) -> Result<Vec<InstallTarget>> {
    item.files
        .iter()
        .map(|file| {
            validate_registry_path(&file.path)?;
            Ok(InstallTarget {
                path: target_path(&file.path, config, cwd),
                file: file.clone(),
            })
        })
        .collect()
}

fn target_path(logical: &str, config: &ProjectConfig, cwd: &Path) -> PathBuf {
    if let Some(rest) = logical.strip_prefix(UI_PREFIX) {
        return join_relative(&resolve_alias(&config.aliases.components, cwd), rest);
    }

    if let Some(rest) = logical.strip_prefix(LIB_PREFIX) {
        let utils = &config.aliases.utils;
        let resolved = resolve_alias(utils, cwd);
        return match AliasStyle::of(utils) {
            AliasStyle::Directory => join_relative(&resolved, rest),
            AliasStyle::File => {
                let extension = Path::new(logical)
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .unwrap_or(DEFAULT_SOURCE_EXTENSION);
                resolved.with_extension(extension)
            }
        };
    }

    join_relative(&cwd.join(SOURCE_ROOT), logical)
}
