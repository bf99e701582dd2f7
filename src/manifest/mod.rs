//! Package manifest (`package.json`) reader
//!
//! The installer reads the project's manifest for two things: which UI framework the
//! project depends on, and which of a component's declared dependencies are already
//! installed. The manifest is only ever written by the package manager itself.

use anyhow::Result;
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use crate::core::ArkitectError;

/// File name of the package manifest.
pub const MANIFEST_FILE_NAME: &str = "package.json";

/// The subset of `package.json` the installer cares about.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageManifest {
    #[serde(default)]
    pub dependencies: BTreeMap<String, serde_json::Value>,

    #[serde(default)]
    pub dev_dependencies: BTreeMap<String, serde_json::Value>,
}

impl PackageManifest {
    /// Path of `package.json` inside `project_dir`.
    #[must_use]
    pub fn path_in(project_dir: &Path) -> PathBuf {
        project_dir.join(MANIFEST_FILE_NAME)
    }

    /// Load `package.json` from `project_dir`.
    ///
    /// Returns `Ok(None)` when the file does not exist.
    ///
    /// # Errors
    ///
    /// [`ArkitectError::ManifestInvalid`] when the file exists but is not valid JSON.
    pub fn load(project_dir: &Path) -> Result<Option<Self>> {
        let path = Self::path_in(project_dir);
        if !path.exists() {
            return Ok(None);
        }

        let content = crate::utils::fs::read_text_file(&path)?;
        let manifest = serde_json::from_str(&content).map_err(|e| ArkitectError::ManifestInvalid {
            file: path.display().to_string(),
            reason: e.to_string(),
        })?;

        Ok(Some(manifest))
    }

    /// Names in `dependencies` and `devDependencies` combined.
    #[must_use]
    pub fn installed(&self) -> BTreeSet<&str> {
        self.dependencies.keys().chain(self.dev_dependencies.keys()).map(String::as_str).collect()
    }

    /// Whether `name` appears in either dependency table.
    #[must_use]
    pub fn has_dependency(&self, name: &str) -> bool {
        self.dependencies.contains_key(name) || self.dev_dependencies.contains_key(name)
    }
}
