//! On-disk fixtures: projects and registries in temporary directories.

use anyhow::{Context, Result};
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::config::CONFIG_FILE_NAME;
use crate::core::Framework;
use crate::manifest::MANIFEST_FILE_NAME;
use crate::registry::{
    REGISTRY_UI_TYPE, RegistryFile, RegistryIndex, RegistryIndexEntry, RegistryItem, RegistryUrl,
};

/// A throwaway project directory.
///
/// The project lives one level below the temp root so tests can place files
/// "above" the project (for lockfile walking) without leaving the sandbox.
pub struct TestProject {
    _temp: TempDir,
    root: PathBuf,
}

impl TestProject {
    pub fn new() -> Result<Self> {
        let temp = TempDir::new().context("Failed to create temp dir")?;
        let root = temp.path().join("project");
        fs::create_dir_all(&root)?;
        Ok(Self {
            _temp: temp,
            root,
        })
    }

    /// Project root.
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Write `content` to `relative`, creating parent directories.
    pub fn write_file(&self, relative: &str, content: &str) -> Result<PathBuf> {
        let path = self.root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(path)
    }

    /// Create an empty file.
    pub fn touch(&self, relative: &str) -> Result<PathBuf> {
        self.write_file(relative, "")
    }

    pub fn read_file(&self, relative: &str) -> Result<String> {
        let path = self.root.join(relative);
        fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))
    }

    pub fn file_exists(&self, relative: &str) -> bool {
        self.root.join(relative).is_file()
    }

    /// Write `components.json` with the given aliases and no framework tag.
    pub fn write_config(&self, components: &str, utils: &str) -> Result<()> {
        self.write_config_value(json!({
            "$schema": "https://ui.shadcn.com/schema.json",
            "style": "default",
            "tsx": true,
            "aliases": { "components": components, "utils": utils }
        }))
    }

    /// Write `components.json` with an explicit framework tag.
    pub fn write_config_for(&self, components: &str, utils: &str, framework: Framework) -> Result<()> {
        self.write_config_value(json!({
            "aliases": { "components": components, "utils": utils },
            "arkitect": { "framework": framework }
        }))
    }

    fn write_config_value(&self, value: serde_json::Value) -> Result<()> {
        self.write_file(CONFIG_FILE_NAME, &serde_json::to_string_pretty(&value)?)?;
        Ok(())
    }

    /// Write `package.json` with the given dependency names.
    pub fn write_manifest(&self, dependencies: &[&str], dev_dependencies: &[&str]) -> Result<()> {
        let table = |names: &[&str]| {
            names
                .iter()
                .map(|name| ((*name).to_string(), json!("^1.0.0")))
                .collect::<serde_json::Map<_, _>>()
        };
        let value = json!({
            "name": "fixture-app",
            "private": true,
            "dependencies": table(dependencies),
            "devDependencies": table(dev_dependencies),
        });
        self.write_file(MANIFEST_FILE_NAME, &serde_json::to_string_pretty(&value)?)?;
        Ok(())
    }
}

/// A registry laid out the way the public one is served.
pub struct TestRegistry {
    temp: TempDir,
}

impl TestRegistry {
    pub fn new() -> Result<Self> {
        Ok(Self {
            temp: TempDir::new().context("Failed to create temp dir")?,
        })
    }

    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    /// Base for [`crate::registry::RegistryClient`].
    pub fn url(&self) -> RegistryUrl {
        RegistryUrl::Local(self.temp.path().to_path_buf())
    }

    /// Write `index.json` listing `(name, type, description)` rows.
    pub fn write_index(&self, entries: &[(&str, &str, &str)]) -> Result<()> {
        let index = RegistryIndex {
            items: entries
                .iter()
                .map(|(name, item_type, description)| RegistryIndexEntry {
                    name: (*name).to_string(),
                    item_type: (*item_type).to_string(),
                    title: None,
                    description: (!description.is_empty()).then(|| (*description).to_string()),
                    files: Vec::new(),
                })
                .collect(),
        };
        fs::write(self.path().join("index.json"), serde_json::to_string_pretty(&index)?)?;
        Ok(())
    }

    /// Publish `item` under the framework's segment.
    pub fn add_item(&self, framework: Framework, item: &RegistryItem) -> Result<()> {
        let dir = self.path().join(framework.registry_segment());
        fs::create_dir_all(&dir)?;
        fs::write(dir.join(format!("{}.json", item.name)), serde_json::to_string_pretty(item)?)?;
        Ok(())
    }
}

/// Build a UI registry item from `(path, content)` pairs.
pub fn registry_item(name: &str, files: &[(&str, &str)], dependencies: &[&str]) -> RegistryItem {
    RegistryItem {
        name: name.to_string(),
        item_type: REGISTRY_UI_TYPE.to_string(),
        dependencies: dependencies.iter().map(|d| (*d).to_string()).collect(),
        files: files
            .iter()
            .map(|(path, content)| RegistryFile {
                path: (*path).to_string(),
                content: (*content).to_string(),
                file_type: Some(REGISTRY_UI_TYPE.to_string()),
            })
            .collect(),
    }
}
