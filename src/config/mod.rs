//! Project configuration (`components.json`)
//!
//! `components.json` lives in the project root and is created once by `init`. The
//! installer only ever reads it. The file format is shared with the upstream
//! scaffolding tool, so fields the installer does not use are still modelled to
//! allow `init` to write a complete file.
//!
//! # Format
//!
//! ```json
//! {
//!   "$schema": "https://ui.shadcn.com/schema.json",
//!   "style": "default",
//!   "rsc": true,
//!   "tsx": true,
//!   "tailwind": {
//!     "config": "tailwind.config.js",
//!     "css": "src/index.css",
//!     "baseColor": "slate",
//!     "cssVariables": true,
//!     "prefix": ""
//!   },
//!   "aliases": {
//!     "components": "@/components/ui",
//!     "utils": "@/lib/utils",
//!     "ui": "@/components/ui"
//!   },
//!   "arkitect": { "framework": "react" }
//! }
//! ```
//!
//! Only `aliases.components` and `aliases.utils` are required. Unknown keys are ignored.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::core::{ArkitectError, Framework};

/// File name of the project configuration.
pub const CONFIG_FILE_NAME: &str = "components.json";

/// Schema URL written by `init`.
pub const CONFIG_SCHEMA_URL: &str = "https://ui.shadcn.com/schema.json";

/// Decoded `components.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfig {
    /// JSON schema reference.
    #[serde(rename = "$schema", default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Component style name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,

    /// Whether React Server Components are enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rsc: Option<bool>,

    /// Whether components are written as TSX.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tsx: Option<bool>,

    /// Tailwind settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tailwind: Option<TailwindConfig>,

    /// Import aliases that decide where component files land.
    pub aliases: Aliases,

    /// Icon library name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_library: Option<String>,

    /// Settings specific to this tool.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arkitect: Option<ArkitectSettings>,
}

/// Import aliases. `components` and `utils` are always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aliases {
    /// Directory-style alias for UI component files, e.g. `@/components/ui`.
    pub components: String,

    /// Alias for library helpers. May be file-style (`@/lib/utils`) or
    /// directory-style (`@/lib/`).
    pub utils: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ui: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lib: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hooks: Option<String>,
}

/// Tailwind section of `components.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TailwindConfig {
    pub config: String,
    pub css: String,
    pub base_color: String,
    pub css_variables: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
}

/// Tool-specific settings stored under the `arkitect` key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArkitectSettings {
    pub framework: Framework,
}

impl ProjectConfig {
    /// Path of `components.json` inside `project_dir`.
    #[must_use]
    pub fn path_in(project_dir: &Path) -> PathBuf {
        project_dir.join(CONFIG_FILE_NAME)
    }

    /// Load and decode `components.json` from `project_dir`.
    ///
    /// # Errors
    ///
    /// - [`ArkitectError::ConfigMissing`] when the file does not exist
    /// - [`ArkitectError::ConfigInvalid`] when it cannot be decoded
    pub fn load(project_dir: &Path) -> Result<Self> {
        let path = Self::path_in(project_dir);
        if !path.exists() {
            return Err(ArkitectError::ConfigMissing {
                path: project_dir.display().to_string(),
            }
            .into());
        }

        let content = std::fs::read_to_string(&path).map_err(|e| ArkitectError::ConfigInvalid {
            file: path.display().to_string(),
            reason: e.to_string(),
        })?;

        Self::parse(&content).map_err(|reason| {
            ArkitectError::ConfigInvalid {
                file: path.display().to_string(),
                reason,
            }
            .into()
        })
    }

    /// Load `components.json` if present and valid, otherwise `None`.
    ///
    /// Used where the configuration is only a hint, such as `list`.
    #[must_use]
    pub fn load_optional(project_dir: &Path) -> Option<Self> {
        match Self::load(project_dir) {
            Ok(config) => Some(config),
            Err(e) => {
                tracing::debug!("Ignoring project configuration: {e}");
                None
            }
        }
    }

    fn parse(content: &str) -> std::result::Result<Self, String> {
        serde_json::from_str(content).map_err(|e| e.to_string())
    }

    /// Framework stored under `arkitect.framework`, if any.
    #[must_use]
    pub fn framework(&self) -> Option<Framework> {
        self.arkitect.map(|settings| settings.framework)
    }
}
