//! Wire types for the registry's JSON documents.

use serde::{Deserialize, Serialize};

/// Registry object kind for installable UI components.
pub const REGISTRY_UI_TYPE: &str = "registry:ui";

/// `GET <base>/index.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryIndex {
    pub items: Vec<RegistryIndexEntry>,
}

/// One catalog row. `name` may be framework-namespaced, e.g. `s/button`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryIndexEntry {
    pub name: String,

    #[serde(rename = "type")]
    pub item_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub files: Vec<RegistryIndexFile>,
}

impl RegistryIndexEntry {
    /// Whether this entry is an installable UI component.
    #[must_use]
    pub fn is_ui_component(&self) -> bool {
        self.item_type == REGISTRY_UI_TYPE
    }
}

/// File listing inside an index entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryIndexFile {
    pub path: String,

    #[serde(rename = "type")]
    pub file_type: String,
}

/// `GET <base>/<segment>/<name>.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryItem {
    #[serde(default)]
    pub name: String,

    #[serde(rename = "type", default)]
    pub item_type: String,

    /// npm packages the component's files import.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<String>,

    pub files: Vec<RegistryFile>,
}

/// A source file shipped with a registry item.
///
/// `path` is logical: `ui/...` and `lib/...` are mapped through the project's
/// aliases, anything else lands under `src/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryFile {
    pub path: String,

    pub content: String,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub file_type: Option<String>,
}
