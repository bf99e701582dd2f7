//! Framework variants supported by the component registry.
//!
//! Every registry entry is namespaced by the UI framework it targets. The namespace
//! appears in three places, all derived from [`Framework`]:
//!
//! - the catalog index, where entry names look like `r/button` or `s/button`
//! - the item URL, `<base>/r/button.json` or `<base>/s/button.json`
//! - the project manifest, where the framework's runtime package marks its use

use serde::{Deserialize, Serialize};

/// UI framework a project is built with.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Framework {
    /// React, the default when nothing else can be determined.
    #[default]
    React,

    /// SolidJS.
    Solid,
}

impl Framework {
    /// Namespace prefix used for catalog index entry names.
    #[must_use]
    pub const fn index_prefix(&self) -> &'static str {
        match self {
            Framework::React => "r/",
            Framework::Solid => "s/",
        }
    }

    /// Path segment under the registry base URL holding this framework's items.
    #[must_use]
    pub const fn registry_segment(&self) -> &'static str {
        match self {
            Framework::React => "r",
            Framework::Solid => "s",
        }
    }

    /// Dependency whose presence in `package.json` marks the framework.
    #[must_use]
    pub const fn marker_dependency(&self) -> &'static str {
        match self {
            Framework::React => "react",
            Framework::Solid => "solid-js",
        }
    }

    /// Framework-specific headless primitives installed by `init`.
    #[must_use]
    pub const fn primitives_package(&self) -> &'static str {
        match self {
            Framework::React => "@ark-ui/react",
            Framework::Solid => "@ark-ui/solid",
        }
    }
}

impl std::fmt::Display for Framework {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Framework::React => write!(f, "react"),
            Framework::Solid => write!(f, "solid"),
        }
    }
}
