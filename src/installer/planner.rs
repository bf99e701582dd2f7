//! Install planning: which components to process, in which order.

use anyhow::Result;

use crate::core::{ArkitectError, Framework};
use crate::registry::{RegistryClient, RegistryIndex};

/// What the user asked to install.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallRequest {
    /// A single component name, e.g. `button`.
    pub component: Option<String>,
    /// Install every UI component available for the framework.
    pub all: bool,
}

impl InstallRequest {
    /// Request for one component.
    pub fn component(name: impl Into<String>) -> Self {
        Self {
            component: Some(name.into()),
            all: false,
        }
    }

    /// Request for the whole catalog.
    #[must_use]
    pub fn all() -> Self {
        Self {
            component: None,
            all: true,
        }
    }

    /// Fail fast when the request names nothing.
    ///
    /// # Errors
    ///
    /// [`ArkitectError::NoTargetSpecified`] when neither a name nor `all` is set.
    pub fn validate(&self) -> Result<()> {
        let has_name = self.component.as_deref().is_some_and(|name| !name.trim().is_empty());
        if self.all || has_name {
            Ok(())
        } else {
            Err(ArkitectError::NoTargetSpecified.into())
        }
    }
}

/// Build the ordered list of bare component names to install.
///
/// `all` takes precedence over a component name. The request is validated
/// before the registry is contacted.
pub async fn plan(
    request: &InstallRequest,
    framework: Framework,
    registry: &RegistryClient,
) -> Result<Vec<String>> {
    request.validate()?;

    if request.all {
        let index = registry.fetch_index().await?;
        let names = components_for(&index, framework);
        tracing::debug!("Catalog lists {} {framework} component(s)", names.len());
        return Ok(names);
    }

    Ok(request.component.iter().map(|name| name.trim().to_string()).collect())
}

/// UI components of `framework` in catalog order, with the framework prefix stripped.
#[must_use]
pub fn components_for(index: &RegistryIndex, framework: Framework) -> Vec<String> {
    index
        .items
        .iter()
        .filter(|entry| entry.is_ui_component())
        .filter_map(|entry| entry.name.strip_prefix(framework.index_prefix()))
        .map(str::to_string)
        .collect()
}
