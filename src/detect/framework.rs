//! Framework detection.
//!
//! Resolution order, first match wins:
//!
//! 1. `arkitect.framework` in `components.json`
//! 2. `solid-js` in the manifest's combined dependencies
//! 3. `react` in the manifest's combined dependencies
//! 4. React
//!
//! Detection never fails. A missing or unreadable `package.json` behaves like one
//! without marker dependencies.

use std::path::Path;

use crate::config::ProjectConfig;
use crate::core::Framework;
use crate::manifest::PackageManifest;

/// Markers checked against the manifest, in priority order.
const MARKER_ORDER: [Framework; 2] = [Framework::Solid, Framework::React];

/// Where a detected framework came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectionSource {
    /// Passed explicitly on the command line.
    Override,
    /// `arkitect.framework` in `components.json`.
    ProjectConfig,
    /// A marker dependency in `package.json`.
    Manifest,
    /// Nothing matched; the default was used.
    Default,
}

/// Result of framework detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameworkDetection {
    pub framework: Framework,
    pub source: DetectionSource,
}

impl FrameworkDetection {
    /// A detection that came from an explicit user choice.
    #[must_use]
    pub const fn overridden(framework: Framework) -> Self {
        Self {
            framework,
            source: DetectionSource::Override,
        }
    }

    /// Whether the framework was guessed rather than found.
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.source == DetectionSource::Default
    }
}

/// Detect the framework of the project in `project_dir`.
///
/// `config` is the already-loaded project configuration, if any.
#[must_use]
pub fn detect_framework(project_dir: &Path, config: Option<&ProjectConfig>) -> FrameworkDetection {
    if let Some(framework) = config.and_then(ProjectConfig::framework) {
        tracing::debug!("Framework {framework} set in components.json");
        return FrameworkDetection {
            framework,
            source: DetectionSource::ProjectConfig,
        };
    }

    let manifest = match PackageManifest::load(project_dir) {
        Ok(manifest) => manifest,
        Err(e) => {
            tracing::warn!("Ignoring unreadable package.json during framework detection: {e}");
            None
        }
    };

    if let Some(manifest) = manifest {
        for framework in MARKER_ORDER {
            if manifest.has_dependency(framework.marker_dependency()) {
                tracing::debug!(
                    "Framework {framework} detected from '{}' dependency",
                    framework.marker_dependency()
                );
                return FrameworkDetection {
                    framework,
                    source: DetectionSource::Manifest,
                };
            }
        }
    }

    tracing::warn!(
        "Could not detect a framework in {}; defaulting to {}",
        project_dir.display(),
        Framework::default()
    );
    FrameworkDetection {
        framework: Framework::default(),
        source: DetectionSource::Default,
    }
}
