//! Registry reads over HTTP or from a local directory.

use anyhow::Result;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::types::{RegistryIndex, RegistryItem};
use crate::core::{ArkitectError, Framework};

/// Registry used when `REGISTRY_URL` is not set.
pub const DEFAULT_REGISTRY_URL: &str = "https://devx-op.github.io/arkitect-ui/r";

/// Environment variable overriding the registry base URL.
pub const REGISTRY_URL_ENV: &str = "REGISTRY_URL";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Normalized registry base.
///
/// `http://` and `https://` bases are fetched over the network. A `file://` URL or a
/// plain path points at a registry build output on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryUrl {
    Remote(String),
    Local(PathBuf),
}

impl RegistryUrl {
    /// Parse a base URL, dropping one trailing `/`.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        let base = trimmed.strip_suffix('/').unwrap_or(trimmed);

        if base.starts_with("http://") || base.starts_with("https://") {
            RegistryUrl::Remote(base.to_string())
        } else if let Some(path) = base.strip_prefix("file://") {
            RegistryUrl::Local(PathBuf::from(path))
        } else {
            RegistryUrl::Local(PathBuf::from(base))
        }
    }

    /// Anchor a relative local base at `dir`. Remote and absolute bases are unchanged.
    ///
    /// Local locations are handed to the scaffolding tool, which runs in the project
    /// directory, so they must not depend on the working directory of the reader.
    #[must_use]
    pub fn anchored_at(self, dir: &Path) -> Self {
        match self {
            RegistryUrl::Local(path) if path.is_relative() => RegistryUrl::Local(dir.join(path)),
            other => other,
        }
    }

    /// Location of the catalog index.
    #[must_use]
    pub fn index_location(&self) -> String {
        self.join("index.json")
    }

    /// Location of one component definition for `framework`.
    #[must_use]
    pub fn item_location(&self, framework: Framework, name: &str) -> String {
        self.join(&format!("{}/{name}.json", framework.registry_segment()))
    }

    fn join(&self, relative: &str) -> String {
        match self {
            RegistryUrl::Remote(base) => format!("{base}/{relative}"),
            RegistryUrl::Local(base) => base.join(relative).display().to_string(),
        }
    }
}

impl Default for RegistryUrl {
    fn default() -> Self {
        RegistryUrl::parse(DEFAULT_REGISTRY_URL)
    }
}

impl std::fmt::Display for RegistryUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistryUrl::Remote(base) => f.write_str(base),
            RegistryUrl::Local(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Client for the two registry reads the installer needs.
///
/// There is no retry and no caching: a failed read surfaces as
/// [`ArkitectError::RegistryFetchFailed`].
#[derive(Debug, Clone)]
pub struct RegistryClient {
    base: RegistryUrl,
    http: reqwest::Client,
}

impl RegistryClient {
    /// Create a client for `base`.
    pub fn new(base: RegistryUrl) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("arkitect-ui/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ArkitectError::Other {
                message: format!("Failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            base,
            http,
        })
    }

    /// The registry base this client reads from.
    #[must_use]
    pub fn base(&self) -> &RegistryUrl {
        &self.base
    }

    /// Fetch the catalog index.
    pub async fn fetch_index(&self) -> Result<RegistryIndex> {
        self.fetch_json(&self.base.index_location()).await
    }

    /// Fetch the definition of `name` for `framework`.
    pub async fn fetch_item(&self, framework: Framework, name: &str) -> Result<RegistryItem> {
        self.fetch_json(&self.base.item_location(framework, name)).await
    }

    async fn fetch_json<T: DeserializeOwned>(&self, location: &str) -> Result<T> {
        tracing::debug!("Fetching {location}");

        let body = match &self.base {
            RegistryUrl::Remote(_) => self.fetch_remote(location).await?,
            RegistryUrl::Local(_) => tokio::fs::read_to_string(location).await.map_err(|e| {
                ArkitectError::RegistryFetchFailed {
                    url: location.to_string(),
                    reason: e.to_string(),
                }
            })?,
        };

        serde_json::from_str(&body).map_err(|e| {
            ArkitectError::RegistryFetchFailed {
                url: location.to_string(),
                reason: format!("invalid JSON: {e}"),
            }
            .into()
        })
    }

    async fn fetch_remote(&self, url: &str) -> Result<String> {
        let fetch_failed = |reason: String| ArkitectError::RegistryFetchFailed {
            url: url.to_string(),
            reason,
        };

        let response = self.http.get(url).send().await.map_err(|e| fetch_failed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(fetch_failed(format!("HTTP {status}")).into());
        }

        Ok(response.text().await.map_err(|e| fetch_failed(e.to_string()))?)
    }
}
