//! Component registry access
//!
//! The registry is a static tree of JSON documents:
//!
//! ```text
//! <base>/index.json         catalog of every entry, names namespaced as r/<name> or s/<name>
//! <base>/r/<name>.json      React variant of a component
//! <base>/s/<name>.json      Solid variant of a component
//! ```
//!
//! [`RegistryClient`] performs the two reads the installer needs. Nothing is cached
//! between invocations.

pub mod client;
pub mod types;

pub use client::{DEFAULT_REGISTRY_URL, REGISTRY_URL_ENV, RegistryClient, RegistryUrl};
pub use types::{
    REGISTRY_UI_TYPE, RegistryFile, RegistryIndex, RegistryIndexEntry, RegistryIndexFile,
    RegistryItem,
};
