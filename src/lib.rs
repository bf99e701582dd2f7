//! Arkitect UI - framework-aware component installer
//!
//! Installs Ark UI based components for React and Solid projects from the
//! Arkitect UI registry. Every component is published once per framework
//! (`r/<name>` and `s/<name>`); the installer picks the variant matching the
//! project and places its files where `components.json` says they belong.
//!
//! # Installation Flow
//!
//! For each requested component:
//!
//! 1. The scaffolding tool (`npx shadcn@latest add <item-url>`) is invoked.
//!    Its failure is reported as a warning, never as a fatal error.
//! 2. The registry item is fetched and every file is mapped to its target
//!    path through the project's aliases.
//! 3. Files the tool did not produce are written verbatim from the registry.
//! 4. Dependencies the project manifest lacks are installed with the
//!    detected package manager.
//!
//! # Core Modules
//!
//! - [`cli`] - Command-line interface (`init`, `add`, `list`)
//! - [`config`] - `components.json` loading and aliases
//! - [`core`] - Error types and the [`core::Framework`] enum
//! - [`detect`] - Framework and package manager detection
//! - [`installer`] - The per-component install state machine
//! - [`manifest`] - Read-only view of `package.json`
//! - [`process`] - External command construction and execution
//! - [`registry`] - Registry index and item fetching
//! - [`resolver`] - Alias resolution and target path planning
//! - [`utils`] - Filesystem and progress helpers
//!
//! # Example
//!
//! ```bash
//! arkitect-ui init --framework solid
//! arkitect-ui add button
//! arkitect-ui add --all --overwrite
//! ```
//!
//! # Environment
//!
//! - `REGISTRY_URL` - Registry base URL or local directory
//! - `ARKITECT_NO_PROGRESS` - Disable spinners
//! - `RUST_LOG` - Log filter, overrides `--verbose`/`--quiet`

pub mod cli;
pub mod config;
pub mod core;
pub mod detect;
pub mod installer;
pub mod manifest;
pub mod process;
pub mod registry;
pub mod resolver;
pub mod utils;

// test_utils module is available for both unit tests and integration tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
