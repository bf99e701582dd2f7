//! Integration test suite for Arkitect UI
//!
//! End-to-end tests that run the `arkitect-ui` binary against a temporary project
//! and a registry laid out on disk.
//!
//! # Running Integration Tests
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **add**: Component installation, fallback writes, `--all` and `--dry-run`
//! - **init**: `components.json` creation
//! - **list**: Registry listing

// Shared test utilities (from parent tests/ directory)
#[path = "../common/mod.rs"]
mod common;

mod add;
mod init;
mod list;
