//! Test utilities for Arkitect UI
//!
//! Helpers shared by unit tests and the integration suite (through the
//! `test-utils` feature):
//!
//! - [`TestProject`]: a temporary project directory with config and manifest helpers
//! - [`TestRegistry`]: a registry laid out on disk, consumable through a local base
//! - [`RecordingRunner`]: a [`CommandRunner`](crate::process::CommandRunner) that
//!   records commands instead of launching them
//!
//! # Example
//!
//! ```rust,no_run
//! use arkitect_cli::test_utils::{RecordingRunner, TestProject};
//!
//! let project = TestProject::new().unwrap();
//! project.write_config("@/components/ui", "@/lib/utils").unwrap();
//! let runner = RecordingRunner::new().unavailable("npx");
//! ```

pub mod fixtures;
pub mod runner;

pub use fixtures::{TestProject, TestRegistry, registry_item};
pub use runner::RecordingRunner;

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Uses `level` when given, otherwise `RUST_LOG`. With neither, nothing is logged.
///
/// ```bash
/// RUST_LOG=debug cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_thread_ids(false)
            .with_ansi(true)
            .try_init();
    });
}
