//! Filesystem and terminal helpers
//!
//! - [`fs`] - atomic writes, directory creation, JSON helpers
//! - [`progress`] - spinners for registry fetches and external processes

pub mod fs;
pub mod progress;

pub use fs::{atomic_write, ensure_dir, ensure_parent_dir, safe_write};
pub use progress::ProgressBar;
