//! Project inspection: which UI framework and which package manager a project uses.

pub mod framework;
pub mod package_manager;

pub use framework::{DetectionSource, FrameworkDetection, detect_framework};
pub use package_manager::{PackageManager, detect_package_manager};
