//! Core types shared across Arkitect UI
//!
//! - [`error`] defines [`ArkitectError`], the typed error returned by every fallible
//!   operation, and [`ErrorContext`] / [`user_friendly_error`] for terminal display.
//! - [`framework`] defines [`Framework`], the closed set of UI frameworks the registry
//!   namespaces its components by.

pub mod error;
pub mod framework;

pub use error::{ArkitectError, ErrorContext, user_friendly_error};
pub use framework::Framework;
