//! Spinners for long-running operations
//!
//! Registry fetches and external processes can take several seconds, so the installer
//! shows a spinner while waiting on them. A spinner created with `enabled = false`
//! draws nothing; callers pass the resolved progress setting (`--no-progress`,
//! `--quiet`, or `ARKITECT_NO_PROGRESS`, read once when the CLI config is built).
//!
//! # Examples
//!
//! ```rust,no_run
//! use arkitect_cli::utils::progress::ProgressBar;
//!
//! let spinner = ProgressBar::new_spinner(true);
//! spinner.set_message("Fetching registry index...");
//! // ... await the fetch ...
//! spinner.finish_and_clear();
//! ```

use indicatif::{ProgressBar as IndicatifBar, ProgressStyle as IndicatifStyle};
use std::time::Duration;

/// Environment variable that disables all progress indicators.
pub const NO_PROGRESS_ENV: &str = "ARKITECT_NO_PROGRESS";

/// A spinner with consistent styling that can be hidden.
#[derive(Clone)]
pub struct ProgressBar {
    inner: IndicatifBar,
}

impl ProgressBar {
    /// Create a spinner. When `enabled` is false the spinner draws nothing.
    pub fn new_spinner(enabled: bool) -> Self {
        let bar = if !enabled {
            IndicatifBar::hidden()
        } else {
            let bar = IndicatifBar::new_spinner();
            bar.set_style(spinner_style());
            bar.enable_steady_tick(Duration::from_millis(100));
            bar
        };
        Self { inner: bar }
    }

    /// Replace the spinner message.
    pub fn set_message(&self, msg: impl Into<String>) {
        self.inner.set_message(msg.into());
    }

    /// Stop the spinner and remove it from the terminal.
    pub fn finish_and_clear(&self) {
        self.inner.finish_and_clear();
    }

    /// Whether anything is drawn.
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.inner.is_hidden()
    }
}

/// Create a spinner already showing `msg`.
pub fn spinner_with_message(enabled: bool, msg: impl Into<String>) -> ProgressBar {
    let spinner = ProgressBar::new_spinner(enabled);
    spinner.set_message(msg);
    spinner
}

fn spinner_style() -> IndicatifStyle {
    IndicatifStyle::default_spinner()
        .template("{spinner:.cyan} {msg}")
        .unwrap_or_else(|_| IndicatifStyle::default_spinner())
        .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_spinner_is_hidden() {
        let spinner = spinner_with_message(false, "Working");
        assert!(spinner.is_hidden());
        spinner.finish_and_clear();
    }
}
