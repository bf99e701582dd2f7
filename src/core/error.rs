//! Error handling for Arkitect UI
//!
//! The error model has two layers:
//!
//! - [`ArkitectError`] is the strongly-typed enum returned (wrapped in [`anyhow::Error`])
//!   by every fallible operation in the crate. Each variant corresponds to one failure
//!   mode of the install flow.
//! - [`ErrorContext`] wraps an [`ArkitectError`] with optional details and a suggestion
//!   for display in the terminal. [`user_friendly_error`] converts any `anyhow::Error`
//!   into an [`ErrorContext`].
//!
//! # Fatal vs Recoverable
//!
//! Only [`ArkitectError::ScaffoldToolFailed`] is recoverable: the installer downgrades it
//! to a warning and continues with fallback materialization. Every other variant aborts
//! the remaining install plan.
//!
//! # Examples
//!
//! ```rust,no_run
//! use arkitect_cli::core::{ArkitectError, user_friendly_error};
//!
//! let error = anyhow::Error::from(ArkitectError::NoTargetSpecified);
//! let context = user_friendly_error(error);
//! context.display(); // error: ..., suggestion: ...
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for Arkitect UI operations
///
/// Variants carry owned strings so errors can be cloned out of an `anyhow::Error`
/// chain when building an [`ErrorContext`].
#[derive(Error, Debug, Clone)]
pub enum ArkitectError {
    /// No `components.json` exists in the project directory
    #[error("components.json not found in {path}")]
    ConfigMissing {
        /// Directory that was searched
        path: String,
    },

    /// `components.json` exists but could not be decoded
    #[error("Invalid project configuration in {file}: {reason}")]
    ConfigInvalid {
        /// Path to the configuration file
        file: String,
        /// Decoder message
        reason: String,
    },

    /// `init` would overwrite an existing `components.json`
    #[error("components.json already exists at {path}")]
    ConfigAlreadyExists {
        /// Path to the existing file
        path: String,
    },

    /// Neither a component name nor `--all` was given
    #[error("No component specified")]
    NoTargetSpecified,

    /// A registry read failed (transport, HTTP status, or decoding)
    #[error("Failed to fetch {url}: {reason}")]
    RegistryFetchFailed {
        /// URL or path that was requested
        url: String,
        /// What went wrong
        reason: String,
    },

    /// The external scaffolding tool could not be run or exited unsuccessfully
    #[error("Scaffolding tool failed for '{component}': {reason}")]
    ScaffoldToolFailed {
        /// Component being installed
        component: String,
        /// Spawn error or captured stderr
        reason: String,
    },

    /// A registry file path would land outside the project
    #[error("Invalid registry file path '{path}': {reason}")]
    InvalidRegistryPath {
        /// Logical path as published by the registry
        path: String,
        /// Offending path component
        reason: String,
    },

    /// A fallback file could not be written
    #[error("Failed to write {path}: {reason}")]
    FileWriteFailed {
        /// Target path
        path: String,
        /// Underlying I/O error
        reason: String,
    },

    /// `package.json` exists but is not valid JSON
    #[error("Invalid package manifest {file}: {reason}")]
    ManifestInvalid {
        /// Path to the manifest
        file: String,
        /// Parser message
        reason: String,
    },

    /// The package manager failed to install missing dependencies
    #[error("Failed to install dependencies with {manager}: {}", .packages.join(", "))]
    DependencyInstallFailed {
        /// Package manager executable
        manager: String,
        /// Packages that were requested
        packages: Vec<String>,
        /// Spawn error or captured stderr
        stderr: String,
    },

    /// An external program could not be started or did not finish in time
    #[error("Failed to run {command}: {reason}")]
    CommandFailed {
        /// Program and arguments
        command: String,
        /// Spawn error or timeout description
        reason: String,
    },

    /// Wrapped I/O error
    #[error("IO error: {message}")]
    Io {
        /// Display form of the I/O error
        message: String,
    },

    /// Catch-all for errors without a dedicated variant
    #[error("{message}")]
    Other {
        /// Error message
        message: String,
    },
}

impl From<std::io::Error> for ArkitectError {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: error.to_string(),
        }
    }
}

/// Error wrapper with user-facing details and a suggestion.
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: ArkitectError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a context with no details or suggestion.
    #[must_use]
    pub const fn new(error: ArkitectError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add details explaining the error.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Print the error to stderr.
    ///
    /// The message is red and bold, details are yellow, and the suggestion is green.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error to a user-friendly [`ErrorContext`].
///
/// [`ArkitectError`] values anywhere in the chain get tailored suggestions;
/// [`std::io::Error`] gets filesystem guidance; everything else is reported with
/// its full cause chain.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    if let Some(arkitect_error) = error.chain().find_map(|e| e.downcast_ref::<ArkitectError>()) {
        return create_error_context(arkitect_error.clone());
    }

    if let Some(io_error) = error.downcast_ref::<std::io::Error>() {
        match io_error.kind() {
            std::io::ErrorKind::PermissionDenied => {
                return ErrorContext::new(ArkitectError::Io {
                    message: io_error.to_string(),
                })
                .with_suggestion("Check file ownership and permissions in the project directory")
                .with_details("Arkitect UI could not read or write a file it needed");
            }
            std::io::ErrorKind::NotFound => {
                return ErrorContext::new(ArkitectError::Io {
                    message: io_error.to_string(),
                })
                .with_suggestion("Check that the file or directory exists and the path is correct");
            }
            _ => {}
        }
    }

    let mut message = error.to_string();
    let chain: Vec<String> =
        error.chain().skip(1).map(std::string::ToString::to_string).collect();

    if !chain.is_empty() {
        message.push_str("\n\nCaused by:");
        for (i, cause) in chain.iter().enumerate() {
            message.push_str(&format!("\n  {}: {}", i + 1, cause));
        }
    }

    ErrorContext::new(ArkitectError::Other {
        message,
    })
}

fn create_error_context(error: ArkitectError) -> ErrorContext {
    let (suggestion, details): (Option<String>, Option<String>) = match &error {
        ArkitectError::ConfigMissing { .. } => (
            Some("Run 'arkitect-ui init' first to create components.json".to_string()),
            Some("The add command reads component aliases from components.json in the project root".to_string()),
        ),
        ArkitectError::ConfigInvalid { file, .. } => (
            Some(format!(
                "Fix {file} so that it contains 'aliases.components' and 'aliases.utils', or re-run 'arkitect-ui init --force'"
            )),
            None,
        ),
        ArkitectError::ConfigAlreadyExists { .. } => {
            (Some("Use --force to overwrite the existing configuration".to_string()), None)
        }
        ArkitectError::NoTargetSpecified => (
            Some("Specify a component name (e.g. 'arkitect-ui add button') or use --all".to_string()),
            None,
        ),
        ArkitectError::RegistryFetchFailed { .. } => (
            Some("Check your internet connection and the REGISTRY_URL environment variable".to_string()),
            Some("Registry requests are not retried; re-run the command once the registry is reachable".to_string()),
        ),
        ArkitectError::ScaffoldToolFailed { .. } => {
            (Some("Make sure Node.js and npx are installed and on your PATH".to_string()), None)
        }
        ArkitectError::InvalidRegistryPath { .. } => (
            Some("Check REGISTRY_URL; registry items may only use project-relative file paths".to_string()),
            Some("Nothing was written for this component".to_string()),
        ),
        ArkitectError::FileWriteFailed { .. } => (
            Some("Check permissions on the target directory and available disk space".to_string()),
            None,
        ),
        ArkitectError::ManifestInvalid { file, .. } => {
            (Some(format!("Fix the JSON syntax in {file}")), None)
        }
        ArkitectError::DependencyInstallFailed { manager, packages, stderr } => {
            let stderr = stderr.trim();
            (
                Some(format!("Install them manually with {manager}: {}", packages.join(" "))),
                (!stderr.is_empty()).then(|| stderr.to_string()),
            )
        }
        ArkitectError::CommandFailed { .. } => {
            (Some("Check that the program is installed and on your PATH".to_string()), None)
        }
        ArkitectError::Io { .. } | ArkitectError::Other { .. } => (None, None),
    };

    ErrorContext {
        error,
        suggestion,
        details,
    }
}
