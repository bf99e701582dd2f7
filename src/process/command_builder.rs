//! Builder for external tool invocations
//!
//! [`ToolCommand`] describes one invocation of an external program: which program,
//! which arguments, which working directory, and how long to wait. Building a
//! command has no side effects, so the installer can construct commands, show them
//! in dry-run output, and hand them to a [`CommandRunner`](super::CommandRunner)
//! that may or may not actually launch them.
//!
//! # Examples
//!
//! ```rust,no_run
//! use arkitect_cli::process::ToolCommand;
//! use std::time::Duration;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let output = ToolCommand::new("node")
//!     .arg("--version")
//!     .current_dir("/path/to/project")
//!     .timeout(Duration::from_secs(10))
//!     .with_context("check node version")
//!     .execute()
//!     .await?;
//!
//! if output.success() {
//!     println!("{}", output.stdout.trim());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Program Resolution
//!
//! The program name is resolved through the `PATH` with the `which` crate before
//! spawning. This also picks up `.cmd` shims on Windows, where `npx` and `pnpm`
//! are not `.exe` files.

use anyhow::Result;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tokio::time::timeout;

use crate::core::ArkitectError;
use crate::detect::PackageManager;

/// Timeout applied to commands that do not set one.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(600);

/// Package spec of the upstream scaffolding tool.
pub const SCAFFOLD_PACKAGE: &str = "shadcn@latest";

/// Description of one external program invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCommand {
    /// Program name or path (e.g. `npx`, `pnpm`)
    program: String,

    /// Arguments passed to the program
    args: Vec<String>,

    /// Working directory (defaults to the current process directory)
    current_dir: Option<PathBuf>,

    /// Maximum time to wait for the program
    timeout_duration: Duration,

    /// Label used in log lines
    context: Option<String>,
}

impl ToolCommand {
    /// Create a command for `program` with the default timeout.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            current_dir: None,
            timeout_duration: DEFAULT_TIMEOUT,
            context: None,
        }
    }

    /// Invocation of the scaffolding tool for one registry item.
    ///
    /// `runner` is the package runner executable, normally `npx`.
    pub fn scaffold_add(runner: &str, item_url: &str, overwrite: bool) -> Self {
        let mut cmd = Self::new(runner).args([SCAFFOLD_PACKAGE, "add", item_url]);
        if overwrite {
            cmd = cmd.arg("--overwrite");
        }
        cmd.with_context("scaffold")
    }

    /// Invocation of `manager` that adds `packages` to the project manifest.
    pub fn package_add(manager: PackageManager, packages: &[String]) -> Self {
        Self::new(manager.command()).args(manager.add_args(packages)).with_context("dependencies")
    }

    /// Set the working directory.
    pub fn current_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.current_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Append one argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Set the timeout.
    pub const fn timeout(mut self, duration: Duration) -> Self {
        self.timeout_duration = duration;
        self
    }

    /// Label the command in log output.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn arguments(&self) -> &[String] {
        &self.args
    }

    pub fn working_dir(&self) -> Option<&Path> {
        self.current_dir.as_deref()
    }

    /// The command line as a user would type it.
    #[must_use]
    pub fn display_command(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Run the program and capture its output.
    ///
    /// A non-zero exit status is not an error here; callers inspect
    /// [`CommandOutput::success`]. Errors are returned only when the program
    /// cannot be found or started, or does not finish within the timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ArkitectError::CommandFailed`] in those cases.
    pub async fn execute(&self) -> Result<CommandOutput> {
        let start = std::time::Instant::now();
        let command_line = self.display_command();
        let label = self.context.as_deref().unwrap_or("command");

        let failed = |reason: String| ArkitectError::CommandFailed {
            command: command_line.clone(),
            reason,
        };

        let resolved = which::which(&self.program)
            .map_err(|e| failed(format!("{} could not be located: {e}", self.program)))?;

        tracing::debug!(target: "process", "({label}) Executing: {command_line}");

        let mut cmd = Command::new(&resolved);
        cmd.args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        if let Some(dir) = &self.current_dir {
            cmd.current_dir(dir);
        }

        let duration = self.timeout_duration;
        let output = match timeout(duration, cmd.output()).await {
            Ok(result) => result.map_err(|e| failed(e.to_string()))?,
            Err(_) => {
                tracing::warn!(
                    target: "process",
                    "Command timed out after {} seconds: {command_line}",
                    duration.as_secs()
                );
                return Err(failed(format!("timed out after {} seconds", duration.as_secs())).into());
            }
        };

        let result = CommandOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        };

        if !result.stdout.trim().is_empty() {
            tracing::debug!(target: "process", "({label}) {}", result.stdout.trim());
        }
        if !result.stderr.trim().is_empty() {
            tracing::debug!(target: "process", "({label}) {}", result.stderr.trim());
        }
        tracing::debug!(
            target: "process",
            "({label}) exited with {:?} after {}ms",
            result.code,
            start.elapsed().as_millis()
        );

        Ok(result)
    }
}

/// Captured result of a finished program.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, `None` when terminated by a signal
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    /// Output of a run that exited with status 0.
    #[must_use]
    pub fn succeeded() -> Self {
        Self {
            code: Some(0),
            ..Self::default()
        }
    }

    /// Output of a run that exited with `code` and wrote `stderr`.
    pub fn failed(code: i32, stderr: impl Into<String>) -> Self {
        Self {
            code: Some(code),
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }

    #[must_use]
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// Best available description of a failure: stderr, else stdout, else the exit code.
    #[must_use]
    pub fn failure_reason(&self) -> String {
        if !self.stderr.trim().is_empty() {
            self.stderr.trim().to_string()
        } else if !self.stdout.trim().is_empty() {
            self.stdout.trim().to_string()
        } else {
            match self.code {
                Some(code) => format!("exited with status {code}"),
                None => "terminated by signal".to_string(),
            }
        }
    }
}
