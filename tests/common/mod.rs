//! Common fixtures for Arkitect UI integration tests
//!
//! Every test gets a project directory and a local registry directory. The binary
//! is pointed at the local registry through `REGISTRY_URL`, and the scaffolding
//! runner is replaced by a program that does not exist so that installs always
//! exercise the registry write path without touching the network.

// Not every helper is used by every test module
#![allow(dead_code)]

use anyhow::{Context, Result};
use std::path::Path;
use std::process::Command;

pub use arkitect_cli::core::Framework;
pub use arkitect_cli::test_utils::{TestProject, TestRegistry, registry_item};

/// Runner name guaranteed not to resolve on `PATH`.
pub const MISSING_RUNNER: &str = "arkitect-test-missing-runner";

/// A project plus the registry it installs from.
pub struct CliFixture {
    pub project: TestProject,
    pub registry: TestRegistry,
}

impl CliFixture {
    pub fn new() -> Result<Self> {
        Ok(Self {
            project: TestProject::new()?,
            registry: TestRegistry::new()?,
        })
    }

    pub fn project_path(&self) -> &Path {
        self.project.path()
    }

    /// Publish a `button` component with one UI file and one lib file for `framework`.
    pub fn publish_button(&self, framework: Framework) -> Result<()> {
        self.registry.add_item(
            framework,
            &registry_item(
                "button",
                &[
                    ("ui/button.tsx", "export const Button = () => null;\n"),
                    ("lib/utils.ts", "export const cn = () => '';\n"),
                ],
                &[],
            ),
        )
    }

    /// Run the binary in the project directory.
    pub fn run(&self, args: &[&str]) -> Result<CommandOutput> {
        let output = Command::new(env!("CARGO_BIN_EXE_arkitect-ui"))
            .args(args)
            .current_dir(self.project.path())
            .env("REGISTRY_URL", self.registry.path())
            .env("ARKITECT_SCAFFOLD_BIN", MISSING_RUNNER)
            .env("ARKITECT_NO_PROGRESS", "1")
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .output()
            .context("Failed to run arkitect-ui")?;

        Ok(CommandOutput {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            success: output.status.success(),
            code: output.status.code(),
        })
    }
}

/// Command output helper
#[derive(Debug)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub success: bool,
    pub code: Option<i32>,
}

impl CommandOutput {
    /// Assert the command succeeded, printing both streams otherwise.
    pub fn assert_success(&self) -> &Self {
        assert!(
            self.success,
            "command failed with {:?}\nstdout:\n{}\nstderr:\n{}",
            self.code, self.stdout, self.stderr
        );
        self
    }

    pub fn assert_stdout_contains(&self, needle: &str) -> &Self {
        assert!(self.stdout.contains(needle), "expected {needle:?} in stdout:\n{}", self.stdout);
        self
    }

    pub fn assert_stderr_contains(&self, needle: &str) -> &Self {
        assert!(self.stderr.contains(needle), "expected {needle:?} in stderr:\n{}", self.stderr);
        self
    }
}
