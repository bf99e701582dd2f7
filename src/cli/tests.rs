//! Tests for argument parsing and command execution paths.

use super::*;
use crate::core::{ArkitectError, Framework};
use crate::detect::PackageManager;
use crate::test_utils::{RecordingRunner, TestProject, TestRegistry, registry_item};
use clap::CommandFactory;

const LOCAL_REGISTRY: &str = "./does-not-matter";

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("arkitect-ui").chain(args.iter().copied())).unwrap()
}

fn quiet() -> CliConfig {
    CliConfig {
        quiet: true,
        no_progress: true,
        ..CliConfig::default()
    }
}

#[test]
fn test_cli_definition_is_valid() {
    Cli::command().debug_assert();
}

#[test]
fn test_global_flags_build_config() {
    assert_eq!(parse(&["list"]).build_config_with(false), CliConfig::default());

    let config = parse(&["--verbose", "list"]).build_config_with(false);
    assert_eq!(config.log_level, "debug");

    let config = parse(&["add", "button", "-q", "--no-progress"]).build_config_with(false);
    assert_eq!(config.log_level, "error");
    assert!(config.quiet);
    assert!(!config.progress());
}

#[test]
fn test_no_progress_environment_folds_into_config() {
    let config = parse(&["list"]).build_config_with(true);
    assert!(config.no_progress);
    assert!(!config.progress());
    assert_eq!(config.log_level, "warn");
    assert!(!config.quiet);
}

#[test]
fn test_verbose_and_quiet_conflict() {
    assert!(Cli::try_parse_from(["arkitect-ui", "-v", "-q", "list"]).is_err());
}

#[test]
fn test_add_arguments() {
    let cli = parse(&[
        "add",
        "--all",
        "-o",
        "--dry-run",
        "--framework",
        "solid",
        "--cwd",
        "app",
        "--registry-url",
        LOCAL_REGISTRY,
    ]);
    let Commands::Add(cmd) = cli.command else {
        panic!("expected add");
    };
    assert!(cmd.component.is_none());
    assert!(cmd.all && cmd.overwrite && cmd.dry_run);
    assert_eq!(cmd.framework, Some(Framework::Solid));
    assert_eq!(cmd.project.cwd.as_deref(), Some(std::path::Path::new("app")));
    assert_eq!(cmd.registry.registry_url, LOCAL_REGISTRY);
}

#[test]
fn test_add_rejects_unknown_framework() {
    assert!(Cli::try_parse_from(["arkitect-ui", "add", "button", "--framework", "vue"]).is_err());
}

#[test]
fn test_init_arguments() {
    let cli = parse(&[
        "init",
        "--framework",
        "react",
        "--src-dir",
        "app",
        "--utils-path",
        "app/lib/cn.ts",
        "--install-deps",
        "--force",
    ]);
    let Commands::Init(cmd) = cli.command else {
        panic!("expected init");
    };
    assert_eq!(cmd.src_dir.as_deref(), Some("app"));
    assert_eq!(cmd.utils_path.as_deref(), Some("app/lib/cn.ts"));
    assert!(cmd.install_deps && cmd.force);
}

#[tokio::test]
async fn test_add_command_installs_with_runner() {
    let project = TestProject::new().unwrap();
    project.write_config("@/components/ui", "@/lib/utils").unwrap();
    let registry = TestRegistry::new().unwrap();
    registry
        .add_item(Framework::Solid, &registry_item("badge", &[("ui/badge.tsx", "badge")], &[]))
        .unwrap();
    let runner = RecordingRunner::new().unavailable("npx");

    let cwd = project.path().display().to_string();
    let url = registry.path().display().to_string();
    let cli = parse(&["add", "badge", "--framework", "solid", "--cwd", &cwd, "--registry-url", &url]);
    let Commands::Add(cmd) = cli.command else {
        panic!("expected add");
    };

    let report = cmd.execute_with_runner(&quiet(), &runner).await.unwrap();
    assert_eq!(report.components.len(), 1);
    assert_eq!(project.read_file("src/components/ui/badge.tsx").unwrap(), "badge");
}

#[tokio::test]
async fn test_add_command_without_target() {
    let project = TestProject::new().unwrap();
    project.write_config("@/components/ui", "@/lib/utils").unwrap();
    let runner = RecordingRunner::new();

    let cwd = project.path().display().to_string();
    let cli = parse(&["add", "--cwd", &cwd, "--registry-url", LOCAL_REGISTRY]);
    let Commands::Add(cmd) = cli.command else {
        panic!("expected add");
    };

    let err = cmd.execute_with_runner(&quiet(), &runner).await.unwrap_err();
    assert!(matches!(err.downcast_ref::<ArkitectError>(), Some(ArkitectError::NoTargetSpecified)));
}

#[tokio::test]
async fn test_init_writes_config_and_refuses_overwrite() {
    let project = TestProject::new().unwrap();
    project.write_manifest(&["solid-js"], &[]).unwrap();
    let runner = RecordingRunner::new();
    let cwd = project.path().display().to_string();

    let Commands::Init(cmd) = parse(&["init", "--cwd", &cwd]).command else {
        panic!("expected init");
    };
    let reconciliation = cmd.execute_with_runner(&quiet(), &runner).await.unwrap();
    assert!(reconciliation.is_noop());
    assert!(runner.invocations().is_empty());

    let config = crate::config::ProjectConfig::load(project.path()).unwrap();
    assert_eq!(config.framework(), Some(Framework::Solid));
    assert_eq!(config.aliases.utils, "@/lib/utils");

    let Commands::Init(cmd) = parse(&["init", "--cwd", &cwd]).command else {
        panic!("expected init");
    };
    let err = cmd.execute_with_runner(&quiet(), &runner).await.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ArkitectError>(),
        Some(ArkitectError::ConfigAlreadyExists { .. })
    ));

    let Commands::Init(cmd) = parse(&["init", "--cwd", &cwd, "--force", "--framework", "react"]).command
    else {
        panic!("expected init");
    };
    cmd.execute_with_runner(&quiet(), &runner).await.unwrap();
    let config = crate::config::ProjectConfig::load(project.path()).unwrap();
    assert_eq!(config.framework(), Some(Framework::React));
}

#[tokio::test]
async fn test_init_installs_only_missing_base_dependencies() {
    let project = TestProject::new().unwrap();
    project.write_manifest(&["react", "clsx"], &["tailwind-merge"]).unwrap();
    project.touch("bun.lockb").unwrap();
    let runner = RecordingRunner::new();
    let cwd = project.path().display().to_string();

    let Commands::Init(cmd) = parse(&["init", "--cwd", &cwd, "--install-deps"]).command else {
        panic!("expected init");
    };
    let reconciliation = cmd.execute_with_runner(&quiet(), &runner).await.unwrap();

    assert_eq!(reconciliation.manager, Some(PackageManager::Bun));
    assert_eq!(reconciliation.installed, vec!["class-variance-authority", "@ark-ui/react"]);
    assert_eq!(
        runner.invocations()[0].display_command(),
        "bun add class-variance-authority @ark-ui/react"
    );
}
