use predicates::prelude::*;

use crate::common::{CliFixture, Framework, MISSING_RUNNER, registry_item};

fn react_project() -> CliFixture {
    let fixture = CliFixture::new().unwrap();
    fixture.project.write_manifest(&["react"], &[]).unwrap();
    fixture.project.write_config("@/components/ui", "@/lib/utils").unwrap();
    fixture
}

/// A failing scaffold run is a warning; the registry files are written instead.
#[test]
fn test_add_writes_files_when_scaffold_fails() {
    let fixture = react_project();
    fixture.publish_button(Framework::React).unwrap();

    let output = fixture.run(&["add", "button"]).unwrap();
    output
        .assert_success()
        .assert_stdout_contains("Installing 1 component(s) for react...")
        .assert_stdout_contains("Warning:")
        .assert_stdout_contains("Applying fallback write.")
        .assert_stdout_contains("All components installed successfully.");

    assert_eq!(
        fixture.project.read_file("src/components/ui/button.tsx").unwrap(),
        "export const Button = () => null;\n"
    );
    assert_eq!(
        fixture.project.read_file("src/lib/utils.ts").unwrap(),
        "export const cn = () => '';\n"
    );
}

#[test]
fn test_add_keeps_existing_files() {
    let fixture = react_project();
    fixture.publish_button(Framework::React).unwrap();
    fixture.project.write_file("src/components/ui/button.tsx", "custom").unwrap();

    fixture.run(&["add", "button"]).unwrap().assert_success();

    assert_eq!(fixture.project.read_file("src/components/ui/button.tsx").unwrap(), "custom");
    assert!(fixture.project.file_exists("src/lib/utils.ts"));
}

#[test]
fn test_add_twice_is_stable() {
    let fixture = react_project();
    fixture.publish_button(Framework::React).unwrap();

    fixture.run(&["add", "button"]).unwrap().assert_success();
    let first = fixture.project.read_file("src/components/ui/button.tsx").unwrap();

    let output = fixture.run(&["add", "button"]).unwrap();
    output.assert_success();
    assert!(!output.stdout.contains("Applying fallback write."));
    assert_eq!(fixture.project.read_file("src/components/ui/button.tsx").unwrap(), first);
}

#[test]
fn test_add_dry_run_changes_nothing() {
    let fixture = react_project();
    fixture.publish_button(Framework::React).unwrap();

    let output = fixture.run(&["add", "button", "--dry-run", "--overwrite"]).unwrap();
    output
        .assert_success()
        .assert_stdout_contains(&format!("[Dry Run] Would execute: {MISSING_RUNNER} shadcn@latest add"))
        .assert_stdout_contains("r/button.json --overwrite")
        .assert_stdout_contains("Dry run complete.");

    assert!(!fixture.project.file_exists("src/components/ui/button.tsx"));
}

#[test]
fn test_add_all_installs_framework_variants() {
    let fixture = CliFixture::new().unwrap();
    fixture.project.write_manifest(&["solid-js"], &[]).unwrap();
    fixture.project.write_config("@/components/ui", "@/lib/utils").unwrap();
    fixture
        .registry
        .write_index(&[
            ("r/button", "registry:ui", "Button"),
            ("s/button", "registry:ui", "Button"),
            ("s/badge", "registry:ui", "Badge"),
            ("s/utils", "registry:lib", "Helpers"),
        ])
        .unwrap();
    fixture.publish_button(Framework::Solid).unwrap();
    fixture
        .registry
        .add_item(Framework::Solid, &registry_item("badge", &[("ui/badge.tsx", "badge")], &[]))
        .unwrap();

    let output = fixture.run(&["add", "--all"]).unwrap();
    output
        .assert_success()
        .assert_stdout_contains("Installing 2 component(s) for solid...");

    assert!(fixture.project.file_exists("src/components/ui/button.tsx"));
    assert_eq!(fixture.project.read_file("src/components/ui/badge.tsx").unwrap(), "badge");
}

#[test]
fn test_add_requires_a_target() {
    let fixture = react_project();

    let output = fixture.run(&["add"]).unwrap();
    assert!(!output.success);
    assert_eq!(output.code, Some(1));
    output.assert_stderr_contains("No component specified");
}

#[test]
fn test_add_requires_config() {
    let fixture = CliFixture::new().unwrap();
    fixture.publish_button(Framework::React).unwrap();

    let output = fixture.run(&["add", "button"]).unwrap();
    assert!(!output.success);
    output.assert_stderr_contains("components.json not found");
    assert!(!fixture.project.file_exists("src/components/ui/button.tsx"));
}

#[test]
fn test_add_unknown_component_fails() {
    let fixture = react_project();

    let output = fixture.run(&["add", "does-not-exist"]).unwrap();
    assert!(!output.success);
    output.assert_stderr_contains("Failed to fetch");
}

#[test]
fn test_add_help() {
    let mut cmd = assert_cmd::Command::cargo_bin("arkitect-ui").unwrap();
    cmd.arg("add")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--all"))
        .stdout(predicate::str::contains("--overwrite"))
        .stdout(predicate::str::contains("--framework"));
}
