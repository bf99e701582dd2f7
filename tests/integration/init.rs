use arkitect_cli::config::ProjectConfig;

use crate::common::{CliFixture, Framework};

#[test]
fn test_init_detects_framework_from_manifest() {
    let fixture = CliFixture::new().unwrap();
    fixture.project.write_manifest(&["solid-js"], &[]).unwrap();

    fixture
        .run(&["init"])
        .unwrap()
        .assert_success()
        .assert_stdout_contains("components.json created successfully.");

    let config = ProjectConfig::load(fixture.project_path()).unwrap();
    assert_eq!(config.framework(), Some(Framework::Solid));
    assert_eq!(config.aliases.components, "@/components/ui");
    assert_eq!(config.aliases.utils, "@/lib/utils");
}

#[test]
fn test_init_refuses_to_replace_config() {
    let fixture = CliFixture::new().unwrap();
    fixture.run(&["init", "--framework", "react"]).unwrap().assert_success();

    let output = fixture.run(&["init"]).unwrap();
    assert!(!output.success);
    output.assert_stderr_contains("already exists");

    fixture.run(&["init", "--force", "--framework", "solid"]).unwrap().assert_success();
    let config = ProjectConfig::load(fixture.project_path()).unwrap();
    assert_eq!(config.framework(), Some(Framework::Solid));
}

#[test]
fn test_init_then_add_uses_written_aliases() {
    let fixture = CliFixture::new().unwrap();
    fixture
        .run(&["init", "--framework", "react", "--components-dir", "src/ui"])
        .unwrap()
        .assert_success();
    fixture.publish_button(Framework::React).unwrap();

    fixture.run(&["add", "button"]).unwrap().assert_success();

    assert!(fixture.project.file_exists("src/ui/button.tsx"));
    assert!(fixture.project.file_exists("src/lib/utils.ts"));
}
