use crate::common::{CliFixture, Framework};

#[test]
fn test_list_shows_ui_components() {
    let fixture = CliFixture::new().unwrap();
    fixture
        .registry
        .write_index(&[
            ("r/button", "registry:ui", "A clickable button"),
            ("r/utils", "registry:lib", "Helpers"),
            ("s/avatar", "registry:ui", ""),
        ])
        .unwrap();

    let output = fixture.run(&["list"]).unwrap();
    output
        .assert_success()
        .assert_stdout_contains("Available components:")
        .assert_stdout_contains("- r/button: A clickable button")
        .assert_stdout_contains("- s/avatar");
    assert!(!output.stdout.contains("r/utils"));
}

#[test]
fn test_list_notes_configured_framework() {
    let fixture = CliFixture::new().unwrap();
    fixture
        .project
        .write_config_for("@/components/ui", "@/lib/utils", Framework::Solid)
        .unwrap();
    fixture.registry.write_index(&[("s/button", "registry:ui", "Button")]).unwrap();

    fixture
        .run(&["list"])
        .unwrap()
        .assert_success()
        .assert_stdout_contains("Project framework: solid");
}

#[test]
fn test_list_empty_registry() {
    let fixture = CliFixture::new().unwrap();
    fixture.registry.write_index(&[]).unwrap();

    fixture
        .run(&["list"])
        .unwrap()
        .assert_success()
        .assert_stdout_contains("No components found in the registry.");
}

#[test]
fn test_list_missing_index_fails() {
    let fixture = CliFixture::new().unwrap();

    let output = fixture.run(&["list"]).unwrap();
    assert!(!output.success);
    output.assert_stderr_contains("Failed to fetch");
}
