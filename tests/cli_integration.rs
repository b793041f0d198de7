//! Command-line behavior of the `bddgen` binary.

use assert_cmd::Command;
use std::fs;
use tempfile::TempDir;

fn bddgen() -> Command {
    Command::new(env!("CARGO_BIN_EXE_bddgen"))
}

fn fixture() -> TempDir {
    let root = TempDir::new().unwrap();
    let tests = root.path().join("tests/e2e");
    fs::create_dir_all(&tests).unwrap();
    fs::write(
        tests.join("checkout.spec.ts"),
        "test('Comprar un curso', async () => { await homePage.goto(); await page.click('#comprar'); });",
    )
    .unwrap();
    root
}

#[test]
fn test_generate_writes_documents() {
    let root = fixture();

    let output = bddgen()
        .current_dir(root.path())
        .args(["generate", "tests", "docs", "--format", "both", "--no-timestamp"])
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("e2e-scenarios.feature"));
    assert!(stdout.contains("all-scenarios.json"));

    let feature = fs::read_to_string(root.path().join("docs/e2e-scenarios.feature")).unwrap();
    assert!(feature.contains("    And el usuario hace clic en #comprar"));
    assert!(!feature.contains("# Generado"));
}

#[test]
fn test_generate_missing_directory_fails() {
    let root = TempDir::new().unwrap();

    bddgen()
        .current_dir(root.path())
        .args(["generate", "does-not-exist"])
        .assert()
        .failure();
}

#[test]
fn test_extract_prints_gherkin() {
    let root = fixture();

    let output = bddgen()
        .current_dir(root.path())
        .args(["extract", "tests/e2e/checkout.spec.ts"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Feature: Funcionalidad de Checkout"));
    assert!(stdout.contains("  Scenario: Comprar un curso"));
    assert!(stdout.contains("    When el usuario navega a la página de inicio"));
}

#[test]
fn test_init_refuses_to_overwrite() {
    let root = TempDir::new().unwrap();

    bddgen().current_dir(root.path()).arg("init").assert().success();
    assert!(root.path().join(".bddgen.toml").exists());

    bddgen().current_dir(root.path()).arg("init").assert().failure();
    bddgen()
        .current_dir(root.path())
        .args(["init", "--force"])
        .assert()
        .success();
}

#[test]
fn test_invalid_explicit_config_fails() {
    let root = fixture();
    fs::write(root.path().join("bad.toml"), "[documentation]\noutput_format = 3\n").unwrap();

    bddgen()
        .current_dir(root.path())
        .args(["generate", "--config", "bad.toml"])
        .assert()
        .failure();
}
