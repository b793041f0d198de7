//! Batch generation over a temporary test tree.

use bddgen::config::{BddgenConfig, DocumentationConfig, OutputFormat};
use bddgen::DocumentationGenerator;
use indoc::indoc;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const LOGIN_RULES: &str = indoc! {r#"
    test.describe('Reglas de login', () => {
      test('Verificar que el campo de celular tenga el foco', async ({ page }) => {
        const { loginPage } = await CommonTestSteps.setupRulesTest(page);
        await loginPage.expectCredentialsPhoneFocused();
      });
    });
"#};

const HOME_VALIDATION: &str = indoc! {r#"
    test('Validar la página de inicio', async ({ page }) => {
      await homePage.goto();
      await homePage.verifyMenu();
      await homePage.verifyFooter();
    });
"#};

fn write(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

fn project() -> TempDir {
    let root = TempDir::new().unwrap();
    write(
        root.path(),
        "package.json",
        r#"{ "name": "portal-qa", "version": "0.4.0" }"#,
    );
    write(root.path(), "tests/rules/login-rules.spec.ts", LOGIN_RULES);
    write(root.path(), "tests/validation/home.spec.ts", HOME_VALIDATION);
    write(root.path(), "tests/helpers/common-test-steps.ts", "export class CommonTestSteps {}");
    write(
        root.path(),
        "tests/node_modules/pkg/ignored.spec.ts",
        "test('nunca', async () => {});",
    );
    root
}

#[test]
fn test_generates_gherkin_documents() {
    let root = project();
    let out = root.path().join("docs/test-scenarios");

    let report = DocumentationGenerator::new(BddgenConfig::default())
        .generate(&root.path().join("tests"), &out)
        .unwrap();

    assert_eq!(report.file_stats.total_files, 2);
    assert_eq!(report.stats.total_scenarios, 2);
    assert!(report.failures.is_empty());
    assert_eq!(report.files_written.len(), 3);

    let all = fs::read_to_string(out.join("all-scenarios.feature")).unwrap();
    assert!(all.contains("# Proyecto: portal-qa v0.4.0"));
    assert!(all.contains("Feature: Reglas de login"));
    assert!(all.contains("Feature: Página de Inicio"));
    assert!(all.contains("    Then el campo número de celular debe tener el foco"));
    assert!(all.contains("    And el usuario verifica el pie de página"));
    assert!(!all.contains("nunca"));

    let rules = fs::read_to_string(out.join("rules-scenarios.feature")).unwrap();
    assert!(!rules.contains("Página de Inicio"));
    assert!(out.join("validation-scenarios.feature").exists());
    assert!(!out.join("e2e-scenarios.feature").exists());
}

#[test]
fn test_generates_json_documents() {
    let root = project();
    let out = root.path().join("out");

    let mut config = BddgenConfig::default();
    config.documentation = DocumentationConfig {
        output_format: OutputFormat::Json,
        ..DocumentationConfig::default()
    };
    DocumentationGenerator::new(config)
        .generate(&root.path().join("tests"), &out)
        .unwrap();

    let text = fs::read_to_string(out.join("validation-scenarios.json")).unwrap();
    let json: Value = serde_json::from_str(&text).unwrap();

    assert_eq!(json["title"], "Tests de Validación");
    assert_eq!(json["project"]["name"], "portal-qa");
    assert_eq!(json["stats"]["totalScenarios"], 1);
    assert_eq!(json["stats"]["byType"]["validation"], 1);
    let scenario = &json["scenarios"][0];
    assert_eq!(scenario["testType"], "validation");
    assert_eq!(scenario["given"][0], "el usuario se encuentra en la aplicación");
    assert_eq!(scenario["when"].as_array().unwrap().len(), 3);
    assert_eq!(scenario["then"][0], "las validaciones deben ejecutarse correctamente");
    assert_eq!(scenario["metadata"]["generatedSteps"], true);
}

#[test]
fn test_ignore_patterns_leave_files_out() {
    let root = project();
    let mut config = BddgenConfig::default();
    config.extraction.ignore_patterns = vec!["rules/**".to_string()];

    let report = DocumentationGenerator::new(config)
        .generate(&root.path().join("tests"), &root.path().join("docs"))
        .unwrap();

    assert_eq!(report.stats.total_scenarios, 1);
    assert!(!root.path().join("docs/rules-scenarios.feature").exists());
}
