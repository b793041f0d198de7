//! Comment-driven scenario extraction
//!
//! Line-based fallback for files where code analysis finds no test declaration.
//! Steps come from JSDoc lines (`* Dado que ...`) or line comments
//! (`// Cuando ...`) that follow a `test("...")` line; tests without any step
//! comment get minimum steps chosen by test type.

use super::assembler::{capitalize, file_stem, UNNAMED_TEST};
use super::model::{Scenario, ScenarioMetadata, TestType};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;
use std::path::Path;

static TEST_DECLARATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^\s*test\s*\(\s*["'`]"#).expect("valid regex"));
static TEST_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"test\s*\(\s*["'`]([^"'`]+)["'`]"#).expect("valid regex"));
static DESCRIBE_TITLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"test\.describe(?:\.parallel)?\(["'`]([^"'`]+)["'`]"#).expect("valid regex")
});
static STEP_KEYWORD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(Dado que|Given|Cuando|When|Entonces|Then)\s*").expect("valid regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bucket {
    Given,
    When,
    Then,
}

const BUCKET_KEYWORDS: &[(Bucket, &[&str])] = &[
    (Bucket::Given, &["Dado que", "Given"]),
    (Bucket::When, &["Cuando", "When"]),
    (Bucket::Then, &["Entonces", "Then"]),
];

#[derive(Debug, Default)]
struct Steps {
    given: Vec<String>,
    when: Vec<String>,
    then: Vec<String>,
}

impl Steps {
    fn is_empty(&self) -> bool {
        self.given.is_empty() && self.when.is_empty() && self.then.is_empty()
    }

    fn push(&mut self, bucket: Bucket, step: String) {
        match bucket {
            Bucket::Given => self.given.push(step),
            Bucket::When => self.when.push(step),
            Bucket::Then => self.then.push(step),
        }
    }
}

struct PendingTest {
    name: String,
    line: usize,
    steps: Steps,
}

/// Extract scenarios from step comments. Never fails.
pub fn extract_from_comments(file_path: &Path, source: &str) -> Vec<Scenario> {
    let test_type = TestType::from_path(file_path);
    let feature = comment_feature(source, file_path);

    let mut scenarios = Vec::new();
    let mut current: Option<PendingTest> = None;

    for (index, raw) in source.lines().enumerate() {
        let line = raw.trim();

        if TEST_DECLARATION.is_match(line) {
            if let Some(done) = current.take() {
                scenarios.push(build(done, &feature, file_path, test_type));
            }
            current = Some(PendingTest {
                name: test_name(line),
                line: index + 1,
                steps: Steps::default(),
            });
        }

        if let Some(test) = current.as_mut() {
            if let Some((bucket, step)) = parse_step(line) {
                test.steps.push(bucket, step);
            }
        }
    }

    if let Some(done) = current {
        scenarios.push(build(done, &feature, file_path, test_type));
    }

    tracing::debug!(
        file = %file_path.display(),
        scenarios = scenarios.len(),
        "extracted scenarios from comments"
    );

    scenarios
}

fn test_name(line: &str) -> String {
    TEST_NAME
        .captures(line)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| UNNAMED_TEST.to_string())
}

/// `test.describe("...")` title, else the file stem's hyphenated words title-cased
fn comment_feature(source: &str, file_path: &Path) -> String {
    if let Some(title) = DESCRIBE_TITLE.captures(source).and_then(|c| c.get(1)) {
        return title.as_str().to_string();
    }

    file_stem(file_path)
        .split('-')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn parse_step(line: &str) -> Option<(Bucket, String)> {
    let is_line_comment = line.starts_with("//");

    let bucket = BUCKET_KEYWORDS.iter().find_map(|(bucket, keywords)| {
        let found = keywords.iter().any(|keyword| {
            if is_line_comment {
                line.contains(keyword)
            } else {
                line.contains(&format!("* {keyword}"))
            }
        });
        found.then_some(*bucket)
    })?;

    let body = if is_line_comment {
        line.trim_start_matches('/')
    } else {
        line.trim_start_matches(|c: char| c == '*' || c.is_whitespace())
    };
    let step = STEP_KEYWORD.replace(body.trim(), "").trim().to_string();

    (!step.is_empty()).then_some((bucket, step))
}

fn build(test: PendingTest, feature: &str, file_path: &Path, test_type: TestType) -> Scenario {
    let explicit = !test.steps.is_empty();
    let steps = if explicit {
        test.steps
    } else {
        minimum_steps(&test.name, test_type)
    };

    Scenario {
        test_name: test.name.clone(),
        description: test.name.clone(),
        feature: feature.to_string(),
        scenario_name: test.name,
        given: steps.given,
        when: steps.when,
        then: steps.then,
        file_path: file_path.to_string_lossy().into_owned(),
        line_number: test.line,
        test_type,
        tags: BTreeSet::new(),
        metadata: ScenarioMetadata {
            generated_from_code: false,
            generated_steps: !explicit,
            has_explicit_bdd: explicit,
        },
    }
}

fn minimum_steps(name: &str, test_type: TestType) -> Steps {
    let name = name.to_lowercase();
    let (given, when, then) = match test_type {
        TestType::Validation => (
            "el usuario está en la aplicación",
            "navega a la página correspondiente",
            "debe ver todos los elementos de la interfaz correctamente",
        ),
        TestType::Rules if name.contains("login") || name.contains("sesión") => (
            "el usuario está en la página de login",
            "interactúa con los elementos de login",
            "debe cumplirse la regla de negocio especificada",
        ),
        TestType::Rules if name.contains("register") || name.contains("registro") => (
            "el usuario está en la página de registro",
            "interactúa con los elementos de registro",
            "debe cumplirse la regla de negocio especificada",
        ),
        TestType::Rules => (
            "el usuario está en la aplicación",
            "ejecuta la acción correspondiente",
            "debe cumplirse la regla de negocio especificada",
        ),
        TestType::E2e => (
            "el usuario inicia el flujo end-to-end",
            "ejecuta las acciones del flujo completo",
            "debe completar el flujo exitosamente",
        ),
    };

    Steps {
        given: vec![given.to_string()],
        when: vec![when.to_string()],
        then: vec![then.to_string()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_jsdoc_steps() {
        let source = indoc! {r#"
            test.describe("Reglas de login", () => {
              test("Validar celular", async () => {
                /**
                 * Dado que el usuario está en la página de login
                 * Cuando ingresa letras en el campo
                 * Entonces el campo permanece vacío
                 * Y nada más
                 */
              });
            });
        "#};

        let scenarios = extract_from_comments(Path::new("tests/rules/login-rules.spec.ts"), source);

        assert_eq!(scenarios.len(), 1);
        let s = &scenarios[0];
        assert_eq!(s.feature, "Reglas de login");
        assert_eq!(s.scenario_name, "Validar celular");
        assert_eq!(s.line_number, 2);
        assert_eq!(s.given, vec!["el usuario está en la página de login"]);
        assert_eq!(s.when, vec!["ingresa letras en el campo"]);
        assert_eq!(s.then, vec!["el campo permanece vacío"]);
        assert!(s.has_explicit_bdd());
        assert!(!s.has_generated_steps());
        assert!(!s.metadata.generated_from_code);
    }

    #[test]
    fn test_line_comment_steps_may_be_incomplete() {
        let source = indoc! {r#"
            test('Solo cuando', async () => {
              // When the user clicks submit
            });
        "#};
        let scenarios = extract_from_comments(Path::new("tests/e2e/flow.spec.ts"), source);
        assert_eq!(scenarios[0].when, vec!["the user clicks submit"]);
        assert!(scenarios[0].given.is_empty());
        assert!(!scenarios[0].is_complete());
    }

    #[test]
    fn test_minimum_steps_by_type() {
        let source = "test('Inicio de sesión bloqueado', async () => {});\ntest('Otro', async () => {});";
        let scenarios = extract_from_comments(Path::new("tests/rules/account-rules.spec.ts"), source);

        assert_eq!(scenarios.len(), 2);
        assert_eq!(scenarios[0].given, vec!["el usuario está en la página de login"]);
        assert_eq!(scenarios[1].given, vec!["el usuario está en la aplicación"]);
        assert!(scenarios.iter().all(|s| s.has_generated_steps() && s.is_complete()));
        assert_eq!(scenarios[0].feature, "Account Rules");
    }

    #[test]
    fn test_lines_before_first_test_are_ignored() {
        let source = "// Given nothing\nconst x = 1;";
        assert!(extract_from_comments(Path::new("tests/x.spec.ts"), source).is_empty());
    }
}
