//! Scenario assembly: bucket classified calls into Given/When/Then.

use super::contextual::{contextual_expectation, GENERIC_OUTCOME};
use super::model::{Scenario, ScenarioMetadata, TestType};
use crate::core::{ClassifiedCall, TestCase};
use std::collections::BTreeSet;
use std::path::Path;

pub const DEFAULT_GIVEN: &str = "el usuario se encuentra en la aplicación";
pub const DEFAULT_WHEN: &str = "el usuario ejecuta la acción correspondiente";
pub const UNNAMED_TEST: &str = "Test sin nombre";

/// Sentence of a bare `toBe` matcher; worth replacing with the title's context
const GENERIC_VALUE_CHECK: &str = "se debe verificar el resultado esperado";

const TEST_SUFFIXES: &[&str] = &[
    ".spec.ts", ".test.ts", ".spec.js", ".test.js", ".spec.tsx", ".test.tsx",
];

const FEATURE_TITLES: &[(&str, &str)] = &[
    ("login", "Funcionalidad de Login"),
    ("register", "Funcionalidad de Registro"),
    ("home", "Página de Inicio"),
    ("validation", "Validación de Elementos"),
    ("rules", "Reglas de Negocio"),
];

fn is_given_call(call: &ClassifiedCall) -> bool {
    call.name().contains("setup") || call.name().contains("navigate")
}

/// Build the scenario for one classified test case
pub fn assemble(test_case: &TestCase, file_path: &Path) -> Scenario {
    let mut generated = false;

    let given_call = test_case.actions.iter().find(|a| is_given_call(a));
    let given = match given_call {
        Some(call) => vec![call.description.clone()],
        None => {
            generated = true;
            vec![DEFAULT_GIVEN.to_string()]
        }
    };

    let mut when: Vec<String> = test_case
        .actions
        .iter()
        .filter(|a| !is_given_call(a))
        .map(|a| a.description.clone())
        .collect();
    if when.is_empty() {
        generated = true;
        when.push(DEFAULT_WHEN.to_string());
    }

    let mut then: Vec<String> = test_case
        .expectations
        .iter()
        .filter(|e| !e.is_suppressed())
        .map(|e| e.description.clone())
        .collect();

    let contextual = contextual_expectation(&test_case.title, &test_case.actions);
    if then.is_empty() {
        generated = true;
        then.push(contextual);
    } else if then.iter().any(|step| step.contains(GENERIC_VALUE_CHECK))
        && contextual != GENERIC_OUTCOME
    {
        generated = true;
        then.insert(0, contextual);
    }

    let title = if test_case.title.trim().is_empty() {
        UNNAMED_TEST.to_string()
    } else {
        test_case.title.clone()
    };

    Scenario {
        test_name: title.clone(),
        description: title.clone(),
        feature: feature_name(test_case.suite.as_deref(), file_path),
        scenario_name: title,
        given,
        when,
        then,
        file_path: file_path.to_string_lossy().into_owned(),
        line_number: test_case.line,
        test_type: TestType::from_path(file_path),
        tags: BTreeSet::new(),
        metadata: ScenarioMetadata {
            generated_from_code: true,
            generated_steps: generated,
            has_explicit_bdd: false,
        },
    }
}

/// Feature title: the enclosing suite title, else derived from the file name
pub fn feature_name(suite: Option<&str>, file_path: &Path) -> String {
    if let Some(title) = suite.map(str::trim).filter(|t| !t.is_empty()) {
        return title.to_string();
    }

    let stem = file_stem(file_path);
    if let Some((_, title)) = FEATURE_TITLES.iter().find(|(key, _)| stem.contains(key)) {
        return (*title).to_string();
    }

    let first = stem.split('-').next().unwrap_or_default();
    let first = if first.is_empty() { "Test" } else { first };
    format!("Funcionalidad de {}", capitalize(first))
}

/// File name without a test suffix, or else without its extension
pub fn file_stem(file_path: &Path) -> String {
    let name = file_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    if let Some(stem) = TEST_SUFFIXES.iter().find_map(|s| name.strip_suffix(s)) {
        return stem.to_string();
    }

    match name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem.to_string(),
        _ => name,
    }
}

pub(crate) fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
