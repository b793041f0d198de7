//! Scenario record and its derived views.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::path::Path;

/// Test category inferred from the file's location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestType {
    Validation,
    Rules,
    E2e,
}

impl TestType {
    pub const ALL: [TestType; 3] = [TestType::Validation, TestType::Rules, TestType::E2e];

    pub fn as_str(&self) -> &'static str {
        match self {
            TestType::Validation => "validation",
            TestType::Rules => "rules",
            TestType::E2e => "e2e",
        }
    }

    /// Directory segments win over plain substrings; first match in
    /// `validation`, `rules`, `e2e` order, defaulting to `validation`.
    pub fn from_path(path: &Path) -> Self {
        let segments: Vec<String> = path
            .parent()
            .into_iter()
            .flat_map(|p| p.components())
            .map(|c| c.as_os_str().to_string_lossy().to_lowercase())
            .collect();

        if let Some(found) = Self::ALL
            .into_iter()
            .find(|t| segments.iter().any(|s| s == t.as_str()))
        {
            return found;
        }

        let whole = path.to_string_lossy().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|t| whole.contains(t.as_str()))
            .unwrap_or(TestType::Validation)
    }
}

impl fmt::Display for TestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioMetadata {
    pub generated_from_code: bool,
    /// At least one step is a fallback sentence rather than code-derived
    pub generated_steps: bool,
    #[serde(rename = "hasExplicitBDD")]
    pub has_explicit_bdd: bool,
}

/// One BDD scenario per test declaration. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    pub test_name: String,
    pub description: String,
    pub feature: String,
    pub scenario_name: String,
    pub given: Vec<String>,
    pub when: Vec<String>,
    pub then: Vec<String>,
    pub file_path: String,
    pub line_number: usize,
    pub test_type: TestType,
    pub tags: BTreeSet<String>,
    pub metadata: ScenarioMetadata,
}

/// Compact projection consumed by report tables
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioSummary {
    pub test_name: String,
    pub scenario_name: String,
    pub step_count: usize,
    pub test_type: TestType,
    pub file_path: String,
}

impl Scenario {
    /// Render as Gherkin text. Lines are joined with `\n`, no trailing newline.
    pub fn to_gherkin(&self) -> String {
        let mut lines = Vec::new();

        if !self.feature.trim().is_empty() {
            lines.push(format!("Feature: {}", self.feature));
            lines.push(String::new());
        }

        lines.push(format!("  Scenario: {}", self.scenario_name));
        push_steps(&mut lines, "Given", &self.given);
        push_steps(&mut lines, "When", &self.when);
        push_steps(&mut lines, "Then", &self.then);

        lines.join("\n")
    }

    /// Gherkin for the scenario body only, used when several scenarios share a feature header
    pub fn scenario_block(&self) -> String {
        let mut lines = vec![format!("  Scenario: {}", self.scenario_name)];
        push_steps(&mut lines, "Given", &self.given);
        push_steps(&mut lines, "When", &self.when);
        push_steps(&mut lines, "Then", &self.then);
        lines.join("\n")
    }

    pub fn is_complete(&self) -> bool {
        !self.given.is_empty()
            && !self.when.is_empty()
            && !self.then.is_empty()
            && !self.scenario_name.trim().is_empty()
    }

    pub fn has_explicit_bdd(&self) -> bool {
        self.metadata.has_explicit_bdd
    }

    pub fn has_generated_steps(&self) -> bool {
        self.metadata.generated_steps
    }

    pub fn step_count(&self) -> usize {
        self.given.len() + self.when.len() + self.then.len()
    }

    pub fn summary(&self) -> ScenarioSummary {
        ScenarioSummary {
            test_name: self.test_name.clone(),
            scenario_name: self.scenario_name.clone(),
            step_count: self.step_count(),
            test_type: self.test_type,
            file_path: self.file_path.clone(),
        }
    }
}

fn push_steps(lines: &mut Vec<String>, keyword: &str, steps: &[String]) {
    for (i, step) in steps.iter().enumerate() {
        let keyword = if i == 0 { keyword } else { "And" };
        lines.push(format!("    {keyword} {}", step.trim()));
    }
}
