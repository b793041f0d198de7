use crate::scenarios::{Scenario, TestType};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

/// Counts for one set of scenarios
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuiteStats {
    pub total_scenarios: usize,
    /// Scenarios with at least one Given, When and Then step
    pub complete_scenarios: usize,
    pub by_type: BTreeMap<TestType, usize>,
    pub generated_at: DateTime<Utc>,
}

impl SuiteStats {
    pub fn from_scenarios(scenarios: &[Scenario]) -> Self {
        let mut by_type = BTreeMap::new();
        for scenario in scenarios {
            *by_type.entry(scenario.test_type).or_insert(0) += 1;
        }

        Self {
            total_scenarios: scenarios.len(),
            complete_scenarios: scenarios.iter().filter(|s| s.is_complete()).count(),
            by_type,
            generated_at: Utc::now(),
        }
    }

    pub fn count(&self, test_type: TestType) -> usize {
        self.by_type.get(&test_type).copied().unwrap_or(0)
    }

    pub fn incomplete_scenarios(&self) -> usize {
        self.total_scenarios - self.complete_scenarios
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenarios::extract_scenarios;
    use std::path::Path;

    #[test]
    fn test_counts_by_type() {
        let mut scenarios = extract_scenarios(
            Path::new("tests/rules/login.spec.ts"),
            "test('a', async () => {}); test('b', async () => {});",
        )
        .unwrap();
        scenarios.extend(
            extract_scenarios(
                Path::new("tests/e2e/compra.spec.ts"),
                "test('c', async () => {});",
            )
            .unwrap(),
        );

        let stats = SuiteStats::from_scenarios(&scenarios);
        assert_eq!(stats.total_scenarios, 3);
        assert_eq!(stats.count(TestType::Rules), 2);
        assert_eq!(stats.count(TestType::E2e), 1);
        assert_eq!(stats.count(TestType::Validation), 0);
        assert_eq!(stats.complete_scenarios, 3);
        assert_eq!(stats.incomplete_scenarios(), 0);
    }

    #[test]
    fn test_serializes_type_keys_lowercase() {
        let scenarios = extract_scenarios(
            Path::new("tests/e2e/compra.spec.ts"),
            "test('c', async () => {});",
        )
        .unwrap();
        let value = serde_json::to_value(SuiteStats::from_scenarios(&scenarios)).unwrap();
        assert_eq!(value["byType"]["e2e"], 1);
        assert_eq!(value["completeScenarios"], 1);
    }
}
