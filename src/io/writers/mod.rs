//! Scenario document writers.

pub mod gherkin;
pub mod json;

pub use gherkin::GherkinWriter;
pub use json::JsonWriter;

use crate::generation::{ProjectInfo, SuiteStats};
use crate::scenarios::Scenario;
use serde::Serialize;

/// Everything a writer needs to render one output document
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioDocument<'a> {
    pub title: String,
    pub project: &'a ProjectInfo,
    pub stats: SuiteStats,
    pub scenarios: &'a [Scenario],
}

impl<'a> ScenarioDocument<'a> {
    pub fn new(title: impl Into<String>, project: &'a ProjectInfo, scenarios: &'a [Scenario]) -> Self {
        Self {
            title: title.into(),
            project,
            stats: SuiteStats::from_scenarios(scenarios),
            scenarios,
        }
    }
}

pub trait DocumentWriter {
    fn write_document(&mut self, document: &ScenarioDocument<'_>) -> anyhow::Result<()>;

    /// File extension without the dot
    fn extension(&self) -> &'static str;
}
