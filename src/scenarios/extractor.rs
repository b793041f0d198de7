//! Scenario extraction entry points.

use super::assembler::assemble;
use super::classifier::classify_test_case;
use super::comments::extract_from_comments;
use super::model::Scenario;
use crate::analyzers::typescript::analyze_test_source;
use crate::config::ExtractionConfig;
use crate::core::errors::Result;
use crate::io::read_file;
use std::path::Path;

/// Code-analysis extraction: parse, discover tests, classify, assemble.
#[derive(Debug, Clone)]
pub struct CodeAnalysisExtractor {
    test_functions: Vec<String>,
    strict_parsing: bool,
}

impl Default for CodeAnalysisExtractor {
    fn default() -> Self {
        Self::from_config(&ExtractionConfig::default())
    }
}

impl CodeAnalysisExtractor {
    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self {
            test_functions: config.test_functions.clone(),
            strict_parsing: config.strict_parsing,
        }
    }

    /// One scenario per test declaration, in source order.
    ///
    /// Finding no test is not an error. Only a parser failure is.
    pub fn extract_scenarios(&self, file_path: &Path, source: &str) -> Result<Vec<Scenario>> {
        let declarations =
            analyze_test_source(file_path, source, &self.test_functions, self.strict_parsing)?;

        Ok(declarations
            .into_iter()
            .map(classify_test_case)
            .map(|test_case| assemble(&test_case, file_path))
            .collect())
    }
}

/// Extract with default settings
pub fn extract_scenarios(file_path: &Path, source: &str) -> Result<Vec<Scenario>> {
    CodeAnalysisExtractor::default().extract_scenarios(file_path, source)
}

/// Code analysis first, step comments when code analysis finds no test.
#[derive(Debug, Clone)]
pub struct HybridExtractor {
    code: CodeAnalysisExtractor,
    test_suffixes: Vec<String>,
    comment_fallback: bool,
}

impl Default for HybridExtractor {
    fn default() -> Self {
        Self::from_config(&ExtractionConfig::default())
    }
}

impl HybridExtractor {
    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self {
            code: CodeAnalysisExtractor::from_config(config),
            test_suffixes: config.test_suffixes.clone(),
            comment_fallback: config.comment_fallback,
        }
    }

    pub fn can_process(&self, file_path: &Path) -> bool {
        let name = file_path.to_string_lossy();
        self.test_suffixes.iter().any(|suffix| name.ends_with(suffix.as_str()))
    }

    /// Read and extract a test file
    pub fn extract_file(&self, file_path: &Path) -> Result<Vec<Scenario>> {
        let source = read_file(file_path)?;
        self.extract_source(file_path, &source)
    }

    pub fn extract_source(&self, file_path: &Path, source: &str) -> Result<Vec<Scenario>> {
        let _span = tracing::debug_span!("extract", file = %file_path.display()).entered();

        let scenarios = self.code.extract_scenarios(file_path, source)?;
        if !scenarios.is_empty() {
            tracing::debug!(count = scenarios.len(), "code analysis extracted scenarios");
            return Ok(scenarios);
        }

        if !self.comment_fallback {
            return Ok(scenarios);
        }

        tracing::debug!("no test declarations found, reading step comments");
        Ok(extract_from_comments(file_path, source))
    }
}
