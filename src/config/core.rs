use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::errors::{Error, Result};

/// Root configuration structure for bddgen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct BddgenConfig {
    /// Output document options
    #[serde(default)]
    pub documentation: DocumentationConfig,

    /// Test discovery and extraction options
    #[serde(default)]
    pub extraction: ExtractionConfig,
}

impl BddgenConfig {
    /// Reject settings that would make extraction silently find nothing
    pub fn validate(&self) -> Result<()> {
        self.extraction.validate()
    }
}

/// Which document formats to write
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Gherkin,
    Json,
    Both,
}

impl OutputFormat {
    pub fn writes_gherkin(&self) -> bool {
        matches!(self, OutputFormat::Gherkin | OutputFormat::Both)
    }

    pub fn writes_json(&self) -> bool {
        matches!(self, OutputFormat::Json | OutputFormat::Both)
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "gherkin" | "feature" => Ok(OutputFormat::Gherkin),
            "json" => Ok(OutputFormat::Json),
            "both" => Ok(OutputFormat::Both),
            other => Err(Error::Configuration(format!(
                "unknown output format '{other}' (expected gherkin, json or both)"
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Gherkin => "gherkin",
            OutputFormat::Json => "json",
            OutputFormat::Both => "both",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentationConfig {
    pub include_timestamp: bool,
    /// Emit `# file:line` comments above each scenario
    pub include_test_metadata: bool,
    pub output_format: OutputFormat,
}

impl Default for DocumentationConfig {
    fn default() -> Self {
        Self {
            include_timestamp: true,
            include_test_metadata: true,
            output_format: OutputFormat::Gherkin,
        }
    }
}

impl DocumentationConfig {
    /// Everything enabled, both formats
    pub fn complete() -> Self {
        Self {
            include_timestamp: true,
            include_test_metadata: true,
            output_format: OutputFormat::Both,
        }
    }
}

pub const DEFAULT_SKIP_DIRS: &[&str] = &[
    "node_modules",
    ".git",
    "dist",
    "build",
    "coverage",
    "playwright-report",
    "test-results",
    ".nyc_output",
    "screenshots",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Bare identifiers that declare a test
    pub test_functions: Vec<String>,
    /// File name endings that mark a test file
    pub test_suffixes: Vec<String>,
    pub skip_dirs: Vec<String>,
    /// Glob patterns (relative to the tests directory) to leave out
    pub ignore_patterns: Vec<String>,
    /// Reject files whose syntax tree contains error nodes
    pub strict_parsing: bool,
    /// Read step comments when code analysis finds no test
    pub comment_fallback: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            test_functions: vec!["test".to_string()],
            test_suffixes: vec![".spec.ts".to_string(), ".test.ts".to_string()],
            skip_dirs: DEFAULT_SKIP_DIRS.iter().map(|d| d.to_string()).collect(),
            ignore_patterns: Vec::new(),
            strict_parsing: false,
            comment_fallback: true,
        }
    }
}

impl ExtractionConfig {
    pub fn validate(&self) -> Result<()> {
        if self.test_functions.iter().all(|f| f.trim().is_empty()) {
            return Err(Error::Configuration(
                "extraction.test_functions must name at least one function".into(),
            ));
        }
        if self.test_suffixes.iter().all(|s| s.trim().is_empty()) {
            return Err(Error::Configuration(
                "extraction.test_suffixes must contain at least one suffix".into(),
            ));
        }
        for pattern in &self.ignore_patterns {
            glob::Pattern::new(pattern)?;
        }
        Ok(())
    }
}
