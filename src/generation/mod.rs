//! Batch documentation generation.
//!
//! Discovers test files, extracts scenarios from them in parallel and writes
//! one document per test type plus an `all-scenarios` document, in every
//! configured output format.

pub mod project;
pub mod stats;

pub use project::{ProjectInfo, DEFAULT_PROJECT_NAME, DEFAULT_PROJECT_VERSION};
pub use stats::SuiteStats;

use crate::config::{BddgenConfig, OutputFormat};
use crate::core::errors::Result;
use crate::io::writers::{DocumentWriter, GherkinWriter, JsonWriter, ScenarioDocument};
use crate::io::{ensure_dir, FileStats, TestFileWalker};
use crate::observability::{
    increment_processed, set_current_file, set_phase, set_progress, GenerationPhase,
};
use crate::scenarios::{HybridExtractor, Scenario, TestType};
use anyhow::Context;
use rayon::prelude::*;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Rayon thread stack size (8MB for deeply nested syntax trees)
const RAYON_STACK_SIZE: usize = 8 * 1024 * 1024;

const ALL_SCENARIOS_STEM: &str = "all-scenarios";

/// Configure the rayon global pool once at startup. `0` keeps rayon's default.
pub fn configure_thread_pool(jobs: usize) {
    let mut builder = rayon::ThreadPoolBuilder::new().stack_size(RAYON_STACK_SIZE);

    if jobs > 0 {
        builder = builder.num_threads(jobs);
    }

    if let Err(e) = builder.build_global() {
        tracing::debug!(error = %e, "thread pool already configured");
    }
}

/// Document heading for a test type
pub fn document_title(test_type: Option<TestType>) -> &'static str {
    match test_type {
        Some(TestType::Validation) => "Tests de Validación",
        Some(TestType::Rules) => "Tests de Reglas de Negocio",
        Some(TestType::E2e) => "Tests End-to-End",
        None => "Todos los Tests",
    }
}

/// A file that could not be read or parsed
#[derive(Debug, Clone, Serialize)]
pub struct FileFailure {
    pub path: PathBuf,
    pub error: String,
}

/// Result of extracting a batch of files
#[derive(Debug, Clone, Default)]
pub struct BatchOutcome {
    /// Scenarios in input file order
    pub scenarios: Vec<Scenario>,
    pub failures: Vec<FileFailure>,
}

impl BatchOutcome {
    pub fn of_type(&self, test_type: TestType) -> Vec<Scenario> {
        self.scenarios
            .iter()
            .filter(|s| s.test_type == test_type)
            .cloned()
            .collect()
    }
}

#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub files_written: Vec<PathBuf>,
    pub stats: SuiteStats,
    pub failures: Vec<FileFailure>,
    pub file_stats: FileStats,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DocumentKind {
    Gherkin,
    Json,
}

impl DocumentKind {
    fn for_format(format: OutputFormat) -> Vec<DocumentKind> {
        let mut kinds = Vec::new();
        if format.writes_gherkin() {
            kinds.push(DocumentKind::Gherkin);
        }
        if format.writes_json() {
            kinds.push(DocumentKind::Json);
        }
        kinds
    }

    fn extension(self) -> &'static str {
        match self {
            DocumentKind::Gherkin => "feature",
            DocumentKind::Json => "json",
        }
    }
}

pub struct DocumentationGenerator {
    config: BddgenConfig,
    extractor: HybridExtractor,
}

impl DocumentationGenerator {
    pub fn new(config: BddgenConfig) -> Self {
        let extractor = HybridExtractor::from_config(&config.extraction);
        Self { config, extractor }
    }

    pub fn config(&self) -> &BddgenConfig {
        &self.config
    }

    /// Sorted test files under `tests_dir`
    pub fn discover(&self, tests_dir: &Path) -> Result<Vec<PathBuf>> {
        let _phase = set_phase(GenerationPhase::FileDiscovery);
        TestFileWalker::from_config(tests_dir.to_path_buf(), &self.config.extraction)?.walk()
    }

    /// Extract every file in parallel. A failing file is logged and skipped.
    pub fn collect(&self, files: &[PathBuf]) -> BatchOutcome {
        set_progress(0, files.len());

        let results: Vec<(&PathBuf, Result<Vec<Scenario>>)> = files
            .par_iter()
            .map(|path| (path, self.extract_one(path)))
            .collect();

        let mut outcome = BatchOutcome::default();
        for (path, result) in results {
            match result {
                Ok(scenarios) => outcome.scenarios.extend(scenarios),
                Err(e) => {
                    tracing::warn!(file = %path.display(), error = %e, "skipping test file");
                    outcome.failures.push(FileFailure {
                        path: path.clone(),
                        error: e.to_string(),
                    });
                }
            }
        }
        outcome
    }

    fn extract_one(&self, path: &Path) -> Result<Vec<Scenario>> {
        let _phase = set_phase(GenerationPhase::Extraction);
        let _file = set_current_file(path);
        let result = self.extractor.extract_file(path);
        increment_processed();
        result
    }

    /// Discover, extract and write all documents into `output_dir`
    pub fn generate(&self, tests_dir: &Path, output_dir: &Path) -> anyhow::Result<GenerationReport> {
        let start = Instant::now();

        let files = self
            .discover(tests_dir)
            .with_context(|| format!("Failed to scan {}", tests_dir.display()))?;
        let file_stats = FileStats::from_files(&files);

        if files.is_empty() {
            tracing::warn!(dir = %tests_dir.display(), "no test files found");
            return Ok(GenerationReport {
                files_written: Vec::new(),
                stats: SuiteStats::from_scenarios(&[]),
                failures: Vec::new(),
                file_stats,
            });
        }

        tracing::info!(files = files.len(), "extracting scenarios");
        let outcome = self.collect(&files);
        let project = ProjectInfo::discover(tests_dir);

        let _phase = set_phase(GenerationPhase::Writing);
        ensure_dir(output_dir)
            .with_context(|| format!("Failed to create {}", output_dir.display()))?;

        let mut files_written = Vec::new();
        for test_type in TestType::ALL {
            let scenarios = outcome.of_type(test_type);
            if scenarios.is_empty() {
                continue;
            }
            let document = ScenarioDocument::new(document_title(Some(test_type)), &project, &scenarios);
            let stem = format!("{}-scenarios", test_type.as_str());
            files_written.extend(self.write_formats(output_dir, &stem, &document)?);
        }

        let document = ScenarioDocument::new(document_title(None), &project, &outcome.scenarios);
        files_written.extend(self.write_formats(output_dir, ALL_SCENARIOS_STEM, &document)?);

        tracing::info!(
            scenarios = outcome.scenarios.len(),
            failures = outcome.failures.len(),
            documents = files_written.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "generation finished"
        );

        Ok(GenerationReport {
            files_written,
            stats: document.stats,
            failures: outcome.failures,
            file_stats,
        })
    }

    fn write_formats(
        &self,
        output_dir: &Path,
        stem: &str,
        document: &ScenarioDocument<'_>,
    ) -> anyhow::Result<Vec<PathBuf>> {
        DocumentKind::for_format(self.config.documentation.output_format)
            .into_iter()
            .map(|kind| {
                let path = output_dir.join(format!("{stem}.{}", kind.extension()));
                self.write_document(&path, kind, document)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                tracing::debug!(path = %path.display(), "document written");
                Ok(path)
            })
            .collect()
    }

    fn write_document(
        &self,
        path: &Path,
        kind: DocumentKind,
        document: &ScenarioDocument<'_>,
    ) -> anyhow::Result<()> {
        let mut out = BufWriter::new(File::create(path)?);
        match kind {
            DocumentKind::Gherkin => {
                GherkinWriter::with_options(&mut out, &self.config.documentation)
                    .write_document(document)?
            }
            DocumentKind::Json => JsonWriter::new(&mut out).write_document(document)?,
        }
        out.flush()?;
        Ok(())
    }
}
