use anyhow::{bail, Context, Result};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::{load_config, BddgenConfig, OutputFormat};
use crate::generation::{ProjectInfo, DEFAULT_PROJECT_NAME};
use crate::io::writers::{DocumentWriter, GherkinWriter, JsonWriter, ScenarioDocument};
use crate::scenarios::HybridExtractor;

#[derive(Debug)]
pub struct ExtractConfig {
    pub file: PathBuf,
    pub format: OutputFormat,
    pub config: Option<PathBuf>,
}

pub fn extract_file(args: ExtractConfig) -> Result<()> {
    let config = load_config(args.config.as_deref()).context("Failed to load configuration")?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    render_file(&config, &args.file, args.format, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Extract one file and render it to `out` in `format`.
///
/// Only a single format can share one stream, so `Both` is rejected.
pub fn render_file<W: Write>(
    config: &BddgenConfig,
    file: &Path,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    if format == OutputFormat::Both {
        bail!("extract prints one document; choose gherkin or json");
    }

    let scenarios = HybridExtractor::from_config(&config.extraction)
        .extract_file(file)
        .with_context(|| format!("Failed to extract scenarios from {}", file.display()))?;

    let project = file
        .parent()
        .map(ProjectInfo::discover)
        .unwrap_or_default();
    let title = file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_PROJECT_NAME.to_string());
    let document = ScenarioDocument::new(title, &project, &scenarios);

    match format {
        OutputFormat::Json => JsonWriter::new(&mut *out).write_document(&document),
        _ => GherkinWriter::with_options(&mut *out, &config.documentation).write_document(&document),
    }
}
