use anyhow::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;

use crate::config::{load_config, BddgenConfig, OutputFormat};
use crate::generation::{configure_thread_pool, DocumentationGenerator, GenerationReport};
use crate::scenarios::TestType;

#[derive(Debug)]
pub struct GenerateConfig {
    pub tests_dir: PathBuf,
    pub output_dir: PathBuf,
    pub format: Option<OutputFormat>,
    pub config: Option<PathBuf>,
    pub no_timestamp: bool,
    pub no_metadata: bool,
    pub jobs: usize,
}

/// Command-line flags win over the config file
pub fn apply_overrides(mut config: BddgenConfig, args: &GenerateConfig) -> BddgenConfig {
    if let Some(format) = args.format {
        config.documentation.output_format = format;
    }
    if args.no_timestamp {
        config.documentation.include_timestamp = false;
    }
    if args.no_metadata {
        config.documentation.include_test_metadata = false;
    }
    config
}

pub fn generate_documentation(args: GenerateConfig) -> Result<()> {
    let config = load_config(args.config.as_deref()).context("Failed to load configuration")?;
    let config = apply_overrides(config, &args);

    configure_thread_pool(args.jobs);

    println!(
        "{} {}",
        "Scanning".cyan().bold(),
        args.tests_dir.display()
    );

    let report = DocumentationGenerator::new(config)
        .generate(&args.tests_dir, &args.output_dir)
        .context("Documentation generation failed")?;

    print_report(&report);
    Ok(())
}

fn print_report(report: &GenerationReport) {
    if report.file_stats.total_files == 0 {
        println!("{}", "No test files found".yellow());
        return;
    }

    println!(
        "Found {} test files, extracted {} scenarios ({} complete)",
        report.file_stats.total_files,
        report.stats.total_scenarios,
        report.stats.complete_scenarios
    );
    for test_type in TestType::ALL {
        let count = report.stats.count(test_type);
        if count > 0 {
            println!("  {:<12} {}", test_type.as_str(), count);
        }
    }

    for failure in &report.failures {
        println!(
            "{} {}: {}",
            "Skipped".yellow().bold(),
            failure.path.display(),
            failure.error
        );
    }

    for path in &report.files_written {
        println!("{} {}", "Wrote".green().bold(), path.display());
    }
}
