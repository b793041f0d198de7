use crate::config::OutputFormat;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// Gherkin `.feature` documents
    Gherkin,
    /// Pretty-printed JSON documents
    Json,
    /// Both Gherkin and JSON
    Both,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Gherkin => OutputFormat::Gherkin,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Both => OutputFormat::Both,
        }
    }
}

/// Formats `extract` can print; it writes a single document to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExtractFormatArg {
    Gherkin,
    Json,
}

impl From<ExtractFormatArg> for OutputFormat {
    fn from(arg: ExtractFormatArg) -> Self {
        match arg {
            ExtractFormatArg::Gherkin => OutputFormat::Gherkin,
            ExtractFormatArg::Json => OutputFormat::Json,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "bddgen")]
#[command(about = "BDD scenario documentation from Playwright test code", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract scenarios from every test file and write the documents
    Generate {
        /// Directory containing the test files
        #[arg(default_value = "tests")]
        tests_dir: PathBuf,

        /// Directory the documents are written to
        #[arg(default_value = "docs/test-scenarios")]
        output_dir: PathBuf,

        /// Output format (overrides the config file)
        #[arg(short, long, value_enum)]
        format: Option<FormatArg>,

        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Leave the generation timestamp out of document headers
        #[arg(long = "no-timestamp")]
        no_timestamp: bool,

        /// Leave the `# file:line` comments out of Gherkin documents
        #[arg(long = "no-metadata")]
        no_metadata: bool,

        /// Number of worker threads (0 = one per CPU)
        #[arg(short = 'j', long = "jobs", default_value = "0")]
        jobs: usize,

        /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// Print the scenarios of a single test file
    Extract {
        /// Test file to read
        file: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "gherkin")]
        format: ExtractFormatArg,

        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// Write a default .bddgen.toml in the current directory
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
}

impl Commands {
    pub fn verbosity(&self) -> u8 {
        match self {
            Commands::Generate { verbosity, .. } | Commands::Extract { verbosity, .. } => {
                *verbosity
            }
            Commands::Init { .. } => 0,
        }
    }
}
