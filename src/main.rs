use anyhow::Result;
use bddgen::cli::{Cli, Commands};
use bddgen::commands::{extract, generate, init};
use bddgen::observability::{init_tracing, install_panic_hook};
use clap::Parser;

fn main() -> Result<()> {
    install_panic_hook();
    let cli = Cli::parse();
    init_tracing(cli.command.verbosity());

    match cli.command {
        Commands::Generate {
            tests_dir,
            output_dir,
            format,
            config,
            no_timestamp,
            no_metadata,
            jobs,
            verbosity: _,
        } => generate::generate_documentation(generate::GenerateConfig {
            tests_dir,
            output_dir,
            format: format.map(Into::into),
            config,
            no_timestamp,
            no_metadata,
            jobs,
        }),
        Commands::Extract {
            file,
            format,
            config,
            verbosity: _,
        } => extract::extract_file(extract::ExtractConfig {
            file,
            format: format.into(),
            config,
        }),
        Commands::Init { force } => init::init_config(force),
    }
}
