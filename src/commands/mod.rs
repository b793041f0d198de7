//! CLI command implementations.
//!
//! - **generate**: batch documentation for a tests directory
//! - **extract**: scenarios of a single file on stdout
//! - **init**: write a default `.bddgen.toml`

pub mod extract;
pub mod generate;
pub mod init;

pub use extract::{extract_file, render_file, ExtractConfig};
pub use generate::{apply_overrides, generate_documentation, GenerateConfig};
pub use init::{init_config, write_default_config};
