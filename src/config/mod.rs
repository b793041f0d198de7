//! Configuration
//!
//! `.bddgen.toml` has two sections, `[documentation]` and `[extraction]`; every
//! key is optional. Discovery walks up from the current directory.

mod core;
mod loader;

pub use self::core::{
    BddgenConfig, DocumentationConfig, ExtractionConfig, OutputFormat, DEFAULT_SKIP_DIRS,
};
pub use self::loader::{
    default_config_toml, directory_ancestors, discover_config, load_config, load_config_from,
    parse_and_validate_config, CONFIG_FILE_NAME,
};
