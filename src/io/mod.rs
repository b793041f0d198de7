pub mod walker;
pub mod writers;

pub use walker::{find_test_files, is_test_file, FileStats, TestFileWalker};
pub use writers::{DocumentWriter, GherkinWriter, JsonWriter, ScenarioDocument};

use crate::core::errors::{Error, Result};
use std::fs;
use std::path::Path;

pub fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::io_at(e, path))
}

pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path).map_err(|e| Error::io_at(e, path))?;
    }
    Ok(())
}
