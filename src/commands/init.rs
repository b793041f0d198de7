use anyhow::{Context, Result};
use std::path::Path;

use crate::config::{default_config_toml, CONFIG_FILE_NAME};

pub fn init_config(force: bool) -> Result<()> {
    write_default_config(Path::new("."), force)?;
    println!("Created {CONFIG_FILE_NAME} configuration file");
    Ok(())
}

/// Write the default config into `dir`, refusing to overwrite unless `force`
pub fn write_default_config(dir: &Path, force: bool) -> Result<()> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    let contents = format!("# bddgen configuration\n\n{}", default_config_toml()?);
    std::fs::write(&config_path, contents)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::load_config_from;
    use tempfile::TempDir;

    #[test]
    fn test_writes_loadable_config() {
        let dir = TempDir::new().unwrap();
        write_default_config(dir.path(), false).unwrap();

        let config = load_config_from(&dir.path().join(CONFIG_FILE_NAME)).unwrap();
        assert_eq!(config, crate::config::BddgenConfig::default());
    }

    #[test]
    fn test_refuses_overwrite_without_force() {
        let dir = TempDir::new().unwrap();
        write_default_config(dir.path(), false).unwrap();

        assert!(write_default_config(dir.path(), false).is_err());
        assert!(write_default_config(dir.path(), true).is_ok());
    }
}
