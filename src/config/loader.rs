use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::BddgenConfig;
use crate::core::errors::{Error, Result};

pub const CONFIG_FILE_NAME: &str = ".bddgen.toml";
const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Read the raw contents of a config file
pub(crate) fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse and validate config from a TOML string
pub fn parse_and_validate_config(contents: &str) -> Result<BddgenConfig> {
    let config = toml::from_str::<BddgenConfig>(contents)?;
    config.validate()?;
    Ok(config)
}

/// Load an explicitly requested config file. Any failure is an error.
pub fn load_config_from(path: &Path) -> Result<BddgenConfig> {
    let contents = read_config_file(path).map_err(|e| Error::io_at(e, path))?;
    let config = parse_and_validate_config(&contents).map_err(|e| {
        e.with_context(format!("Failed to load {}", path.display()))
    })?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Try a discovered config file; problems fall back to defaults with a warning
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<BddgenConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            tracing::debug!(path = %config_path.display(), "loaded config");
            Some(config)
        }
        Err(e) => {
            tracing::warn!(
                path = %config_path.display(),
                error = %e,
                "invalid config file, using defaults"
            );
            None
        }
    }
}

/// Only log actual errors, not "file not found"
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    if error.kind() != std::io::ErrorKind::NotFound {
        tracing::warn!(
            path = %config_path.display(),
            %error,
            "failed to read config file"
        );
    }
}

/// `start` and its ancestors, at most `max_depth` directories
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Find the nearest `.bddgen.toml` above `start`
pub fn discover_config(start: PathBuf) -> BddgenConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            tracing::debug!(
                depth = MAX_TRAVERSAL_DEPTH,
                "no config found, using default config"
            );
            BddgenConfig::default()
        })
}

/// Explicit path if given, otherwise discovery from the current directory
pub fn load_config(explicit: Option<&Path>) -> Result<BddgenConfig> {
    if let Some(path) = explicit {
        return load_config_from(path);
    }

    match std::env::current_dir() {
        Ok(current) => Ok(discover_config(current)),
        Err(e) => {
            tracing::warn!(error = %e, "failed to get current directory, using default config");
            Ok(BddgenConfig::default())
        }
    }
}

/// Default config file contents written by `bddgen init`
pub fn default_config_toml() -> Result<String> {
    toml::to_string_pretty(&BddgenConfig::default())
        .map_err(|e| Error::Configuration(format!("failed to serialize default config: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use tempfile::TempDir;

    #[test]
    fn test_directory_ancestors_depth() {
        let dirs: Vec<_> = directory_ancestors(PathBuf::from("/a/b/c"), 2).collect();
        assert_eq!(dirs, vec![PathBuf::from("/a/b/c"), PathBuf::from("/a/b")]);
    }

    #[test]
    fn test_discover_in_ancestor() {
        let root = TempDir::new().unwrap();
        fs::write(
            root.path().join(CONFIG_FILE_NAME),
            "[documentation]\noutput_format = \"json\"\n",
        )
        .unwrap();
        let nested = root.path().join("tests/rules");
        fs::create_dir_all(&nested).unwrap();

        let config = discover_config(nested);
        assert_eq!(config.documentation.output_format, OutputFormat::Json);
    }

    #[test]
    fn test_invalid_discovered_config_falls_back() {
        let root = TempDir::new().unwrap();
        fs::write(root.path().join(CONFIG_FILE_NAME), "not = [valid").unwrap();

        let config = discover_config(root.path().to_path_buf());
        assert_eq!(config, BddgenConfig::default());
    }

    #[test]
    fn test_explicit_invalid_config_is_error() {
        let root = TempDir::new().unwrap();
        let path = root.path().join("custom.toml");
        fs::write(&path, "[extraction]\ntest_functions = []\n").unwrap();

        let err = load_config(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("custom.toml"));
    }

    #[test]
    fn test_explicit_missing_config_is_error() {
        assert!(load_config(Some(Path::new("/no/such/.bddgen.toml"))).is_err());
    }

    #[test]
    fn test_default_toml_round_trips() {
        let text = default_config_toml().unwrap();
        assert_eq!(parse_and_validate_config(&text).unwrap(), BddgenConfig::default());
    }
}
