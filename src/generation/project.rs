use crate::config::directory_ancestors;
use crate::core::errors::Error;
use crate::io::read_file;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_PROJECT_NAME: &str = "Proyecto de Automatización";
pub const DEFAULT_PROJECT_VERSION: &str = "1.0.0";

const MAX_PACKAGE_SEARCH_DEPTH: usize = 32;

/// Project name and version shown in document headers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectInfo {
    pub name: String,
    pub version: String,
}

impl Default for ProjectInfo {
    fn default() -> Self {
        Self {
            name: DEFAULT_PROJECT_NAME.to_string(),
            version: DEFAULT_PROJECT_VERSION.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct PackageManifest {
    name: Option<String>,
    version: Option<String>,
}

impl ProjectInfo {
    /// Read the nearest `package.json` at or above `tests_dir`.
    ///
    /// Missing fields, an unreadable manifest or no manifest at all fall back
    /// to the defaults field by field.
    pub fn discover(tests_dir: &Path) -> Self {
        let start = tests_dir
            .canonicalize()
            .unwrap_or_else(|_| tests_dir.to_path_buf());

        match find_package_json(start) {
            Some(path) => Self::from_manifest(&path),
            None => {
                tracing::debug!(dir = %tests_dir.display(), "no package.json found");
                Self::default()
            }
        }
    }

    fn from_manifest(path: &Path) -> Self {
        let manifest = read_file(path).and_then(|text| {
            serde_json::from_str::<PackageManifest>(&text).map_err(Error::from)
        });

        match manifest {
            Ok(manifest) => Self::from_fields(manifest.name, manifest.version),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "could not read package.json");
                Self::default()
            }
        }
    }

    fn from_fields(name: Option<String>, version: Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            name: name.filter(|n| !n.trim().is_empty()).unwrap_or(defaults.name),
            version: version
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.version),
        }
    }
}

fn find_package_json(start: PathBuf) -> Option<PathBuf> {
    directory_ancestors(start, MAX_PACKAGE_SEARCH_DEPTH)
        .map(|dir| dir.join("package.json"))
        .find(|candidate| candidate.is_file())
}
