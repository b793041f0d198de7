use crate::config::ExtractionConfig;
use crate::core::errors::{Error, Result};
use ignore::WalkBuilder;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Recursively finds test files under a root directory.
pub struct TestFileWalker {
    root: PathBuf,
    test_suffixes: Vec<String>,
    skip_dirs: Vec<String>,
    ignore_patterns: Vec<glob::Pattern>,
}

impl TestFileWalker {
    pub fn new(root: PathBuf) -> Self {
        let defaults = ExtractionConfig::default();
        Self {
            root,
            test_suffixes: defaults.test_suffixes,
            skip_dirs: defaults.skip_dirs,
            ignore_patterns: vec![],
        }
    }

    pub fn from_config(root: PathBuf, config: &ExtractionConfig) -> Result<Self> {
        Self::new(root)
            .with_test_suffixes(config.test_suffixes.clone())
            .with_skip_dirs(config.skip_dirs.clone())
            .with_ignore_patterns(&config.ignore_patterns)
    }

    pub fn with_test_suffixes(mut self, suffixes: Vec<String>) -> Self {
        self.test_suffixes = suffixes;
        self
    }

    pub fn with_skip_dirs(mut self, dirs: Vec<String>) -> Self {
        self.skip_dirs = dirs;
        self
    }

    pub fn with_ignore_patterns(mut self, patterns: &[String]) -> Result<Self> {
        self.ignore_patterns = patterns
            .iter()
            .map(|p| glob::Pattern::new(p))
            .collect::<std::result::Result<_, _>>()?;
        Ok(self)
    }

    /// Sorted list of test files
    pub fn walk(&self) -> Result<Vec<PathBuf>> {
        if !self.root.is_dir() {
            return Err(Error::file_system(
                format!("tests directory not found: {}", self.root.display()),
                &self.root,
            ));
        }

        let skip_dirs = self.skip_dirs.clone();
        let walker = WalkBuilder::new(&self.root)
            .hidden(false)
            .git_ignore(true)
            .filter_entry(move |entry| {
                let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
                !(is_dir && entry.depth() > 0 && is_skipped_dir(entry.path(), &skip_dirs))
            })
            .build();

        let mut files = Vec::new();
        for entry in walker {
            let entry = entry?;
            let path = entry.path();

            if entry.file_type().is_some_and(|t| t.is_file()) && self.should_process(path) {
                files.push(path.to_path_buf());
            }
        }

        files.sort();
        tracing::debug!(root = %self.root.display(), files = files.len(), "discovered test files");
        Ok(files)
    }

    fn should_process(&self, path: &Path) -> bool {
        if !is_test_file(path, &self.test_suffixes) {
            return false;
        }

        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        !self
            .ignore_patterns
            .iter()
            .any(|p| p.matches_path(relative) || p.matches_path(path))
    }
}

fn is_skipped_dir(path: &Path, skip_dirs: &[String]) -> bool {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();
    name.starts_with('.') || skip_dirs.iter().any(|d| *d == name)
}

/// File name ends with one of the test suffixes
pub fn is_test_file(path: &Path, test_suffixes: &[String]) -> bool {
    path.file_name()
        .map(|n| n.to_string_lossy())
        .is_some_and(|name| test_suffixes.iter().any(|s| name.ends_with(s.as_str())))
}

pub fn find_test_files(root: &Path) -> Result<Vec<PathBuf>> {
    TestFileWalker::new(root.to_path_buf()).walk()
}

/// Counts over a set of discovered files
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileStats {
    pub total_files: usize,
    pub by_extension: BTreeMap<String, usize>,
    pub by_directory: BTreeMap<String, usize>,
}

impl FileStats {
    pub fn from_files(files: &[PathBuf]) -> Self {
        let mut stats = FileStats {
            total_files: files.len(),
            ..Default::default()
        };

        for file in files {
            let extension = file
                .extension()
                .map(|e| e.to_string_lossy().into_owned())
                .unwrap_or_default();
            *stats.by_extension.entry(extension).or_default() += 1;

            let directory = file
                .parent()
                .and_then(|p| p.file_name())
                .map(|d| d.to_string_lossy().into_owned())
                .unwrap_or_else(|| ".".to_string());
            *stats.by_directory.entry(directory).or_default() += 1;
        }

        stats
    }
}
