//! Recursive discovery of template files under a root directory.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::constants::{SKIP_DIRECTORIES, TEMPLATE_EXTENSION};

/// A template file found during a scan, paired with its raw UTF-8 content.
#[derive(Debug, Clone)]
pub struct DiscoveredTemplate {
    pub path: PathBuf,
    pub content: String,
}

/// Walks a directory tree collecting template files.
///
/// Discovery is best-effort: an unlistable directory or unreadable file is
/// logged as a warning and skipped, never aborting the scan. Entries are
/// visited in the order the filesystem returns them; no sorting is applied.
#[derive(Debug, Clone)]
pub struct Scanner {
    extension: String,
    skip_dirs: Vec<String>,
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new(
            TEMPLATE_EXTENSION,
            SKIP_DIRECTORIES.iter().map(|d| d.to_string()).collect(),
        )
    }
}

impl Scanner {
    /// Create a scanner with a custom extension suffix and skip-set.
    pub fn new(extension: &str, skip_dirs: Vec<String>) -> Self {
        Self {
            extension: extension.to_string(),
            skip_dirs,
        }
    }

    /// The extension suffix this scanner selects on.
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Recursively scan `root` for template files.
    pub fn scan(&self, root: &Path) -> Vec<DiscoveredTemplate> {
        let mut found = Vec::new();
        self.scan_dir(root, &mut found);
        found
    }

    fn scan_dir(&self, dir: &Path, found: &mut Vec<DiscoveredTemplate>) {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Could not scan directory {}: {}", dir.display(), e);
                return;
            }
        };

        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Could not read entry in {}: {}", dir.display(), e);
                    continue;
                }
            };
            let path = entry.path();

            if path.is_dir() {
                let name = entry.file_name();
                if self.skip_dirs.iter().any(|d| d.as_str() == name) {
                    continue;
                }
                self.scan_dir(&path, found);
            } else if entry
                .file_name()
                .to_str()
                .is_some_and(|n| n.ends_with(&self.extension))
            {
                match fs::read_to_string(&path) {
                    Ok(content) => found.push(DiscoveredTemplate { path, content }),
                    Err(e) => warn!("Could not process {}: {}", path.display(), e),
                }
            }
        }
    }
}
