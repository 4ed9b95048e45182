//! Registry of discovered templates.
//!
//! The registry owns a lazily built snapshot of template metadata keyed by the
//! normalized filename key. The snapshot is built on first query, reused until
//! [`TemplateRegistry::clear_cache`] or [`TemplateRegistry::refresh`] drops it,
//! and never revalidated against the filesystem in between. Template *content*
//! is deliberately not cached: [`TemplateRegistry::get`] reads the file fresh
//! on every call, so the body reflects live edits even while the structural
//! metadata stays frozen.

use std::fs;
use std::path::{Path, PathBuf};

use regex::Regex;

use crate::constants::{HEADER_PARTIAL, LAYOUT_TEMPLATE};
use crate::error::{Result, RulekitError};
use crate::templates::metadata::{base_file_name, DirectivePatterns, TemplateMetadata};
use crate::templates::scanner::Scanner;

/// A template's metadata together with its freshly loaded content.
#[derive(Debug, Clone)]
pub struct LoadedTemplate {
    pub metadata: TemplateMetadata,
    pub content: String,
}

/// In-memory template registry over one root directory.
///
/// Duplicate keys (two filenames normalizing to the same key) resolve
/// last-write-wins by scan order, with the later entry taking the earlier
/// entry's position. Scan order follows the filesystem and is stable within
/// one snapshot but not guaranteed across platforms.
///
/// Single-threaded by design: methods that may build the cache take
/// `&mut self`, so a multi-threaded host must serialize access externally.
#[derive(Debug)]
pub struct TemplateRegistry {
    root: PathBuf,
    scanner: Scanner,
    patterns: DirectivePatterns,
    cache: Option<Vec<TemplateMetadata>>,
}

impl TemplateRegistry {
    /// Create a registry over `root` with the default scanner configuration.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_scanner(root, Scanner::default())
    }

    /// Create a registry with a custom scanner (extension / skip-set).
    pub fn with_scanner(root: impl Into<PathBuf>, scanner: Scanner) -> Self {
        Self {
            root: root.into(),
            scanner,
            patterns: DirectivePatterns::new(),
            cache: None,
        }
    }

    /// The template root directory. Callers drop custom templates here.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the cursor layout file, for direct reference by callers.
    pub fn layout_path(&self) -> PathBuf {
        self.root.join(LAYOUT_TEMPLATE)
    }

    /// Path of the shared header partial.
    pub fn header_partial_path(&self) -> PathBuf {
        self.root.join(HEADER_PARTIAL)
    }

    /// All discovered templates, building the cache if needed.
    pub fn list(&mut self) -> &[TemplateMetadata] {
        self.entries()
    }

    /// All known template keys.
    pub fn keys(&mut self) -> Vec<String> {
        self.entries().iter().map(|t| t.key.clone()).collect()
    }

    /// Whether a template with this key exists.
    pub fn has(&mut self, key: &str) -> bool {
        self.entries().iter().any(|t| t.key == key)
    }

    /// Look up a template by key and load its content from disk.
    ///
    /// Unknown keys are a hard error carrying the full list of valid keys.
    /// A file that vanished between scan and load surfaces as
    /// [`RulekitError::TemplateLoad`].
    pub fn get(&mut self, key: &str) -> Result<LoadedTemplate> {
        let entries = self.entries();
        let Some(metadata) = entries.iter().find(|t| t.key == key) else {
            return Err(RulekitError::TemplateNotFound {
                key: key.to_string(),
                available: entries.iter().map(|t| t.key.clone()).collect(),
            });
        };

        let content = load_template(&metadata.path)?;
        Ok(LoadedTemplate {
            metadata: metadata.clone(),
            content,
        })
    }

    /// Look up a template by its base filename (extension stripped).
    ///
    /// Linear scan, first match wins.
    pub fn get_by_file_name(&mut self, file_name: &str) -> Option<&TemplateMetadata> {
        let extension = self.scanner.extension().to_string();
        self.entries()
            .iter()
            .find(|t| base_file_name(&t.path, &extension) == file_name)
    }

    /// Templates whose name, description, or key matches `pattern`.
    pub fn find(&mut self, pattern: &Regex) -> Vec<&TemplateMetadata> {
        self.entries()
            .iter()
            .filter(|t| {
                pattern.is_match(&t.name)
                    || pattern.is_match(&t.description)
                    || pattern.is_match(&t.key)
            })
            .collect()
    }

    /// Drop the cached snapshot; the next query rebuilds from the filesystem.
    pub fn clear_cache(&mut self) {
        self.cache = None;
    }

    /// Clear the cache and rebuild immediately.
    pub fn refresh(&mut self) -> &[TemplateMetadata] {
        self.clear_cache();
        self.entries()
    }

    fn entries(&mut self) -> &[TemplateMetadata] {
        if self.cache.is_none() {
            let mut entries: Vec<TemplateMetadata> = Vec::new();
            for discovered in self.scanner.scan(&self.root) {
                let metadata = self.patterns.parse(
                    &discovered.path,
                    &discovered.content,
                    self.scanner.extension(),
                );
                // Last write wins, keeping the replaced entry's position so
                // list() order stays stable within a snapshot.
                match entries.iter_mut().find(|t| t.key == metadata.key) {
                    Some(existing) => *existing = metadata,
                    None => entries.push(metadata),
                }
            }
            self.cache = Some(entries);
        }
        self.cache.as_deref().unwrap_or_default()
    }
}

/// Read a template file's content. One bounded open-read-close; the error
/// wraps the attempted path and the underlying I/O failure.
pub fn load_template(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| RulekitError::TemplateLoad {
        path: path.to_path_buf(),
        source,
    })
}
