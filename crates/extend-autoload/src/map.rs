//! The aggregated autoload map.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use extend_meta::AutoloadConfig;

/// Autoload rules aggregated across the canonical package list plus the
/// root package.
///
/// Prefix entries keep an ordered directory list; directories registered by
/// the extension pass are prepended so they shadow the package's original
/// location for the same prefix. The map is read-only while the rewrite
/// pass resolves classes and is mutated afterward with one new PSR-4 entry
/// and one classmap exclusion per rewritten class.
#[derive(Debug, Clone, Default)]
pub struct AutoloadMap {
    psr4: BTreeMap<String, Vec<PathBuf>>,
    psr0: BTreeMap<String, Vec<PathBuf>>,
    classmap: BTreeMap<String, PathBuf>,
    exclude_from_classmap: Vec<PathBuf>,
}

impl AutoloadMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one package's autoload section, resolving its relative paths
    /// against the package's install directory.
    pub fn add_package(&mut self, config: &AutoloadConfig, base_dir: &Path) {
        for (prefix, paths) in &config.psr4 {
            let dirs = self.psr4.entry(prefix.clone()).or_default();
            for path in paths.as_slice() {
                dirs.push(base_dir.join(path));
            }
        }
        for (prefix, paths) in &config.psr0 {
            let dirs = self.psr0.entry(prefix.clone()).or_default();
            for path in paths.as_slice() {
                dirs.push(base_dir.join(path));
            }
        }
        for (class, file) in &config.classmap {
            self.classmap.insert(class.clone(), base_dir.join(file));
        }
        for path in &config.exclude_from_classmap {
            self.exclude_from_classmap.push(base_dir.join(path));
        }

        tracing::debug!(
            base_dir = ?base_dir,
            psr4 = config.psr4.len(),
            psr0 = config.psr0.len(),
            classmap = config.classmap.len(),
            "merged package autoload section"
        );
    }

    /// Register a rewritten class's directory under a namespace prefix.
    ///
    /// The directory is prepended so the rewritten copy's location wins over
    /// any directory the prefix already maps to.
    pub fn register_extension(&mut self, prefix: &str, dir: &Path) {
        self.psr4
            .entry(prefix.to_string())
            .or_default()
            .insert(0, dir.to_path_buf());
    }

    /// Mark a path as excluded from flat classmap generation.
    pub fn exclude_from_classmap(&mut self, path: &Path) {
        let path = path.to_path_buf();
        if !self.exclude_from_classmap.contains(&path) {
            self.exclude_from_classmap.push(path);
        }
    }

    /// PSR-4 prefix → ordered directory list.
    pub fn psr4(&self) -> &BTreeMap<String, Vec<PathBuf>> {
        &self.psr4
    }

    /// PSR-0 prefix → ordered directory list.
    pub fn psr0(&self) -> &BTreeMap<String, Vec<PathBuf>> {
        &self.psr0
    }

    /// Explicit class → file table.
    pub fn classmap(&self) -> &BTreeMap<String, PathBuf> {
        &self.classmap
    }

    /// Paths excluded from flat classmap generation.
    pub fn excluded_from_classmap(&self) -> &[PathBuf] {
        &self.exclude_from_classmap
    }
}
