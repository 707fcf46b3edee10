//! Class-name-to-file resolution over an [`AutoloadMap`].

use std::path::{Path, PathBuf};

use extend_meta::ClassName;

use crate::error::{Error, Result};
use crate::map::AutoloadMap;

/// Maps a fully qualified class name to the file that defines it.
pub trait ClassResolver {
    /// Resolve a class to an absolute, canonicalized file path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownClass`] if no configured rule maps the class
    /// to an existing file.
    fn find_class_file(&self, class: &ClassName) -> Result<PathBuf>;
}

/// A [`ClassResolver`] probing an autoload map the way PHP class loaders
/// do: explicit classmap first, then PSR-4 (longest matching prefix,
/// directories in registration order), then PSR-0 (underscores in the class
/// name expand to directory separators).
#[derive(Debug, Clone)]
pub struct AutoloadResolver {
    map: AutoloadMap,
}

impl AutoloadResolver {
    /// Build a resolver owning the given map.
    pub fn new(map: AutoloadMap) -> Self {
        Self { map }
    }

    /// Build a resolver over a snapshot of a map that will be mutated later.
    pub fn snapshot(map: &AutoloadMap) -> Self {
        Self::new(map.clone())
    }

    fn find_psr4(&self, class: &ClassName) -> Result<Option<PathBuf>> {
        let name = class.as_str();

        // Longest matching prefix wins; the empty prefix is the fallback.
        let mut prefixes: Vec<&String> = self
            .map
            .psr4()
            .keys()
            .filter(|prefix| name.starts_with(prefix.as_str()))
            .collect();
        prefixes.sort_by_key(|prefix| std::cmp::Reverse(prefix.len()));

        for prefix in prefixes {
            let logical = format!("{}.php", name[prefix.len()..].replace('\\', "/"));
            for dir in &self.map.psr4()[prefix] {
                if let Some(path) = probe(&dir.join(&logical))? {
                    return Ok(Some(path));
                }
            }
        }
        Ok(None)
    }

    fn find_psr0(&self, class: &ClassName) -> Result<Option<PathBuf>> {
        let name = class.as_str();

        // PSR-0 keeps the full logical path under every matching prefix and
        // expands underscores in the final segment only.
        let logical = format!(
            "{}{}.php",
            class.namespace_prefix().replace('\\', "/"),
            class.simple_name().replace('_', "/")
        );

        let mut prefixes: Vec<&String> = self
            .map
            .psr0()
            .keys()
            .filter(|prefix| name.starts_with(prefix.as_str()))
            .collect();
        prefixes.sort_by_key(|prefix| std::cmp::Reverse(prefix.len()));

        for prefix in prefixes {
            for dir in &self.map.psr0()[prefix] {
                if let Some(path) = probe(&dir.join(&logical))? {
                    return Ok(Some(path));
                }
            }
        }
        Ok(None)
    }
}

impl ClassResolver for AutoloadResolver {
    fn find_class_file(&self, class: &ClassName) -> Result<PathBuf> {
        if let Some(file) = self.map.classmap().get(class.as_str()) {
            if let Some(path) = probe(file)? {
                tracing::debug!(class = %class, path = ?path, "resolved via classmap");
                return Ok(path);
            }
            tracing::debug!(
                class = %class,
                file = ?file,
                "classmap entry points at a missing file, falling back to prefix rules"
            );
        }

        if let Some(path) = self.find_psr4(class)? {
            tracing::debug!(class = %class, path = ?path, "resolved via PSR-4");
            return Ok(path);
        }

        if let Some(path) = self.find_psr0(class)? {
            tracing::debug!(class = %class, path = ?path, "resolved via PSR-0");
            return Ok(path);
        }

        Err(Error::UnknownClass {
            class: class.as_str().to_string(),
        })
    }
}

/// Return the canonicalized path if the candidate is an existing file.
fn probe(candidate: &Path) -> Result<Option<PathBuf>> {
    if !candidate.is_file() {
        return Ok(None);
    }
    dunce::canonicalize(candidate)
        .map(Some)
        .map_err(|e| Error::io(candidate, e))
}
