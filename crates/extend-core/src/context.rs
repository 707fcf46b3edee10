//! Host-provided build state, passed in explicitly per event.

use std::path::PathBuf;

use extend_meta::Package;

/// A package together with the directory it is installed in.
///
/// Autoload paths in the package's metadata are relative to this directory.
#[derive(Debug, Clone)]
pub struct InstalledPackage {
    /// The package's declared metadata.
    pub package: Package,
    /// Absolute install directory.
    pub base_dir: PathBuf,
}

impl InstalledPackage {
    /// Pair a package with its install directory.
    pub fn new(package: Package, base_dir: impl Into<PathBuf>) -> Self {
        Self {
            package,
            base_dir: base_dir.into(),
        }
    }
}

/// Everything the extension pass needs from the host for one
/// autoload-dump event: the root package and the canonical package list.
///
/// Owned by the caller; nothing here is global state.
#[derive(Debug, Clone)]
pub struct BuildContext {
    /// The root package (the project being built).
    pub root: InstalledPackage,
    /// The canonical, deduplicated list of installed packages.
    pub packages: Vec<InstalledPackage>,
}

impl BuildContext {
    /// Assemble a context from the root package and the package list.
    pub fn new(root: InstalledPackage, packages: Vec<InstalledPackage>) -> Self {
        Self { root, packages }
    }
}
