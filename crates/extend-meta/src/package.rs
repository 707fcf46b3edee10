//! Composer-shaped package descriptions.
//!
//! A [`Package`] carries the subset of a package's declared metadata this
//! workspace consumes: the name, the `autoload` section, and the free-form
//! `extra` table. The extension map is read from `extra` under the reserved
//! [`EXTEND_CLASS_KEY`](crate::EXTEND_CLASS_KEY) key:
//!
//! ```json
//! {
//!     "name": "app/app",
//!     "autoload": { "psr-4": { "App\\": "src/" } },
//!     "extra": {
//!         "composer-extend-class": {
//!             "Acme\\Widgets\\Widget": "App\\Widget"
//!         }
//!     }
//! }
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::class_name::ClassName;
use crate::declaration::ExtensionDeclaration;
use crate::error::{Error, Result};
use crate::EXTEND_CLASS_KEY;

/// One or more directory paths, as composer's autoload sections allow both
/// `"src/"` and `["src/", "lib/"]` forms.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum PathList {
    /// A single directory.
    One(String),
    /// An ordered list of directories.
    Many(Vec<String>),
}

impl PathList {
    /// View the entry as an ordered slice of directories.
    pub fn as_slice(&self) -> &[String] {
        match self {
            Self::One(path) => std::slice::from_ref(path),
            Self::Many(paths) => paths,
        }
    }
}

/// A package's declared `autoload` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct AutoloadConfig {
    /// PSR-4 prefix → directory root(s), paths relative to the package dir.
    #[serde(rename = "psr-4", default, skip_serializing_if = "BTreeMap::is_empty")]
    pub psr4: BTreeMap<String, PathList>,

    /// PSR-0 prefix → directory root(s), paths relative to the package dir.
    #[serde(rename = "psr-0", default, skip_serializing_if = "BTreeMap::is_empty")]
    pub psr0: BTreeMap<String, PathList>,

    /// Explicit class → file entries. Composer builds these by scanning the
    /// declared paths at dump time; here the table is declared directly.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub classmap: BTreeMap<String, String>,

    /// Paths the flat classmap scan must skip.
    #[serde(
        rename = "exclude-from-classmap",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub exclude_from_classmap: Vec<String>,
}

impl AutoloadConfig {
    /// Whether the section declares nothing at all.
    pub fn is_empty(&self) -> bool {
        self.psr4.is_empty()
            && self.psr0.is_empty()
            && self.classmap.is_empty()
            && self.exclude_from_classmap.is_empty()
    }
}

/// A package description as handed over by the host package manager.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Package {
    /// Package name (`vendor/name`).
    pub name: String,

    /// Declared version, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// The package's autoload section.
    #[serde(default)]
    pub autoload: AutoloadConfig,

    /// Free-form `extra` table.
    #[serde(default, skip_serializing_if = "serde_json::Map::is_empty")]
    pub extra: serde_json::Map<String, Value>,
}

impl Package {
    /// Parse a package description from a JSON string.
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Extract this package's extension declarations, in declared order.
    ///
    /// An absent [`EXTEND_CLASS_KEY`](crate::EXTEND_CLASS_KEY) key yields an
    /// empty list. A present key with a non-object value, or an entry whose
    /// key or value is not a valid class name, is an error rather than a
    /// silent skip.
    pub fn extension_declarations(&self) -> Result<Vec<ExtensionDeclaration>> {
        let Some(raw) = self.extra.get(EXTEND_CLASS_KEY) else {
            return Ok(Vec::new());
        };

        let map = raw
            .as_object()
            .ok_or_else(|| Error::ExtensionMapNotObject {
                package: self.name.clone(),
                key: EXTEND_CLASS_KEY,
            })?;

        let mut declarations = Vec::with_capacity(map.len());
        for (old, value) in map {
            let new = value.as_str().ok_or_else(|| Error::InvalidDeclaration {
                package: self.name.clone(),
                entry: old.clone(),
                reason: "replacement class name must be a string".to_string(),
            })?;

            let old_class = ClassName::parse(old).map_err(|e| Error::InvalidDeclaration {
                package: self.name.clone(),
                entry: old.clone(),
                reason: e.to_string(),
            })?;
            let new_class = ClassName::parse(new).map_err(|e| Error::InvalidDeclaration {
                package: self.name.clone(),
                entry: old.clone(),
                reason: e.to_string(),
            })?;

            declarations.push(ExtensionDeclaration {
                old_class,
                new_class,
            });
        }

        tracing::debug!(
            package = %self.name,
            count = declarations.len(),
            "collected extension declarations"
        );
        Ok(declarations)
    }
}
