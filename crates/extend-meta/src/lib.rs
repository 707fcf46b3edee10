//! Package metadata and class-name schema for the class extension pass.
//!
//! Models the composer-shaped package description this workspace consumes:
//! the package name, its `autoload` section, and the `extra` table that may
//! carry an extension map under the reserved [`EXTEND_CLASS_KEY`] key.

pub mod class_name;
pub mod declaration;
pub mod error;
pub mod package;

pub use class_name::ClassName;
pub use declaration::{DeclarationSet, ExtensionDeclaration};
pub use error::{Error, Result};
pub use package::{AutoloadConfig, Package, PathList};

/// Reserved `extra` key holding the old-class → new-class extension map.
pub const EXTEND_CLASS_KEY: &str = "composer-extend-class";
