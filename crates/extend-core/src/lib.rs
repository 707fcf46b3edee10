//! Orchestration of the class extension pass.
//!
//! The host package manager hands over its resolved state once per
//! autoload-dump event as a [`BuildContext`]: the canonical package list
//! plus the root package, each with its install directory. The
//! [`pre_autoload_dump`] hook merges every package's extension
//! declarations (last one wins per old class), builds the aggregated
//! autoload map, runs the rewriter, and returns the mutated map for the
//! host to persist.
//!
//! ```no_run
//! use std::path::PathBuf;
//! use extend_core::{BuildContext, InstalledPackage, pre_autoload_dump};
//! use extend_meta::Package;
//!
//! # fn main() -> extend_core::Result<()> {
//! let root = InstalledPackage::new(
//!     Package::from_json(r#"{ "name": "app/app" }"#)?,
//!     PathBuf::from("/project"),
//! );
//! let context = BuildContext::new(root, vec![]);
//! let outcome = pre_autoload_dump(&context)?;
//! for warning in &outcome.report.warnings {
//!     eprintln!("warning: {warning}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod context;
pub mod error;
pub mod hook;
pub mod logging;

pub use context::{BuildContext, InstalledPackage};
pub use error::{Error, Result};
pub use hook::{collect_declarations, pre_autoload_dump, PreDumpOutcome};
