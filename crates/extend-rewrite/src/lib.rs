//! Class extension rewriter.
//!
//! Takes the merged extension declarations, resolves both ends of every
//! declaration through an autoloader, then writes one `_Old` copy per
//! declaration with the class declaration inside renamed, and registers the
//! copy's directory under the old class's namespace prefix.
//!
//! Resolution is staged: every declaration is resolved into a plan before
//! the first byte hits disk, so a misspelled class name aborts the run with
//! no files written.

pub mod error;
pub mod fsops;
pub mod rename;
pub mod rewriter;

pub use error::{Error, Result};
pub use rewriter::{ClassExtensionRewriter, RewriteReport, RewriteWarning, RewrittenClass};
