//! The pre-autoload-dump event handler.

use extend_autoload::{AutoloadMap, AutoloadResolver};
use extend_meta::DeclarationSet;
use extend_rewrite::{ClassExtensionRewriter, RewriteReport};

use crate::context::BuildContext;
use crate::error::Result;

/// What the hook hands back to the host: the autoload map with the
/// extension entries applied, and the pass's report.
#[derive(Debug)]
pub struct PreDumpOutcome {
    /// The autoload configuration to persist.
    pub autoload: AutoloadMap,
    /// Rewritten classes and surfaced warnings.
    pub report: RewriteReport,
}

/// Handle the host's pre-autoload-dump event.
///
/// Runs exactly once per event, synchronously: builds the aggregated
/// autoload map, merges declarations across the package list plus the root
/// package, resolves and applies every declaration, and returns the
/// updated map before the event handler returns.
pub fn pre_autoload_dump(context: &BuildContext) -> Result<PreDumpOutcome> {
    let mut autoload = AutoloadMap::new();
    for installed in &context.packages {
        autoload.add_package(&installed.package.autoload, &installed.base_dir);
    }
    autoload.add_package(&context.root.package.autoload, &context.root.base_dir);

    let declarations = collect_declarations(context)?;
    if declarations.is_empty() {
        tracing::debug!("no extension declarations; autoload map left unchanged");
        return Ok(PreDumpOutcome {
            autoload,
            report: RewriteReport::default(),
        });
    }

    tracing::info!(count = declarations.len(), "running class extension pass");
    let resolver = AutoloadResolver::snapshot(&autoload);
    let report = ClassExtensionRewriter::new().rewrite(&declarations, &resolver, &mut autoload)?;

    Ok(PreDumpOutcome { autoload, report })
}

/// Merge extension declarations from every installed package, then the
/// root package. A later package's declaration for an already-declared old
/// class wins.
pub fn collect_declarations(context: &BuildContext) -> Result<DeclarationSet> {
    let mut declarations = DeclarationSet::new();
    for installed in context.packages.iter().chain([&context.root]) {
        for declaration in installed.package.extension_declarations()? {
            declarations.insert(declaration);
        }
    }
    Ok(declarations)
}
