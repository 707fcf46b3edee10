//! The rewrite pass: plan every declaration, then apply.

use std::fs;
use std::path::{Path, PathBuf};

use extend_autoload::{AutoloadMap, ClassResolver};
use extend_meta::{ClassName, DeclarationSet, ExtensionDeclaration};

use crate::error::{Error, Result};
use crate::fsops;
use crate::rename::{rename_class_declaration, OLD_SUFFIX};

/// One fully resolved declaration, ready to apply.
#[derive(Debug)]
struct PlannedRewrite {
    declaration: ExtensionDeclaration,
    /// Resolved file of the class being overridden.
    source: PathBuf,
    /// Directory hosting the copy (the new class's directory).
    target_dir: PathBuf,
    /// The `_Old` copy's path inside `target_dir`.
    target: PathBuf,
    /// Namespace prefix to register for the copy.
    namespace_prefix: String,
}

/// Record of one applied declaration.
#[derive(Debug, Clone)]
pub struct RewrittenClass {
    /// The class that was displaced.
    pub old_class: ClassName,
    /// The class declared to redefine it.
    pub new_class: ClassName,
    /// File the copy was taken from.
    pub source: PathBuf,
    /// The written `_Old` copy.
    pub target: PathBuf,
    /// Namespace prefix registered for the copy's directory.
    pub namespace_prefix: String,
    /// Whether a class declaration was actually renamed inside the copy.
    pub renamed: bool,
    /// Whether the target already held the desired bytes and the write was
    /// skipped.
    pub up_to_date: bool,
}

/// A non-fatal condition surfaced by the rewrite pass.
#[derive(Debug, Clone)]
pub enum RewriteWarning {
    /// The copied file contains no class declaration matching the old
    /// class's simple name; the copy was written unrenamed.
    RenamePatternMissed {
        old_class: ClassName,
        target: PathBuf,
    },
}

impl std::fmt::Display for RewriteWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RenamePatternMissed { old_class, target } => write!(
                f,
                "no class declaration matching '{}' found in {}; copy left unrenamed",
                old_class.simple_name(),
                target.display()
            ),
        }
    }
}

/// Outcome of one rewrite pass.
#[derive(Debug, Clone, Default)]
pub struct RewriteReport {
    /// Applied declarations, in declaration order.
    pub rewritten: Vec<RewrittenClass>,
    /// Non-fatal conditions the host should surface.
    pub warnings: Vec<RewriteWarning>,
}

/// Applies extension declarations to the filesystem and the autoload map.
#[derive(Debug, Clone, Default)]
pub struct ClassExtensionRewriter;

impl ClassExtensionRewriter {
    /// Create a rewriter.
    pub fn new() -> Self {
        Self
    }

    /// Run the pass: resolve every declaration, then write one `_Old` copy
    /// per declaration and register it in the autoload map.
    ///
    /// Resolution failures abort before anything is written. An I/O failure
    /// mid-apply aborts immediately; copies applied earlier in the same run
    /// stay on disk (each individual write is atomic).
    pub fn rewrite(
        &self,
        declarations: &DeclarationSet,
        resolver: &dyn ClassResolver,
        autoload: &mut AutoloadMap,
    ) -> Result<RewriteReport> {
        let plans = plan(declarations, resolver)?;

        let mut report = RewriteReport::default();
        for planned in plans {
            apply(&planned, autoload, &mut report)?;
        }

        tracing::info!(
            rewritten = report.rewritten.len(),
            warnings = report.warnings.len(),
            "class extension pass complete"
        );
        Ok(report)
    }
}

/// Resolve every declaration up front so a bad one aborts with zero writes.
fn plan(
    declarations: &DeclarationSet,
    resolver: &dyn ClassResolver,
) -> Result<Vec<PlannedRewrite>> {
    declarations
        .iter()
        .map(|declaration| {
            let source = resolver.find_class_file(&declaration.old_class)?;
            let new_file = resolver.find_class_file(&declaration.new_class)?;

            let target_dir = new_file
                .parent()
                .map(Path::to_path_buf)
                .ok_or_else(|| Error::TargetPath {
                    path: new_file.clone(),
                })?;
            let target = target_dir.join(old_copy_name(&new_file)?);

            Ok(PlannedRewrite {
                namespace_prefix: declaration.old_class.namespace_prefix().to_string(),
                declaration: declaration.clone(),
                source,
                target_dir,
                target,
            })
        })
        .collect()
}

/// `Widget.php` → `Widget_Old.php`, keeping whatever extension the new
/// class's file carries.
fn old_copy_name(new_file: &Path) -> Result<String> {
    let stem = new_file
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| Error::TargetPath {
            path: new_file.to_path_buf(),
        })?;

    Ok(match new_file.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{stem}{OLD_SUFFIX}.{ext}"),
        None => format!("{stem}{OLD_SUFFIX}"),
    })
}

fn apply(
    planned: &PlannedRewrite,
    autoload: &mut AutoloadMap,
    report: &mut RewriteReport,
) -> Result<()> {
    let original = fs::read_to_string(&planned.source)
        .map_err(|e| Error::io(&planned.source, e))?;

    let old_class = &planned.declaration.old_class;
    let (content, renamed) = match rename_class_declaration(&original, old_class.simple_name()) {
        Some(updated) => (updated, true),
        None => {
            tracing::warn!(
                class = %old_class,
                target = ?planned.target,
                "no matching class declaration; copy left unrenamed"
            );
            report.warnings.push(RewriteWarning::RenamePatternMissed {
                old_class: old_class.clone(),
                target: planned.target.clone(),
            });
            (original, false)
        }
    };

    // Re-running against an already-correct copy skips the write.
    let up_to_date = planned.target.is_file()
        && fsops::file_checksum(&planned.target)? == fsops::content_checksum(content.as_bytes());
    if up_to_date {
        tracing::debug!(target = ?planned.target, "target already up to date");
    } else {
        fsops::write_atomic(&planned.target, content.as_bytes())?;
    }

    autoload.register_extension(&planned.namespace_prefix, &planned.target_dir);
    autoload.exclude_from_classmap(&planned.target);

    tracing::info!(
        old_class = %old_class,
        new_class = %planned.declaration.new_class,
        target = ?planned.target,
        prefix = %planned.namespace_prefix,
        "registered class extension"
    );

    report.rewritten.push(RewrittenClass {
        old_class: old_class.clone(),
        new_class: planned.declaration.new_class.clone(),
        source: planned.source.clone(),
        target: planned.target.clone(),
        namespace_prefix: planned.namespace_prefix.clone(),
        renamed,
        up_to_date,
    });
    Ok(())
}
