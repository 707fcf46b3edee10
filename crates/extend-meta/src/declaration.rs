//! Extension declarations and their cross-package merge semantics.

use crate::class_name::ClassName;

/// One "extend this class" request: the class to be displaced and the class
/// whose location will host the renamed copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionDeclaration {
    /// The class being overridden.
    pub old_class: ClassName,
    /// The class that will redefine it.
    pub new_class: ClassName,
}

/// An ordered set of declarations keyed by old class name.
///
/// Inserting a declaration for an already-present old class replaces the
/// earlier one in place: the last declaration wins, while the entry keeps
/// its original position in iteration order.
#[derive(Debug, Clone, Default)]
pub struct DeclarationSet {
    entries: Vec<ExtensionDeclaration>,
}

impl DeclarationSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a declaration, replacing any earlier one for the same old
    /// class. Returns `true` if an earlier declaration was replaced.
    pub fn insert(&mut self, declaration: ExtensionDeclaration) -> bool {
        if let Some(existing) = self
            .entries
            .iter_mut()
            .find(|e| e.old_class == declaration.old_class)
        {
            tracing::debug!(
                old_class = %declaration.old_class,
                previous = %existing.new_class,
                replacement = %declaration.new_class,
                "later declaration overrides earlier one"
            );
            *existing = declaration;
            true
        } else {
            self.entries.push(declaration);
            false
        }
    }

    /// Iterate declarations in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ExtensionDeclaration> {
        self.entries.iter()
    }

    /// Look up the declaration for an old class, if any.
    pub fn get(&self, old_class: &ClassName) -> Option<&ExtensionDeclaration> {
        self.entries.iter().find(|e| &e.old_class == old_class)
    }

    /// Number of declarations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a DeclarationSet {
    type Item = &'a ExtensionDeclaration;
    type IntoIter = std::slice::Iter<'a, ExtensionDeclaration>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
