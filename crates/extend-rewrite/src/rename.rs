//! Textual rename of a class declaration inside a copied file.
//!
//! The match is anchored at start of line on a class-declaration pattern:
//! optional `abstract`/`final`/`readonly` modifiers, the `class` keyword,
//! the target name, then anything up to the opening brace (so multi-line
//! `extends`/`implements` clauses are covered). Only the first matching
//! declaration is renamed; later ones are left untouched.
//!
//! This is a textual transformation, not a parse. A commented-out
//! declaration at the start of a line, or an attribute on the same line as
//! the `class` keyword, can defeat it; callers surface the no-match case as
//! a warning instead of guessing.

use regex::Regex;

/// Suffix appended to the renamed declaration.
pub const OLD_SUFFIX: &str = "_Old";

/// Rename the first matching `class <name>` declaration to `<name>_Old`.
///
/// Returns `None` if no declaration of `name` matches, leaving the caller
/// to report the copy as unrenamed.
pub fn rename_class_declaration(content: &str, name: &str) -> Option<String> {
    let pattern = format!(
        r"(?m)^[ \t]*(?:(?:abstract|final|readonly)\s+)*class\s+({})\b[^{{]*\{{",
        regex::escape(name)
    );
    // `name` is a validated, escaped identifier; the pattern always compiles.
    let re = Regex::new(&pattern).expect("invalid class declaration pattern");

    let caps = re.captures(content)?;
    let name_match = caps.get(1).expect("pattern has one capture group");

    let mut renamed = String::with_capacity(content.len() + OLD_SUFFIX.len());
    renamed.push_str(&content[..name_match.end()]);
    renamed.push_str(OLD_SUFFIX);
    renamed.push_str(&content[name_match.end()..]);
    Some(renamed)
}
