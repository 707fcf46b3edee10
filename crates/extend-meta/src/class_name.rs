//! Fully qualified PHP class names.
//!
//! A [`ClassName`] is a backslash-separated sequence of PHP identifier
//! segments (`Vendor\Package\Widget`). A single leading backslash is
//! accepted on input and stripped, matching how autoloaders normalize
//! lookups.

use crate::error::{Error, Result};

/// A validated, normalized fully qualified class name.
///
/// Stored without a leading separator. The final segment is the simple
/// class name; everything before it (including the trailing separator) is
/// the namespace prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassName {
    inner: String,
}

impl ClassName {
    /// Parse and validate a fully qualified class name.
    ///
    /// Accepts an optional single leading backslash. Each segment must be a
    /// valid PHP identifier: a letter, underscore, or byte ≥ 0x80, followed
    /// by the same set plus digits.
    pub fn parse(raw: &str) -> Result<Self> {
        let normalized = raw.strip_prefix('\\').unwrap_or(raw);

        if normalized.is_empty() {
            return Err(Error::InvalidClassName {
                name: raw.to_string(),
                reason: "name is empty".to_string(),
            });
        }

        for segment in normalized.split('\\') {
            validate_segment(raw, segment)?;
        }

        Ok(Self {
            inner: normalized.to_string(),
        })
    }

    /// The normalized name, without a leading separator.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// The simple class name: the segment after the last separator.
    pub fn simple_name(&self) -> &str {
        match self.inner.rfind('\\') {
            Some(idx) => &self.inner[idx + 1..],
            None => &self.inner,
        }
    }

    /// The enclosing namespace, including the trailing separator
    /// (`"Vendor\Package\"`). Empty for a global class.
    pub fn namespace_prefix(&self) -> &str {
        match self.inner.rfind('\\') {
            Some(idx) => &self.inner[..=idx],
            None => "",
        }
    }
}

fn validate_segment(raw: &str, segment: &str) -> Result<()> {
    let mut chars = segment.chars();

    let first = chars.next().ok_or_else(|| Error::InvalidClassName {
        name: raw.to_string(),
        reason: "empty namespace segment".to_string(),
    })?;
    if !is_identifier_start(first) {
        return Err(Error::InvalidClassName {
            name: raw.to_string(),
            reason: format!("segment '{segment}' does not start with a letter or underscore"),
        });
    }

    for c in chars {
        if !is_identifier_continue(c) {
            return Err(Error::InvalidClassName {
                name: raw.to_string(),
                reason: format!("segment '{segment}' contains invalid character '{c}'"),
            });
        }
    }

    Ok(())
}

// PHP's lexer treats any byte >= 0x80 as an identifier character.
fn is_identifier_start(c: char) -> bool {
    c == '_' || c.is_ascii_alphabetic() || (c as u32) >= 0x80
}

fn is_identifier_continue(c: char) -> bool {
    is_identifier_start(c) || c.is_ascii_digit()
}

impl std::fmt::Display for ClassName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl std::str::FromStr for ClassName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
