/// Errors that can occur while reading package metadata.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Failed to parse a package description from JSON.
    #[error("failed to parse package metadata: {0}")]
    PackageParse(#[from] serde_json::Error),

    /// A string is not a valid fully qualified class name.
    #[error("invalid class name '{name}': {reason}")]
    InvalidClassName { name: String, reason: String },

    /// The reserved extension key is present but its value is not an object.
    #[error("package '{package}' declares '{key}' but its value is not an object")]
    ExtensionMapNotObject { package: String, key: &'static str },

    /// An entry in the extension map is malformed.
    #[error("invalid extension entry '{entry}' in package '{package}': {reason}")]
    InvalidDeclaration {
        package: String,
        entry: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
