use std::path::PathBuf;

/// Errors that can occur while resolving class names.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No configured autoload rule maps this class to an existing file.
    #[error("class '{class}' is not known to the autoloader")]
    UnknownClass { class: String },

    /// I/O error while probing or canonicalizing a candidate path.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
