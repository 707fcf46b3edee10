use std::path::PathBuf;

/// Errors that can occur during the rewrite pass.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A declared class could not be resolved to a file.
    #[error("class resolution failed: {0}")]
    Resolution(#[from] extend_autoload::Error),

    /// I/O error while copying or writing a rewritten file.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Advisory lock on the staging file could not be acquired.
    #[error("lock acquisition failed for {path}")]
    LockFailed { path: PathBuf },

    /// The resolved new-class file has no usable directory or file name.
    #[error("cannot derive a target path next to {path}")]
    TargetPath { path: PathBuf },
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
