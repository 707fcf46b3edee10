/// Errors surfaced to the host from the extension pass.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Package metadata was malformed.
    #[error("metadata error: {0}")]
    Meta(#[from] extend_meta::Error),

    /// A class could not be resolved through the autoload map.
    #[error("autoload error: {0}")]
    Autoload(#[from] extend_autoload::Error),

    /// The rewrite pass failed.
    #[error("rewrite error: {0}")]
    Rewrite(#[from] extend_rewrite::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
