//! Error types for mycmd-git

/// Result type for mycmd-git operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in mycmd-git operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    #[error("Remote '{name}' has no URL")]
    RemoteWithoutUrl { name: String },
}
