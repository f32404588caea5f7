//! Error types for mycmd-core

use std::path::PathBuf;

/// Result type for mycmd-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in mycmd-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The directory does not look like the package directory
    #[error("Missing required files in {dir}: {}", .missing.join(", "))]
    MissingFiles { dir: PathBuf, missing: Vec<String> },

    /// The README version line could not be parsed
    #[error("Cannot read version from line 2 of {path}: {message}")]
    ReadmeVersion { path: PathBuf, message: String },

    /// The checkout was cloned from an unexpected remote
    #[error("Git origin {actual} does not match the expected {expected}")]
    OriginMismatch { expected: String, actual: String },

    /// A color given on the command line is malformed
    #[error("Invalid color '{input}': {reason}")]
    InvalidColor { input: String, reason: String },

    /// A prompt name given on the command line is unusable
    #[error("Invalid prompt name '{input}': {reason}")]
    InvalidName { input: String, reason: String },

    /// A file named on the command line does not exist
    #[error("File '{path}' not found")]
    FileNotFound { path: PathBuf },

    /// No home directory to locate the shell startup file in
    #[error("Cannot determine the home directory; pass the startup file explicitly")]
    NoHomeDir,

    /// An input source ran out of answers
    #[error("No answer left for prompt '{prompt}'")]
    InputExhausted { prompt: String },

    /// Archive creation failed
    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    // Transparent wrappers for underlying crate errors
    /// Filesystem error from mycmd-fs
    #[error(transparent)]
    Fs(#[from] mycmd_fs::Error),

    /// Block syntax error from mycmd-blocks
    #[error(transparent)]
    Blocks(#[from] mycmd_blocks::Error),

    /// Git error from mycmd-git
    #[error(transparent)]
    Git(#[from] mycmd_git::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
