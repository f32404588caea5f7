//! SHA-256 checksum utilities
//!
//! One canonical format (`sha256:<hex>`) used to decide whether a rewrite
//! changed anything and to report the digest of a built archive.

use sha2::{Digest, Sha256};

use crate::{NormalizedPath, Result, io};

/// Prefix for all checksums produced by this module
const PREFIX: &str = "sha256:";

/// Compute the SHA-256 checksum of raw bytes.
pub fn compute_checksum(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    format!("{}{:x}", PREFIX, hasher.finalize())
}

/// Compute the SHA-256 checksum of string content.
pub fn compute_content_checksum(content: &str) -> String {
    compute_checksum(content.as_bytes())
}

/// Compute the SHA-256 checksum of a file's contents.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn compute_file_checksum(path: &NormalizedPath) -> Result<String> {
    let content = io::read_bytes(path)?;
    Ok(compute_checksum(&content))
}
