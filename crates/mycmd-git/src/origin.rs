//! Origin remote lookup and validation

use git2::{ErrorCode, Repository};
use mycmd_fs::NormalizedPath;

use crate::url::urls_match;
use crate::{Error, Result};

/// Outcome of comparing a checkout's remote against the expected URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OriginStatus {
    /// The remote URL points at the expected repository.
    Matches { url: String },
    /// The directory is not inside a git repository, e.g. an unpacked build archive.
    NotARepository,
    /// The repository has no remote with that name.
    NoRemote { name: String },
    /// The remote points somewhere else.
    Mismatch { expected: String, actual: String },
}

impl OriginStatus {
    /// Whether setup may proceed without an override.
    pub fn is_acceptable(&self) -> bool {
        !matches!(self, Self::Mismatch { .. })
    }
}

/// Look up the URL of remote `name` for the repository containing `path`.
///
/// Returns `Ok(None)` when `path` is not inside a repository or the remote
/// does not exist.
pub fn remote_url(path: &NormalizedPath, name: &str) -> Result<Option<String>> {
    let repo = match Repository::discover(path.to_native()) {
        Ok(repo) => repo,
        Err(e) if e.code() == ErrorCode::NotFound => {
            tracing::debug!(path = %path, "not inside a git repository");
            return Ok(None);
        }
        Err(e) => return Err(e.into()),
    };

    let remote = match repo.find_remote(name) {
        Ok(remote) => remote,
        Err(e) if e.code() == ErrorCode::NotFound || e.code() == ErrorCode::InvalidSpec => {
            tracing::debug!(remote = name, "remote not configured");
            return Ok(None);
        }
        Err(e) => return Err(e.into()),
    };

    match remote.url() {
        Some(url) => Ok(Some(url.to_string())),
        None => Err(Error::RemoteWithoutUrl {
            name: name.to_string(),
        }),
    }
}

/// Compare the `origin` remote of the repository at `path` with `expected`.
pub fn validate_origin(path: &NormalizedPath, expected: &str) -> Result<OriginStatus> {
    let in_repo = match Repository::discover(path.to_native()) {
        Ok(_) => true,
        Err(e) if e.code() == ErrorCode::NotFound => false,
        Err(e) => return Err(e.into()),
    };
    if !in_repo {
        return Ok(OriginStatus::NotARepository);
    }

    let status = match remote_url(path, "origin")? {
        None => OriginStatus::NoRemote {
            name: "origin".to_string(),
        },
        Some(actual) if urls_match(&actual, expected) => OriginStatus::Matches { url: actual },
        Some(actual) => OriginStatus::Mismatch {
            expected: expected.to_string(),
            actual,
        },
    };

    tracing::debug!(?status, "validated origin");
    Ok(status)
}
