//! Git repository fixtures.

use std::path::Path;

/// Initialises a real git repository using `git2` (no commits, no remotes).
///
/// # Panics
/// Panics if `git2::Repository::init` fails.
pub fn real_git_repo(path: &Path) -> git2::Repository {
    git2::Repository::init(path).unwrap_or_else(|e| {
        panic!(
            "real_git_repo: failed to init repository at {}: {e}",
            path.display()
        )
    })
}

/// Initialises a real git repository whose `origin` remote points at `url`.
///
/// Nothing is fetched; only the remote configuration is written.
///
/// # Panics
/// Panics if the repository or the remote cannot be created.
pub fn real_git_repo_with_origin(path: &Path, url: &str) -> git2::Repository {
    let repo = real_git_repo(path);
    repo.remote("origin", url)
        .unwrap_or_else(|e| panic!("real_git_repo_with_origin: failed to add origin {url}: {e}"));
    repo
}
