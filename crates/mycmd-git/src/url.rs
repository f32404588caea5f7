//! Remote URL normalization
//!
//! The same repository is reachable as `https://github.com/u/r.git`,
//! `git@github.com:u/r` or `ssh://git@github.com/u/r/`. Comparison happens on
//! a `host/path` form with scheme, user, port, trailing `/` and `.git` removed.

/// Reduce a remote URL to `host/path` for comparison.
///
/// The host is lower-cased; the path keeps its case since some servers treat
/// it as case-sensitive.
pub fn normalize_remote_url(url: &str) -> String {
    let url = url.trim();
    let has_scheme = url.contains("://");

    let without_scheme = match url.find("://") {
        Some(idx) => &url[idx + 3..],
        None => url,
    };

    let without_user = match without_scheme.find('@') {
        Some(at) if !without_scheme[..at].contains('/') => &without_scheme[at + 1..],
        _ => without_scheme,
    };

    // scp-like syntax is host:path; URL syntax is host[:port]/path
    let (host, path) = match (without_user.find(':'), without_user.find('/')) {
        (Some(colon), Some(slash)) if colon < slash && !has_scheme => {
            (&without_user[..colon], &without_user[colon + 1..])
        }
        (Some(colon), None) if !has_scheme => {
            (&without_user[..colon], &without_user[colon + 1..])
        }
        (_, Some(slash)) => (&without_user[..slash], &without_user[slash + 1..]),
        (_, None) => (without_user, ""),
    };

    let host = if has_scheme {
        host.split(':').next().unwrap_or(host)
    } else {
        host
    };

    let path = path.trim_end_matches('/');
    let path = path.strip_suffix(".git").unwrap_or(path);
    let path = path.trim_matches('/');

    if path.is_empty() {
        host.to_lowercase()
    } else {
        format!("{}/{}", host.to_lowercase(), path)
    }
}

/// Whether two remote URLs point at the same repository.
pub fn urls_match(a: &str, b: &str) -> bool {
    normalize_remote_url(a) == normalize_remote_url(b)
}
