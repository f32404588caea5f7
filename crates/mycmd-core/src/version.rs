//! README version line: `Version: 1.0 (as on Sep 25, 2025)`
//!
//! Versions advance in steps of one tenth. They are kept as an integer count
//! of tenths so `1.9` bumps to `2.0` without float noise.

use std::fmt;
use std::path::Path;

use chrono::NaiveDate;

use crate::{Error, Result};

/// Date format on the version line, e.g. `Sep 25, 2025`.
pub const VERSION_DATE_FORMAT: &str = "%b %d, %Y";

/// Zero-based index of the version line within the README.
pub const VERSION_LINE: usize = 1;

/// A package version with one decimal place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ReadmeVersion {
    tenths: u64,
}

impl ReadmeVersion {
    pub fn from_tenths(tenths: u64) -> Self {
        Self { tenths }
    }

    /// Parse a decimal version, rounding to one decimal place.
    pub fn parse(input: &str) -> std::result::Result<Self, String> {
        let value: f64 = input
            .parse()
            .map_err(|_| format!("'{input}' is not a number"))?;
        if !value.is_finite() || value < 0.0 {
            return Err(format!("'{input}' is not a valid version"));
        }
        Ok(Self {
            tenths: (value * 10.0).round() as u64,
        })
    }

    /// The next version, one tenth higher.
    pub fn bump(self) -> Self {
        Self {
            tenths: self.tenths + 1,
        }
    }

    /// The version line for this version on `date`.
    pub fn line(&self, date: NaiveDate) -> String {
        format!("Version: {} (as on {})", self, date.format(VERSION_DATE_FORMAT))
    }
}

impl fmt::Display for ReadmeVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.tenths / 10, self.tenths % 10)
    }
}

/// Result of bumping the README.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BumpedReadme {
    pub previous: ReadmeVersion,
    pub current: ReadmeVersion,
    /// Full README text with the version line replaced.
    pub content: String,
}

/// Read the version from the second line of `content`.
pub fn read_version(content: &str, path: &Path) -> Result<ReadmeVersion> {
    let error = |message: String| Error::ReadmeVersion {
        path: path.to_path_buf(),
        message,
    };

    let line = content
        .lines()
        .nth(VERSION_LINE)
        .ok_or_else(|| error("README has fewer than two lines".into()))?;

    let mut tokens = line.split_whitespace();
    match tokens.next() {
        Some("Version:") => {}
        _ => {
            return Err(error(format!(
                "expected 'Version: <x.y> (as on <date>)', found '{line}'"
            )));
        }
    }
    let raw = tokens
        .next()
        .ok_or_else(|| error("version number is missing".into()))?;

    ReadmeVersion::parse(raw).map_err(error)
}

/// Bump the version on the second line of `content`.
///
/// Every other line, including its terminator, is kept byte-for-byte. The
/// version line keeps its own terminator.
pub fn bump_readme(content: &str, path: &Path, date: NaiveDate) -> Result<BumpedReadme> {
    let previous = read_version(content, path)?;
    let current = previous.bump();
    let new_line = current.line(date);

    let mut out = String::with_capacity(content.len() + 8);
    for (idx, segment) in content.split_inclusive('\n').enumerate() {
        if idx == VERSION_LINE {
            let body = segment.trim_end_matches(['\r', '\n']);
            out.push_str(&new_line);
            out.push_str(&segment[body.len()..]);
        } else {
            out.push_str(segment);
        }
    }

    tracing::debug!(%previous, %current, "bumped README version");
    Ok(BumpedReadme {
        previous,
        current,
        content: out,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, 3).unwrap()
    }

    #[rstest]
    #[case("1.0", "1.1")]
    #[case("1.9", "2.0")]
    #[case("0.0", "0.1")]
    #[case("2", "2.1")]
    #[case("1.25", "1.4")]
    fn bump_adds_one_tenth(#[case] input: &str, #[case] expected: &str) {
        let version = ReadmeVersion::parse(input).unwrap();
        assert_eq!(version.bump().to_string(), expected);
    }

    #[rstest]
    #[case("abc")]
    #[case("-1.0")]
    #[case("NaN")]
    #[case("inf")]
    fn bad_versions_are_rejected(#[case] input: &str) {
        assert!(ReadmeVersion::parse(input).is_err());
    }

    #[test]
    fn line_uses_short_month() {
        let line = ReadmeVersion::from_tenths(11).line(date());
        assert_eq!(line, "Version: 1.1 (as on Oct 03, 2025)");
    }

    #[test]
    fn bump_replaces_only_second_line() {
        let readme = "mycmd\nVersion: 1.0 (as on Sep 25, 2025)\nUsage: ...\n";
        let bumped = bump_readme(readme, Path::new("README.txt"), date()).unwrap();

        assert_eq!(
            bumped.content,
            "mycmd\nVersion: 1.1 (as on Oct 03, 2025)\nUsage: ...\n"
        );
        assert_eq!(bumped.previous.to_string(), "1.0");
    }

    #[test]
    fn bump_keeps_crlf_terminators() {
        let readme = "mycmd\r\nVersion: 1.9 (as on Sep 25, 2025)\r\nend";
        let bumped = bump_readme(readme, Path::new("README.txt"), date()).unwrap();
        assert_eq!(
            bumped.content,
            "mycmd\r\nVersion: 2.0 (as on Oct 03, 2025)\r\nend"
        );
    }

    #[test]
    fn version_line_without_terminator() {
        let readme = "mycmd\nVersion: 3.4 (as on Sep 25, 2025)";
        let bumped = bump_readme(readme, Path::new("README.txt"), date()).unwrap();
        assert!(bumped.content.ends_with("Version: 3.5 (as on Oct 03, 2025)"));
    }

    #[test]
    fn one_line_readme_fails() {
        let err = read_version("mycmd\n", Path::new("README.txt")).unwrap_err();
        assert!(err.to_string().contains("fewer than two lines"));
    }

    #[test]
    fn wrong_label_fails() {
        let err = read_version("mycmd\nRelease 1.0\n", Path::new("README.txt")).unwrap_err();
        assert!(err.to_string().contains("expected 'Version:"));
    }
}
