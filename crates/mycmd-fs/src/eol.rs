//! Line-ending detection and conversion
//!
//! Works on raw bytes so files that are not valid UTF-8 convert just as well.

use std::fmt;

/// Line terminator style of a file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LineEnding {
    /// Unix `\n`
    #[default]
    Lf,
    /// Windows `\r\n`
    Crlf,
}

impl LineEnding {
    /// Detect the style of `content`: CRLF if any `\r\n` pair occurs, LF otherwise.
    pub fn detect(content: &[u8]) -> Self {
        if content.windows(2).any(|pair| pair == b"\r\n") {
            Self::Crlf
        } else {
            Self::Lf
        }
    }

    /// Detect the style of a text document.
    pub fn detect_text(content: &str) -> Self {
        Self::detect(content.as_bytes())
    }

    /// The terminator itself.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::Crlf => "\r\n",
        }
    }

    /// The opposite style, used when toggling a file.
    pub fn other(&self) -> Self {
        match self {
            Self::Lf => Self::Crlf,
            Self::Crlf => Self::Lf,
        }
    }

    /// Short name shown to users.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Lf => "LF",
            Self::Crlf => "CRLF",
        }
    }
}

impl fmt::Display for LineEnding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Replace every `\r\n` with `\n`. Lone `\r` bytes are left alone.
pub fn crlf_to_lf(content: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(content.len());
    let mut iter = content.iter().peekable();
    while let Some(&byte) = iter.next() {
        if byte == b'\r' && iter.peek() == Some(&&b'\n') {
            continue;
        }
        out.push(byte);
    }
    out
}

/// Replace every bare `\n` with `\r\n`.
///
/// Existing `\r\n` pairs are copied as-is, so converting a mixed file never
/// produces `\r\r\n`.
pub fn lf_to_crlf(content: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(content.len() + content.len() / 16);
    let mut previous = None;
    for &byte in content {
        if byte == b'\n' && previous != Some(b'\r') {
            out.push(b'\r');
        }
        out.push(byte);
        previous = Some(byte);
    }
    out
}

/// Convert `content` so every line ends with `target`.
pub fn convert(content: &[u8], target: LineEnding) -> Vec<u8> {
    match target {
        LineEnding::Lf => crlf_to_lf(content),
        LineEnding::Crlf => lf_to_crlf(content),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_prefers_crlf_when_any_pair_present() {
        assert_eq!(LineEnding::detect(b"a\nb\r\nc\n"), LineEnding::Crlf);
        assert_eq!(LineEnding::detect(b"a\nb\n"), LineEnding::Lf);
        assert_eq!(LineEnding::detect(b""), LineEnding::Lf);
    }

    #[test]
    fn lone_carriage_return_is_not_crlf() {
        assert_eq!(LineEnding::detect(b"a\rb\n"), LineEnding::Lf);
        assert_eq!(crlf_to_lf(b"a\rb\r\n"), b"a\rb\n");
    }

    #[test]
    fn crlf_to_lf_strips_pairs() {
        assert_eq!(crlf_to_lf(b"one\r\ntwo\r\n"), b"one\ntwo\n");
    }

    #[test]
    fn lf_to_crlf_does_not_double_existing_pairs() {
        assert_eq!(lf_to_crlf(b"one\ntwo\r\nthree\n"), b"one\r\ntwo\r\nthree\r\n");
    }

    #[test]
    fn lf_to_crlf_handles_leading_newline() {
        assert_eq!(lf_to_crlf(b"\nx"), b"\r\nx");
    }

    #[test]
    fn other_toggles() {
        assert_eq!(LineEnding::Lf.other(), LineEnding::Crlf);
        assert_eq!(LineEnding::Crlf.other(), LineEnding::Lf);
    }
}
