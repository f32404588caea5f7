//! File-level line-ending conversion.

use mycmd_fs::{LineEnding, NormalizedPath, eol, io};

use crate::{Error, Result};

/// What a conversion did to one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EolReport {
    pub path: NormalizedPath,
    pub from: LineEnding,
    pub to: LineEnding,
    /// False when the file already had no line to convert.
    pub changed: bool,
}

fn ensure_exists(path: &NormalizedPath) -> Result<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(Error::FileNotFound {
            path: path.to_native(),
        })
    }
}

/// Detect the line-ending style of the file at `path`.
pub fn detect_file(path: &NormalizedPath) -> Result<LineEnding> {
    ensure_exists(path)?;
    let bytes = io::read_bytes(path)?;
    Ok(LineEnding::detect(&bytes))
}

/// Convert the file at `path` to the opposite of its detected style.
///
/// CRLF files become LF; LF files become CRLF. The file is rewritten
/// atomically and left alone when the bytes would not change.
pub fn convert_file(path: &NormalizedPath) -> Result<EolReport> {
    ensure_exists(path)?;
    let bytes = io::read_bytes(path)?;
    let from = LineEnding::detect(&bytes);
    let to = from.other();

    let converted = eol::convert(&bytes, to);
    let changed = converted != bytes;
    if changed {
        io::write_atomic(path, &converted)?;
        tracing::info!(path = %path, from = from.name(), to = to.name(), "converted line endings");
    } else {
        tracing::debug!(path = %path, "no line endings to convert");
    }

    Ok(EolReport {
        path: path.clone(),
        from,
        to,
        changed,
    })
}
