//! Atomic I/O operations with file locking

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;

use crate::{Error, NormalizedPath, Result};

/// Write content atomically to a file with locking.
///
/// Uses write-to-temp-then-rename so readers see either the old or the new
/// content, never a prefix of the new one. The temp file lives next to the
/// target so the rename stays on one filesystem.
///
/// A symlinked `path` is followed: the link stays in place and the file it
/// points to is replaced. An existing file keeps its permissions.
pub fn write_atomic(path: &NormalizedPath, content: &[u8]) -> Result<()> {
    let native_path = resolve_symlink(&path.to_native())?;
    let permissions = match fs::metadata(&native_path) {
        Ok(meta) => Some(meta.permissions()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
        Err(e) => return Err(Error::io(&native_path, e)),
    };

    if let Some(parent) = native_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    let temp_name = format!(
        ".{}.{}.tmp",
        native_path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    let temp_path = native_path.with_file_name(&temp_name);

    let result = (|| {
        let mut temp_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)
            .map_err(|e| Error::io(&temp_path, e))?;

        temp_file.lock_exclusive().map_err(|_| Error::LockFailed {
            path: native_path.clone(),
        })?;

        temp_file
            .write_all(content)
            .map_err(|e| Error::io(&temp_path, e))?;
        temp_file.sync_all().map_err(|e| Error::io(&temp_path, e))?;
        if let Some(permissions) = permissions {
            fs::set_permissions(&temp_path, permissions).map_err(|e| Error::io(&temp_path, e))?;
        }

        temp_file.unlock().map_err(|_| Error::LockFailed {
            path: native_path.clone(),
        })?;

        fs::rename(&temp_path, &native_path).map_err(|e| Error::io(&native_path, e))
    })();

    match result {
        Ok(()) => {
            tracing::debug!(
                path = %path,
                target = %native_path.display(),
                bytes = content.len(),
                "atomic write"
            );
            Ok(())
        }
        Err(e) => {
            // The target is untouched; only the temp file needs cleaning up.
            let _ = fs::remove_file(&temp_path);
            Err(e)
        }
    }
}

/// Follow `path` through any symlinks to the file that should be replaced.
///
/// A dangling link resolves to where it points, so the write creates the
/// missing target instead of replacing the link.
fn resolve_symlink(path: &Path) -> Result<PathBuf> {
    let mut current = path.to_path_buf();
    // link cycles stop after 40 hops
    for _ in 0..40 {
        match fs::symlink_metadata(&current) {
            Ok(meta) if meta.file_type().is_symlink() => {
                let link = fs::read_link(&current).map_err(|e| Error::io(&current, e))?;
                current = match current.parent() {
                    Some(parent) if link.is_relative() => parent.join(link),
                    _ => link,
                };
            }
            Ok(_) => return Ok(current),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(current),
            Err(e) => return Err(Error::io(&current, e)),
        }
    }
    Ok(current)
}

/// Read text content from a file.
pub fn read_text(path: &NormalizedPath) -> Result<String> {
    let native_path = path.to_native();
    fs::read_to_string(&native_path).map_err(|e| Error::io(&native_path, e))
}

/// Read text content, treating a missing file as empty.
///
/// A shell startup file that does not exist yet is the first-run case, not a
/// failure. Every other I/O error is still returned.
pub fn read_text_or_empty(path: &NormalizedPath) -> Result<String> {
    match read_text(path) {
        Ok(content) => Ok(content),
        Err(e) if e.is_not_found() => {
            tracing::debug!(path = %path, "file missing, treating as empty");
            Ok(String::new())
        }
        Err(e) => Err(e),
    }
}

/// Read raw bytes from a file.
pub fn read_bytes(path: &NormalizedPath) -> Result<Vec<u8>> {
    let native_path = path.to_native();
    fs::read(&native_path).map_err(|e| Error::io(&native_path, e))
}

/// Write text content to a file atomically.
pub fn write_text(path: &NormalizedPath, content: &str) -> Result<()> {
    write_atomic(path, content.as_bytes())
}
