//! [`TestPackage`] builder for build and setup scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Default README used by [`TestPackage::new`].
pub const DEFAULT_README: &str = "mycmd - personal bash commands\nVersion: 1.0 (as on Sep 25, 2025)\nRun setup from this directory.\n";

/// A temporary package directory with the files setup and build expect,
/// plus a separate scratch directory standing in for `$HOME`.
///
/// # Example
///
/// ```rust,no_run
/// use mycmd_test_utils::package::TestPackage;
///
/// let pkg = TestPackage::new();
/// pkg.write_rc("alias ll='ls -la'\n");
/// pkg.assert_file_contains("README.txt", "Version: 1.0");
/// ```
pub struct TestPackage {
    root: TempDir,
    home: TempDir,
}

impl Default for TestPackage {
    fn default() -> Self {
        Self::new()
    }
}

impl TestPackage {
    /// Create a package with `mycmd`, `my_bashrc.sh` and `README.txt`.
    pub fn new() -> Self {
        let pkg = Self::empty();
        pkg.write("mycmd", "#!/usr/bin/env bash\necho mycmd\n");
        pkg.write("my_bashrc.sh", "alias mc='mycmd'\n");
        pkg.write("README.txt", DEFAULT_README);
        pkg
    }

    /// Create an empty package directory.
    pub fn empty() -> Self {
        Self {
            root: TempDir::new().unwrap(),
            home: TempDir::new().unwrap(),
        }
    }

    /// Root of the package directory.
    pub fn root(&self) -> &Path {
        self.root.path()
    }

    /// Scratch home directory.
    pub fn home(&self) -> &Path {
        self.home.path()
    }

    /// Path of the shell startup file inside the scratch home.
    pub fn rc_path(&self) -> PathBuf {
        self.home().join(".bashrc")
    }

    /// Write `content` to `path` relative to the package root.
    pub fn write(&self, path: &str, content: &str) {
        let full = self.root().join(path);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&full, content)
            .unwrap_or_else(|e| panic!("TestPackage::write: {}: {e}", full.display()));
    }

    /// Write the scratch shell startup file.
    pub fn write_rc(&self, content: &str) {
        fs::write(self.rc_path(), content).unwrap();
    }

    /// Read the scratch shell startup file.
    pub fn read_rc(&self) -> String {
        fs::read_to_string(self.rc_path())
            .unwrap_or_else(|e| panic!("TestPackage::read_rc: {e}"))
    }

    /// Read `path` relative to the package root.
    pub fn read(&self, path: &str) -> String {
        let full = self.root().join(path);
        fs::read_to_string(&full)
            .unwrap_or_else(|e| panic!("TestPackage::read: {}: {e}", full.display()))
    }

    /// Files directly inside `dir` (relative to the root), sorted by name.
    pub fn list(&self, dir: &str) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(self.root().join(dir))
            .map(|entries| {
                entries
                    .filter_map(|e| e.ok())
                    .map(|e| e.file_name().to_string_lossy().into_owned())
                    .collect()
            })
            .unwrap_or_default();
        names.sort();
        names
    }

    /// Assert that the file at `path` (relative to root) contains `content`.
    ///
    /// # Panics
    /// Panics if the file cannot be read or does not contain `content`.
    pub fn assert_file_contains(&self, path: &str, content: &str) {
        let file_content = self.read(path);
        assert!(
            file_content.contains(content),
            "File {} does not contain expected content.\nExpected: {}\nActual: {}",
            path,
            content,
            file_content
        );
    }
}
