//! The package directory and its manifest.

use std::fs;

use mycmd_blocks::BlockSyntax;
use mycmd_fs::NormalizedPath;

use crate::manifest::PackageManifest;
use crate::{Error, Result};

/// A package directory opened for build or setup.
#[derive(Debug, Clone)]
pub struct Package {
    root: NormalizedPath,
    manifest: PackageManifest,
    manifest_path: Option<NormalizedPath>,
}

impl Package {
    /// Open the package at `dir`.
    ///
    /// The directory is canonicalized so the path written into the shell
    /// startup file is absolute.
    pub fn open(dir: impl AsRef<std::path::Path>) -> Result<Self> {
        let root = NormalizedPath::canonicalize(dir)?;
        let (manifest, manifest_path) = PackageManifest::load(&root)?;
        tracing::debug!(root = %root, name = %manifest.name, "opened package");
        Ok(Self {
            root,
            manifest,
            manifest_path,
        })
    }

    pub fn root(&self) -> &NormalizedPath {
        &self.root
    }

    pub fn manifest(&self) -> &PackageManifest {
        &self.manifest
    }

    pub fn manifest_path(&self) -> Option<&NormalizedPath> {
        self.manifest_path.as_ref()
    }

    pub fn name(&self) -> &str {
        &self.manifest.name
    }

    pub fn readme_path(&self) -> NormalizedPath {
        self.root.join(&self.manifest.readme)
    }

    pub fn builds_dir(&self) -> NormalizedPath {
        self.root.join(&self.manifest.builds_dir)
    }

    /// Marker and owned-line syntax for this package's managed block.
    pub fn block_syntax(&self) -> Result<BlockSyntax> {
        Ok(BlockSyntax::for_package(&self.manifest.name)?)
    }

    /// Fail unless every required file exists as a regular file.
    pub fn check_required_files(&self) -> Result<()> {
        let missing: Vec<String> = self
            .manifest
            .required_files()
            .into_iter()
            .filter(|name| !self.root.join(name).is_file())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(Error::MissingFiles {
                dir: self.root.to_native(),
                missing,
            })
        }
    }

    /// Regular files directly inside the package, sorted, minus `exclude`.
    ///
    /// Symlinks to files count as files and are archived with the target's
    /// content.
    /// Subdirectories (including the builds directory) are never descended into.
    pub fn archive_files(&self) -> Result<Vec<String>> {
        let native = self.root.to_native();
        let entries = fs::read_dir(&native).map_err(|e| mycmd_fs::Error::io(&native, e))?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| mycmd_fs::Error::io(&native, e))?;
            // follows symlinks; dangling links are skipped
            if !entry.path().is_file() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            if self.manifest.exclude.iter().any(|ex| ex == &name) {
                tracing::debug!(file = %name, "excluded from archive");
                continue;
            }
            files.push(name);
        }

        files.sort();
        Ok(files)
    }
}
