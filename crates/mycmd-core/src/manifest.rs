//! Package manifest (`mycmd.toml`)
//!
//! Every key is optional; an absent manifest means the defaults of the
//! original `mycmd` bundle.

use mycmd_fs::{ConfigStore, NormalizedPath};
use serde::Deserialize;

use crate::Result;

/// File names probed for the manifest, in order.
pub const MANIFEST_FILES: &[&str] = &["mycmd.toml", "mycmd.json", "mycmd.yaml", "mycmd.yml"];

/// Settings for one package directory.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PackageManifest {
    /// Package name; also the archive prefix and the source of the shell variable name.
    pub name: String,
    /// Attribution written into the marker line.
    pub author: String,
    /// README whose second line carries the version.
    pub readme: String,
    /// Script sourced from the shell startup file.
    pub rc_script: String,
    /// Files that must exist for the directory to count as the package.
    /// Defaults to `rc_script`, `name` and `readme`.
    pub required_files: Option<Vec<String>>,
    /// Directory (relative to the package) receiving build archives.
    pub builds_dir: String,
    /// File names left out of build archives.
    pub exclude: Vec<String>,
    /// Remote the checkout must come from; unset skips the check.
    pub expected_origin: Option<String>,
}

impl Default for PackageManifest {
    fn default() -> Self {
        Self {
            name: "mycmd".into(),
            author: "Tirupati".into(),
            readme: "README.txt".into(),
            rc_script: "my_bashrc.sh".into(),
            required_files: None,
            builds_dir: "builds".into(),
            exclude: vec!["build.py".into()],
            expected_origin: None,
        }
    }
}

impl PackageManifest {
    /// Load the manifest from `dir`, falling back to defaults when none exists.
    ///
    /// Returns the path the manifest was read from, if any.
    pub fn load(dir: &NormalizedPath) -> Result<(Self, Option<NormalizedPath>)> {
        let candidates: Vec<NormalizedPath> =
            MANIFEST_FILES.iter().map(|name| dir.join(name)).collect();

        match ConfigStore::new().load_first::<Self>(&candidates)? {
            Some((path, manifest)) => Ok((manifest, Some(path))),
            None => {
                tracing::debug!(dir = %dir, "no manifest, using defaults");
                Ok((Self::default(), None))
            }
        }
    }

    /// The effective required-file list.
    pub fn required_files(&self) -> Vec<String> {
        self.required_files.clone().unwrap_or_else(|| {
            vec![
                self.rc_script.clone(),
                self.name.clone(),
                self.readme.clone(),
            ]
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_original_bundle() {
        let manifest = PackageManifest::default();
        assert_eq!(
            manifest.required_files(),
            vec!["my_bashrc.sh", "mycmd", "README.txt"]
        );
        assert_eq!(manifest.exclude, vec!["build.py"]);
        assert!(manifest.expected_origin.is_none());
    }

    #[test]
    fn partial_manifest_keeps_other_defaults() {
        let manifest: PackageManifest = toml_like("name = \"tools\"");
        assert_eq!(manifest.name, "tools");
        assert_eq!(manifest.readme, "README.txt");
        assert_eq!(
            manifest.required_files(),
            vec!["my_bashrc.sh", "tools", "README.txt"]
        );
    }

    fn toml_like(content: &str) -> PackageManifest {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("mycmd.toml"), content).unwrap();
        PackageManifest::load(&NormalizedPath::new(dir.path()))
            .unwrap()
            .0
    }
}
