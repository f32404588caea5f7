//! Command implementations for mycmd-cli

pub mod build;
pub mod eol;
pub mod setup;

pub use build::run_build;
pub use eol::run_eol;
pub use setup::{SetupArgs, run_setup};

use mycmd_core::{Error, Package};

use crate::error::{CliError, Result};

/// Open the package at `dir`, explaining what a package directory is when
/// the required files are missing.
pub(crate) fn open_package(dir: &std::path::Path) -> Result<Package> {
    let package = Package::open(dir)?;
    package
        .check_required_files()
        .map_err(|e| with_package_hint(e, &package))?;
    Ok(package)
}

/// Attach the "run from the package directory" hint to missing-file errors.
pub(crate) fn with_package_hint(err: Error, package: &Package) -> CliError {
    match err {
        Error::MissingFiles { .. } => CliError::user(format!(
            "{err}\nPlease run this from the package directory. Read {} for instructions.",
            package.manifest().readme
        )),
        other => other.into(),
    }
}
