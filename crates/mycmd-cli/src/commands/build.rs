//! Build command implementation

use std::path::Path;

use colored::Colorize;
use mycmd_core::{BuildOptions, build};

use super::{open_package, with_package_hint};
use crate::error::Result;

/// Run the build command
///
/// Bumps the README version and writes the archive into the builds directory.
pub fn run_build(dir: &Path) -> Result<()> {
    let package = open_package(dir)?;

    println!(
        "{} Building {} from {}",
        "=>".blue().bold(),
        package.name().cyan(),
        package.root()
    );

    let report = build(&package, &BuildOptions::default())
        .map_err(|e| with_package_hint(e, &package))?;

    println!(
        "{} Build completed successfully! Created '{}' containing {} files.",
        "OK".green().bold(),
        report.archive,
        report.entries.len()
    );
    println!(
        "   Version {} -> {}",
        report.previous.to_string().dimmed(),
        report.version.to_string().bold()
    );
    println!("   sha256 {}", report.checksum.dimmed());

    Ok(())
}
