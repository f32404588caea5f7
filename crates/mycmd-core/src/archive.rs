//! Release archives: bump the README version and zip the package.
//!
//! The archive is assembled in a temp file inside the builds directory and
//! persisted under its final name before the README is rewritten. A failure
//! anywhere before that point leaves both the README and the builds
//! directory as they were.

use std::fs;
use std::io::Write;

use chrono::{Local, NaiveDate};
use mycmd_fs::{NormalizedPath, checksum, io};
use zip::CompressionMethod;
use zip::write::SimpleFileOptions;

use crate::package::Package;
use crate::version::{BumpedReadme, ReadmeVersion, bump_readme};
use crate::Result;

/// Date format in archive names, e.g. `Oct-03-2025`.
pub const ARCHIVE_DATE_FORMAT: &str = "%b-%d-%Y";

/// Inputs that vary between runs.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Date stamped on the version line and the archive name.
    pub today: NaiveDate,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            today: Local::now().date_naive(),
        }
    }
}

/// What a build produced.
#[derive(Debug, Clone)]
pub struct BuildReport {
    pub previous: ReadmeVersion,
    pub version: ReadmeVersion,
    pub archive: NormalizedPath,
    /// Entry names in archive order.
    pub entries: Vec<String>,
    /// SHA-256 of the archive file.
    pub checksum: String,
}

/// Archive file name for `name` at `version` on `date`.
pub fn archive_name(name: &str, version: ReadmeVersion, date: NaiveDate) -> String {
    format!("{name}_V-{version}_{}.zip", date.format(ARCHIVE_DATE_FORMAT))
}

/// Bump the README version and write a deflated archive of the package.
pub fn build(package: &Package, options: &BuildOptions) -> Result<BuildReport> {
    package.check_required_files()?;

    let readme_path = package.readme_path();
    let readme = io::read_text(&readme_path)?;
    let bumped = bump_readme(&readme, &readme_path.to_native(), options.today)?;

    let entries = package.archive_files()?;
    let builds_dir = package.builds_dir();
    let native_dir = builds_dir.to_native();
    fs::create_dir_all(&native_dir).map_err(|e| mycmd_fs::Error::io(&native_dir, e))?;

    let archive = builds_dir.join(&archive_name(package.name(), bumped.current, options.today));
    write_archive(package, &entries, &bumped, &archive)?;

    io::write_text(&readme_path, &bumped.content)?;
    let checksum = checksum::compute_file_checksum(&archive)?;

    tracing::info!(
        archive = %archive,
        entries = entries.len(),
        version = %bumped.current,
        "build complete"
    );

    Ok(BuildReport {
        previous: bumped.previous,
        version: bumped.current,
        archive,
        entries,
        checksum,
    })
}

fn write_archive(
    package: &Package,
    entries: &[String],
    bumped: &BumpedReadme,
    archive: &NormalizedPath,
) -> Result<()> {
    let native_dir = package.builds_dir().to_native();
    let temp = tempfile::Builder::new()
        .prefix(".build-")
        .suffix(".zip.tmp")
        .tempfile_in(&native_dir)
        .map_err(|e| mycmd_fs::Error::io(&native_dir, e))?;

    let mut zip = zip::ZipWriter::new(temp);
    for name in entries {
        let source = package.root().join(name);
        let content = if *name == package.manifest().readme {
            bumped.content.clone().into_bytes()
        } else {
            io::read_bytes(&source)?
        };

        zip.start_file(name.as_str(), entry_options(&source))?;
        zip.write_all(&content)?;
        tracing::debug!(entry = %name, bytes = content.len(), "added archive entry");
    }

    let temp = zip.finish()?;
    let target = archive.to_native();
    temp.persist(&target)
        .map_err(|e| mycmd_fs::Error::io(&target, e.error))?;
    Ok(())
}

fn entry_options(source: &NormalizedPath) -> SimpleFileOptions {
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        if let Ok(meta) = fs::metadata(source.to_native()) {
            return options.unix_permissions(meta.permissions().mode());
        }
    }
    #[cfg(not(unix))]
    let _ = source;

    options
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn archive_name_uses_dashed_date() {
        let date = NaiveDate::from_ymd_opt(2025, 10, 3).unwrap();
        assert_eq!(
            archive_name("mycmd", ReadmeVersion::from_tenths(11), date),
            "mycmd_V-1.1_Oct-03-2025.zip"
        );
    }
}
