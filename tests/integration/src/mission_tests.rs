//! Release-to-install scenarios
//!
//! Each test walks a package through the same steps a user does: build a
//! release, unpack it somewhere else and run setup from there.

use std::fs::{self, File};
use std::path::Path;

use chrono::NaiveDate;
use mycmd_blocks::{BlockSyntax, parse_blocks};
use mycmd_core::{
    BuildOptions, Package, SetupOptions, SetupOutcome, build, convert_file, run_setup,
};
use mycmd_fs::{LineEnding, NormalizedPath};
use mycmd_git::OriginStatus;
use mycmd_test_utils::package::TestPackage;
use tempfile::TempDir;

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 10, d).unwrap()
}

fn unpack(archive: &Path, into: &Path) {
    let mut zip = zip::ZipArchive::new(File::open(archive).unwrap()).unwrap();
    zip.extract(into).unwrap();
}

fn setup_options(rc: &Path, date: NaiveDate) -> SetupOptions {
    let mut options = SetupOptions::new(rc);
    options.date = date;
    options
}

#[test]
fn unpacked_release_installs_and_reinstalls_cleanly() {
    let pkg = TestPackage::new();
    pkg.write(
        "mycmd.toml",
        "expected_origin = \"git@github.com:tirupati/mycmd.git\"\n",
    );
    pkg.write_rc("alias ll='ls -la'\n");

    let report = build(
        &Package::open(pkg.root()).unwrap(),
        &BuildOptions { today: day(3) },
    )
    .unwrap();

    let install = TempDir::new().unwrap();
    unpack(&report.archive.to_native(), install.path());
    let installed = Package::open(install.path()).unwrap();
    assert!(
        fs::read_to_string(installed.readme_path().to_native())
            .unwrap()
            .contains("Version: 1.1")
    );

    let setup = run_setup(&installed, &setup_options(&pkg.rc_path(), day(4))).unwrap();
    assert_eq!(setup.origin, Some(OriginStatus::NotARepository));
    assert_eq!(setup.outcome, SetupOutcome::Written);

    // Move the install and run setup again: still exactly one block, new path.
    let moved = TempDir::new().unwrap();
    unpack(&report.archive.to_native(), moved.path());
    let moved_pkg = Package::open(moved.path()).unwrap();
    run_setup(&moved_pkg, &setup_options(&pkg.rc_path(), day(5))).unwrap();

    let rc = pkg.read_rc();
    let lines: Vec<&str> = rc.lines().collect();
    let blocks = parse_blocks(&BlockSyntax::for_package("mycmd").unwrap(), &lines);
    assert_eq!(blocks.len(), 1);
    assert!(rc.contains(moved_pkg.root().as_str()));
    assert!(!rc.contains(installed.root().as_str()));
    assert!(rc.starts_with("alias ll='ls -la'\n"));
}

#[test]
fn windows_edited_startup_file_keeps_crlf() {
    let pkg = TestPackage::new();
    pkg.write_rc("alias ll='ls -la'\r\nalias gs='git status'\r\n");
    let package = Package::open(pkg.root()).unwrap();

    run_setup(&package, &setup_options(&pkg.rc_path(), day(3))).unwrap();
    let rc = pkg.read_rc();
    assert_eq!(LineEnding::detect_text(&rc), LineEnding::Crlf);
    assert!(!rc.replace("\r\n", "").contains('\n'));

    // Converting to LF and rerunning leaves an LF file with the same block.
    let report = convert_file(&NormalizedPath::new(pkg.rc_path())).unwrap();
    assert_eq!(report.to, LineEnding::Lf);
    let again = run_setup(&package, &setup_options(&pkg.rc_path(), day(3))).unwrap();
    assert_eq!(again.outcome, SetupOutcome::Unchanged);
    assert_eq!(pkg.read_rc(), rc.replace("\r\n", "\n"));
}
