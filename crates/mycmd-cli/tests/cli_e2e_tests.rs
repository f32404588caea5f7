//! End-to-end tests that invoke the compiled `mycmd` binary.

use std::fs;

use assert_cmd::Command;
use mycmd_test_utils::package::TestPackage;
use predicates::prelude::*;
use tempfile::tempdir;

fn mycmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("mycmd"));
    cmd.env_remove("MYCMD_RC_FILE");
    cmd
}

// ============================================================================
// Help
// ============================================================================

#[test]
fn test_help_lists_commands() {
    mycmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("build"))
        .stdout(predicate::str::contains("setup"))
        .stdout(predicate::str::contains("eol"));
}

#[test]
fn test_completions_bash() {
    mycmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mycmd"));
}

// ============================================================================
// Build
// ============================================================================

#[test]
fn test_build_creates_archive() {
    let pkg = TestPackage::new();

    mycmd()
        .arg("build")
        .current_dir(pkg.root())
        .assert()
        .success()
        .stdout(predicate::str::contains("Build completed successfully!"))
        .stdout(predicate::str::contains("containing 3 files"));

    let archives = pkg.list("builds");
    assert_eq!(archives.len(), 1);
    assert!(archives[0].starts_with("mycmd_V-1.1_"));
    pkg.assert_file_contains("README.txt", "Version: 1.1 (as on ");
}

#[test]
fn test_build_outside_package_fails_with_hint() {
    let dir = tempdir().unwrap();

    mycmd()
        .arg("build")
        .current_dir(dir.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Missing required files"))
        .stderr(predicate::str::contains("run this from the package directory"));
}

// ============================================================================
// Setup
// ============================================================================

#[test]
fn test_setup_without_prompt_then_again() {
    let pkg = TestPackage::new();
    pkg.write_rc("alias ll='ls -la'\n");
    let rc = pkg.rc_path();

    mycmd()
        .args(["setup", "--no-prompt", "--rc-file"])
        .arg(&rc)
        .current_dir(pkg.root())
        .assert()
        .success()
        .stdout(predicate::str::contains("Setup completed successfully!"));

    let first = pkg.read_rc();
    assert!(first.starts_with("alias ll='ls -la'\n# Added by mycmd's setup.py on ("));
    assert!(first.ends_with("source \"$MYCMD/my_bashrc.sh\"\n"));

    mycmd()
        .args(["setup", "--no-prompt", "--rc-file"])
        .arg(&rc)
        .current_dir(pkg.root())
        .assert()
        .success()
        .stdout(predicate::str::contains("already up to date"));

    assert_eq!(pkg.read_rc(), first);
}

#[test]
fn test_setup_with_name_and_color_flags() {
    let pkg = TestPackage::new();

    mycmd()
        .args(["setup", "--name", "dev", "--color", "magenta", "--dir"])
        .arg(pkg.root())
        .env("MYCMD_RC_FILE", pkg.rc_path())
        .assert()
        .success();

    assert!(pkg.read_rc().contains("export PS1='\\[\\e[1;35m\\]dev\\[\\e[0m\\]"));
}

#[test]
fn test_setup_prompts_on_stdin() {
    let pkg = TestPackage::new();

    // name, menu entry 9 (Custom RGB), then one bad value per channel
    mycmd()
        .args(["setup", "--rc-file"])
        .arg(pkg.rc_path())
        .current_dir(pkg.root())
        .write_stdin("dev\n9\n256\n10\nabc\n20\n-1\n30\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Invalid Red"))
        .stderr(predicate::str::contains("Invalid Blue"));

    assert!(pkg.read_rc().contains("38;2;10;20;30m"));
}

#[test]
fn test_setup_fails_when_stdin_ends_mid_question() {
    let pkg = TestPackage::new();
    pkg.write_rc("alias ll='ls -la'\n");

    // Custom RGB is chosen, then input ends before the Red channel
    mycmd()
        .args(["setup", "--name", "me", "--rc-file"])
        .arg(pkg.rc_path())
        .current_dir(pkg.root())
        .write_stdin("9\n")
        .timeout(std::time::Duration::from_secs(10))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("No answer left for prompt 'Red (0-255)'"));

    assert_eq!(pkg.read_rc(), "alias ll='ls -la'\n");
}

#[test]
fn test_setup_rejects_bad_color_before_writing() {
    let pkg = TestPackage::new();
    pkg.write_rc("alias ll='ls -la'\n");

    mycmd()
        .args(["setup", "--name", "dev", "--color", "256", "--rc-file"])
        .arg(pkg.rc_path())
        .current_dir(pkg.root())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid color '256'"));

    assert_eq!(pkg.read_rc(), "alias ll='ls -la'\n");
}

#[test]
fn test_setup_dry_run_prints_diff() {
    let pkg = TestPackage::new();
    pkg.write_rc("alias ll='ls -la'\n");

    mycmd()
        .args(["setup", "--no-prompt", "--dry-run", "--rc-file"])
        .arg(pkg.rc_path())
        .current_dir(pkg.root())
        .assert()
        .success()
        .stdout(predicate::str::contains("+# Added by mycmd's setup"))
        .stdout(predicate::str::contains("Dry run"));

    assert_eq!(pkg.read_rc(), "alias ll='ls -la'\n");
}

// ============================================================================
// Eol
// ============================================================================

#[test]
fn test_eol_yes_converts_crlf() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("script.sh");
    fs::write(&file, "echo a\r\necho b\r\n").unwrap();

    mycmd()
        .arg("eol")
        .arg(&file)
        .arg("--yes")
        .assert()
        .success()
        .stdout(predicate::str::contains("CRLF"))
        .stdout(predicate::str::contains("to LF successfully"));

    assert_eq!(fs::read_to_string(&file).unwrap(), "echo a\necho b\n");
}

#[test]
fn test_eol_defaults_to_no() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("notes.txt");
    fs::write(&file, "a\nb\n").unwrap();

    mycmd()
        .arg("eol")
        .arg(&file)
        .write_stdin("\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Conversion skipped."))
        .stderr(predicate::str::contains("Convert LF -> CRLF? [y/N]"));

    assert_eq!(fs::read_to_string(&file).unwrap(), "a\nb\n");
}

#[test]
fn test_eol_missing_file() {
    let dir = tempdir().unwrap();

    mycmd()
        .arg("eol")
        .arg(dir.path().join("missing.txt"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("not found"));
}
