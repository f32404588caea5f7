//! Wire the package into the user's shell startup file.
//!
//! Setup runs in two steps so a front end can ask its questions in between:
//! [`preflight`] checks the package directory and its git origin, and
//! [`apply`] rewrites the managed block. [`run_setup`] does both.

use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use mycmd_blocks::{NewBlockSpec, has_block, parse_blocks, replace_block};
use mycmd_fs::{NormalizedPath, checksum, io};
use mycmd_git::{OriginStatus, validate_origin};

use crate::diff::{self, DiffStats};
use crate::interactive::PromptChoice;
use crate::package::Package;
use crate::{Error, Result};

/// Environment variable overriding the shell startup file.
pub const RC_FILE_ENV: &str = "MYCMD_RC_FILE";

/// `~/.bashrc` for the current user.
pub fn default_rc_file() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(".bashrc"))
        .ok_or(Error::NoHomeDir)
}

/// Inputs for one setup run.
#[derive(Debug, Clone)]
pub struct SetupOptions {
    /// Shell startup file to rewrite.
    pub rc_file: NormalizedPath,
    /// Date written into the marker line.
    pub date: NaiveDate,
    /// Prompt line to generate, if any.
    pub prompt: Option<PromptChoice>,
    /// Continue even when the origin remote does not match.
    pub skip_origin_check: bool,
    /// Compute the change without writing it.
    pub dry_run: bool,
}

impl SetupOptions {
    pub fn new(rc_file: impl Into<NormalizedPath>) -> Self {
        Self {
            rc_file: rc_file.into(),
            date: Local::now().date_naive(),
            prompt: None,
            skip_origin_check: false,
            dry_run: false,
        }
    }
}

/// What happened to the startup file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupOutcome {
    /// The file was rewritten.
    Written,
    /// The file already held exactly this block; nothing was written.
    Unchanged,
    /// `dry_run` was set; nothing was written.
    DryRun,
}

/// Result of a setup run.
#[derive(Debug, Clone)]
pub struct SetupReport {
    pub rc_file: NormalizedPath,
    pub outcome: SetupOutcome,
    /// The previous content held no managed block for this package.
    pub first_install: bool,
    /// Managed blocks removed from the previous content.
    pub replaced_blocks: usize,
    /// Unified diff from the previous to the new content; empty when unchanged.
    pub diff: String,
    pub stats: DiffStats,
    /// Origin check result; `None` when no origin is configured.
    pub origin: Option<OriginStatus>,
}

/// Check the package directory and, when configured, its git origin.
///
/// A checkout outside git or without an `origin` remote only logs a warning.
/// A different origin fails unless `skip_origin_check` is set.
pub fn preflight(package: &Package, skip_origin_check: bool) -> Result<Option<OriginStatus>> {
    package.check_required_files()?;

    let Some(expected) = package.manifest().expected_origin.as_deref() else {
        tracing::debug!("no expected origin configured");
        return Ok(None);
    };

    let status = validate_origin(package.root(), expected)?;
    match &status {
        OriginStatus::Matches { url } => tracing::debug!(%url, "origin matches"),
        OriginStatus::NotARepository => {
            tracing::warn!(dir = %package.root(), "package is not a git checkout, origin not checked")
        }
        OriginStatus::NoRemote { name } => {
            tracing::warn!(remote = %name, "no such remote, origin not checked")
        }
        OriginStatus::Mismatch { expected, actual } if skip_origin_check => {
            tracing::warn!(%expected, %actual, "origin mismatch ignored")
        }
        OriginStatus::Mismatch { expected, actual } => {
            return Err(Error::OriginMismatch {
                expected: expected.clone(),
                actual: actual.clone(),
            });
        }
    }
    Ok(Some(status))
}

/// Replace the managed block in the startup file.
///
/// `origin` is carried into the report as returned by [`preflight`].
pub fn apply(
    package: &Package,
    options: &SetupOptions,
    origin: Option<OriginStatus>,
) -> Result<SetupReport> {
    let syntax = package.block_syntax()?;
    let manifest = package.manifest();

    let current = io::read_text_or_empty(&options.rc_file)?;
    let lines: Vec<&str> = current.lines().collect();
    let first_install = !has_block(&syntax, &lines);
    let replaced_blocks = if first_install {
        0
    } else {
        parse_blocks(&syntax, &lines).len()
    };

    let mut block = NewBlockSpec::new(
        &syntax,
        package.root().as_str(),
        &manifest.rc_script,
        &manifest.author,
        options.date,
    );
    if let Some(choice) = &options.prompt {
        block = block.with_prompt(&syntax, &choice.ps1());
    }

    let updated = replace_block(&syntax, &current, &block);

    let unchanged = checksum::compute_content_checksum(&current)
        == checksum::compute_content_checksum(&updated);
    let (outcome, diff) = if unchanged {
        (SetupOutcome::Unchanged, String::new())
    } else {
        let diff = diff::unified(&current, &updated, options.rc_file.as_str());
        if options.dry_run {
            (SetupOutcome::DryRun, diff)
        } else {
            io::write_text(&options.rc_file, &updated)?;
            (SetupOutcome::Written, diff)
        }
    };

    tracing::info!(
        rc_file = %options.rc_file,
        ?outcome,
        first_install,
        replaced_blocks,
        "setup finished"
    );

    Ok(SetupReport {
        rc_file: options.rc_file.clone(),
        outcome,
        first_install,
        replaced_blocks,
        stats: DiffStats::compute(&current, &updated),
        diff,
        origin,
    })
}

/// Preflight checks followed by [`apply`].
pub fn run_setup(package: &Package, options: &SetupOptions) -> Result<SetupReport> {
    let origin = preflight(package, options.skip_origin_check)?;
    apply(package, options, origin)
}
