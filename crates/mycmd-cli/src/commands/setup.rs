//! Setup command implementation

use std::path::PathBuf;

use colored::Colorize;
use mycmd_core::interactive::{ask_name, choose_color};
use mycmd_core::setup::{apply, default_rc_file, preflight};
use mycmd_core::{ColorCode, InputSource, PromptChoice, SetupOptions, SetupOutcome};
use mycmd_git::OriginStatus;

use super::{open_package, with_package_hint};
use crate::error::Result;
use crate::interactive::TerminalInput;

/// Parsed `mycmd setup` flags.
#[derive(Debug, Clone)]
pub struct SetupArgs {
    pub dir: PathBuf,
    pub rc_file: Option<PathBuf>,
    pub name: Option<String>,
    pub color: Option<String>,
    pub no_prompt: bool,
    pub skip_origin_check: bool,
    pub dry_run: bool,
}

/// Run the setup command
///
/// Flags are validated before the package is opened so a typo never leaves
/// the user halfway through the questions.
pub fn run_setup(args: SetupArgs) -> Result<()> {
    let color = args.color.as_deref().map(ColorCode::parse).transpose()?;
    let rc_file = match args.rc_file {
        Some(path) => path,
        None => default_rc_file()?,
    };

    let package = open_package(&args.dir)?;
    println!(
        "{} Setting up {} from {}",
        "=>".blue().bold(),
        package.name().cyan(),
        package.root()
    );

    let origin = preflight(&package, args.skip_origin_check)
        .map_err(|e| with_package_hint(e, &package))?;
    print_origin(origin.as_ref());

    let prompt = if args.no_prompt {
        None
    } else {
        let mut input = TerminalInput::new();
        let name = match args.name {
            Some(name) => name,
            None => {
                let user = std::env::var("USER").ok();
                ask_name(&mut input, user.as_deref())?
            }
        };
        let color = match color {
            Some(color) => color,
            None => choose_color(&mut input)?,
        };
        Some(PromptChoice::new(&name, color)?)
    };

    let mut options = SetupOptions::new(rc_file);
    options.prompt = prompt;
    options.skip_origin_check = args.skip_origin_check;
    options.dry_run = args.dry_run;

    let report = apply(&package, &options, origin)?;
    if report.replaced_blocks > 1 {
        TerminalInput::new().notify(&format!(
            "Merged {} earlier setup blocks into one.",
            report.replaced_blocks
        ));
    }

    match report.outcome {
        SetupOutcome::Written => {
            let action = if report.first_install {
                "now loads the package"
            } else {
                "has been updated"
            };
            println!(
                "{} Setup completed successfully! Your '{}' file {}.",
                "OK".green().bold(),
                report.rc_file,
                action
            );
            println!(
                "Reload it with: {} or just restart the terminal.",
                format!("source {}", report.rc_file).cyan()
            );
        }
        SetupOutcome::Unchanged => {
            println!(
                "{} Setup already up to date. No changes made to '{}'.",
                "OK".green().bold(),
                report.rc_file
            );
        }
        SetupOutcome::DryRun => {
            print!("{}", report.diff);
            println!(
                "{} Dry run: '{}' was not modified ({} added, {} removed).",
                "=>".blue().bold(),
                report.rc_file,
                format!("+{}", report.stats.added).green(),
                format!("-{}", report.stats.removed).red()
            );
        }
    }

    Ok(())
}

fn print_origin(origin: Option<&OriginStatus>) {
    match origin {
        Some(OriginStatus::NotARepository) => eprintln!(
            "{} package is not a git checkout; origin not verified",
            "warning".yellow().bold()
        ),
        Some(OriginStatus::NoRemote { name }) => eprintln!(
            "{} repository has no '{}' remote; origin not verified",
            "warning".yellow().bold(),
            name
        ),
        Some(OriginStatus::Mismatch { expected, actual }) => eprintln!(
            "{} origin {} does not match {}; continuing as requested",
            "warning".yellow().bold(),
            actual,
            expected
        ),
        Some(OriginStatus::Matches { .. }) | None => {}
    }
}
