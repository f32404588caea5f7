//! mycmd CLI
//!
//! Builds release archives of the bash-commands package and wires the
//! package into the user's shell startup file.

mod cli;
mod commands;
mod error;
mod interactive;

use clap::{CommandFactory, Parser};
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .map_err(|e| CliError::user(format!("Failed to set tracing subscriber: {e}")))?;
        tracing::debug!("Verbose mode enabled");
    }

    match cli.command {
        Some(cmd) => execute_command(cmd),
        None => {
            println!("{} bash commands package tools", "mycmd".green().bold());
            println!();
            println!("Run {} for available commands.", "mycmd --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Build { dir } => commands::run_build(&dir),
        Commands::Setup {
            dir,
            rc_file,
            name,
            color,
            no_prompt,
            skip_origin_check,
            dry_run,
        } => commands::run_setup(commands::SetupArgs {
            dir,
            rc_file,
            name,
            color,
            no_prompt,
            skip_origin_check,
            dry_run,
        }),
        Commands::Eol { file, yes } => commands::run_eol(&file, yes),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "mycmd", &mut std::io::stdout());
            Ok(())
        }
    }
}
