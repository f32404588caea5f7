//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// mycmd - build and install the personal bash commands package
#[derive(Parser, Debug)]
#[command(name = "mycmd")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Bump the README version and zip the package into the builds directory
    ///
    /// Examples:
    ///   mycmd build                  # Build the package in the current directory
    ///   mycmd build -C ~/src/mycmd   # Build a package elsewhere
    Build {
        /// Package directory
        #[arg(short = 'C', long = "dir", default_value = ".")]
        dir: PathBuf,
    },

    /// Add the package to your shell startup file
    ///
    /// Replaces any block written by an earlier setup, so it is safe to
    /// run again after moving the package or changing the prompt.
    ///
    /// Examples:
    ///   mycmd setup                              # Interactive
    ///   mycmd setup --name dev --color magenta   # No questions
    ///   mycmd setup --no-prompt --dry-run        # Show the change only
    Setup {
        /// Package directory
        #[arg(short = 'C', long = "dir", default_value = ".")]
        dir: PathBuf,

        /// Shell startup file to update (default: ~/.bashrc)
        #[arg(long, env = mycmd_core::setup::RC_FILE_ENV)]
        rc_file: Option<PathBuf>,

        /// Name shown in the prompt
        #[arg(long, conflicts_with = "no_prompt")]
        name: Option<String>,

        /// Prompt color: a name (e.g. magenta), a palette index 0-255, or R,G,B
        #[arg(long, conflicts_with = "no_prompt")]
        color: Option<String>,

        /// Do not generate a prompt line
        #[arg(long)]
        no_prompt: bool,

        /// Continue even if the git origin does not match the expected one
        #[arg(long)]
        skip_origin_check: bool,

        /// Print the change as a diff without writing it
        #[arg(long)]
        dry_run: bool,
    },

    /// Convert a file between CRLF and LF line endings
    Eol {
        /// File to convert
        file: PathBuf,

        /// Convert without asking
        #[arg(short, long)]
        yes: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_no_command() {
        let cli = Cli::parse_from(["mycmd"]);
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn parse_build_defaults_to_current_dir() {
        let cli = Cli::parse_from(["mycmd", "build"]);
        assert_eq!(
            cli.command,
            Some(Commands::Build {
                dir: PathBuf::from(".")
            })
        );
    }

    #[test]
    fn parse_setup_flags() {
        let cli = Cli::parse_from([
            "mycmd",
            "setup",
            "--rc-file",
            "/tmp/rc",
            "--name",
            "dev",
            "--color",
            "1,2,3",
            "--dry-run",
        ]);
        match cli.command {
            Some(Commands::Setup {
                rc_file,
                name,
                color,
                no_prompt,
                dry_run,
                ..
            }) => {
                assert_eq!(rc_file, Some(PathBuf::from("/tmp/rc")));
                assert_eq!(name.as_deref(), Some("dev"));
                assert_eq!(color.as_deref(), Some("1,2,3"));
                assert!(!no_prompt);
                assert!(dry_run);
            }
            _ => panic!("Expected Setup command"),
        }
    }

    #[test]
    fn no_prompt_conflicts_with_name() {
        let result = Cli::try_parse_from(["mycmd", "setup", "--no-prompt", "--name", "dev"]);
        assert!(result.is_err());
    }

    #[test]
    fn parse_eol_with_yes() {
        let cli = Cli::parse_from(["mycmd", "-v", "eol", "notes.txt", "--yes"]);
        assert!(cli.verbose);
        assert_eq!(
            cli.command,
            Some(Commands::Eol {
                file: PathBuf::from("notes.txt"),
                yes: true
            })
        );
    }

    #[test]
    fn parse_completions_command() {
        let cli = Cli::parse_from(["mycmd", "completions", "bash"]);
        assert!(matches!(cli.command, Some(Commands::Completions { .. })));
    }
}
