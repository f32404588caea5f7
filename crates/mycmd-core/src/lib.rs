//! Operations for the mycmd bash-commands package
//!
//! This crate ties the Layer 0 crates together:
//!
//! - **Package**: manifest loading and the required-files check
//! - **Build**: README version bump and the deflated release archive
//! - **Setup**: origin validation and the managed block in the shell startup file
//! - **Interactive**: color and name prompts behind an injectable [`InputSource`]
//! - **Line endings**: file-level CRLF/LF conversion
//!
//! ```text
//!                 mycmd-cli
//!                     |
//!                mycmd-core
//!                     |
//!      +--------------+-------------+
//!      |              |             |
//!  mycmd-fs     mycmd-blocks    mycmd-git
//! ```

pub mod archive;
pub mod color;
pub mod convert;
pub mod diff;
pub mod error;
pub mod interactive;
pub mod manifest;
pub mod package;
pub mod setup;
pub mod version;

pub use archive::{BuildOptions, BuildReport, build};
pub use color::{ColorCode, PRESETS};
pub use convert::{EolReport, convert_file, detect_file};
pub use error::{Error, Result};
pub use interactive::{InputSource, PromptChoice, ScriptedInput};
pub use manifest::PackageManifest;
pub use package::Package;
pub use setup::{SetupOptions, SetupOutcome, SetupReport, run_setup};
pub use version::ReadmeVersion;
