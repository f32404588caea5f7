//! Filesystem helpers for the mycmd setup tools
//!
//! Provides normalized paths, atomic writes, line-ending handling and
//! format-aware manifest loading. Every write in the workspace goes through
//! [`io::write_atomic`] so a failed run never leaves a half-written file.

pub mod checksum;
pub mod config;
pub mod eol;
pub mod error;
pub mod io;
pub mod path;

pub use config::ConfigStore;
pub use eol::LineEnding;
pub use error::{Error, Result};
pub use path::NormalizedPath;
