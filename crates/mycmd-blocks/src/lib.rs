//! Managed-block scanning and rewriting for shell startup files.
//!
//! A managed block is the run of lines this tool owns inside a user's shell
//! profile:
//!
//! ```text
//! # Added by mycmd's setup.py on (Feb-02, 2025) © Tirupati
//! declare -xr MYCMD="/home/u/mycmd"
//! source "$MYCMD/my_bashrc.sh"
//! export PS1='...'
//! ```
//!
//! The block starts at a marker line and extends over every following line
//! that is blank or matches one of the owned-line prefixes. The first line
//! that is neither closes the block and is kept.
//!
//! - [`syntax`] holds the marker and owned-line prefixes for one package, and
//!   renders the lines the block is built from, so detection and generation
//!   cannot drift apart.
//! - [`parser`] classifies lines in one pass and reports the blocks found.
//! - [`writer`] drops every existing block, appends the new one and renders
//!   the document with exactly one trailing terminator.
//! - [`block`] assembles the replacement block.

pub mod block;
pub mod error;
pub mod parser;
pub mod syntax;
pub mod writer;

pub use block::NewBlockSpec;
pub use error::{Error, Result};
pub use parser::{BlockSpan, LineRole, classify, has_block, parse_blocks};
pub use syntax::BlockSyntax;
pub use writer::{render, replace_block, rewrite};
