//! Git origin checks for the mycmd setup tools
//!
//! Setup refuses to wire a package into the shell when the package checkout
//! was cloned from somewhere other than the expected origin.

pub mod error;
pub mod origin;
pub mod url;

pub use error::{Error, Result};
pub use origin::{OriginStatus, remote_url, validate_origin};
pub use url::{normalize_remote_url, urls_match};
