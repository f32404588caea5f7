//! Shared test fixtures for the mycmd-kit workspace.
//!
//! Dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`git`]: git repository fixtures
//! - [`package`]: [`TestPackage`](package::TestPackage) builder for a
//!   package directory plus a scratch home directory

pub mod git;
pub mod package;
