//! Tooling & Integration Layer
//!
//! CLI commands and their text formatting.

pub mod cli;
pub mod format;

pub use cli::{Cli, CliContext, Commands};
