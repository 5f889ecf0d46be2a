//! AetherTree: Repository Explorer Core
//!
//! Parses the indented repository-structure listings served by the
//! AetherCode backend into file trees and renders them folders-first for
//! the explorer panel.

pub mod api;
pub mod config;
pub mod error;
pub mod explorer;
pub mod language;
pub mod listing;
pub mod logging;
pub mod reveal;
pub mod tooling;
pub mod tree;

pub use error::{ApiError, ParseError};
pub use tree::{parse_structure, IndentedTreeParser, Node, Tree, TreeRenderer};
