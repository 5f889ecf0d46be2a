//! Repository tree: node types, the indented-listing parser, and rendering.

pub mod category;
pub mod node;
pub mod parser;
pub mod render;

pub use category::Category;
pub use node::{FileNode, FolderNode, Node, Tree, TreeStats};
pub use parser::{parse_structure, IndentedTreeParser, ParserConfig};
pub use render::{Placeholder, RenderConfig, RenderFormat, TreeRenderer};
