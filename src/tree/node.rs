//! Explorer node types and the parsed tree.

use crate::tree::category::extension_of;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Leaf entry: a file at a root-relative, slash-prefixed path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileNode {
    pub name: String,
    pub path: String,
}

/// Branch entry: a folder owning its children in input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderNode {
    pub name: String,
    pub children: Vec<Node>,
}

/// Explorer node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    File(FileNode),
    Folder(FolderNode),
}

impl Node {
    pub fn file(name: impl Into<String>, path: impl Into<String>) -> Self {
        Node::File(FileNode {
            name: name.into(),
            path: path.into(),
        })
    }

    pub fn folder(name: impl Into<String>, children: Vec<Node>) -> Self {
        Node::Folder(FolderNode {
            name: name.into(),
            children,
        })
    }

    pub fn name(&self) -> &str {
        match self {
            Node::File(file) => &file.name,
            Node::Folder(folder) => &folder.name,
        }
    }

    pub fn is_folder(&self) -> bool {
        matches!(self, Node::Folder(_))
    }
}

/// Root-level nodes of one parsed listing.
///
/// A tree is never updated in place: each successful fetch produces a new
/// one that replaces the previous.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tree {
    roots: Vec<Node>,
}

impl Tree {
    pub fn new(roots: Vec<Node>) -> Self {
        Self { roots }
    }

    pub fn roots(&self) -> &[Node] {
        &self.roots
    }

    pub fn into_roots(self) -> Vec<Node> {
        self.roots
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// All files in depth-first input order.
    pub fn files(&self) -> Vec<&FileNode> {
        let mut out = Vec::new();
        collect_files(&self.roots, &mut out);
        out
    }

    /// Look up a file by its slash-prefixed path.
    pub fn find_file(&self, path: &str) -> Option<&FileNode> {
        self.files().into_iter().find(|file| file.path == path)
    }

    /// Counts and extension breakdown, used by the repository summary.
    pub fn stats(&self) -> TreeStats {
        let mut stats = TreeStats::default();
        let mut extensions: BTreeMap<String, usize> = BTreeMap::new();
        accumulate(&self.roots, 1, &mut stats, &mut extensions);

        let mut by_count: Vec<(String, usize)> = extensions.into_iter().collect();
        // BTreeMap order makes the extension tie-break ascending.
        by_count.sort_by(|a, b| b.1.cmp(&a.1));
        stats.extensions = by_count;
        stats
    }
}

fn collect_files<'a>(nodes: &'a [Node], out: &mut Vec<&'a FileNode>) {
    for node in nodes {
        match node {
            Node::File(file) => out.push(file),
            Node::Folder(folder) => collect_files(&folder.children, out),
        }
    }
}

fn accumulate(
    nodes: &[Node],
    depth: usize,
    stats: &mut TreeStats,
    extensions: &mut BTreeMap<String, usize>,
) {
    for node in nodes {
        stats.max_depth = stats.max_depth.max(depth);
        match node {
            Node::File(file) => {
                stats.files += 1;
                if let Some(ext) = extension_of(&file.name) {
                    *extensions.entry(ext).or_insert(0) += 1;
                }
            }
            Node::Folder(folder) => {
                stats.folders += 1;
                accumulate(&folder.children, depth + 1, stats, extensions);
            }
        }
    }
}

/// Summary counts for a tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeStats {
    pub files: usize,
    pub folders: usize,
    pub max_depth: usize,
    /// (extension, count), count descending then extension ascending
    pub extensions: Vec<(String, usize)>,
}

impl TreeStats {
    pub fn top_extensions(&self, limit: usize) -> &[(String, usize)] {
        &self.extensions[..self.extensions.len().min(limit)]
    }
}
