//! Indentation-stack parser for repository structure listings.
//!
//! The backend describes a repository as an indented text outline:
//!
//! ```text
//! Repository structure:
//! src/
//!     app.py
//!     ... (more files)
//! README.md
//! ```
//!
//! Folder lines end with `/`. Each line's parent is the nearest preceding
//! folder with strictly smaller indentation.

use crate::error::ParseError;
use crate::tree::node::{Node, Tree};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, info};

/// Parser configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Header lines discarded when they are the first non-blank line
    #[serde(default = "default_header_lines")]
    pub header_lines: Vec<String>,

    /// Markers identifying truncation lines such as `... (more files)`
    #[serde(default = "default_sentinel_markers")]
    pub sentinel_markers: Vec<String>,

    /// Columns counted for a leading tab
    #[serde(default = "default_tab_width")]
    pub tab_width: usize,
}

fn default_header_lines() -> Vec<String> {
    vec!["Repository structure:".to_string()]
}

fn default_sentinel_markers() -> Vec<String> {
    vec!["more files".to_string()]
}

fn default_tab_width() -> usize {
    4
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            header_lines: default_header_lines(),
            sentinel_markers: default_sentinel_markers(),
            tab_width: default_tab_width(),
        }
    }
}

/// Parse a listing with the default configuration.
pub fn parse_structure(input: &str) -> Tree {
    IndentedTreeParser::default().parse(input)
}

/// Converts indented listings into [`Tree`]s.
#[derive(Debug, Clone, Default)]
pub struct IndentedTreeParser {
    config: ParserConfig,
}

impl IndentedTreeParser {
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse raw bytes from the structure endpoint.
    ///
    /// Fails only when the body is not UTF-8 text.
    pub fn parse_bytes(&self, input: &[u8]) -> Result<Tree, ParseError> {
        let text = std::str::from_utf8(input).map_err(|e| ParseError::NotText {
            valid_up_to: e.valid_up_to(),
        })?;
        Ok(self.parse(text))
    }

    /// Parse a listing. Never fails; unusable lines are skipped.
    pub fn parse(&self, input: &str) -> Tree {
        let mut builder = TreeBuilder::default();
        let mut first = true;

        for raw in input.lines() {
            if raw.trim().is_empty() {
                continue;
            }
            if std::mem::take(&mut first) && self.is_header(raw) {
                debug!(line = raw.trim(), "Discarding structure header");
                continue;
            }

            let Some(line) = self.classify(raw) else {
                builder.skipped += 1;
                continue;
            };
            builder.push(line);
        }

        let tree = builder.finish();
        info!(
            roots = tree.roots().len(),
            files = tree.files().len(),
            "Parsed repository structure"
        );
        tree
    }

    /// Whether an entry called `name` written on its own line parses back
    /// to exactly one node with that name. Header-like names are refused
    /// even though they only clash on the first line.
    pub fn accepts_name(&self, name: &str) -> bool {
        !name.is_empty()
            && name.trim() == name
            && !name.ends_with('/')
            && !name.chars().any(char::is_control)
            && !self.is_sentinel(name)
            && !self.is_header(name)
    }

    fn is_header(&self, line: &str) -> bool {
        let line = line.trim();
        self.config
            .header_lines
            .iter()
            .any(|header| header.trim().eq_ignore_ascii_case(line))
    }

    fn classify(&self, raw: &str) -> Option<Line> {
        let content = raw.trim_start();
        let indent: usize = raw[..raw.len() - content.len()]
            .chars()
            .map(|c| if c == '\t' { self.config.tab_width } else { 1 })
            .sum();
        let name = content.trim_end();

        if self.is_sentinel(name) {
            debug!(indent, line = name, "Skipping truncation marker");
            return None;
        }
        if name.chars().any(char::is_control) {
            debug!(indent, "Skipping malformed line");
            return None;
        }

        let (kind, clean) = match name.strip_suffix('/') {
            Some(stripped) => (LineKind::Folder, stripped.trim_end_matches('/')),
            None => (LineKind::File, name),
        };
        if clean.is_empty() {
            debug!(indent, line = name, "Skipping line without a name");
            return None;
        }

        Some(Line {
            indent,
            kind,
            name: clean.to_string(),
        })
    }

    fn is_sentinel(&self, name: &str) -> bool {
        let rest = name.trim_start_matches(|c: char| c == '.' || c == '…' || c.is_whitespace());
        let Some(inner) = rest.strip_prefix('(').and_then(|r| r.strip_suffix(')')) else {
            return false;
        };
        let inner = inner.to_lowercase();
        self.config
            .sentinel_markers
            .iter()
            .any(|marker| !marker.is_empty() && inner.contains(&marker.to_lowercase()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind {
    File,
    Folder,
}

#[derive(Debug)]
struct Line {
    indent: usize,
    kind: LineKind,
    name: String,
}

/// An open folder on the indentation stack.
#[derive(Debug)]
struct Frame {
    indent: usize,
    name: String,
    /// Index of an existing sibling folder this frame reopened
    slot: Option<usize>,
    children: Vec<Node>,
}

/// Stack state for one parse. The root container sits below every frame
/// and is never popped.
#[derive(Debug, Default)]
struct TreeBuilder {
    root: Vec<Node>,
    stack: Vec<Frame>,
    seen_files: HashSet<String>,
    skipped: usize,
}

impl TreeBuilder {
    fn container(&mut self) -> &mut Vec<Node> {
        match self.stack.last_mut() {
            Some(frame) => &mut frame.children,
            None => &mut self.root,
        }
    }

    fn push(&mut self, line: Line) {
        while self
            .stack
            .last()
            .is_some_and(|frame| frame.indent >= line.indent)
        {
            self.close_top();
        }

        match line.kind {
            LineKind::Folder => self.open_folder(line.indent, line.name),
            LineKind::File => {
                let path = self.path_for(&line.name);
                if !self.seen_files.insert(path.clone()) {
                    debug!(path = %path, "Skipping duplicate file entry");
                    self.skipped += 1;
                    return;
                }
                self.container().push(Node::file(line.name, path));
            }
        }
    }

    fn open_folder(&mut self, indent: usize, name: String) {
        let container = self.container();
        let existing = container
            .iter()
            .position(|node| matches!(node, Node::Folder(folder) if folder.name == name));

        let (slot, children) = match existing {
            Some(index) => {
                debug!(folder = %name, "Reopening repeated folder");
                let children = match &mut container[index] {
                    Node::Folder(folder) => std::mem::take(&mut folder.children),
                    Node::File(_) => Vec::new(),
                };
                (Some(index), children)
            }
            None => (None, Vec::new()),
        };

        self.stack.push(Frame {
            indent,
            name,
            slot,
            children,
        });
    }

    fn close_top(&mut self) {
        let Some(frame) = self.stack.pop() else {
            return;
        };
        let container = self.container();
        match frame.slot {
            Some(index) => {
                if let Some(Node::Folder(folder)) = container.get_mut(index) {
                    folder.children = frame.children;
                }
            }
            None => container.push(Node::folder(frame.name, frame.children)),
        }
    }

    fn path_for(&self, name: &str) -> String {
        let mut path = String::new();
        for frame in &self.stack {
            path.push('/');
            path.push_str(&frame.name);
        }
        path.push('/');
        path.push_str(name);
        path
    }

    fn finish(mut self) -> Tree {
        while !self.stack.is_empty() {
            self.close_top();
        }
        if self.skipped > 0 {
            debug!(skipped = self.skipped, "Structure lines skipped");
        }
        Tree::new(self.root)
    }
}
