//! Tree rendering: nested HTML list markup, terminal text, or JSON.
//!
//! Siblings are always shown folders first, then by name. Rendering sorts a
//! borrowed view and leaves the parsed tree in input order.

use crate::error::ApiError;
use crate::tree::category::Category;
use crate::tree::node::{Node, Tree};
use owo_colors::OwoColorize;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderFormat {
    #[default]
    Html,
    Text,
    Json,
}

impl FromStr for RenderFormat {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "html" => Ok(RenderFormat::Html),
            "text" => Ok(RenderFormat::Text),
            "json" => Ok(RenderFormat::Json),
            other => Err(ApiError::InvalidArgument(format!(
                "Invalid render format: {} (must be 'html', 'text', or 'json')",
                other
            ))),
        }
    }
}

impl fmt::Display for RenderFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RenderFormat::Html => "html",
            RenderFormat::Text => "text",
            RenderFormat::Json => "json",
        })
    }
}

/// Renderer configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    #[serde(default)]
    pub format: RenderFormat,

    /// ANSI colors in text output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Shown for a loaded but empty tree
    #[serde(default = "default_empty_message")]
    pub empty_message: String,

    /// Shown while a structure fetch is in flight
    #[serde(default = "default_loading_message")]
    pub loading_message: String,

    /// Shown before any structure has been requested
    #[serde(default = "default_not_loaded_message")]
    pub not_loaded_message: String,
}

fn default_true() -> bool {
    true
}

fn default_empty_message() -> String {
    "No files found".to_string()
}

fn default_loading_message() -> String {
    "Loading repository structure...".to_string()
}

fn default_not_loaded_message() -> String {
    "No repository loaded".to_string()
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            format: RenderFormat::default(),
            color: default_true(),
            empty_message: default_empty_message(),
            loading_message: default_loading_message(),
            not_loaded_message: default_not_loaded_message(),
        }
    }
}

/// Non-tree states the explorer panel can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder<'a> {
    NotLoaded,
    Loading,
    Empty,
    Failed(&'a str),
}

/// Sibling order: folders before files, then by name.
pub fn compare_nodes(a: &Node, b: &Node) -> Ordering {
    b.is_folder()
        .cmp(&a.is_folder())
        .then_with(|| a.name().cmp(b.name()))
}

/// Borrowed siblings in display order. The sort is stable, so equal names
/// keep input order.
pub fn sorted_view(nodes: &[Node]) -> Vec<&Node> {
    let mut view: Vec<&Node> = nodes.iter().collect();
    view.sort_by(|a, b| compare_nodes(a, b));
    view
}

/// Owned copy of `tree` with every level in display order.
pub fn sorted_tree(tree: &Tree) -> Tree {
    Tree::new(sorted_nodes(tree.roots()))
}

fn sorted_nodes(nodes: &[Node]) -> Vec<Node> {
    sorted_view(nodes)
        .into_iter()
        .map(|node| match node {
            Node::File(file) => Node::File(file.clone()),
            Node::Folder(folder) => Node::folder(folder.name.clone(), sorted_nodes(&folder.children)),
        })
        .collect()
}

/// Renders trees and panel placeholders.
#[derive(Debug, Clone, Default)]
pub struct TreeRenderer {
    config: RenderConfig,
}

impl TreeRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn with_format(mut self, format: RenderFormat) -> Self {
        self.config.format = format;
        self
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.config.color = color;
        self
    }

    pub fn format(&self) -> RenderFormat {
        self.config.format
    }

    /// Render a tree. An empty tree renders the "no files" placeholder.
    pub fn render(&self, tree: &Tree) -> String {
        if tree.is_empty() {
            return self.placeholder(Placeholder::Empty);
        }
        match self.config.format {
            RenderFormat::Html => {
                let mut out = String::from("<ul class=\"file-tree\">\n");
                render_html_level(tree.roots(), 1, &mut out);
                out.push_str("</ul>\n");
                out
            }
            RenderFormat::Text => {
                let mut out = String::new();
                for node in sorted_view(tree.roots()) {
                    out.push_str(&self.text_label(node));
                    out.push('\n');
                    if let Node::Folder(folder) = node {
                        self.render_text_level(&folder.children, "", &mut out);
                    }
                }
                out
            }
            RenderFormat::Json => to_json(&sorted_tree(tree)),
        }
    }

    /// Render a placeholder in the configured format.
    pub fn placeholder(&self, placeholder: Placeholder<'_>) -> String {
        let (class, message) = match placeholder {
            Placeholder::NotLoaded => ("not-loaded", self.config.not_loaded_message.clone()),
            Placeholder::Loading => ("loading", self.config.loading_message.clone()),
            Placeholder::Empty => ("no-files", self.config.empty_message.clone()),
            Placeholder::Failed(reason) => ("error", format!("Error: {}", reason)),
        };
        match self.config.format {
            RenderFormat::Html => format!("<div class=\"{}\">{}</div>\n", class, escape_html(&message)),
            RenderFormat::Text => format!("{}\n", message),
            RenderFormat::Json => match placeholder {
                Placeholder::Empty => "[]".to_string(),
                _ => to_json(&serde_json::json!({ "status": class, "message": message })),
            },
        }
    }

    fn render_text_level(&self, nodes: &[Node], prefix: &str, out: &mut String) {
        let view = sorted_view(nodes);
        let last = view.len().saturating_sub(1);
        for (index, node) in view.into_iter().enumerate() {
            let (branch, carry) = if index == last {
                ("└── ", "    ")
            } else {
                ("├── ", "│   ")
            };
            out.push_str(prefix);
            out.push_str(branch);
            out.push_str(&self.text_label(node));
            out.push('\n');
            if let Node::Folder(folder) = node {
                self.render_text_level(&folder.children, &format!("{}{}", prefix, carry), out);
            }
        }
    }

    fn text_label(&self, node: &Node) -> String {
        match node {
            Node::Folder(folder) => {
                let label = format!("{}/", folder.name);
                if self.config.color {
                    format!("{}", label.blue().bold())
                } else {
                    label
                }
            }
            Node::File(file) => file.name.clone(),
        }
    }
}

fn render_html_level(nodes: &[Node], depth: usize, out: &mut String) {
    let pad = "  ".repeat(depth);
    for node in sorted_view(nodes) {
        match node {
            Node::Folder(folder) => {
                out.push_str(&format!(
                    "{pad}<li class=\"folder\" data-name=\"{name}\"><span class=\"folder-name\">{name}/</span>\n",
                    pad = pad,
                    name = escape_html(&folder.name)
                ));
                out.push_str(&format!("{}  <ul class=\"folder-children\">\n", pad));
                render_html_level(&folder.children, depth + 2, out);
                out.push_str(&format!("{}  </ul>\n{}</li>\n", pad, pad));
            }
            Node::File(file) => {
                out.push_str(&format!(
                    "{pad}<li class=\"file\" data-path=\"{path}\" data-type=\"{category}\"><span class=\"file-name\">{name}</span></li>\n",
                    pad = pad,
                    path = escape_html(&file.path),
                    category = Category::for_file_name(&file.name),
                    name = escape_html(&file.name)
                ));
            }
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> String {
    // Trees and placeholders hold only strings and sequences.
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "[]".to_string())
}

/// Escape text for use in element content and quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
