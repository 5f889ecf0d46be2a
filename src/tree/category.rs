//! File category tags used to pick explorer icons.

use serde::{Deserialize, Serialize};

/// Cosmetic file-type tag derived from the extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Python,
    Javascript,
    Typescript,
    Html,
    Css,
    Json,
    Markdown,
    Rust,
    Java,
    Csharp,
    Cpp,
    Go,
    Ruby,
    Php,
    Shell,
    Config,
    Image,
    Archive,
    Text,
}

impl Category {
    /// Category for a file name. Never fails; unknown extensions are `Text`.
    pub fn for_file_name(name: &str) -> Self {
        match extension_of(name) {
            Some(ext) => Self::for_extension(&ext),
            None => Category::Text,
        }
    }

    /// Category for an already lower-cased extension without the dot.
    pub fn for_extension(ext: &str) -> Self {
        match ext {
            "py" | "pyw" | "ipynb" => Category::Python,
            "js" | "jsx" | "mjs" | "cjs" => Category::Javascript,
            "ts" | "tsx" => Category::Typescript,
            "html" | "htm" => Category::Html,
            "css" | "scss" | "sass" | "less" => Category::Css,
            "json" => Category::Json,
            "md" | "markdown" | "rst" => Category::Markdown,
            "rs" => Category::Rust,
            "java" => Category::Java,
            "cs" => Category::Csharp,
            "c" | "cc" | "cpp" | "cxx" | "h" | "hpp" => Category::Cpp,
            "go" => Category::Go,
            "rb" => Category::Ruby,
            "php" => Category::Php,
            "sh" | "bash" | "zsh" => Category::Shell,
            "toml" | "yaml" | "yml" | "ini" | "cfg" | "env" | "lock" => Category::Config,
            "png" | "jpg" | "jpeg" | "gif" | "svg" | "ico" | "webp" => Category::Image,
            "zip" | "tar" | "gz" | "tgz" | "bz2" | "xz" => Category::Archive,
            _ => Category::Text,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Python => "python",
            Category::Javascript => "javascript",
            Category::Typescript => "typescript",
            Category::Html => "html",
            Category::Css => "css",
            Category::Json => "json",
            Category::Markdown => "markdown",
            Category::Rust => "rust",
            Category::Java => "java",
            Category::Csharp => "csharp",
            Category::Cpp => "cpp",
            Category::Go => "go",
            Category::Ruby => "ruby",
            Category::Php => "php",
            Category::Shell => "shell",
            Category::Config => "config",
            Category::Image => "image",
            Category::Archive => "archive",
            Category::Text => "text",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lower-cased suffix after the last `.`, if any.
pub fn extension_of(name: &str) -> Option<String> {
    match name.rsplit_once('.') {
        Some((_, ext)) if !ext.is_empty() => Some(ext.to_lowercase()),
        _ => None,
    }
}
