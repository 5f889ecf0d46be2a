//! Language table: file extension → language → editor mode and runner.
//!
//! Every lookup is total. Unknown extensions resolve to [`Language::PlainText`].

use crate::error::ApiError;
use crate::tree::category::extension_of;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Python,
    JavaScript,
    TypeScript,
    Java,
    CSharp,
    Cpp,
    Ruby,
    Go,
    Rust,
    Php,
    Html,
    Css,
    Json,
    Markdown,
    PlainText,
}

/// How the backend runs code in a language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExecutionProfile {
    pub extension: &'static str,
    pub command: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compile_command: Option<&'static str>,
    pub timeout_secs: u64,
}

impl Language {
    pub const ALL: [Language; 15] = [
        Language::Python,
        Language::JavaScript,
        Language::TypeScript,
        Language::Java,
        Language::CSharp,
        Language::Cpp,
        Language::Ruby,
        Language::Go,
        Language::Rust,
        Language::Php,
        Language::Html,
        Language::Css,
        Language::Json,
        Language::Markdown,
        Language::PlainText,
    ];

    /// Language for an extension, with or without the leading dot.
    pub fn from_extension(ext: &str) -> Self {
        let ext = ext.trim_start_matches('.').to_ascii_lowercase();
        match ext.as_str() {
            "py" | "pyw" => Language::Python,
            "js" | "jsx" | "mjs" | "cjs" => Language::JavaScript,
            "ts" | "tsx" => Language::TypeScript,
            "java" => Language::Java,
            "cs" => Language::CSharp,
            "c" | "cc" | "cpp" | "cxx" | "h" | "hpp" => Language::Cpp,
            "rb" => Language::Ruby,
            "go" => Language::Go,
            "rs" => Language::Rust,
            "php" => Language::Php,
            "html" | "htm" => Language::Html,
            "css" => Language::Css,
            "json" => Language::Json,
            "md" | "markdown" => Language::Markdown,
            _ => Language::PlainText,
        }
    }

    pub fn from_file_name(name: &str) -> Self {
        extension_of(name)
            .map(|ext| Self::from_extension(&ext))
            .unwrap_or(Language::PlainText)
    }

    /// Identifier used by the backend API.
    pub fn id(&self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::JavaScript => "javascript",
            Language::TypeScript => "typescript",
            Language::Java => "java",
            Language::CSharp => "csharp",
            Language::Cpp => "cpp",
            Language::Ruby => "ruby",
            Language::Go => "go",
            Language::Rust => "rust",
            Language::Php => "php",
            Language::Html => "html",
            Language::Css => "css",
            Language::Json => "json",
            Language::Markdown => "markdown",
            Language::PlainText => "plaintext",
        }
    }

    /// Syntax mode name for the editor.
    pub fn editor_mode(&self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::JavaScript | Language::Json => "javascript",
            Language::TypeScript => "text/typescript",
            Language::Java => "text/x-java",
            Language::CSharp => "text/x-csharp",
            Language::Cpp => "text/x-c++src",
            Language::Ruby => "ruby",
            Language::Go => "go",
            Language::Rust => "rust",
            Language::Php => "php",
            Language::Html => "htmlmixed",
            Language::Css => "css",
            Language::Markdown => "markdown",
            Language::PlainText => "text/plain",
        }
    }

    /// Runner settings, for languages the backend can execute.
    pub fn execution(&self) -> Option<ExecutionProfile> {
        match self {
            Language::Python => Some(profile(".py", "python", None, 10)),
            Language::JavaScript => Some(profile(".js", "node", None, 10)),
            Language::Java => Some(profile(".java", "java", Some("javac"), 15)),
            Language::CSharp => Some(profile(".cs", "dotnet run", None, 15)),
            Language::Cpp => Some(profile(".cpp", "./a.out", Some("g++"), 10)),
            Language::Ruby => Some(profile(".rb", "ruby", None, 10)),
            Language::Go => Some(profile(".go", "go run", None, 10)),
            Language::Rust => Some(profile(".rs", "./main", Some("rustc"), 15)),
            Language::Php => Some(profile(".php", "php", None, 10)),
            Language::TypeScript
            | Language::Html
            | Language::Css
            | Language::Json
            | Language::Markdown
            | Language::PlainText => None,
        }
    }
}

fn profile(
    extension: &'static str,
    command: &'static str,
    compile_command: Option<&'static str>,
    timeout_secs: u64,
) -> ExecutionProfile {
    ExecutionProfile {
        extension,
        command,
        compile_command,
        timeout_secs,
    }
}

impl FromStr for Language {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Language::ALL
            .iter()
            .copied()
            .find(|language| language.id() == wanted)
            .ok_or_else(|| ApiError::InvalidArgument(format!("Unknown language: {}", s)))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
