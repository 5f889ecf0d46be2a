//! Structure listing generator.
//!
//! Produces the indented outline consumed by [`crate::tree::parser`] from a
//! directory on disk: one line per folder (`name/`) and file, nested
//! entries indented one level deeper. Files beyond the configured cap are
//! replaced by a single `... (more files)` line per folder. Entries whose
//! names would not parse back unchanged are left out with their contents.

use crate::error::ApiError;
use crate::tree::IndentedTreeParser;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use walkdir::{DirEntry, WalkDir};

pub const HEADER: &str = "Repository structure:";
pub const TRUNCATION_MARKER: &str = "... (more files)";

/// Listing configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingConfig {
    /// Maximum number of file lines before truncation markers are emitted
    #[serde(default = "default_max_files")]
    pub max_files: usize,

    /// Spaces per nesting level
    #[serde(default = "default_indent_width")]
    pub indent_width: usize,

    /// Emit the `Repository structure:` header line
    #[serde(default = "default_true")]
    pub header: bool,

    /// Entry names skipped entirely, along with their contents
    #[serde(default = "default_ignore_names")]
    pub ignore_names: Vec<String>,
}

fn default_max_files() -> usize {
    50
}

fn default_indent_width() -> usize {
    4
}

fn default_true() -> bool {
    true
}

fn default_ignore_names() -> Vec<String> {
    [".git", "__pycache__", "node_modules", ".DS_Store"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            max_files: default_max_files(),
            indent_width: default_indent_width(),
            header: default_true(),
            ignore_names: default_ignore_names(),
        }
    }
}

/// Generate the indented listing for `root`.
///
/// Within a folder, files are listed before subfolders, each group by name.
pub fn generate(root: &Path, config: &ListingConfig) -> Result<String, ApiError> {
    if !root.is_dir() {
        return Err(ApiError::InvalidArgument(format!(
            "Not a directory: {}",
            root.display()
        )));
    }

    let ignored: HashSet<String> = config.ignore_names.iter().cloned().collect();
    let parser = IndentedTreeParser::default();
    let mut refused = 0usize;
    let walker = WalkDir::new(root)
        .min_depth(1)
        .sort_by(|a, b| {
            a.file_type()
                .is_dir()
                .cmp(&b.file_type().is_dir())
                .then_with(|| a.file_name().cmp(b.file_name()))
        })
        .into_iter()
        .filter_entry(|entry| {
            if is_ignored(entry, &ignored) {
                return false;
            }
            if entry.depth() > 0 && !is_listable(entry, &parser) {
                warn!(
                    path = %entry.path().display(),
                    "Skipping entry whose name cannot appear in a listing"
                );
                refused += 1;
                return false;
            }
            true
        });

    let mut lines: Vec<String> = Vec::new();
    if config.header {
        lines.push(HEADER.to_string());
    }

    let mut files = 0usize;
    let mut folders = 0usize;
    let mut truncated: HashSet<PathBuf> = HashSet::new();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                let path = err.path().map(Path::to_path_buf).unwrap_or_else(|| root.to_path_buf());
                if err.depth() == 0 {
                    return Err(ApiError::io(path, err.into()));
                }
                warn!(path = %path.display(), error = %err, "Skipping unreadable entry");
                continue;
            }
        };

        let indent = " ".repeat(config.indent_width * (entry.depth() - 1));
        let name = entry.file_name().to_string_lossy();

        if entry.file_type().is_dir() {
            folders += 1;
            lines.push(format!("{}{}/", indent, name));
            continue;
        }

        if files >= config.max_files {
            let parent = entry.path().parent().map(Path::to_path_buf).unwrap_or_default();
            if truncated.insert(parent) {
                lines.push(format!("{}{}", indent, TRUNCATION_MARKER));
            }
            continue;
        }
        files += 1;
        lines.push(format!("{}{}", indent, name));
    }

    info!(
        root = %root.display(),
        files,
        folders,
        truncated_folders = truncated.len(),
        refused,
        "Generated structure listing"
    );
    Ok(lines.join("\n"))
}

/// Names must be UTF-8 and survive a parse as a single entry.
fn is_listable(entry: &DirEntry, parser: &IndentedTreeParser) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| parser.accepts_name(name))
}

fn is_ignored(entry: &DirEntry, ignored: &HashSet<String>) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| ignored.contains(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn fixture() -> TempDir {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        fs::create_dir_all(root.join("src/utils")).unwrap();
        fs::create_dir_all(root.join(".git/objects")).unwrap();
        fs::write(root.join("README.md"), "readme").unwrap();
        fs::write(root.join("src/app.py"), "print()").unwrap();
        fs::write(root.join("src/utils/helpers.py"), "").unwrap();
        fs::write(root.join(".git/HEAD"), "ref").unwrap();
        temp
    }

    #[test]
    fn test_generate_layout() {
        let temp = fixture();
        let listing = generate(temp.path(), &ListingConfig::default()).unwrap();
        assert_eq!(
            listing,
            "Repository structure:\nREADME.md\nsrc/\n    app.py\n    utils/\n        helpers.py"
        );
    }

    #[test]
    fn test_generate_without_header() {
        let temp = fixture();
        let config = ListingConfig {
            header: false,
            indent_width: 2,
            ..ListingConfig::default()
        };
        let listing = generate(temp.path(), &config).unwrap();
        assert!(listing.starts_with("README.md\nsrc/\n  app.py"));
    }

    #[test]
    fn test_generate_truncates_once_per_folder() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("a")).unwrap();
        for name in ["1.txt", "2.txt", "3.txt"] {
            fs::write(temp.path().join("a").join(name), "").unwrap();
        }
        fs::write(temp.path().join("root.txt"), "").unwrap();

        let config = ListingConfig {
            max_files: 2,
            ..ListingConfig::default()
        };
        let listing = generate(temp.path(), &config).unwrap();
        assert_eq!(
            listing,
            "Repository structure:\nroot.txt\na/\n    1.txt\n    ... (more files)"
        );
    }

    #[test]
    fn test_generate_rejects_missing_root() {
        let temp = TempDir::new().unwrap();
        let err = generate(&temp.path().join("missing"), &ListingConfig::default()).unwrap_err();
        assert!(matches!(err, ApiError::InvalidArgument(_)));
    }
}
