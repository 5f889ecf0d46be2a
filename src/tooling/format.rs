//! Format summaries and language details as text.

use crate::language::Language;
use crate::tree::TreeStats;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;

/// Format a section heading with bold/underline.
pub fn format_section_heading(title: &str) -> String {
    format!("{}", title.bold().underline())
}

/// Format tree statistics as human-readable text.
pub fn format_summary_text(stats: &TreeStats, top: usize) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{}\n\n",
        format_section_heading("Repository Structure Summary")
    ));
    out.push_str(&format!("  Total files: {}\n", stats.files));
    out.push_str(&format!("  Total folders: {}\n", stats.folders));
    out.push_str(&format!("  Max depth: {}\n\n", stats.max_depth));

    let extensions = stats.top_extensions(top);
    if extensions.is_empty() {
        out.push_str("No file extensions found.\n");
        return out;
    }
    out.push_str(&format!("{}\n\n", format_section_heading("File types")));
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Extension", "Files"]);
    for (ext, count) in extensions {
        table.add_row(vec![format!(".{}", ext), count.to_string()]);
    }
    out.push_str(&format!("{}\n", table));
    out
}

/// Format language details for a file.
pub fn format_language_text(language: Language) -> String {
    let mut out = String::new();
    out.push_str(&format!("Language: {}\n", language));
    out.push_str(&format!("Editor mode: {}\n", language.editor_mode()));
    match language.execution() {
        Some(profile) => {
            out.push_str(&format!("Run command: {}\n", profile.command));
            if let Some(compile) = profile.compile_command {
                out.push_str(&format!("Compile command: {}\n", compile));
            }
            out.push_str(&format!("Timeout: {}s\n", profile.timeout_secs));
        }
        None => out.push_str("Execution: not supported\n"),
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_lists_extensions() {
        let stats = TreeStats {
            files: 3,
            folders: 1,
            max_depth: 2,
            extensions: vec![("py".to_string(), 2), ("md".to_string(), 1)],
        };
        let out = format_summary_text(&stats, 10);
        assert!(out.contains("Total files: 3"));
        assert!(out.contains(".py"));
        assert!(out.contains(".md"));
    }

    #[test]
    fn test_summary_without_extensions() {
        let out = format_summary_text(&TreeStats::default(), 10);
        assert!(out.contains("No file extensions found."));
    }

    #[test]
    fn test_language_text() {
        let out = format_language_text(Language::Rust);
        assert!(out.contains("Compile command: rustc"));
        let out = format_language_text(Language::Markdown);
        assert!(out.contains("Execution: not supported"));
    }
}
