use aethertree::tree::render::sorted_tree;
use aethertree::tree::{parse_structure, Node, RenderFormat, Tree, TreeRenderer};
use proptest::prelude::*;
use std::collections::HashSet;

#[derive(Debug, Clone)]
enum Entry {
    File(String),
    Folder(String, Vec<Entry>),
}

impl Entry {
    fn name(&self) -> &str {
        match self {
            Entry::File(name) | Entry::Folder(name, _) => name,
        }
    }
}

fn dedupe(entries: Vec<Entry>) -> Vec<Entry> {
    let mut seen = HashSet::new();
    entries
        .into_iter()
        .filter(|entry| seen.insert(entry.name().to_string()))
        .collect()
}

fn entries() -> impl Strategy<Value = Vec<Entry>> {
    let leaf = "[a-zA-Z_]{1,6}\\.(py|rs|md|txt)".prop_map(Entry::File);
    let entry = leaf.prop_recursive(4, 40, 5, |inner| {
        ("[a-zA-Z_]{1,6}", prop::collection::vec(inner, 0..5))
            .prop_map(|(name, children)| Entry::Folder(name, dedupe(children)))
    });
    prop::collection::vec(entry, 0..6).prop_map(dedupe)
}

fn write_listing(entries: &[Entry], depth: usize, step: usize, out: &mut Vec<(usize, String)>) {
    for entry in entries {
        let indent = depth * step;
        match entry {
            Entry::File(name) => out.push((indent, name.clone())),
            Entry::Folder(name, children) => {
                out.push((indent, format!("{}/", name)));
                write_listing(children, depth + 1, step, out);
            }
        }
    }
}

fn expected_nodes(entries: &[Entry], prefix: &str) -> Vec<Node> {
    entries
        .iter()
        .map(|entry| match entry {
            Entry::File(name) => Node::file(name.clone(), format!("{}/{}", prefix, name)),
            Entry::Folder(name, children) => Node::folder(
                name.clone(),
                expected_nodes(children, &format!("{}/{}", prefix, name)),
            ),
        })
        .collect()
}

fn join(lines: &[(usize, String)], header: bool) -> String {
    let mut text = String::new();
    if header {
        text.push_str("Repository structure:\n");
    }
    for (indent, name) in lines {
        text.push_str(&" ".repeat(*indent));
        text.push_str(name);
        text.push('\n');
    }
    text
}

fn folders_precede_files(nodes: &[Node]) -> bool {
    let first_file = nodes.iter().position(|n| !n.is_folder()).unwrap_or(nodes.len());
    nodes[first_file..].iter().all(|n| !n.is_folder())
        && nodes.iter().all(|n| match n {
            Node::Folder(folder) => folders_precede_files(&folder.children),
            Node::File(_) => true,
        })
}

proptest! {
    #[test]
    fn paths_join_enclosing_folders(tree in entries(), step in 1usize..5, header in any::<bool>()) {
        let mut lines = Vec::new();
        write_listing(&tree, 0, step, &mut lines);
        let parsed = parse_structure(&join(&lines, header));
        prop_assert_eq!(parsed, Tree::new(expected_nodes(&tree, "")));
    }

    #[test]
    fn sentinels_never_change_the_tree(
        tree in entries(),
        inserts in prop::collection::vec((any::<prop::sample::Index>(), 0usize..12), 0..6),
    ) {
        let mut lines = Vec::new();
        write_listing(&tree, 0, 2, &mut lines);
        let clean = parse_structure(&join(&lines, true));

        let mut noisy = lines.clone();
        for (at, indent) in inserts {
            let position = at.index(noisy.len() + 1);
            noisy.insert(position, (indent, "... (more files not shown)".to_string()));
        }
        prop_assert_eq!(parse_structure(&join(&noisy, true)), clean);
    }

    #[test]
    fn rendering_is_deterministic_and_folders_first(tree in entries()) {
        let mut lines = Vec::new();
        write_listing(&tree, 0, 4, &mut lines);
        let parsed = parse_structure(&join(&lines, false));

        prop_assert!(folders_precede_files(sorted_tree(&parsed).roots()));
        for format in [RenderFormat::Html, RenderFormat::Text, RenderFormat::Json] {
            let renderer = TreeRenderer::default().with_format(format).with_color(false);
            prop_assert_eq!(renderer.render(&parsed), renderer.render(&parsed.clone()));
        }
    }

    #[test]
    fn arbitrary_text_never_panics(input in "(\\PC|\n|\t| ){0,200}") {
        let tree = parse_structure(&input);
        let _ = TreeRenderer::default().render(&tree);
    }
}
