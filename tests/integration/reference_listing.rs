use aethertree::tree::render::sorted_tree;
use aethertree::tree::{parse_structure, Node, RenderFormat, TreeRenderer};

const REFERENCE: &str = "Repository structure:
src/
  app.py
  utils/
    helpers.py
README.md
";

#[test]
fn reference_listing_parses_in_input_order() {
    let tree = parse_structure(REFERENCE);
    assert_eq!(
        tree.roots(),
        &[
            Node::folder(
                "src",
                vec![
                    Node::file("app.py", "/src/app.py"),
                    Node::folder("utils", vec![Node::file("helpers.py", "/src/utils/helpers.py")]),
                ]
            ),
            Node::file("README.md", "/README.md"),
        ]
    );
}

#[test]
fn reference_listing_renders_folders_first() {
    let tree = parse_structure(REFERENCE);
    let sorted = sorted_tree(&tree);
    let root_names: Vec<&str> = sorted.roots().iter().map(Node::name).collect();
    assert_eq!(root_names, vec!["src", "README.md"]);

    let Node::Folder(src) = &sorted.roots()[0] else {
        panic!("src should be a folder");
    };
    let src_names: Vec<&str> = src.children.iter().map(Node::name).collect();
    assert_eq!(src_names, vec!["utils", "app.py"]);
}

#[test]
fn rendering_is_idempotent_in_every_format() {
    let tree = parse_structure(REFERENCE);
    for format in [RenderFormat::Html, RenderFormat::Text, RenderFormat::Json] {
        let renderer = TreeRenderer::default().with_format(format).with_color(false);
        assert_eq!(renderer.render(&tree), renderer.render(&tree));
    }
}

#[test]
fn sentinel_line_attaches_following_sibling_to_existing_frame() {
    let listing = "Repository structure:
src/
  app.py
  (more files not shown)
  main.py
docs/
";
    let tree = parse_structure(listing);
    assert_eq!(
        tree.roots(),
        &[
            Node::folder(
                "src",
                vec![
                    Node::file("app.py", "/src/app.py"),
                    Node::file("main.py", "/src/main.py"),
                ]
            ),
            Node::folder("docs", vec![]),
        ]
    );
}

#[test]
fn listing_with_root_folder_line() {
    let listing = "myrepo/
    setup.py
    pkg/
        __init__.py
        ... (more files not shown)
";
    let tree = parse_structure(listing);
    let paths: Vec<&str> = tree.files().iter().map(|f| f.path.as_str()).collect();
    assert_eq!(paths, vec!["/myrepo/setup.py", "/myrepo/pkg/__init__.py"]);
}

#[test]
fn unrecognizable_input_renders_placeholder() {
    let tree = parse_structure("\n  \n/\n");
    assert!(tree.is_empty());
    assert_eq!(
        TreeRenderer::default().render(&tree),
        "<div class=\"no-files\">No files found</div>\n"
    );
}
