use aethertree::listing::{generate, ListingConfig};
use aethertree::tree::parse_structure;
use std::fs;
use tempfile::TempDir;
use walkdir::WalkDir;

fn build_repo(temp: &TempDir) {
    let root = temp.path();
    for dir in ["src/utils", "docs/guide", "tests", ".git/refs"] {
        fs::create_dir_all(root.join(dir)).unwrap();
    }
    for file in [
        "README.md",
        "Cargo.toml",
        "src/main.rs",
        "src/lib.rs",
        "src/utils/helpers.rs",
        "docs/guide/intro.md",
        "tests/smoke.rs",
        ".git/HEAD",
    ] {
        fs::write(root.join(file), "x").unwrap();
    }
}

#[test]
fn generated_listing_parses_back_to_directory_files() {
    let temp = TempDir::new().unwrap();
    build_repo(&temp);

    let listing = generate(temp.path(), &ListingConfig::default()).unwrap();
    let tree = parse_structure(&listing);

    let mut parsed: Vec<String> = tree.files().iter().map(|f| f.path.clone()).collect();
    parsed.sort();

    let mut on_disk: Vec<String> = WalkDir::new(temp.path())
        .into_iter()
        .filter_entry(|e| e.file_name() != ".git")
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| {
            let rel = e.path().strip_prefix(temp.path()).unwrap();
            format!("/{}", rel.to_string_lossy().replace('\\', "/"))
        })
        .collect();
    on_disk.sort();

    assert_eq!(parsed, on_disk);
    assert_eq!(tree.stats().folders, 5);
}

#[test]
fn truncated_listing_parses_without_phantom_nodes() {
    let temp = TempDir::new().unwrap();
    build_repo(&temp);

    let config = ListingConfig {
        max_files: 3,
        ..ListingConfig::default()
    };
    let listing = generate(temp.path(), &config).unwrap();
    assert!(listing.contains("... (more files)"));

    let tree = parse_structure(&listing);
    assert_eq!(tree.files().len(), 3);
    assert!(tree.files().iter().all(|f| !f.name.contains("more files")));
    // Folders still appear even when their files were cut.
    assert_eq!(tree.stats().folders, 5);
}

#[cfg(unix)]
#[test]
fn names_the_outline_cannot_carry_are_left_out() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::create_dir_all(root.join("a")).unwrap();
    fs::create_dir_all(root.join("b\n    ghost.txt")).unwrap();
    fs::create_dir_all(root.join(" spaced")).unwrap();
    for file in [
        "a/x.txt",
        "a/y\nphantom.txt",
        " lead.txt",
        "trail.txt ",
        "(more files)",
        "bell\u{7}.txt",
        "ok.txt",
        "b\n    ghost.txt/inner.txt",
        " spaced/inner.txt",
    ] {
        fs::write(root.join(file), "x").unwrap();
    }

    let listing = generate(root, &ListingConfig::default()).unwrap();
    assert!(!listing.contains("phantom"));
    assert!(!listing.contains("ghost"));
    assert!(!listing.contains("inner.txt"));

    let tree = parse_structure(&listing);
    let mut paths: Vec<&str> = tree.files().iter().map(|f| f.path.as_str()).collect();
    paths.sort();
    assert_eq!(paths, vec!["/a/x.txt", "/ok.txt"]);
    assert_eq!(tree.stats().folders, 1);
}
