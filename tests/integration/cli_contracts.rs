use aethertree::config::AetherConfig;
use aethertree::error::ApiError;
use aethertree::tooling::cli::{Cli, CliContext, Commands};
use clap::Parser;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const LISTING: &str = "Repository structure:
src/
    app.py
    utils/
        helpers.py
README.md
";

fn context() -> CliContext {
    CliContext::with_config(AetherConfig::default())
}

fn listing_file(temp: &TempDir) -> PathBuf {
    let path = temp.path().join("structure.txt");
    fs::write(&path, LISTING).unwrap();
    path
}

#[test]
fn parse_valid_command_matrix() {
    let cases: Vec<Vec<&str>> = vec![
        vec!["aethertree", "parse", "listing.txt"],
        vec!["aethertree", "parse", "-"],
        vec!["aethertree", "render", "listing.txt", "--format", "text", "--no-color"],
        vec!["aethertree", "list", ".", "--max-files", "20", "--no-header"],
        vec!["aethertree", "summary", "listing.txt", "--format", "json", "--top", "3"],
        vec!["aethertree", "fetch", "--base-url", "http://localhost:5000"],
        vec!["aethertree", "language", "main.rs"],
        vec!["aethertree", "--log-level", "debug", "parse", "listing.txt"],
    ];

    for args in cases {
        let parsed = Cli::try_parse_from(args.clone());
        assert!(parsed.is_ok(), "expected valid parse for args: {args:?}");
    }
}

#[test]
fn parse_rejects_missing_input() {
    assert!(Cli::try_parse_from(["aethertree", "parse"]).is_err());
    assert!(Cli::try_parse_from(["aethertree", "list"]).is_err());
}

#[test]
fn parse_command_outputs_tree_json_in_input_order() {
    let temp = TempDir::new().unwrap();
    let input = listing_file(&temp);

    let output = context().execute(&Commands::Parse { input }).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed[0]["type"], "folder");
    assert_eq!(parsed[0]["children"][0]["path"], "/src/app.py");
    assert_eq!(parsed[1]["path"], "/README.md");
}

#[test]
fn render_command_text_contract() {
    let temp = TempDir::new().unwrap();
    let input = listing_file(&temp);

    let output = context()
        .execute(&Commands::Render {
            input,
            format: Some("text".to_string()),
            no_color: true,
        })
        .unwrap();
    assert_eq!(
        output,
        "src/\n├── utils/\n│   └── helpers.py\n└── app.py\nREADME.md\n"
    );
}

#[test]
fn render_command_rejects_unknown_format() {
    let temp = TempDir::new().unwrap();
    let input = listing_file(&temp);

    let err = context()
        .execute(&Commands::Render {
            input,
            format: Some("yaml".to_string()),
            no_color: true,
        })
        .unwrap_err();
    assert!(matches!(err, ApiError::InvalidArgument(_)));
}

#[test]
fn non_text_input_is_parse_error() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("binary.bin");
    fs::write(&input, [0x73, 0x72, 0x63, 0xc3, 0x28]).unwrap();

    let err = context().execute(&Commands::Parse { input }).unwrap_err();
    assert!(matches!(err, ApiError::Parse(_)));
}

#[test]
fn missing_input_is_io_error() {
    let temp = TempDir::new().unwrap();
    let err = context()
        .execute(&Commands::Parse {
            input: temp.path().join("absent.txt"),
        })
        .unwrap_err();
    assert!(matches!(err, ApiError::Io { .. }));
}

#[test]
fn summary_json_contract_has_required_fields() {
    let temp = TempDir::new().unwrap();
    let input = listing_file(&temp);

    let output = context()
        .execute(&Commands::Summary {
            input,
            format: "json".to_string(),
            top: 10,
        })
        .unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed["files"], 3);
    assert_eq!(parsed["folders"], 2);
    assert_eq!(parsed["max_depth"], 3);
    assert_eq!(parsed["extensions"][0]["extension"], "py");
    assert_eq!(parsed["extensions"][0]["files"], 2);
}

#[test]
fn list_command_respects_flags() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("src")).unwrap();
    fs::write(temp.path().join("src/main.rs"), "").unwrap();

    let output = context()
        .execute(&Commands::List {
            dir: temp.path().to_path_buf(),
            max_files: None,
            indent: Some(2),
            no_header: true,
        })
        .unwrap();
    assert_eq!(output, "src/\n  main.rs");
}

#[test]
fn language_json_contract() {
    let output = context()
        .execute(&Commands::Language {
            file: "Main.java".to_string(),
            format: "json".to_string(),
        })
        .unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed["language"], "java");
    assert_eq!(parsed["editor_mode"], "text/x-java");
    assert_eq!(parsed["execution"]["compile_command"], "javac");
}

#[test]
fn fetch_failure_renders_error_placeholder() {
    let output = context()
        .execute(&Commands::Fetch {
            base_url: Some("http://127.0.0.1:9".to_string()),
            format: Some("text".to_string()),
        })
        .unwrap();
    assert!(output.starts_with("Error: "));
}
