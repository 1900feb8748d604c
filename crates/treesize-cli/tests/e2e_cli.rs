/// End-to-end tests for the `scan` command: flags in, printed tree out.
use clap::Parser;
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use treesize_cli::{run, Cli};

// ── Helpers ──────────────────────────────────────────────────────────────────

/// ```text
/// root/
///   a     (100 bytes)
///   b     (50 bytes)
///   sub/
///     c   (10 bytes)
/// ```
fn build_reference_tree(root: &Path) {
    fs::create_dir_all(root.join("sub")).unwrap();
    fs::write(root.join("a"), vec![0u8; 100]).unwrap();
    fs::write(root.join("b"), vec![0u8; 50]).unwrap();
    fs::write(root.join("sub").join("c"), vec![0u8; 10]).unwrap();
}

/// Run the binary's argument list and capture stdout as text.
fn run_args(args: &[&str]) -> String {
    let cli = Cli::try_parse_from(args).expect("arguments should parse");
    let mut out = Vec::new();
    run(cli, &mut out, false).expect("run failed");
    String::from_utf8(out).unwrap()
}

/// Drop the header lines and return only the tree.
fn tree_lines(output: &str) -> Vec<&str> {
    output.lines().skip(3).collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[test]
fn scan_prints_header_and_tree() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("root");
    build_reference_tree(&root);
    let root_arg = root.to_str().unwrap();

    let output = run_args(&["tree-size", "scan", "-p", root_arg]);
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines[0], format!("Scanning {root_arg}..."));
    assert_eq!(lines[1], format!("📁 Tree for {root_arg}"));
    assert_eq!(lines[2], "");
    assert_eq!(
        tree_lines(&output),
        [
            "└── root (160 B)",
            "    ├── a (100 B)",
            "    ├── b (50 B)",
            "    └── sub (10 B)",
            "        └── c (10 B)",
        ]
    );
}

#[test]
fn scan_with_top_and_min_size() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("root");
    build_reference_tree(&root);
    let root_arg = root.to_str().unwrap();

    let output = run_args(&["tree-size", "scan", "-p", root_arg, "-t", "2"]);
    assert_eq!(
        tree_lines(&output),
        ["└── root (160 B)", "    ├── a (100 B)", "    └── b (50 B)"]
    );

    let output = run_args(&["tree-size", "scan", "-p", root_arg, "--min-size", "60"]);
    assert_eq!(tree_lines(&output), ["└── root (100 B)", "    └── a (100 B)"]);
}

#[test]
fn scan_with_depth_limit_collapses_directories() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("root");
    build_reference_tree(&root);
    let root_arg = root.to_str().unwrap();

    let output = run_args(&["tree-size", "scan", "-p", root_arg, "-d", "1"]);
    assert_eq!(
        tree_lines(&output),
        [
            "└── root (160 B)",
            "    ├── a (100 B)",
            "    ├── b (50 B)",
            "    └── sub (10 B)",
        ]
    );
}

#[test]
fn missing_path_reports_error_without_failing() {
    let tmp = TempDir::new().unwrap();
    let missing = tmp.path().join("missing");
    let missing_arg = missing.to_str().unwrap();

    let output = run_args(&["tree-size", "scan", "-p", missing_arg]);
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[1].starts_with("Error: cannot access"));
    assert!(!output.contains("Tree for"));
}

#[test]
fn invalid_thread_count_is_reported() {
    let tmp = TempDir::new().unwrap();
    let output = run_args(&[
        "tree-size",
        "scan",
        "-p",
        tmp.path().to_str().unwrap(),
        "--threads",
        "0",
    ]);
    assert!(output.contains("Error: invalid thread count 0"));
}

#[test]
fn fully_elided_root_prints_notice() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("root");
    build_reference_tree(&root);

    let output = run_args(&[
        "tree-size",
        "scan",
        "-p",
        root.to_str().unwrap(),
        "--min-size",
        "1000",
    ]);
    assert_eq!(tree_lines(&output), ["(no entries at or above 1000 bytes)"]);
}
