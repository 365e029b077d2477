//! Integration tests for the bfsg CLI.
//!
//! Every run gets its own config file and working directory so the user's
//! real configuration and any `.env` file never leak in.
//!
//! Run with: `cargo test --package bfs-graph-cli --test cli_integration`

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

/// Helper to run bfsg inside an isolated temp directory.
fn run_bfsg(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_bfsg"))
        .current_dir(dir)
        .env("BFSG_CONFIG", dir.join("config.json"))
        .env_remove("BFSG_TOPOLOGY")
        .env_remove("BFSG_NODE_RADIUS")
        .env_remove("BFSG_HIGHLIGHT_ENDPOINTS")
        .env_remove("BFSG_DARK_MODE")
        .args(args)
        .output()
        .expect("Failed to execute bfsg command")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// A square with a tail and one unreachable node.
fn write_square_topology(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("square.json");
    fs::write(
        &path,
        r#"{
  "name": "square",
  "nodes": [
    { "label": "N", "position": { "x": 100.0, "y": 100.0 } },
    { "label": "E", "position": { "x": 300.0, "y": 100.0 } },
    { "label": "S", "position": { "x": 300.0, "y": 300.0 } },
    { "label": "W", "position": { "x": 100.0, "y": 300.0 } },
    { "label": "T" },
    { "label": "X" }
  ],
  "edges": [["N", "E"], ["E", "S"], ["S", "W"], ["W", "N"], ["S", "T"]]
}"#,
    )
    .unwrap();
    path
}

// =============================================================================
// Help and Version
// =============================================================================

#[test]
fn test_help_lists_commands() {
    let dir = TempDir::new().unwrap();
    let output = run_bfsg(dir.path(), &["--help"]);

    assert!(output.status.success());
    let text = stdout(&output);
    for command in ["view", "path", "replay", "topology", "config"] {
        assert!(text.contains(command), "help should mention {command}");
    }
}

#[test]
fn test_version() {
    let dir = TempDir::new().unwrap();
    let output = run_bfsg(dir.path(), &["--version"]);

    assert!(output.status.success());
    assert!(stdout(&output).contains("bfsg"));
}

// =============================================================================
// Path Command
// =============================================================================

#[test]
fn test_path_text() {
    let dir = TempDir::new().unwrap();
    let output = run_bfsg(dir.path(), &["path", "A", "D"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output).trim(), "A → B → D (2 hops)");
}

#[test]
fn test_path_json() {
    let dir = TempDir::new().unwrap();
    let output = run_bfsg(dir.path(), &["path", "F", "C", "--format", "json"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["path"], serde_json::json!(["F", "B", "C"]));
    assert_eq!(value["hops"], 2);
}

#[test]
fn test_path_same_node() {
    let dir = TempDir::new().unwrap();
    let output = run_bfsg(dir.path(), &["path", "E", "E"]);

    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "E (0 hops)");
}

#[test]
fn test_path_unreachable_fails() {
    let dir = TempDir::new().unwrap();
    let output = run_bfsg(dir.path(), &["path", "A", "I"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("no path exists between A and I"));
}

#[test]
fn test_path_unknown_node_fails() {
    let dir = TempDir::new().unwrap();
    let output = run_bfsg(dir.path(), &["path", "A", "Q"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("node not found: Q"));
}

#[test]
fn test_path_bad_format_fails() {
    let dir = TempDir::new().unwrap();
    let output = run_bfsg(dir.path(), &["path", "A", "D", "--format", "yaml"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("Unknown format"));
}

// =============================================================================
// Replay Command
// =============================================================================

#[test]
fn test_replay_sequence() {
    let dir = TempDir::new().unwrap();
    let output = run_bfsg(dir.path(), &["replay", "A", "A", "D", "M"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let lines: Vec<String> = stdout(&output).lines().map(String::from).collect();
    assert_eq!(
        lines,
        vec![
            "A: start A | choose an end point",
            "A: unchanged | choose an end point",
            "D: path A → B → D | choose a node to start over",
            "M: restart at M | choose an end point",
        ]
    );
}

#[test]
fn test_replay_no_path_keeps_start() {
    let dir = TempDir::new().unwrap();
    let output = run_bfsg(dir.path(), &["replay", "B", "K", "H"]);

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("K: no path exists between B and K | choose an end point"));
    assert!(text.contains("H: path B → H"));
}

// =============================================================================
// Topology Command
// =============================================================================

#[test]
fn test_topology_reference_dump() {
    let dir = TempDir::new().unwrap();
    let output = run_bfsg(dir.path(), &["topology"]);

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["nodes"].as_array().unwrap().len(), 13);
    assert_eq!(value["edges"].as_array().unwrap().len(), 16);
    assert_eq!(value["canvas"]["width"], 1000.0);
}

#[test]
fn test_topology_written_file_loads_back() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("reference.json");

    let output = run_bfsg(dir.path(), &["topology", "--output", out.to_str().unwrap()]);
    assert!(output.status.success());
    assert!(out.exists());

    let output = run_bfsg(
        dir.path(),
        &["--topology", out.to_str().unwrap(), "path", "A", "D"],
    );
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "A → B → D (2 hops)");
}

#[test]
fn test_custom_topology_flag() {
    let dir = TempDir::new().unwrap();
    let square = write_square_topology(dir.path());
    let square = square.to_str().unwrap();

    let output = run_bfsg(dir.path(), &["--topology", square, "path", "N", "T"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output).trim(), "N → E → S → T (3 hops)");

    let output = run_bfsg(dir.path(), &["--topology", square, "path", "N", "X"]);
    assert!(!output.status.success());
}

#[test]
fn test_topology_from_env() {
    let dir = TempDir::new().unwrap();
    let square = write_square_topology(dir.path());

    let output = Command::new(env!("CARGO_BIN_EXE_bfsg"))
        .current_dir(dir.path())
        .env("BFSG_CONFIG", dir.path().join("config.json"))
        .env("BFSG_TOPOLOGY", &square)
        .args(["path", "W", "E"])
        .output()
        .unwrap();

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output).trim(), "W → S → E (2 hops)");
}

#[test]
fn test_invalid_topology_fails() {
    let dir = TempDir::new().unwrap();
    let bad = dir.path().join("bad.json");
    fs::write(
        &bad,
        r#"{ "nodes": [{ "label": "A" }], "edges": [["A", "B"]] }"#,
    )
    .unwrap();

    let output = run_bfsg(dir.path(), &["--topology", bad.to_str().unwrap(), "topology"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("invalid argument"));
}

#[test]
fn test_missing_topology_file_fails() {
    let dir = TempDir::new().unwrap();
    let output = run_bfsg(dir.path(), &["--topology", "nope.json", "path", "A", "B"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("Failed to load topology"));
}

// =============================================================================
// Config Command
// =============================================================================

#[test]
fn test_config_path_honors_override() {
    let dir = TempDir::new().unwrap();
    let output = run_bfsg(dir.path(), &["config", "path"]);

    assert!(output.status.success());
    assert!(stdout(&output).trim().ends_with("config.json"));
}

#[test]
fn test_config_set_get_reset() {
    let dir = TempDir::new().unwrap();

    let output = run_bfsg(dir.path(), &["config", "set", "node-radius", "18"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(dir.path().join("config.json").exists());

    let output = run_bfsg(dir.path(), &["config", "get", "node-radius"]);
    assert_eq!(stdout(&output).trim(), "18");

    let output = run_bfsg(dir.path(), &["config", "reset"]);
    assert!(output.status.success());

    let output = run_bfsg(dir.path(), &["config", "get", "node-radius"]);
    assert_eq!(stdout(&output).trim(), "25");
}

#[test]
fn test_config_topology_used_by_path() {
    let dir = TempDir::new().unwrap();
    let square = write_square_topology(dir.path());

    let output = run_bfsg(
        dir.path(),
        &["config", "set", "topology", square.to_str().unwrap()],
    );
    assert!(output.status.success());

    let output = run_bfsg(dir.path(), &["path", "N", "S"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output).trim(), "N → E → S (2 hops)");
}

#[test]
fn test_config_show() {
    let dir = TempDir::new().unwrap();
    let output = run_bfsg(dir.path(), &["config", "show"]);

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("(reference graph)"));
    assert!(text.contains("Node Radius:"));
}

#[test]
fn test_config_unknown_key_fails() {
    let dir = TempDir::new().unwrap();
    let output = run_bfsg(dir.path(), &["config", "set", "colour", "red"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("Unknown config key"));
}

#[test]
fn test_non_finite_radius_from_env_fails() {
    let dir = TempDir::new().unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_bfsg"))
        .current_dir(dir.path())
        .env("BFSG_CONFIG", dir.path().join("config.json"))
        .env("BFSG_NODE_RADIUS", "NaN")
        .args(["config", "get", "node-radius"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(stderr(&output).contains("Invalid BFSG_NODE_RADIUS"));
}
