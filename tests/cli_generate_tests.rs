//! End-to-end tests for `archsense generate`.

use std::path::Path;
use std::process::{Command, Output};

use pretty_assertions::assert_eq;
use serde_json::Value;
use tempfile::TempDir;

/// Runs archsense with an isolated config directory.
fn run(args: &[&str], config_dir: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_archsense"))
        .env("ARCHSENSE_CONFIG_DIR", config_dir)
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("Failed to execute command")
}

fn stdout_json(output: &Output) -> Value {
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}

#[test]
fn test_generate_default_response() {
    let config_dir = TempDir::new().unwrap();
    let output = run(&["generate"], config_dir.path());

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let json = stdout_json(&output);
    assert_eq!(json["rooms"], 7);
    assert_eq!(json["totalArea"], 150.0);
    assert_eq!(json["plan"]["walls"].as_array().unwrap().len(), 8);
}

#[test]
fn test_generate_custom_site() {
    let config_dir = TempDir::new().unwrap();
    let output = run(&["generate", "--width", "12000", "--depth", "16000"], config_dir.path());

    assert_eq!(output.status.code(), Some(0));
    let json = stdout_json(&output);
    assert_eq!(json["totalArea"], 192.0);
    assert_eq!(json["plan"]["react_planner_data"]["scene"]["width"], 12000);
}

#[test]
fn test_generate_scene_format() {
    let config_dir = TempDir::new().unwrap();
    let output = run(&["generate", "--format", "scene"], config_dir.path());

    assert_eq!(output.status.code(), Some(0));
    let json = stdout_json(&output);
    assert_eq!(json["rooms"].as_array().unwrap().len(), 7);
    assert_eq!(json["environment"]["camera"]["fov"], 60);
    assert!(json.get("react_planner_data").is_none());
}

#[test]
fn test_generate_editor_format() {
    let config_dir = TempDir::new().unwrap();
    let output = run(&["generate", "--format", "editor", "--compact"], config_dir.path());

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim().lines().count(), 1, "compact output is one line");

    let json = stdout_json(&output);
    assert_eq!(json["version"], "1.0");
    assert_eq!(json["layers"]["layer-1"]["elements"].as_object().unwrap().len(), 7);
}

#[test]
fn test_generate_to_file() {
    let config_dir = TempDir::new().unwrap();
    let out_dir = TempDir::new().unwrap();
    let out_path = out_dir.path().join("plan.json");

    let output = run(
        &["generate", "--output", out_path.to_str().unwrap()],
        config_dir.path(),
    );

    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("Generated floor plan"));

    let json: Value = serde_json::from_str(&std::fs::read_to_string(&out_path).unwrap()).unwrap();
    assert_eq!(json["rooms"], 7);
}

#[test]
fn test_generate_rejects_zero_width() {
    let config_dir = TempDir::new().unwrap();
    let output = run(&["generate", "--width", "0"], config_dir.path());

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid site dimensions"));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_generate_rejects_negative_depth() {
    let config_dir = TempDir::new().unwrap();
    let output = run(&["generate", "--depth", "-100"], config_dir.path());

    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_generate_unwritable_output_is_io_error() {
    let config_dir = TempDir::new().unwrap();
    let missing = config_dir.path().join("no-such-dir").join("plan.json");

    let output = run(
        &["generate", "--output", missing.to_str().unwrap()],
        config_dir.path(),
    );

    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_generate_uses_configured_site() {
    let config_dir = TempDir::new().unwrap();
    std::fs::write(
        config_dir.path().join("config.toml"),
        "[site]\ndefault_width_mm = 8000\ndefault_depth_mm = 12500\n",
    )
    .unwrap();

    let output = run(&["generate"], config_dir.path());

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_json(&output)["totalArea"], 100.0);
}
