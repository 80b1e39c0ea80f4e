//! Runs the built `lightplacer-merge` binary end to end.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn make_test_dir(suffix: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "lightplacer_cli_bin_{suffix}_{}",
        std::process::id()
    ));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn cleanup(dir: &Path) {
    let _ = fs::remove_dir_all(dir);
}

fn merge_bin(args: &[&Path]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_lightplacer-merge"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn prints_merged_document_to_stdout() {
    let dir = make_test_dir("stdout");
    let a = dir.join("a.json");
    fs::write(
        &a,
        r#"[
            {"addonNodes": [2, 1], "lights": [{"data": {"light": "Candle", "flags": "simple|Shadow", "shadowDepthBias": 1}}]}
        ]"#,
    )
    .unwrap();

    let output = merge_bin(&[&a]);
    assert!(output.status.success());
    assert!(output.stderr.is_empty());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.ends_with("]\n"));
    let tree: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(
        tree,
        serde_json::json!([
            {
                "addonNodes": [1, 2],
                "lights": [
                    {"data": {"flags": "Shadow|Simple", "light": "Candle", "shadowDepthBias": 1}}
                ]
            }
        ])
    );

    cleanup(&dir);
}

#[test]
fn missing_path_fails_before_processing() {
    let dir = make_test_dir("missing");
    let good = dir.join("good.json");
    fs::write(&good, "[]").unwrap();
    let missing = dir.join("missing.json");

    let output = merge_bin(&[&good, &missing]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("missing.json"));

    cleanup(&dir);
}

#[test]
fn validation_failure_exits_non_zero() {
    let dir = make_test_dir("invalid");
    let bad = dir.join("bad.json");
    fs::write(
        &bad,
        r#"[{"visualEffects": ["FireFX"], "lights": [{"data": {"light": "Fire", "flags": "Shadow"}}]}]"#,
    )
    .unwrap();

    let output = merge_bin(&[&bad]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("shadowDepthBias"));

    cleanup(&dir);
}
