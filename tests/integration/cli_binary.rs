//! Integration tests for the hoarder binary

use super::test_utils::write_config;
use std::process::Command;
use tempfile::TempDir;

fn hoarder(config_home: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_hoarder"));
    cmd.env("XDG_CONFIG_HOME", config_home.path())
        .env("HOME", config_home.path())
        .env_remove("HOARDER_LOG");
    cmd
}

#[test]
fn test_check_with_defaults() {
    let config_home = TempDir::new().unwrap();
    let output = hoarder(&config_home).arg("check").output().unwrap();

    assert!(
        output.status.success(),
        "check should succeed: stderr={:?}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("configuration OK"));
    assert!(stdout.contains("built-in defaults"));
}

#[test]
fn test_show_json_with_overrides() {
    let config_home = TempDir::new().unwrap();
    let (_dir, path) = write_config("backend: s3\ngc_amount: \"100\"\ntoken: hunter2\n");

    let output = hoarder(&config_home)
        .arg("--config")
        .arg(&path)
        .arg("show")
        .arg("--format")
        .arg("json")
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["backend"], "s3");
    assert_eq!(value["gc_amount"], 100);
    assert_eq!(value["token"], "<redacted>");
}

#[test]
fn test_invalid_value_exits_nonzero() {
    let config_home = TempDir::new().unwrap();
    let (_dir, path) = write_config("gc_interval: notanumber\n");

    let output = hoarder(&config_home)
        .arg("--config")
        .arg(&path)
        .arg("check")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("gc_interval"), "stderr: {stderr}");
}

#[test]
fn test_missing_config_exits_nonzero() {
    let config_home = TempDir::new().unwrap();
    let output = hoarder(&config_home)
        .arg("--config")
        .arg(config_home.path().join("absent.yml"))
        .arg("check")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_log_lines_are_prefixed() {
    let config_home = TempDir::new().unwrap();
    let (_dir, path) = write_config("log_level: info\n");

    let output = hoarder(&config_home)
        .arg("--config")
        .arg(&path)
        .arg("check")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    let first = stderr.lines().next().unwrap_or_default();
    assert!(first.starts_with("[hoarder] "), "stderr: {stderr}");
}
