//! Binary-level tests that need no storage server
//!
//! Each run gets an empty environment, home directory and working directory
//! so no real credentials, config file or .env file leak in.

use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn s3drop(args: &[&str], vars: &[(&str, &str)], home: &Path) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_s3drop"));
    cmd.args(args)
        .env_clear()
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env("TMPDIR", home.join("tmp"))
        .current_dir(home);
    for (key, value) in vars {
        cmd.env(key, value);
    }
    cmd.output().expect("Failed to execute s3drop")
}

/// Credentials for an endpoint nothing listens on
const FAKE_S3: &[(&str, &str)] = &[
    ("AWS_ACCESS_KEY_ID", "test-key"),
    ("AWS_SECRET_ACCESS_KEY", "test-secret"),
    ("S3_BUCKET_NAME", "test-bucket"),
    ("S3_ENDPOINT", "http://127.0.0.1:1"),
    ("S3_FORCE_PATH_STYLE", "true"),
];

fn home() -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir(dir.path().join("tmp")).unwrap();
    dir
}

#[test]
fn test_missing_configuration_exits_1() {
    let home = home();
    let output = s3drop(&["upload", "a.txt"], &[], home.path());

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("AWS_ACCESS_KEY_ID"));
    assert!(stderr.contains("S3_BUCKET_NAME"));
}

#[test]
fn test_spaces_requires_endpoint() {
    let home = home();
    let vars = [
        ("DO_SPACES_KEY", "key"),
        ("DO_SPACES_SECRET", "secret"),
        ("DO_SPACES_BUCKET", "space"),
    ];
    let output = s3drop(&["--provider", "spaces", "list"], &vars, home.path());

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("DO_SPACES_ENDPOINT"));
}

#[test]
fn test_upload_missing_file_exits_1() {
    let home = home();
    let output = s3drop(&["upload", "does-not-exist.txt"], FAKE_S3, home.path());

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("does-not-exist.txt"));
}

#[test]
fn test_upload_url_failure_json() {
    let home = home();
    let output = s3drop(
        &["--json", "upload-url", "http://127.0.0.1:1/files/report.pdf"],
        FAKE_S3,
        home.path(),
    );

    assert_eq!(output.status.code(), Some(1));
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["status"], "failure");
    assert_eq!(json["source_url"], "http://127.0.0.1:1/files/report.pdf");

    // Scratch file is gone
    let leftovers: Vec<_> = std::fs::read_dir(home.path().join("tmp"))
        .unwrap()
        .collect();
    assert!(leftovers.is_empty());
}

#[test]
fn test_upload_url_invalid_url() {
    let home = home();
    let output = s3drop(&["--json", "upload-url", "not a url"], FAKE_S3, home.path());

    assert_eq!(output.status.code(), Some(1));
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["status"], "failure");
    assert!(json["error"].as_str().unwrap().contains("Invalid URL"));
}

#[test]
fn test_config_file_supplies_settings() {
    let home = home();
    let config = home.path().join("s3drop.toml");
    std::fs::write(
        &config,
        r#"
[s3]
access_key = "file-key"
secret_key = "file-secret"
bucket = "file-bucket"
endpoint = "http://127.0.0.1:1"
force_path_style = true
"#,
    )
    .unwrap();

    let output = s3drop(
        &["--config", config.to_str().unwrap(), "upload", "missing.bin"],
        &[],
        home.path(),
    );

    // Config resolved, so the failure is about the file, not the settings
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("missing.bin"));
    assert!(!stderr.contains("AWS_ACCESS_KEY_ID"));
}

#[test]
fn test_completions() {
    let home = home();
    let output = s3drop(&["completions", "bash"], &[], home.path());

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("s3drop"));
}
