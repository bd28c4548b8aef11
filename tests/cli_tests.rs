//! Runs the built binary and checks what a failing run prints

#[cfg(unix)]
mod common;

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

fn run_wizard_binary(settings: &Path, sdk_root: Option<&Path>, input: &str) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_avd-wizard"));
    cmd.arg("--config")
        .arg(settings)
        .env_remove("RUST_LOG")
        .env_remove("ANDROID_HOME")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    if let Some(root) = sdk_root {
        cmd.env("ANDROID_HOME", root);
    }

    let mut child = cmd.spawn().expect("failed to run avd-wizard");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

fn stderr_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stderr)
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(str::to_string)
        .collect()
}

#[test]
fn missing_sdk_variable_prints_one_line() {
    let dir = tempfile::tempdir().unwrap();
    let settings = dir.path().join("settings.toml");
    std::fs::write(&settings, "").unwrap();

    let output = run_wizard_binary(&settings, None, "");

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stderr_lines(&output),
        vec!["ANDROID_HOME environment variable not set".to_string()]
    );
}

#[test]
fn broken_settings_keep_their_context() {
    let dir = tempfile::tempdir().unwrap();
    let settings = dir.path().join("settings.toml");
    std::fs::write(&settings, "default_name = \"\"\n").unwrap();

    let output = run_wizard_binary(&settings, None, "");

    assert_eq!(output.status.code(), Some(1));
    let lines = stderr_lines(&output);
    assert_eq!(lines.len(), 1, "stderr: {:?}", lines);
    assert!(lines[0].starts_with("Failed to load settings: "), "stderr: {:?}", lines);
}

#[cfg(unix)]
#[test]
fn failed_creation_prints_one_line() {
    use common::{FakeSdk, FakeTools};

    let sdk = FakeSdk::new(FakeTools {
        create_fails: true,
        ..Default::default()
    });
    let settings = sdk.root().join("settings.toml");
    std::fs::write(&settings, format!("avd_home = {:?}\n", sdk.avd_home())).unwrap();

    let output = run_wizard_binary(&settings, Some(sdk.root()), "\n1\n1\n1\n4096\ny\n");

    assert_eq!(output.status.code(), Some(1));
    let lines = stderr_lines(&output);
    assert_eq!(lines.len(), 1, "stderr: {:?}", lines);
    assert!(
        lines[0].starts_with("Error creating emulator: failed to create AVD"),
        "stderr: {:?}",
        lines
    );
}
