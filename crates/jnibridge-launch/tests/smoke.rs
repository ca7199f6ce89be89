//! Smoke tests for the `jnibridge` binary.
//!
//! None of these need a JDK: they cover the CLI surface and the failure
//! paths that stop before a VM would start.

use std::process::Command;

fn jnibridge() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_jnibridge"));
    // Keep a developer's own config file out of the picture.
    cmd.env("XDG_CONFIG_HOME", env!("CARGO_TARGET_TMPDIR"));
    cmd
}

// ── Help / basic CLI ──────────────────────────────────────────────────────────

#[test]
fn binary_responds_to_help() {
    let output = jnibridge().arg("--help").output().expect("failed to execute jnibridge");
    assert!(output.status.success(), "jnibridge --help should exit 0");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("probe"), "help output should list probe subcommand");
    assert!(stdout.contains("run"), "help output should list run subcommand");
    assert!(stdout.contains("--class-path"));
}

#[test]
fn run_requires_main_class() {
    let output = jnibridge().arg("run").output().expect("failed to execute jnibridge run");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("MAIN_CLASS"), "stderr: {stderr}");
}

#[test]
fn rejects_unknown_jni_version() {
    let output = jnibridge()
        .args(["--jni-version", "1.9", "probe"])
        .output()
        .expect("failed to execute jnibridge");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("1.9"), "stderr: {stderr}");
}

// ── Startup failures ──────────────────────────────────────────────────────────

#[test]
fn missing_jvm_library_is_reported_with_its_path() {
    let dir = tempfile::tempdir().unwrap();
    let jvm = dir.path().join("libjvm.so");
    let output = jnibridge()
        .arg("--jvm")
        .arg(&jvm)
        .arg("probe")
        .output()
        .expect("failed to execute jnibridge probe");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains(jvm.to_str().unwrap()), "stderr: {stderr}");
}

#[test]
fn missing_config_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("absent.toml");
    let output = jnibridge()
        .arg("--config")
        .arg(&config)
        .arg("probe")
        .output()
        .expect("failed to execute jnibridge probe");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("absent.toml"), "stderr: {stderr}");
}
