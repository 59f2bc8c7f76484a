//! CLI tests for the `phantom` host harness.
//!
//! Spawns the binary and checks exit codes, written files, and the warning
//! emitted on stderr.

use std::fs;
use std::process::{Command, Stdio};

use phantom::exit_codes;
use phantom::io::config::{PhantomConfig, load_config, write_config};

fn phantom_cmd() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_phantom"));
    cmd.env("RUST_LOG", "warn").stdin(Stdio::null());
    cmd
}

#[test]
fn save_writes_file_and_exits_ok() {
    let temp = tempfile::tempdir().expect("tempdir");
    let script_dir = format!("{}/", temp.path().display());

    let output = phantom_cmd()
        .current_dir(temp.path())
        .args(["save", "out.txt", "--text", "hello", "--script-dir"])
        .arg(&script_dir)
        .output()
        .expect("phantom save");

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(
        fs::read_to_string(temp.path().join("out.txt")).expect("read"),
        "hello"
    );
}

#[test]
fn save_failure_exits_write_failed_and_warns() {
    let temp = tempfile::tempdir().expect("tempdir");
    let script_dir = format!("{}/missing/", temp.path().display());

    let output = phantom_cmd()
        .current_dir(temp.path())
        .args(["save", "out.txt", "--text", "hello", "--script-dir"])
        .arg(&script_dir)
        .output()
        .expect("phantom save");

    assert_eq!(output.status.code(), Some(exit_codes::WRITE_FAILED));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains(&format!("{script_dir}out.txt")));
    assert!(!temp.path().join("missing").exists());
}

#[test]
fn save_uses_script_dir_from_config() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::create_dir(temp.path().join("scripts")).expect("mkdir");
    let config_path = temp.path().join("phantom.toml");
    write_config(
        &config_path,
        &PhantomConfig {
            script_dir: format!("{}/scripts/", temp.path().display()),
            ..PhantomConfig::default()
        },
    )
    .expect("write config");

    let output = phantom_cmd()
        .current_dir(temp.path())
        .args(["save", "report.xml", "--text", "<ok/>", "--config"])
        .arg(&config_path)
        .output()
        .expect("phantom save");

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(
        fs::read_to_string(temp.path().join("scripts").join("report.xml")).expect("read"),
        "<ok/>"
    );
}

#[test]
fn invalid_config_exits_invalid() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::write(temp.path().join("phantom.toml"), "log_filter = \"\"\n").expect("write");

    let status = phantom_cmd()
        .current_dir(temp.path())
        .arg("capabilities")
        .status()
        .expect("phantom capabilities");

    assert_eq!(status.code(), Some(exit_codes::INVALID));
}

#[test]
fn capabilities_lists_qualified_names() {
    let temp = tempfile::tempdir().expect("tempdir");

    let output = phantom_cmd()
        .current_dir(temp.path())
        .arg("capabilities")
        .output()
        .expect("phantom capabilities");

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let names: Vec<&str> = stdout.lines().collect();
    assert_eq!(names, vec!["Phantom.saveToFile", "window.__phantom_writeFile"]);
}

#[test]
fn call_records_page_result_and_flushes_it_on_exit() {
    let temp = tempfile::tempdir().expect("tempdir");
    let script_dir = format!("{}/", temp.path().display());

    let output = phantom_cmd()
        .current_dir(temp.path())
        .args([
            "call",
            "window.__phantom_writeFile",
            "\"TEST-Suite.xml\"",
            "\"<testsuite/>\"",
            "--script-dir",
        ])
        .arg(&script_dir)
        .output()
        .expect("phantom call");

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "null");
    assert_eq!(
        fs::read_to_string(temp.path().join("TEST-Suite.xml")).expect("read"),
        "<testsuite/>"
    );
}

#[test]
fn call_with_unflushable_page_result_exits_write_failed() {
    let temp = tempfile::tempdir().expect("tempdir");
    let script_dir = format!("{}/", temp.path().display());

    let output = phantom_cmd()
        .current_dir(temp.path())
        .args([
            "call",
            "window.__phantom_writeFile",
            "\"missing/TEST-Suite.xml\"",
            "\"<testsuite/>\"",
            "--script-dir",
        ])
        .arg(&script_dir)
        .output()
        .expect("phantom call");

    assert_eq!(output.status.code(), Some(exit_codes::WRITE_FAILED));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains(&format!("{script_dir}missing/TEST-Suite.xml")));
}

#[test]
fn call_save_to_file_prints_result() {
    let temp = tempfile::tempdir().expect("tempdir");
    let script_dir = format!("{}/", temp.path().display());

    let output = phantom_cmd()
        .current_dir(temp.path())
        .args(["call", "Phantom.saveToFile", "\"hi\"", "\"out.txt\"", "--script-dir"])
        .arg(&script_dir)
        .output()
        .expect("phantom call");

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "true");
    assert_eq!(
        fs::read_to_string(temp.path().join("out.txt")).expect("read"),
        "hi"
    );
}

#[test]
fn call_rejects_non_json_arguments() {
    let temp = tempfile::tempdir().expect("tempdir");

    let status = phantom_cmd()
        .current_dir(temp.path())
        .args(["call", "Phantom.saveToFile", "hi", "\"out.txt\""])
        .status()
        .expect("phantom call");

    assert_eq!(status.code(), Some(exit_codes::INVALID));
    assert!(!temp.path().join("out.txt").exists());
}

#[test]
fn init_writes_default_config_once() {
    let temp = tempfile::tempdir().expect("tempdir");
    let config_path = temp.path().join("phantom.toml");

    let status = phantom_cmd()
        .current_dir(temp.path())
        .arg("init")
        .status()
        .expect("phantom init");
    assert_eq!(status.code(), Some(exit_codes::OK));
    assert_eq!(
        load_config(&config_path).expect("load"),
        PhantomConfig::default()
    );

    let again = phantom_cmd()
        .current_dir(temp.path())
        .arg("init")
        .status()
        .expect("phantom init again");
    assert_eq!(again.code(), Some(exit_codes::INVALID));

    let forced = phantom_cmd()
        .current_dir(temp.path())
        .args(["init", "--force"])
        .status()
        .expect("phantom init --force");
    assert_eq!(forced.code(), Some(exit_codes::OK));
}
