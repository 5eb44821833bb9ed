//! Integration tests for the wenc binary

use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

fn wenc() -> Command {
    Command::new(env!("CARGO_BIN_EXE_wenc"))
}

fn fixture(bytes: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("cannot create fixture file");
    file.write_all(bytes).expect("cannot write fixture file");
    file
}

#[test]
fn test_decode_windows_1252_file() {
    let file = fixture(&[0x80, 0x95]);
    let output = wenc()
        .arg("-e")
        .arg("latin1")
        .arg(file.path())
        .output()
        .expect("failed to run wenc");

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "\u{20AC}\u{2022}");
}

#[test]
fn test_bom_wins_over_flag() {
    let file = fixture(&[0xFF, 0xFE, 0xAC, 0x20]);
    let output = wenc()
        .arg("-e")
        .arg("latin1")
        .arg(file.path())
        .output()
        .expect("failed to run wenc");

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "\u{20AC}");
}

#[test]
fn test_bom_report() {
    let file = fixture(&[0xEF, 0xBB, 0xBF, 0x41]);
    let output = wenc()
        .arg("--bom")
        .arg(file.path())
        .output()
        .expect("failed to run wenc");

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "UTF-8\n");

    let plain = fixture(b"plain");
    let output = wenc()
        .arg("--bom")
        .arg(plain.path())
        .output()
        .expect("failed to run wenc");

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "none\n");
}

#[test]
fn test_list_names() {
    let output = wenc().arg("--list").output().expect("failed to run wenc");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let listed: Vec<&str> = stdout.lines().collect();
    assert_eq!(listed.len(), 40);
    assert!(listed.contains(&"UTF-8"));
    assert!(listed.contains(&"windows-1252"));
    assert!(listed.contains(&"x-user-defined"));
}

#[test]
fn test_unknown_label_fails() {
    let file = fixture(b"x");
    let output = wenc()
        .arg("-e")
        .arg("asdf")
        .arg(file.path())
        .output()
        .expect("failed to run wenc");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown encoding label"), "stderr: {}", stderr);
}

#[test]
fn test_fatal_mode_fails_on_malformed_input() {
    let file = fixture(&[0x83, 0x5C]);
    let output = wenc()
        .arg("-e")
        .arg("big5")
        .arg("--error-mode")
        .arg("fatal")
        .arg(file.path())
        .output()
        .expect("failed to run wenc");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("malformed"), "stderr: {}", stderr);
}

#[test]
fn test_invalid_error_mode_fails() {
    let file = fixture(b"x");
    let output = wenc()
        .arg("--error-mode")
        .arg("strict")
        .arg(file.path())
        .output()
        .expect("failed to run wenc");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid error mode"), "stderr: {}", stderr);
}
