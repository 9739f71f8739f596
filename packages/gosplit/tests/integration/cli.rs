//! Binary behavior: silent on success, one `Error:` line on failure

#[path = "../common/mod.rs"]
mod common;
use common::*;

use std::process::{Command, Output};

fn gosplit(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_gosplit"))
        .args(args)
        .output()
        .unwrap()
}

#[test]
fn test_success_is_silent() {
    let dir = package_dir(&[("p.go", "package p\n\ntype T int\n\nfunc (t T) M() {}\n")]);
    let path = dir.path().to_str().unwrap();

    let out = gosplit(&["--dir", path, "--no-format"]);

    assert!(out.status.success());
    assert!(out.stdout.is_empty());
    assert_eq!(read(dir.path(), "t.go"), "package p\n\ntype T int\n\nfunc (t T) M() {}\n");
}

#[test]
fn test_failure_prints_one_error_line() {
    let dir = package_dir(&[("p.go", "package p\n\nfunc (g Ghost) Boo() {}\n")]);
    let path = dir.path().to_str().unwrap();
    let before = snapshot(dir.path());

    let out = gosplit(&["--dir", path, "--no-format"]);

    assert!(!out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 1);
    assert_eq!(
        stdout.trim_end(),
        "Error: method Boo has receiver type Ghost which is not declared in this package"
    );
    assert_unchanged(dir.path(), &before);
}

#[test]
fn test_dry_run_prints_plan() {
    let dir = package_dir(&[("p.go", "package p\n\nvar a, b int\n")]);
    let path = dir.path().to_str().unwrap();
    let before = snapshot(dir.path());

    let out = gosplit(&["--dir", path, "--no-format", "--dry-run"]);

    assert!(out.status.success());
    let plan: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(plan["package"], "p");
    assert_eq!(plan["units"][0]["filename"], "a.go");
    assert_eq!(plan["units"][1]["filename"], "b.go");
    assert_unchanged(dir.path(), &before);
}

#[test]
fn test_no_backup_flag() {
    let dir = package_dir(&[("p.go", "package p\n\nfunc F() {}\n")]);
    let path = dir.path().to_str().unwrap();

    let out = gosplit(&["--dir", path, "--no-format", "--no-backup"]);

    assert!(out.status.success());
    assert_files(dir.path(), &["f.go"]);
}

#[test]
fn test_collision_flag() {
    let dir = package_dir(&[("p.go", "package p\n\nfunc Foo() {}\n\nfunc foo() {}\n")]);
    let path = dir.path().to_str().unwrap();

    let out = gosplit(&["--dir", path, "--no-format", "--collision", "reject"]);

    assert!(!out.status.success());
    assert_eq!(
        String::from_utf8(out.stdout).unwrap().trim_end(),
        "Error: foo and Foo both map to foo.go"
    );
}

#[test]
fn test_config_file() {
    let dir = package_dir(&[("p.go", "package p\n\nfunc F() {}\n")]);
    let config_path = dir.path().join("gosplit.yaml");
    std::fs::write(
        &config_path,
        format!(
            "version: 1\ndir: {}\nformatter: none\nbackup_suffix: .orig\n",
            dir.path().display()
        ),
    )
    .unwrap();

    let out = gosplit(&["--config", config_path.to_str().unwrap()]);

    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stdout));
    assert_files(dir.path(), &["gosplit.yaml", "p.go.orig", "f.go"]);
}

#[test]
fn test_bad_config_file() {
    let dir = package_dir(&[("gosplit.yaml", "formatter: none\n")]);
    let config_path = dir.path().join("gosplit.yaml");

    let out = gosplit(&["--config", config_path.to_str().unwrap()]);

    assert!(!out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.starts_with("Error: "));
    assert_eq!(stdout.lines().count(), 1);
}
