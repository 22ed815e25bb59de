//! Integration tests for the `taskdef-hcl` binary.
//!
//! These run the real binary through `assert_cmd` against the task definition
//! fixtures, covering stdin and file input, container selection, output files,
//! formatting flags and failure exits.

// `Command::cargo_bin` is deprecated in newer assert_cmd releases in favor of
// `cargo::cargo_bin_cmd!`.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

fn taskdef_hcl() -> Command {
    Command::cargo_bin("taskdef-hcl").unwrap()
}

const WEB_LOCALS: &str = r#"locals {
  env_vars = [{
    name  = "LOG_LEVEL",
    value = "debug"
  },
  {
    name  = "GREETING",
    value = "hello $${name}"
  }]
  secret_env_vars = [{
    name      = "DB-PASSWORD",
    valueFrom = "db_password"
  }]
}
"#;

#[test]
fn first_container_to_stdout() {
    taskdef_hcl()
        .arg(fixture("task-definition.json"))
        .assert()
        .success()
        .stdout(WEB_LOCALS);
}

#[test]
fn named_container() {
    taskdef_hcl()
        .arg(fixture("task-definition.json"))
        .args(["--container", "sidecar"])
        .assert()
        .success()
        .stdout(predicate::str::contains("name  = \"MODE\""))
        .stdout(predicate::str::contains("secret_env_vars = []"));
}

#[test]
fn missing_container_fails() {
    taskdef_hcl()
        .arg(fixture("task-definition.json"))
        .args(["--container", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no container named \"nope\""));
}

#[test]
fn wrapped_document_from_stdin() {
    let input = std::fs::read_to_string(fixture("wrapped.json")).expect("fixture must exist");

    taskdef_hcl()
        .arg("-")
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("name  = \"QUEUE\""))
        .stdout(predicate::str::contains("secret_env_vars = []"));
}

#[test]
fn unknown_field_fails() {
    taskdef_hcl()
        .arg(fixture("unknown-field.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to decode task definition"))
        .stderr(predicate::str::contains("enviroment"));
}

#[test]
fn unknown_nested_field_fails() {
    taskdef_hcl()
        .arg(fixture("unknown-nested-field.json"))
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("hostPrt"));
}

#[test]
fn invalid_json_fails() {
    taskdef_hcl()
        .arg("-")
        .write_stdin("this is not valid json {{{")
        .assert()
        .failure()
        .stderr(predicate::str::contains("JSON error"));
}

#[test]
fn missing_file_fails() {
    taskdef_hcl()
        .arg(fixture("does-not-exist.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));
}

#[test]
fn writes_output_file() {
    let output_path = std::env::temp_dir().join("taskdef-hcl-test-output.tf");
    let _ = std::fs::remove_file(&output_path);

    taskdef_hcl()
        .arg(fixture("task-definition.json"))
        .arg("-o")
        .arg(&output_path)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let content = std::fs::read_to_string(&output_path).expect("output file must exist");
    assert_eq!(content, WEB_LOCALS);

    let _ = std::fs::remove_file(&output_path);
}

#[test]
fn indent_and_alignment_flags() {
    taskdef_hcl()
        .arg(fixture("task-definition.json"))
        .args(["--indent", "4", "--no-align"])
        .assert()
        .success()
        .stdout(predicate::str::contains("        name = \"LOG_LEVEL\","))
        .stdout(predicate::str::contains("    secret_env_vars = [{"));
}

#[test]
fn depth_limit_flag() {
    taskdef_hcl()
        .arg(fixture("task-definition.json"))
        .args(["--max-depth", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("maximum depth of 1"));
}
