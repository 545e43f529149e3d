//! CLI interface tests

use assert_cmd::Command;
use predicates::prelude::*;

const HELP: &str = "This is supposed to be helpful...\n";

fn widthopt() -> Command {
    let mut cmd = Command::cargo_bin("widthopt").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_no_arguments() {
    widthopt()
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_valid_width_is_silent() {
    for args in [
        &["-w", "42"][..],
        &["--width", "42"],
        &["--width=13"],
        &["-w", "-7"],
        &["-w", "0"],
        &["-w", "2147483647"],
        &["-w", "-2147483648"],
    ] {
        widthopt()
            .args(args)
            .assert()
            .code(0)
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::is_empty());
    }
}

#[test]
fn test_help_flag() {
    for flag in ["--help", "-h", "-?"] {
        widthopt()
            .arg(flag)
            .assert()
            .code(0)
            .stdout(predicate::str::is_empty())
            .stderr(HELP);
    }
}

#[test]
fn test_help_overrides_parse_error() {
    widthopt()
        .args(["--help", "-w", "abc"])
        .assert()
        .code(0)
        .stdout(predicate::str::is_empty())
        .stderr(HELP);
}

#[test]
fn test_question_mark_help_overrides_parse_error() {
    widthopt()
        .args(["-?", "-w", "abc"])
        .assert()
        .code(0)
        .stdout(predicate::str::is_empty())
        .stderr(HELP);
}

#[test]
fn test_help_after_parse_error() {
    widthopt()
        .args(["-w", "abc", "--help"])
        .assert()
        .code(0)
        .stderr(HELP);

    widthopt()
        .args(["--bogus", "-h"])
        .assert()
        .code(0)
        .stderr(HELP);
}

#[test]
fn test_malformed_width() {
    widthopt()
        .args(["-w", "abc"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::starts_with("Error in command line: "))
        .stderr(predicate::str::contains("abc"));
}

#[test]
fn test_parse_failures_have_a_message() {
    let has_message = predicate::str::is_match(r"^Error in command line: \S.*\n$").unwrap();

    for args in [
        &["--width", "1.5"][..],
        &["-w", "99999999999"],
        &["-w"],
        &["--bogus"],
        &["stray"],
        &["--version"],
    ] {
        widthopt()
            .args(args)
            .assert()
            .failure()
            .code(1)
            .stdout(predicate::str::is_empty())
            .stderr(has_message.clone());
    }
}
