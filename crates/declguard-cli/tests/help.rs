use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to get a Command for the declguard binary.
#[allow(deprecated)]
fn declguard_cmd() -> Command {
    Command::cargo_bin("declguard").unwrap()
}

#[test]
fn help_works() {
    declguard_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("explain"))
        .stdout(predicate::str::contains("rules"));
}

#[test]
fn check_help_lists_input() {
    declguard_cmd()
        .args(["check", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--input"));
}
