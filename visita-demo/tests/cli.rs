//! Integration tests for the demo binary's stdout and exit-code contract.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::str::{diff, is_empty};

const BLOCK: &str = "GetStatusCommand\nGetTargetsCommand\nStartCommand\nStopCommand\n";

#[test]
fn emits_three_identical_runs_separated_by_blank_lines() {
    let mut command = cargo_bin_cmd!("visita-demo");
    command
        .assert()
        .success()
        .stdout(diff(format!("{BLOCK}\n{BLOCK}\n{BLOCK}")));
}

#[test]
fn terminates_without_blocking_when_stdin_is_piped() {
    // Piped stdin is not a terminal, so the keypress wait is skipped.
    let mut command = cargo_bin_cmd!("visita-demo");
    command.write_stdin("").assert().success();
}

#[test]
fn a_plain_run_keeps_stderr_quiet() {
    // Default filter is `warn`; the demo only logs at debug and below.
    let mut command = cargo_bin_cmd!("visita-demo");
    command.env_remove("RUST_LOG").assert().success().stderr(is_empty());
}
