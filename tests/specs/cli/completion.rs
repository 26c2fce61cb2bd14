// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Completion command tests.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

fn iv() -> Command {
    cargo_bin_cmd!("iv")
}

#[yare::parameterized(
    bash = { "bash" },
    zsh = { "zsh" },
    fish = { "fish" },
)]
fn completion_generates_non_empty_output(shell: &str) {
    let output = iv().args(["completion", shell]).output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.is_empty(), "Completion output should not be empty");
    assert!(stdout.contains("view"), "Completion should list subcommands");
}

#[test]
fn completion_zsh_has_compdef() {
    let output = iv().args(["completion", "zsh"]).output().unwrap();

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("#compdef iv"));
}

#[test]
fn completion_without_shell_fails() {
    let output = iv().arg("completion").output().unwrap();
    assert!(!output.status.success());
}

#[test]
fn completion_invalid_shell_fails() {
    let output = iv().args(["completion", "tcsh"]).output().unwrap();
    assert!(!output.status.success());
}
