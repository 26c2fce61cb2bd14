// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `iv view` end-to-end tests against the built binary.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

const TREE_EXPECTED: &str = "🐞 Bug  ✅ Done  ⌛ Sun, 13 Dec 20  👷 Person A  🔑️ TEST-1  💭 0 comments  \u{1F9F5} 0 linked issues\n# This is a test\n⏱️  Sun, 13 Dec 20  🔎 Person Z  🚀 High  📦 BE, FE  🏷️  None  👀 You + 3 watchers\n\n------------------------ Description ------------------------\n\nTest description\n\n";

const MARKUP_EXPECTED: &str = "🐞 Bug  ✅ Done  ⌛ Sun, 13 Dec 20  👷 Person A  🔑️ TEST-1  💭 3 comments  \u{1F9F5} 2 linked issues\n# This is a test\n⏱️  Sun, 13 Dec 20  🔎 Person Z  🚀 High  📦 BE, FE  🏷️  None  👀 0 watchers\n\n------------------------ Description ------------------------\n\n# Title\n## Subtitle\nThis is a **bold** and _italic_ text with [a link](https://ankit.pl) in between.\n\n\n------------------------ Linked Issues ------------------------\n\n\n  BLOCKS\n\n    TEST-2 Something is broken   • Bug • High   • TO DO\n\n  RELATES TO\n\n    TEST-3 Everything is on fire • Bug • Urgent • Done \n\n";

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../tests/specs/cli/fixtures")
        .join(name)
}

/// An `iv` command isolated from the caller's config and color settings.
struct Iv {
    config_dir: TempDir,
    cmd: Command,
}

impl Iv {
    fn new() -> Self {
        let config_dir = TempDir::new().unwrap();
        let mut cmd = cargo_bin_cmd!("iv");
        cmd.env("IV_CONFIG", config_dir.path().join("config.toml"))
            .env_remove("NO_COLOR")
            .env_remove("COLOR")
            .env_remove("IV_LOG")
            .env("TERM", "xterm");
        Iv {
            config_dir,
            cmd,
        }
    }

    fn config(self, content: &str) -> Self {
        std::fs::write(self.config_dir.path().join("config.toml"), content).unwrap();
        self
    }
}

fn iv() -> Iv {
    Iv::new()
}

// =============================================================================
// Rendering
// =============================================================================

#[yare::parameterized(
    tree = { "tree.json", TREE_EXPECTED },
    markup = { "markup.json", MARKUP_EXPECTED },
)]
fn renders_fixture_plain(name: &str, expected: &str) {
    let output = iv()
        .cmd
        .args(["view", "--plain"])
        .arg(fixture(name))
        .output()
        .unwrap();

    assert!(output.status.success());
    similar_asserts::assert_eq!(String::from_utf8(output.stdout).unwrap(), expected);
}

#[test]
fn reads_stdin_when_no_file() {
    let input = std::fs::read_to_string(fixture("tree.json")).unwrap();
    iv().cmd
        .arg("view")
        .write_stdin(input)
        .assert()
        .success()
        .stdout(TREE_EXPECTED);
}

#[test]
fn dash_reads_stdin() {
    let input = std::fs::read_to_string(fixture("markup.json")).unwrap();
    iv().cmd
        .args(["view", "-"])
        .write_stdin(input)
        .assert()
        .success()
        .stdout(MARKUP_EXPECTED);
}

#[test]
fn piped_output_is_plain() {
    iv().cmd
        .arg("view")
        .arg(fixture("markup.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains('\x1b').not());
}

#[test]
fn color_forces_escapes() {
    iv().cmd
        .env("COLOR", "1")
        .arg("view")
        .arg(fixture("markup.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "\x1b[0;90m———————————————————————— Description ————————————————————————\x1b[0m",
        ))
        .stdout(predicate::str::contains("\x1b[37;1mBLOCKS\x1b[0m"));
}

#[test]
fn color_256_from_term() {
    iv().cmd
        .env("COLOR", "1")
        .env("TERM", "xterm-256color")
        .arg("view")
        .arg(fixture("tree.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[38;5;242m"));
}

#[test]
fn no_color_beats_color() {
    iv().cmd
        .env("COLOR", "1")
        .env("NO_COLOR", "1")
        .arg("view")
        .arg(fixture("tree.json"))
        .assert()
        .success()
        .stdout(TREE_EXPECTED);
}

#[test]
fn config_plain_disables_color() {
    iv().config("plain = true\n")
        .cmd
        .env("COLOR", "1")
        .arg("view")
        .arg(fixture("tree.json"))
        .assert()
        .success()
        .stdout(TREE_EXPECTED);
}

#[test]
fn logs_go_to_stderr() {
    iv().cmd
        .env("IV_LOG", "debug")
        .args(["view", "--plain"])
        .arg(fixture("tree.json"))
        .assert()
        .success()
        .stdout(TREE_EXPECTED)
        .stderr(predicate::str::contains("selected render target"));
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn empty_stdin_fails() {
    iv().cmd
        .arg("view")
        .write_stdin("")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("error: no issue on input"));
}

#[test]
fn invalid_json_fails_with_hint() {
    iv().cmd
        .arg("view")
        .write_stdin("{\"key\": ")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid issue json"))
        .stderr(predicate::str::contains("hint:"));
}

#[test]
fn missing_file_fails() {
    iv().cmd
        .args(["view", "does-not-exist.json"])
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("error: io error:"));
}

#[test]
fn bad_config_fails() {
    iv().config("plain = \"yes\"\n")
        .cmd
        .args(["view", "--plain"])
        .arg(fixture("tree.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid config file"));
}

// =============================================================================
// Other commands
// =============================================================================

#[test]
fn schema_prints_issue_schema() {
    iv().cmd
        .arg("schema")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"$schema\""))
        .stdout(predicate::str::contains("\"issuelinks\""));
}

#[test]
fn config_path_honours_env() {
    let iv = iv();
    let expected = iv.config_dir.path().join("config.toml");
    let mut cmd = iv.cmd;
    cmd.args(["config", "path"])
        .assert()
        .success()
        .stdout(format!("{}\n", expected.display()));
}

#[test]
fn config_show_prints_effective_values() {
    iv().config("color256 = true\n")
        .cmd
        .args(["config", "show"])
        .assert()
        .success()
        .stdout("plain = false\ncolor256 = true\n");
}
