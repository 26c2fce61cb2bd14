// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "iv")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Render Jira-style issue records in the terminal")]
#[command(
    long_about = "Render Jira-style issue records in the terminal.\n\n\
    Reads an issue as JSON (REST v2 markup or v3 document descriptions) and prints \
    a header, the description and grouped linked issues."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render an issue
    #[command(after_help = "\
Examples:
  iv view issue.json          Render a saved issue
  curl ... | iv view          Render an issue from stdin
  iv view issue.json --plain  Render without colors")]
    View {
        /// Issue JSON file; reads stdin when omitted or `-`
        file: Option<PathBuf>,

        /// Disable colors
        #[arg(long)]
        plain: bool,
    },

    /// Output the JSON Schema of the accepted issue record
    Schema,

    /// Inspect configuration
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Generate shell completions
    #[command(after_help = "\
Examples:
  iv completion bash > ~/.local/share/bash-completion/completions/iv
  iv completion zsh > ~/.zfunc/_iv
  iv completion fish > ~/.config/fish/completions/iv.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Configuration commands.
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigCommand {
    /// Print the effective configuration as TOML
    Show,
    /// Print the config file location
    Path,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
