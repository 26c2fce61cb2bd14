// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! ivrs - Render Jira-style issue records in the terminal.
//!
//! This crate provides the rendering engine and command layer for the `iv`
//! CLI tool. Issues are decoded into [`iv_core::Issue`] and rendered by
//! [`IssueView`] to any [`std::io::Write`] sink.
//!
//! # Main Components
//!
//! - [`IssueView`] - Composes header, description and linked issues
//! - [`RenderTarget`] - Plain, basic-color or 256-color output
//! - [`Config`] - User configuration (`plain`, `color256`)
//! - [`Error`] - Error types for all operations
//!
//! ```rust,ignore
//! use ivrs::{IssueView, RenderTarget};
//!
//! let issue = iv_core::Issue::from_json(&json)?;
//! IssueView::new(&issue, RenderTarget::Plain).write_to(&mut std::io::stdout())?;
//! ```

mod cli;
pub mod colors;
mod commands;
pub mod document;
pub mod env;
pub mod format;
pub mod linked;
pub mod markup;
pub mod separator;

pub mod config;
pub mod display;
pub mod error;

#[cfg(test)]
mod test_support;

pub use cli::{Cli, Command, ConfigCommand};
pub use colors::RenderTarget;
pub use config::Config;
pub use display::IssueView;
pub use error::{Error, Result};

use clap::CommandFactory;
use clap_complete::generate;

/// Execute a CLI command. This is the main entry point for library users
/// and provides a testable way to run commands without process execution.
pub fn run(command: Command) -> Result<()> {
    match command {
        Command::View { file, plain } => commands::view::run(file, plain),
        Command::Schema => commands::schema::run(),
        Command::Config(cmd) => commands::config::run(cmd),
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "iv", &mut std::io::stdout());
            Ok(())
        }
    }
}
