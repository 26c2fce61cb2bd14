// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::{self, Write};

use tracing::debug;

use crate::cli::ConfigCommand;
use crate::config::Config;
use crate::error::{Error, Result};

/// Execute a config subcommand.
pub fn run(cmd: ConfigCommand) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cmd {
        ConfigCommand::Show => run_show(&Config::load()?, &mut out),
        ConfigCommand::Path => {
            let path = Config::path().ok_or_else(|| {
                Error::Config("no config directory on this platform; set IV_CONFIG".to_string())
            })?;
            debug!(path = %path.display(), "config path");
            writeln!(out, "{}", path.display())?;
            Ok(())
        }
    }
}

/// Print the effective configuration.
pub(crate) fn run_show(config: &Config, out: &mut impl Write) -> Result<()> {
    out.write_all(config.to_toml()?.as_bytes())?;
    Ok(())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
