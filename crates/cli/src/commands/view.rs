// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `iv view`: decode an issue and render it to stdout.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use iv_core::Issue;
use tracing::{debug, info};

use crate::colors::{self, RenderTarget};
use crate::config::Config;
use crate::display::IssueView;
use crate::env;
use crate::error::{Error, Result};

/// Path argument that selects stdin.
const STDIN_PATH: &str = "-";

pub fn run(file: Option<PathBuf>, plain: bool) -> Result<()> {
    let config = Config::load()?;
    let target = detect_target(plain || !colors::should_colorize(), &config);
    info!(%target, "selected render target");

    let issue = read_issue(file.as_deref())?;
    let stdout = io::stdout();
    run_impl(&issue, target, &mut stdout.lock())
}

/// Combine the plain signals with the config and `TERM`.
pub(crate) fn detect_target(plain: bool, config: &Config) -> RenderTarget {
    let supports_256 = config.supports_256(env::term().as_deref());
    RenderTarget::select(plain || config.plain, supports_256)
}

fn read_issue(file: Option<&Path>) -> Result<Issue> {
    match file {
        Some(path) if path != Path::new(STDIN_PATH) => {
            debug!(path = %path.display(), "reading issue file");
            parse_issue(fs::File::open(path)?)
        }
        _ => {
            debug!("reading issue from stdin");
            parse_issue(io::stdin().lock())
        }
    }
}

pub(crate) fn parse_issue(mut reader: impl Read) -> Result<Issue> {
    let mut input = Vec::new();
    reader.read_to_end(&mut input)?;
    if input.iter().all(u8::is_ascii_whitespace) {
        return Err(Error::EmptyInput);
    }
    let issue = Issue::from_reader(input.as_slice())?;
    debug!(
        key = %issue.key,
        links = issue.link_count(),
        has_description = !issue.fields.description.is_absent(),
        "decoded issue"
    );
    Ok(issue)
}

pub(crate) fn run_impl(issue: &Issue, target: RenderTarget, out: &mut impl Write) -> Result<()> {
    IssueView::new(issue, target).write_to(out)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
#[path = "view_tests.rs"]
mod tests;
