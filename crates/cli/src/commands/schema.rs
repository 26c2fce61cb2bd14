// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema command implementation.
//!
//! Outputs the JSON Schema of the issue record accepted by `iv view`.

use std::io::{self, Write};

use iv_core::Issue;
use schemars::schema_for;

use crate::error::Result;

/// Run the schema command.
pub fn run() -> Result<()> {
    let stdout = io::stdout();
    run_impl(&mut stdout.lock())
}

pub(crate) fn run_impl(out: &mut impl Write) -> Result<()> {
    let schema = schema_for!(Issue);
    let json = serde_json::to_string_pretty(&schema)?;
    writeln!(out, "{}", json)?;
    Ok(())
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
