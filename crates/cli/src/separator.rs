// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Horizontal rules with an optional centered label.

use crate::colors::{self, RenderTarget};

/// Rule characters on each side of the label.
pub const RULE_WIDTH: usize = 24;

/// Rule character for plain output.
const PLAIN_RULE: char = '-';

/// Rule character for colored output (em dash).
const COLOR_RULE: char = '\u{2014}';

/// Render a separator line.
///
/// An empty body gives a solid rule of `2 * RULE_WIDTH` characters. Otherwise
/// the body sits between two rules with one space of padding on each side.
/// The body is never trimmed or cut.
pub fn separator(body: &str, target: RenderTarget) -> String {
    let rule_char = if target.is_plain() {
        PLAIN_RULE
    } else {
        COLOR_RULE
    };
    let rule: String = std::iter::repeat(rule_char).take(RULE_WIDTH).collect();

    let line = if body.is_empty() {
        format!("{rule}{rule}")
    } else {
        format!("{rule} {body} {rule}")
    };

    colors::gray(&line, target)
}

#[cfg(test)]
#[path = "separator_tests.rs"]
mod tests;
