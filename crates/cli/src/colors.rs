// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Render targets and terminal color utilities.
//!
//! The renderer never inspects the environment itself: callers detect the
//! capabilities once (see [`should_colorize`] and [`supports_256`]) and pass
//! the resulting [`RenderTarget`] in.
//!
//! Respects environment variables:
//! - `NO_COLOR=1`: Disables colors
//! - `COLOR=1`: Forces colors even without TTY

use std::fmt;
use std::io::IsTerminal;

use crate::env;

/// ANSI escape sequences used by the issue view.
pub mod codes {
    /// Dark gray foreground for basic-color terminals.
    pub const GRAY_START: &str = "\x1b[0;90m";
    /// Gray 242, used for rules on 256-color terminals.
    pub const GRAY_256_START: &str = "\x1b[38;5;242m";
    /// Bold white, used for link group headings.
    pub const HEADING_START: &str = "\x1b[37;1m";
    /// Bold green, used for issue keys.
    pub const KEY_START: &str = "\x1b[32;1m";
    pub const RESET: &str = "\x1b[0m";
    /// Bare reset, closes 256-color sequences.
    pub const RESET_SHORT: &str = "\x1b[m";
}

/// Output mode for one render pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RenderTarget {
    /// ASCII rules, no escape sequences.
    #[default]
    Plain,
    /// Basic ANSI colors.
    Color,
    /// ANSI colors with 256-color grays.
    Color256,
}

impl RenderTarget {
    /// Pick the target from the two capability signals. Plain always wins.
    pub fn select(plain: bool, supports_256: bool) -> Self {
        match (plain, supports_256) {
            (true, _) => RenderTarget::Plain,
            (false, true) => RenderTarget::Color256,
            (false, false) => RenderTarget::Color,
        }
    }

    pub fn is_plain(&self) -> bool {
        matches!(self, RenderTarget::Plain)
    }

    /// Returns the string representation used in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            RenderTarget::Plain => "plain",
            RenderTarget::Color => "color",
            RenderTarget::Color256 => "color256",
        }
    }
}

impl fmt::Display for RenderTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Check if colors should be enabled based on TTY and environment variables.
pub fn should_colorize() -> bool {
    // NO_COLOR=1 disables colors
    if env::no_color() {
        return false;
    }

    // COLOR=1 forces colors even without TTY
    if env::force_color() {
        return true;
    }

    // Default: enable colors only if stdout is a TTY
    std::io::stdout().is_terminal()
}

/// Whether a `TERM` value advertises 256 colors (`xterm-256color`, `screen-256color`, ...).
pub fn supports_256(term: Option<&str>) -> bool {
    term.is_some_and(|t| t.contains("256color"))
}

/// Paint text gray. The 256-color form closes with a bare reset.
pub fn gray(text: &str, target: RenderTarget) -> String {
    match target {
        RenderTarget::Plain => text.to_string(),
        RenderTarget::Color => format!("{}{}{}", codes::GRAY_START, text, codes::RESET),
        RenderTarget::Color256 => {
            format!("{}{}{}", codes::GRAY_256_START, text, codes::RESET_SHORT)
        }
    }
}

/// Paint a section or group heading.
pub fn heading(text: &str, target: RenderTarget) -> String {
    if target.is_plain() {
        return text.to_string();
    }
    format!("{}{}{}", codes::HEADING_START, text, codes::RESET)
}

/// Paint an issue key.
pub fn key(text: &str, target: RenderTarget) -> String {
    if target.is_plain() {
        return text.to_string();
    }
    format!("{}{}{}", codes::KEY_START, text, codes::RESET)
}

#[cfg(test)]
#[path = "colors_tests.rs"]
mod tests;
