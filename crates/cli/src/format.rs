// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Field formatting for the issue header.
//!
//! Every formatter is total: a missing or unparseable field produces a
//! fallback string instead of an error.

use iv_core::{parse_timestamp, Named, User, Watches};

/// Output form of header dates, e.g. `Sun, 13 Dec 20`.
pub const DATE_FORMAT: &str = "%a, %d %b %y";

/// Placeholder for missing fields.
pub const NONE: &str = "None";

/// Placeholder for a missing assignee.
pub const UNASSIGNED: &str = "Unassigned";

/// Format a timestamp in its own offset.
///
/// - empty → `None`
/// - parseable → `Sun, 13 Dec 20`
/// - anything else → the raw input
pub fn date(raw: &str) -> String {
    if raw.trim().is_empty() {
        return NONE.to_string();
    }
    match parse_timestamp(raw) {
        Some(ts) => ts.format(DATE_FORMAT).to_string(),
        None => raw.to_string(),
    }
}

/// Name of an optional named field, `None` when absent or blank.
pub fn name_or_none(field: Option<&Named>) -> &str {
    match field {
        Some(named) if !named.name.is_empty() => &named.name,
        _ => NONE,
    }
}

/// Display name of a user, or `fallback` when absent or blank.
pub fn user_or<'a>(user: Option<&'a User>, fallback: &'a str) -> &'a str {
    match user {
        Some(user) if !user.display_name.is_empty() => &user.display_name,
        _ => fallback,
    }
}

/// Comma-space joined values, `None` when there are none.
pub fn join_or_none<S: AsRef<str>>(values: &[S]) -> String {
    if values.is_empty() {
        return NONE.to_string();
    }
    values
        .iter()
        .map(|v| v.as_ref())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn comments(total: u32) -> String {
    format!("{total} comments")
}

pub fn linked_issues(count: usize) -> String {
    format!("{count} linked issues")
}

/// Watcher phrase. When the reader watches, they are subtracted from the
/// count as-is, so a zero count yields `You + -1 watchers`.
pub fn watchers(watches: Option<&Watches>) -> String {
    match watches {
        Some(w) if w.is_watching => format!("You + {} watchers", i64::from(w.watch_count) - 1),
        Some(w) => format!("{} watchers", w.watch_count),
        None => "0 watchers".to_string(),
    }
}

/// `🐞` for bugs, `⭐` for everything else.
pub fn type_icon(issue_type: &str) -> &'static str {
    if issue_type == "Bug" {
        "\u{1F41E}"
    } else {
        "\u{2B50}"
    }
}

/// `✅` for finished statuses, `🚧` otherwise.
pub fn status_icon(status: &str) -> &'static str {
    const DONE: [&str; 3] = ["done", "closed", "resolved"];
    if DONE.iter().any(|d| status.eq_ignore_ascii_case(d)) {
        "\u{2705}"
    } else {
        "\u{1F6A7}"
    }
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
