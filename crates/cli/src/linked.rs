// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Grouped, column-aligned table of linked issues.
//!
//! Built in two passes: [`LinkedIssueTable::build`] collects every row and
//! the widest value of each column across all groups, then
//! [`LinkedIssueTable::render`] pads each cell to those widths.

use iv_core::{Issue, IssueLink};
use tracing::trace;

use crate::colors::{self, RenderTarget};
use crate::format;

/// One linked issue, flattened to its display columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRow {
    pub key: String,
    pub summary: String,
    pub issue_type: String,
    pub priority: String,
    pub status: String,
}

impl LinkRow {
    fn from_issue(issue: &Issue) -> Self {
        let fields = &issue.fields;
        LinkRow {
            key: issue.key.clone(),
            summary: fields.summary.clone(),
            issue_type: format::name_or_none(fields.issue_type.as_ref()).to_string(),
            priority: format::name_or_none(fields.priority.as_ref()).to_string(),
            status: format::name_or_none(fields.status.as_ref()).to_string(),
        }
    }
}

/// Rows sharing a relation phrase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkGroup {
    /// The phrase as written on the link type, e.g. `relates to`.
    pub phrase: String,
    pub rows: Vec<LinkRow>,
}

/// Per-column maxima, in characters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnWidths {
    pub key: usize,
    pub summary: usize,
    pub issue_type: usize,
    pub priority: usize,
    pub status: usize,
}

impl ColumnWidths {
    fn widen(&mut self, row: &LinkRow) {
        self.key = self.key.max(row.key.chars().count());
        self.summary = self.summary.max(row.summary.chars().count());
        self.issue_type = self.issue_type.max(row.issue_type.chars().count());
        self.priority = self.priority.max(row.priority.chars().count());
        self.status = self.status.max(row.status.chars().count());
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkedIssueTable {
    groups: Vec<LinkGroup>,
    widths: ColumnWidths,
}

impl LinkedIssueTable {
    /// Group links by their directional phrase, in first-seen order. Links
    /// with no related issue on either side are skipped.
    pub fn build(links: &[IssueLink]) -> Self {
        let mut table = LinkedIssueTable::default();

        for linked in links.iter().filter_map(IssueLink::linked) {
            trace!(
                key = %linked.issue.key,
                direction = %linked.direction,
                phrase = linked.phrase,
                "linked issue"
            );
            let row = LinkRow::from_issue(linked.issue);
            table.widths.widen(&row);

            match table.groups.iter_mut().find(|g| g.phrase == linked.phrase) {
                Some(group) => group.rows.push(row),
                None => table.groups.push(LinkGroup {
                    phrase: linked.phrase.to_string(),
                    rows: vec![row],
                }),
            }
        }

        table
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn groups(&self) -> &[LinkGroup] {
        &self.groups
    }

    pub fn widths(&self) -> ColumnWidths {
        self.widths
    }

    /// Render every group: a blank line, the uppercased heading, a blank
    /// line, then one indented row per linked issue.
    pub fn render(&self, target: RenderTarget) -> String {
        let mut out = String::new();
        for group in &self.groups {
            out.push_str("\n  ");
            out.push_str(&colors::heading(&group.phrase.to_uppercase(), target));
            out.push_str("\n\n");
            for row in &group.rows {
                out.push_str("    ");
                out.push_str(&self.render_row(row, target));
                out.push('\n');
            }
        }
        out
    }

    fn render_row(&self, row: &LinkRow, target: RenderTarget) -> String {
        let w = &self.widths;
        format!(
            "{} {} \u{2022} {} \u{2022} {} \u{2022} {}",
            colors::key(&pad(&row.key, w.key), target),
            pad(&row.summary, w.summary),
            pad(&row.issue_type, w.issue_type),
            pad(&row.priority, w.priority),
            pad(&row.status, w.status),
        )
    }
}

/// Right-pad to `width` characters.
fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.chars().count());
    format!("{text}{}", " ".repeat(fill))
}

#[cfg(test)]
#[path = "linked_tests.rs"]
mod tests;
