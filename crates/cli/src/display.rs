// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Full issue view: header, description and linked issues.
//!
//! ```text
//! 🐞 Bug  ✅ Done  ⌛ Sun, 13 Dec 20  👷 Person A  🔑️ TEST-1  💭 0 comments  🧵 0 linked issues
//! # This is a test
//! ⏱️  Sun, 13 Dec 20  🔎 Person Z  🚀 High  📦 BE, FE  🏷️  None  👀 You + 3 watchers
//!
//! ------------------------ Description ------------------------
//!
//! Test description
//! ```

use std::fmt;
use std::io::{self, Write};

use iv_core::{Description, Issue};

use crate::colors::RenderTarget;
use crate::document::render_document;
use crate::format;
use crate::linked::LinkedIssueTable;
use crate::markup::render_markup;
use crate::separator::separator;

/// An issue bound to a render target.
#[derive(Debug, Clone, Copy)]
pub struct IssueView<'a> {
    issue: &'a Issue,
    target: RenderTarget,
}

impl<'a> IssueView<'a> {
    pub fn new(issue: &'a Issue, target: RenderTarget) -> Self {
        IssueView { issue, target }
    }

    /// Write the view section by section. A failed write stops rendering and
    /// leaves the sections already written in the sink.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        out.write_all(self.header().as_bytes())?;
        out.write_all(self.description().as_bytes())?;
        if let Some(links) = self.linked_issues() {
            out.write_all(links.as_bytes())?;
        }
        Ok(())
    }

    /// Both metadata lines and the summary, followed by a blank line.
    fn header(&self) -> String {
        let issue = self.issue;
        let fields = &issue.fields;
        let issue_type = format::name_or_none(fields.issue_type.as_ref());
        let status = format::name_or_none(fields.status.as_ref());

        let mut out = String::new();
        out.push_str(&format!(
            "{} {}  {} {}  \u{231B} {}  \u{1F477} {}  \u{1F511}\u{FE0F} {}  \u{1F4AD} {}  \u{1F9F5} {}\n",
            format::type_icon(issue_type),
            issue_type,
            format::status_icon(status),
            status,
            format::date(&fields.created),
            format::user_or(fields.assignee.as_ref(), format::UNASSIGNED),
            issue.key,
            format::comments(fields.comment.as_ref().map_or(0, |c| c.total)),
            format::linked_issues(issue.link_count()),
        ));
        out.push_str(&format!("# {}\n", fields.summary));
        out.push_str(&format!(
            "\u{23F1}\u{FE0F}  {}  \u{1F50E} {}  \u{1F680} {}  \u{1F4E6} {}  \u{1F3F7}\u{FE0F}  {}  \u{1F440} {}\n\n",
            format::date(&fields.updated),
            format::user_or(fields.reporter.as_ref(), format::NONE),
            format::name_or_none(fields.priority.as_ref()),
            format::join_or_none(
                &fields
                    .components
                    .iter()
                    .map(|c| c.name.as_str())
                    .collect::<Vec<_>>()
            ),
            format::join_or_none(&fields.labels),
            format::watchers(fields.watches.as_ref()),
        ));
        out
    }

    fn description(&self) -> String {
        let body = match &self.issue.fields.description {
            Description::Absent => String::new(),
            Description::Document(doc) => render_document(doc),
            Description::Markup(markup) => render_markup(markup),
        };
        format!("{}\n\n{}\n", separator("Description", self.target), body)
    }

    /// `None` when no link resolves to an issue.
    fn linked_issues(&self) -> Option<String> {
        let table = LinkedIssueTable::build(&self.issue.fields.issue_links);
        if table.is_empty() {
            return None;
        }
        Some(format!(
            "\n{}\n\n{}\n",
            separator("Linked Issues", self.target),
            table.render(self.target)
        ))
    }
}

impl fmt::Display for IssueView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.header())?;
        f.write_str(&self.description())?;
        if let Some(links) = self.linked_issues() {
            f.write_str(&links)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
