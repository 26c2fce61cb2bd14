// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared fixtures for unit tests.

use iv_core::{
    Comments, Description, Document, Issue, IssueLink, LinkType, Mark, Named, Node, User, Watches,
};

/// Strip ANSI escape sequences from a string.
pub fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            // Skip to the final byte of the CSI sequence.
            for c in chars.by_ref() {
                if c.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// Description markup shared by the tree and markup fixtures.
pub const LEGACY_DESCRIPTION: &str = "h1. Title\nh2. Subtitle\n\nThis is a *bold* and _italic_ text with [a link|https://ankit.pl] in between.";

/// `TEST-1` with every header field populated and no description.
pub fn base_issue() -> Issue {
    let mut issue = Issue::new("TEST-1")
        .with_summary("This is a test")
        .with_type("Bug")
        .with_status("Done")
        .with_priority("High");
    let fields = &mut issue.fields;
    fields.resolution = Some(Named::new("Fixed"));
    fields.assignee = Some(User::new("Person A"));
    fields.reporter = Some(User::new("Person Z"));
    fields.components = vec![Named::new("BE"), Named::new("FE")];
    fields.created = "2020-12-13T14:05:20.974+0100".to_string();
    fields.updated = "2020-12-13T14:07:20.974+0100".to_string();
    issue
}

/// Tree description, watched by the reader plus three others.
pub fn tree_issue() -> Issue {
    let mut issue = base_issue().with_description(Description::Document(Document::new(vec![
        Node::paragraph(vec![Node::text("Test description")]),
    ])));
    issue.fields.watches = Some(Watches {
        is_watching: true,
        watch_count: 4,
    });
    issue
}

/// Markup description, three comments and two links.
pub fn markup_issue() -> Issue {
    let mut issue = base_issue()
        .with_description(Description::Markup(LEGACY_DESCRIPTION.to_string()))
        .with_link(IssueLink::inward(
            LinkType::new("blocks", "blocks", "is blocked by"),
            linked("TEST-2", "Something is broken", "High", "TO DO"),
        ))
        .with_link(IssueLink::outward(
            LinkType::new("relates", "relates", "relates to"),
            linked("TEST-3", "Everything is on fire", "Urgent", "Done"),
        ));
    issue.fields.comment = Some(Comments { total: 3 });
    issue
}

/// The tree equivalent of [`LEGACY_DESCRIPTION`].
pub fn legacy_equivalent_document() -> Document {
    Document::new(vec![
        Node::heading(1, vec![Node::text("Title")]),
        Node::heading(2, vec![Node::text("Subtitle")]),
        Node::paragraph(vec![
            Node::text("This is a "),
            Node::marked("bold", vec![Mark::Strong]),
            Node::text(" and "),
            Node::marked("italic", vec![Mark::Em]),
            Node::text(" text with "),
            Node::marked("a link", vec![Mark::link("https://ankit.pl")]),
            Node::text(" in between."),
        ]),
    ])
}

/// A bug linked from the rendered issue.
pub fn linked(key: &str, summary: &str, priority: &str, status: &str) -> Issue {
    Issue::new(key)
        .with_summary(summary)
        .with_type("Bug")
        .with_priority(priority)
        .with_status(status)
}
