// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Issue link types.
//!
//! A link carries a relation type with an inward and an outward phrase and
//! exactly one linked issue on a well-formed payload. [`IssueLink::linked`]
//! resolves which side is populated.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::issue::Issue;

/// Relation type of a link, e.g. `blocks` / `is blocked by`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(default)]
pub struct LinkType {
    pub name: String,
    /// Phrase used when the linked issue is on the inward side.
    pub inward: String,
    /// Phrase used when the linked issue is on the outward side.
    pub outward: String,
}

impl LinkType {
    pub fn new(
        name: impl Into<String>,
        inward: impl Into<String>,
        outward: impl Into<String>,
    ) -> Self {
        LinkType {
            name: name.into(),
            inward: inward.into(),
            outward: outward.into(),
        }
    }
}

/// Which side of a link the related issue sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Inward,
    Outward,
}

impl Direction {
    /// Returns the string representation used in display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Inward => "inward",
            Direction::Outward => "outward",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A relation between the rendered issue and another issue.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct IssueLink {
    #[serde(rename = "type", default)]
    pub link_type: LinkType,
    #[serde(
        rename = "inwardIssue",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub inward_issue: Option<Box<Issue>>,
    #[serde(
        rename = "outwardIssue",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub outward_issue: Option<Box<Issue>>,
}

/// A resolved link: its direction, the phrase for that direction, and the issue.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinkedIssue<'a> {
    pub direction: Direction,
    pub phrase: &'a str,
    pub issue: &'a Issue,
}

impl IssueLink {
    /// Creates a link whose related issue is on the inward side.
    pub fn inward(link_type: LinkType, issue: Issue) -> Self {
        IssueLink {
            link_type,
            inward_issue: Some(Box::new(issue)),
            outward_issue: None,
        }
    }

    /// Creates a link whose related issue is on the outward side.
    pub fn outward(link_type: LinkType, issue: Issue) -> Self {
        IssueLink {
            link_type,
            inward_issue: None,
            outward_issue: Some(Box::new(issue)),
        }
    }

    /// Resolve the populated side. Inward wins when both are set; a link with
    /// neither side yields `None`.
    pub fn linked(&self) -> Option<LinkedIssue<'_>> {
        if let Some(issue) = &self.inward_issue {
            return Some(LinkedIssue {
                direction: Direction::Inward,
                phrase: &self.link_type.inward,
                issue,
            });
        }
        self.outward_issue.as_deref().map(|issue| LinkedIssue {
            direction: Direction::Outward,
            phrase: &self.link_type.outward,
            issue,
        })
    }
}

#[cfg(test)]
#[path = "link_tests.rs"]
mod tests;
