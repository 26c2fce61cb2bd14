// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Core issue types for the iv presentation engine.
//!
//! The shapes mirror the `fields` object returned by the Jira REST API so a
//! fetched payload can be decoded as-is. Every field is optional on input;
//! absent fields decode to their defaults and the renderer substitutes
//! fallbacks.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::io::Read;

use crate::description::Description;
use crate::error::Result;
use crate::link::IssueLink;

/// Timestamp layout used by Jira, e.g. `2020-12-13T14:05:20.974+0100`.
pub const JIRA_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f%z";

/// Parse a timestamp in Jira layout or RFC 3339, keeping its own offset.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<FixedOffset>> {
    let raw = raw.trim();
    DateTime::parse_from_str(raw, JIRA_TIMESTAMP_FORMAT)
        .or_else(|_| DateTime::parse_from_rfc3339(raw))
        .ok()
}

/// A named reference such as a status, issue type, priority or component.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Named {
    #[serde(default)]
    pub name: String,
}

impl Named {
    pub fn new(name: impl Into<String>) -> Self {
        Named { name: name.into() }
    }
}

/// A user reference (assignee, reporter).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct User {
    #[serde(rename = "displayName", default)]
    pub display_name: String,
}

impl User {
    pub fn new(display_name: impl Into<String>) -> Self {
        User {
            display_name: display_name.into(),
        }
    }
}

/// Watch information relative to the requesting user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Watches {
    /// Whether the requesting user watches the issue.
    #[serde(rename = "isWatching", default)]
    pub is_watching: bool,
    /// Total number of watchers, including the requesting user when watching.
    #[serde(rename = "watchCount", default)]
    pub watch_count: u32,
}

/// Comment summary. Only the total is used for display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Comments {
    #[serde(default)]
    pub total: u32,
}

/// The field set of an issue.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(default)]
pub struct IssueFields {
    /// One-line title of the issue.
    pub summary: String,
    pub status: Option<Named>,
    #[serde(rename = "issuetype")]
    pub issue_type: Option<Named>,
    pub priority: Option<Named>,
    /// Decoded but never shown in the view.
    pub resolution: Option<Named>,
    pub assignee: Option<User>,
    pub reporter: Option<User>,
    /// Raw creation timestamp, see [`parse_timestamp`].
    pub created: String,
    /// Raw update timestamp, see [`parse_timestamp`].
    pub updated: String,
    pub watches: Option<Watches>,
    pub comment: Option<Comments>,
    pub components: Vec<Named>,
    pub labels: Vec<String>,
    /// Rich-text body in either representation, or absent.
    pub description: Description,
    #[serde(rename = "issuelinks")]
    pub issue_links: Vec<IssueLink>,
}

/// The record rendered by the presentation engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Issue {
    /// Issue key, e.g. `PROJ-42`.
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub fields: IssueFields,
}

impl Issue {
    /// Creates an issue with the given key and empty fields.
    pub fn new(key: impl Into<String>) -> Self {
        Issue {
            key: key.into(),
            fields: IssueFields::default(),
        }
    }

    /// Decode an issue from a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Decode an issue from a JSON stream.
    pub fn from_reader(reader: impl Read) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Sets the summary (builder pattern).
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.fields.summary = summary.into();
        self
    }

    /// Sets the issue type name (builder pattern).
    pub fn with_type(mut self, issue_type: impl Into<String>) -> Self {
        self.fields.issue_type = Some(Named::new(issue_type));
        self
    }

    /// Sets the status name (builder pattern).
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.fields.status = Some(Named::new(status));
        self
    }

    /// Sets the priority name (builder pattern).
    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.fields.priority = Some(Named::new(priority));
        self
    }

    /// Sets the description (builder pattern).
    pub fn with_description(mut self, description: Description) -> Self {
        self.fields.description = description;
        self
    }

    /// Appends an issue link (builder pattern).
    pub fn with_link(mut self, link: IssueLink) -> Self {
        self.fields.issue_links.push(link);
        self
    }

    /// Number of links on the issue, whether or not they resolve to an issue.
    pub fn link_count(&self) -> usize {
        self.fields.issue_links.len()
    }
}

#[cfg(test)]
#[path = "issue_tests.rs"]
mod tests;
