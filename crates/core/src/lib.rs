// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! iv-core: data model for the iv issue presentation engine
//!
//! This crate provides the read-only issue record consumed by the renderer:
//! the issue and its fields, issue links, and the rich-text description in
//! either of its two representations.

pub mod description;
pub mod document;
pub mod error;
pub mod issue;
pub mod link;

pub use description::Description;
pub use document::{Document, Mark, Node};
pub use error::{Error, Result};
pub use issue::{parse_timestamp, Comments, Issue, IssueFields, Named, User, Watches};
pub use link::{Direction, IssueLink, LinkType, LinkedIssue};
