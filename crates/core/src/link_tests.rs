// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;

fn blocks() -> LinkType {
    LinkType::new("Blocks", "blocks", "is blocked by")
}

#[test]
fn inward_link_uses_inward_phrase() {
    let link = IssueLink::inward(blocks(), Issue::new("TEST-2"));
    let linked = link.linked().unwrap();

    assert_eq!(linked.direction, Direction::Inward);
    assert_eq!(linked.phrase, "blocks");
    assert_eq!(linked.issue.key, "TEST-2");
}

#[test]
fn outward_link_uses_outward_phrase() {
    let link = IssueLink::outward(blocks(), Issue::new("TEST-3"));
    let linked = link.linked().unwrap();

    assert_eq!(linked.direction, Direction::Outward);
    assert_eq!(linked.phrase, "is blocked by");
    assert_eq!(linked.issue.key, "TEST-3");
}

#[test]
fn inward_wins_when_both_sides_are_set() {
    let mut link = IssueLink::inward(blocks(), Issue::new("TEST-2"));
    link.outward_issue = Some(Box::new(Issue::new("TEST-3")));

    let linked = link.linked().unwrap();
    assert_eq!(linked.direction, Direction::Inward);
    assert_eq!(linked.issue.key, "TEST-2");
}

#[test]
fn link_without_issue_does_not_resolve() {
    let link = IssueLink {
        link_type: blocks(),
        ..IssueLink::default()
    };
    assert!(link.linked().is_none());
}

#[test]
fn direction_as_str() {
    assert_eq!(Direction::Inward.as_str(), "inward");
    assert_eq!(Direction::Outward.to_string(), "outward");
}

#[test]
fn link_decodes_from_api_shape() {
    let json = r#"{
        "type": { "name": "Relates", "inward": "relates to", "outward": "relates to" },
        "outwardIssue": { "key": "TEST-9", "fields": { "summary": "Other" } }
    }"#;
    let link: IssueLink = serde_json::from_str(json).unwrap();

    assert!(link.inward_issue.is_none());
    let linked = link.linked().unwrap();
    assert_eq!(linked.direction, Direction::Outward);
    assert_eq!(linked.issue.fields.summary, "Other");
}

#[test]
fn link_serializes_only_populated_side() {
    let link = IssueLink::inward(blocks(), Issue::new("TEST-2"));
    let json = serde_json::to_string(&link).unwrap();

    assert!(json.contains("\"inwardIssue\""));
    assert!(!json.contains("\"outwardIssue\""));
}
