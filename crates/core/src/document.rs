// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rich-text document tree (Atlassian Document Format).
//!
//! Nodes are tagged on `type`. Kinds this crate does not know decode to
//! [`Node::Unknown`] and marks likewise to [`Mark::Unknown`], so a payload
//! using newer node kinds still decodes.

use serde::{Deserialize, Serialize};

/// Root of a rich-text body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Document {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(rename = "type", default = "default_doc_type")]
    pub doc_type: String,
    #[serde(default)]
    pub content: Vec<Node>,
}

fn default_version() -> u32 {
    1
}

fn default_doc_type() -> String {
    "doc".to_string()
}

impl Default for Document {
    fn default() -> Self {
        Document::new(Vec::new())
    }
}

impl Document {
    pub fn new(content: Vec<Node>) -> Self {
        Document {
            version: default_version(),
            doc_type: default_doc_type(),
            content,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// Heading attributes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct HeadingAttrs {
    /// 1 to 6; out-of-range levels are clamped when rendering.
    #[serde(default)]
    pub level: u8,
}

/// Ordered list attributes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct OrderedListAttrs {
    #[serde(default)]
    pub order: Option<u32>,
}

/// Code block attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct CodeBlockAttrs {
    #[serde(default)]
    pub language: Option<String>,
}

/// Mention attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct MentionAttrs {
    #[serde(default)]
    pub id: String,
    /// Display text, usually `@Name`.
    #[serde(default)]
    pub text: Option<String>,
}

/// Emoji attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct EmojiAttrs {
    #[serde(rename = "shortName", default)]
    pub short_name: String,
    #[serde(default)]
    pub text: Option<String>,
}

/// Link mark attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct LinkAttrs {
    #[serde(default)]
    pub href: String,
}

/// Formatting attribute attached to a text node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Mark {
    Strong,
    Em,
    Code,
    Strike,
    Link {
        #[serde(default)]
        attrs: LinkAttrs,
    },
    #[serde(other)]
    Unknown,
}

impl Mark {
    pub fn link(href: impl Into<String>) -> Self {
        Mark::Link {
            attrs: LinkAttrs { href: href.into() },
        }
    }
}

/// A node of the document tree.
///
/// Only [`Node::Text`] and the atom nodes ([`Node::Mention`], [`Node::Emoji`])
/// carry literal content; the others are containers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Node {
    Paragraph {
        #[serde(default)]
        content: Vec<Node>,
    },
    Heading {
        #[serde(default)]
        attrs: HeadingAttrs,
        #[serde(default)]
        content: Vec<Node>,
    },
    Text {
        #[serde(default)]
        text: String,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        marks: Vec<Mark>,
    },
    BulletList {
        #[serde(default)]
        content: Vec<Node>,
    },
    OrderedList {
        #[serde(default)]
        attrs: OrderedListAttrs,
        #[serde(default)]
        content: Vec<Node>,
    },
    ListItem {
        #[serde(default)]
        content: Vec<Node>,
    },
    Blockquote {
        #[serde(default)]
        content: Vec<Node>,
    },
    CodeBlock {
        #[serde(default)]
        attrs: CodeBlockAttrs,
        #[serde(default)]
        content: Vec<Node>,
    },
    Rule,
    HardBreak,
    Mention {
        #[serde(default)]
        attrs: MentionAttrs,
    },
    Emoji {
        #[serde(default)]
        attrs: EmojiAttrs,
    },
    #[serde(other)]
    Unknown,
}

impl Node {
    pub fn paragraph(content: Vec<Node>) -> Self {
        Node::Paragraph { content }
    }

    pub fn heading(level: u8, content: Vec<Node>) -> Self {
        Node::Heading {
            attrs: HeadingAttrs { level },
            content,
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Node::Text {
            text: text.into(),
            marks: Vec::new(),
        }
    }

    pub fn marked(text: impl Into<String>, marks: Vec<Mark>) -> Self {
        Node::Text {
            text: text.into(),
            marks,
        }
    }

    pub fn bullet_list(items: Vec<Node>) -> Self {
        Node::BulletList { content: items }
    }

    pub fn ordered_list(items: Vec<Node>) -> Self {
        Node::OrderedList {
            attrs: OrderedListAttrs::default(),
            content: items,
        }
    }

    pub fn list_item(content: Vec<Node>) -> Self {
        Node::ListItem { content }
    }

    /// Child nodes of a container; empty for leaves.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Paragraph { content }
            | Node::Heading { content, .. }
            | Node::BulletList { content }
            | Node::OrderedList { content, .. }
            | Node::ListItem { content }
            | Node::Blockquote { content }
            | Node::CodeBlock { content, .. } => content,
            Node::Text { .. }
            | Node::Rule
            | Node::HardBreak
            | Node::Mention { .. }
            | Node::Emoji { .. }
            | Node::Unknown => &[],
        }
    }
}

#[cfg(test)]
#[path = "document_tests.rs"]
mod tests;
