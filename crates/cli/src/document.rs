// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Render a document tree to Markdown-flavoured text.
//!
//! Block nodes end with exactly one line break. Text marks wrap the literal
//! text innermost-first in the order they are listed; a link always wraps
//! last so `[**text**](url)` comes out for bold link text. Node kinds the
//! renderer does not support are skipped and contribute nothing.

use iv_core::document::{Document, Mark, Node};

/// Render a whole document. An empty document renders to the empty string.
pub fn render_document(doc: &Document) -> String {
    let mut out = String::new();
    Renderer::default().blocks(&doc.content, &mut out);
    out
}

/// Render a single node (and its subtree).
pub fn render_node(node: &Node) -> String {
    let mut out = String::new();
    Renderer::default().block(node, &mut out);
    out
}

/// Wrap `text` according to its marks.
pub fn apply_marks(text: &str, marks: &[Mark]) -> String {
    let mut out = text.to_string();
    let mut href = None;

    for mark in marks {
        match mark {
            Mark::Strong => out = format!("**{out}**"),
            Mark::Em => out = format!("_{out}_"),
            Mark::Code => out = format!("`{out}`"),
            Mark::Strike => out = format!("~~{out}~~"),
            Mark::Link { attrs } => href = Some(attrs.href.as_str()),
            Mark::Unknown => {}
        }
    }

    match href {
        Some(href) => format!("[{out}]({href})"),
        None => out,
    }
}

#[derive(Debug, Clone, Copy)]
enum ListStyle {
    Bullet,
    Ordered(u32),
}

/// Walks the tree; `depth` is the list nesting level of the current position.
#[derive(Debug, Default, Clone, Copy)]
struct Renderer {
    depth: usize,
}

impl Renderer {
    fn blocks(&self, nodes: &[Node], out: &mut String) {
        for node in nodes {
            self.block(node, out);
        }
    }

    fn block(&self, node: &Node, out: &mut String) {
        match node {
            Node::Paragraph { content } => {
                self.inline(content, out);
                out.push('\n');
            }
            Node::Heading { attrs, content } => {
                let level = usize::from(attrs.level.clamp(1, 6));
                out.push_str(&"#".repeat(level));
                out.push(' ');
                self.inline(content, out);
                out.push('\n');
            }
            Node::BulletList { content } => self.list(content, ListStyle::Bullet, out),
            Node::OrderedList { attrs, content } => {
                self.list(content, ListStyle::Ordered(attrs.order.unwrap_or(1)), out)
            }
            // A list item outside a list renders as a bullet.
            Node::ListItem { content } => self.list_item(content, "- ", out),
            Node::Blockquote { content } => {
                let mut inner = String::new();
                self.blocks(content, &mut inner);
                for line in inner.lines() {
                    if line.is_empty() {
                        out.push_str(">\n");
                    } else {
                        out.push_str("> ");
                        out.push_str(line);
                        out.push('\n');
                    }
                }
            }
            Node::CodeBlock { attrs, content } => {
                out.push_str("```");
                out.push_str(attrs.language.as_deref().unwrap_or_default());
                out.push('\n');
                let code = raw_text(content);
                out.push_str(&code);
                if !code.is_empty() && !code.ends_with('\n') {
                    out.push('\n');
                }
                out.push_str("```\n");
            }
            Node::Rule => out.push_str("---\n"),
            Node::Text { .. } | Node::HardBreak | Node::Mention { .. } | Node::Emoji { .. } => {
                self.inline_node(node, out)
            }
            Node::Unknown => {}
        }
    }

    fn inline(&self, nodes: &[Node], out: &mut String) {
        for node in nodes {
            self.inline_node(node, out);
        }
    }

    fn inline_node(&self, node: &Node, out: &mut String) {
        match node {
            Node::Text { text, marks } => out.push_str(&apply_marks(text, marks)),
            Node::HardBreak => out.push('\n'),
            Node::Mention { attrs } => match attrs.text.as_deref() {
                Some(text) if !text.is_empty() => out.push_str(text),
                _ => {
                    out.push('@');
                    out.push_str(&attrs.id);
                }
            },
            Node::Emoji { attrs } => match attrs.text.as_deref() {
                Some(text) if !text.is_empty() => out.push_str(text),
                _ => out.push_str(&attrs.short_name),
            },
            // Block nodes are not valid inline content.
            _ => {}
        }
    }

    fn list(&self, items: &[Node], style: ListStyle, out: &mut String) {
        let mut number = match style {
            ListStyle::Bullet => 0,
            ListStyle::Ordered(start) => start,
        };

        for item in items {
            let Node::ListItem { content } = item else {
                continue;
            };
            let marker = match style {
                ListStyle::Bullet => "- ".to_string(),
                ListStyle::Ordered(_) => format!("{number}. "),
            };
            self.list_item(content, &marker, out);
            number += 1;
        }
    }

    /// First line of an item gets the marker, later lines align under its text.
    fn list_item(&self, content: &[Node], marker: &str, out: &mut String) {
        let indent = "  ".repeat(self.depth);
        let continuation = " ".repeat(marker.chars().count());
        let nested = Renderer {
            depth: self.depth + 1,
        };
        let mut marked = false;

        for child in content {
            if matches!(child, Node::BulletList { .. } | Node::OrderedList { .. }) {
                if !marked {
                    out.push_str(&indent);
                    out.push_str(marker.trim_end());
                    out.push('\n');
                    marked = true;
                }
                nested.block(child, out);
                continue;
            }

            let mut text = String::new();
            nested.block(child, &mut text);
            for line in text.lines() {
                out.push_str(&indent);
                if marked {
                    out.push_str(&continuation);
                } else {
                    out.push_str(marker);
                    marked = true;
                }
                out.push_str(line);
                out.push('\n');
            }
        }
    }
}

/// Concatenated literal text of a subtree, ignoring marks.
fn raw_text(nodes: &[Node]) -> String {
    let mut out = String::new();
    for node in nodes {
        match node {
            Node::Text { text, .. } => out.push_str(text),
            Node::HardBreak => out.push('\n'),
            other => out.push_str(&raw_text(other.children())),
        }
    }
    out
}

#[cfg(test)]
#[path = "document_tests.rs"]
mod tests;
