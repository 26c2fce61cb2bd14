// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Convert legacy wiki markup to Markdown-flavoured text.
//!
//! Produces the same text the document renderer emits for equivalent
//! content, without building a tree: one left-to-right pass over the lines,
//! blank lines dropped, every emitted block ending in one line break.
//! Malformed or unterminated tokens pass through literally.

use regex::Regex;
use std::str::Lines;
use std::sync::LazyLock;

// Pre-compiled line patterns. These are hard-coded and known-valid.
static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| match Regex::new(r"^h([1-6])\.\s*(.*)$") {
    Ok(re) => re,
    Err(_) => unreachable!("static regex pattern"),
});
static QUOTE_RE: LazyLock<Regex> = LazyLock::new(|| match Regex::new(r"^bq\.\s*(.*)$") {
    Ok(re) => re,
    Err(_) => unreachable!("static regex pattern"),
});
static LIST_RE: LazyLock<Regex> = LazyLock::new(|| match Regex::new(r"^([*#]+)\s+(.*)$") {
    Ok(re) => re,
    Err(_) => unreachable!("static regex pattern"),
});
static RULE_RE: LazyLock<Regex> = LazyLock::new(|| match Regex::new(r"^-{4,}\s*$") {
    Ok(re) => re,
    Err(_) => unreachable!("static regex pattern"),
});
static CODE_RE: LazyLock<Regex> =
    LazyLock::new(
        || match Regex::new(r"^\{(code|noformat)(?::([^}]*))?\}(.*)$") {
            Ok(re) => re,
            Err(_) => unreachable!("static regex pattern"),
        },
    );

/// Convert a markup string. Empty input converts to the empty string.
pub fn render_markup(markup: &str) -> String {
    let mut out = String::with_capacity(markup.len() + 16);
    // Running numbers of `#` lists, one slot per nesting level.
    let mut ordered: Vec<u32> = Vec::new();
    let mut lines = markup.lines();

    while let Some(raw) = lines.next() {
        let line = raw.trim_start();
        if line.trim_end().is_empty() {
            ordered.clear();
            continue;
        }

        if let Some(caps) = CODE_RE.captures(line) {
            ordered.clear();
            let kind = caps.get(1).map_or("code", |m| m.as_str());
            let lang = caps.get(2).map_or("", |m| m.as_str());
            let rest = caps.get(3).map_or("", |m| m.as_str());
            code_block(kind, lang, rest, &mut lines, &mut out);
            continue;
        }

        if let Some(caps) = LIST_RE.captures(line) {
            let markers = caps.get(1).map_or("", |m| m.as_str());
            let text = caps.get(2).map_or("", |m| m.as_str());
            let depth = markers.len();
            ordered.resize(depth, 0);

            out.push_str(&"  ".repeat(depth.saturating_sub(1)));
            if let Some(n) = ordered.last_mut() {
                if markers.ends_with('#') {
                    *n += 1;
                    out.push_str(&format!("{n}. "));
                } else {
                    *n = 0;
                    out.push_str("- ");
                }
            }
            out.push_str(&render_inline(text));
            out.push('\n');
            continue;
        }
        ordered.clear();

        if let Some(caps) = HEADING_RE.captures(line) {
            let level = caps
                .get(1)
                .and_then(|m| m.as_str().parse::<usize>().ok())
                .unwrap_or(1);
            out.push_str(&"#".repeat(level));
            out.push(' ');
            out.push_str(&render_inline(caps.get(2).map_or("", |m| m.as_str())));
        } else if let Some(caps) = QUOTE_RE.captures(line) {
            out.push_str("> ");
            out.push_str(&render_inline(caps.get(1).map_or("", |m| m.as_str())));
        } else if RULE_RE.is_match(line) {
            out.push_str("---");
        } else {
            out.push_str(&render_inline(raw));
        }
        out.push('\n');
    }

    out
}

/// Emit a fenced block, consuming lines up to the closing token. An
/// unterminated block runs to the end of the input.
fn code_block(kind: &str, lang: &str, rest: &str, lines: &mut Lines<'_>, out: &mut String) {
    let closing = format!("{{{kind}}}");

    out.push_str("```");
    out.push_str(lang);
    out.push('\n');

    if let Some(pos) = rest.find(&closing) {
        push_code_line(&rest[..pos], out);
        out.push_str("```\n");
        return;
    }
    push_code_line(rest, out);

    for raw in lines.by_ref() {
        if let Some(pos) = raw.find(&closing) {
            push_code_line(&raw[..pos], out);
            break;
        }
        out.push_str(raw);
        out.push('\n');
    }
    out.push_str("```\n");
}

fn push_code_line(code: &str, out: &mut String) {
    if !code.trim().is_empty() {
        out.push_str(code);
        out.push('\n');
    }
}

/// Convert inline tokens of a single line.
///
/// - `*text*` → `**text**`
/// - `_text_` → unchanged
/// - `[label|url]` → `[label](url)`, `[url]` → `[url](url)`, `[~user]` → `@user`
/// - `{{text}}` → `` `text` ``
pub fn render_inline(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 8);
    let mut rest = text;

    while let Some(c) = rest.chars().next() {
        match c {
            '*' => {
                if let Some((inner, after)) = delimited(rest, "*", "*") {
                    out.push_str("**");
                    out.push_str(&render_inline(inner));
                    out.push_str("**");
                    rest = after;
                    continue;
                }
            }
            '[' => {
                if let Some((inner, after)) = delimited(rest, "[", "]") {
                    push_link(inner, &mut out);
                    rest = after;
                    continue;
                }
            }
            '{' => {
                if let Some((inner, after)) = delimited(rest, "{{", "}}") {
                    out.push('`');
                    out.push_str(inner);
                    out.push('`');
                    rest = after;
                    continue;
                }
            }
            _ => {}
        }
        out.push(c);
        rest = &rest[c.len_utf8()..];
    }

    out
}

/// Split `s` (which starts with `open`) into the enclosed text and the
/// remainder. The enclosed text must be non-empty and not padded with
/// whitespace.
fn delimited<'a>(s: &'a str, open: &str, close: &str) -> Option<(&'a str, &'a str)> {
    let body = s.strip_prefix(open)?;
    let end = body.find(close)?;
    let inner = &body[..end];
    if inner.is_empty()
        || inner.starts_with(char::is_whitespace)
        || inner.ends_with(char::is_whitespace)
    {
        return None;
    }
    Some((inner, &body[end + close.len()..]))
}

fn push_link(inner: &str, out: &mut String) {
    if let Some(user) = inner.strip_prefix('~') {
        out.push('@');
        out.push_str(user);
        return;
    }

    let (label, url) = match inner.split_once('|') {
        Some((label, url)) => (label, url),
        None => (inner, inner),
    };
    out.push('[');
    out.push_str(&render_inline(label));
    out.push_str("](");
    out.push_str(url);
    out.push(')');
}

#[cfg(test)]
#[path = "markup_tests.rs"]
mod tests;
