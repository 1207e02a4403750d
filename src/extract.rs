//! Text extraction core.
//!
//! One tree walker serves all three output shapes. The `Join` strategy
//! decides how child text is combined; comment and raw-text filtering is
//! shared so every mode agrees on which nodes contribute text.

use crate::dom::{self, NodeRef, StrTendril};
use crate::error::Result;
use crate::options::Options;
use crate::patterns::{BLANK_LINE_RUN, BOUNDARY, BOUNDARY_TAG, LINE_INDENT};

/// How the text of sibling nodes is combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Join {
    /// Concatenate child text as-is (`textContent`).
    Verbatim,
    /// Trim each child's text and append non-empty results followed by a space.
    Spaced,
}

/// Textual content of `node` and its descendants.
///
/// Text nodes yield their data verbatim under either strategy. Comments,
/// doctypes and processing instructions yield nothing. The walk keeps its
/// own stack, so nesting depth is bounded by memory rather than call depth.
#[must_use]
pub fn node_text(node: &NodeRef, join: Join, options: &Options) -> String {
    if node.is_text() {
        let data: StrTendril = node.text();
        return data.to_string();
    }
    if !contributes(node, options) {
        return String::new();
    }
    match join {
        Join::Verbatim => verbatim_text(node, options),
        Join::Spaced => spaced_text(node, options),
    }
}

fn contributes(node: &NodeRef, options: &Options) -> bool {
    !node.is_comment() && !(options.skip_raw_text && dom::is_raw_text_element(node))
}

fn verbatim_text(root: &NodeRef, options: &Options) -> String {
    let mut out = String::new();
    let mut stack = Vec::new();
    if let Some(child) = root.first_child() {
        stack.push(child);
    }

    // Siblings go on the stack before children so children pop first.
    while let Some(node) = stack.pop() {
        if let Some(next) = node.next_sibling() {
            stack.push(next);
        }
        if node.is_text() {
            let data: StrTendril = node.text();
            out.push_str(&data);
        } else if contributes(&node, options) {
            if let Some(child) = node.first_child() {
                stack.push(child);
            }
        }
    }
    out
}

/// An element whose children are still being joined.
struct Frame<'a> {
    next: Option<NodeRef<'a>>,
    out: String,
}

fn spaced_text(root: &NodeRef, options: &Options) -> String {
    let mut result = String::new();
    let mut stack = vec![Frame {
        next: root.first_child(),
        out: String::new(),
    }];

    while let Some(frame) = stack.last_mut() {
        if let Some(child) = frame.next.take() {
            frame.next = child.next_sibling();
            if child.is_text() {
                let data: StrTendril = child.text();
                push_spaced(&mut frame.out, &data);
            } else if contributes(&child, options) {
                stack.push(Frame {
                    next: child.first_child(),
                    out: String::new(),
                });
            }
        } else if let Some(done) = stack.pop() {
            match stack.last_mut() {
                Some(parent) => push_spaced(&mut parent.out, &done.out),
                None => result = done.out,
            }
        }
    }
    result
}

fn push_spaced(out: &mut String, text: &str) {
    let text = text.trim();
    if !text.is_empty() {
        out.push_str(text);
        out.push(' ');
    }
}

/// Plain text with markup removed and whitespace kept as authored.
///
/// # Errors
///
/// Returns an error if the input violates the limits in `options`.
pub fn extract_text(html: &str, options: &Options) -> Result<String> {
    let doc = dom::parse(html, options)?;
    Ok(node_text(&doc.root(), Join::Verbatim, options))
}

/// Visible text flattened onto a single line.
///
/// # Errors
///
/// Returns an error if the input violates the limits in `options`.
pub fn extract_line(html: &str, options: &Options) -> Result<String> {
    let doc = dom::parse(html, options)?;
    let text = node_text(&doc.root(), Join::Spaced, options);
    Ok(text.trim().to_string())
}

/// Multi-line text approximating the paragraph structure of `html`.
///
/// Line-break and paragraph tags are replaced by line breaks in the raw
/// markup before parsing; the result is then de-indented and runs of blank
/// lines are collapsed to one.
///
/// # Errors
///
/// Returns an error if the marked-up input violates the limits in `options`.
pub fn extract_document(html: &str, options: &Options) -> Result<String> {
    let marked = mark_boundaries(html);

    // Boundary marking can leave nothing but line breaks behind.
    let text = if marked.trim().is_empty() {
        marked
    } else {
        extract_text(&marked, options)?
    };

    let text = LINE_INDENT.replace_all(&text, "");
    Ok(BLANK_LINE_RUN.replace_all(&text, "\n\n").into_owned())
}

/// Replace every line-break and paragraph tag with `\r\n`.
#[must_use]
pub fn mark_boundaries(html: &str) -> String {
    BOUNDARY_TAG.replace_all(html, BOUNDARY).into_owned()
}
