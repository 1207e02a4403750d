//! Parser adapter.
//!
//! Wraps `dom_query` (html5ever) behind a fallible `parse` that enforces the
//! optional resource limits in [`Options`]. html5ever itself accepts any
//! input, so the only failures are limit violations.

pub use dom_query::{Document, NodeRef};

// Re-export StrTendril for callers working with text node data
pub use tendril::StrTendril;

use crate::error::{Error, Result};
use crate::options::Options;

/// Elements whose content is raw text rather than rendered markup.
pub const RAW_TEXT_TAGS: &[&str] = &["script", "style", "noscript"];

/// Parse an HTML document, rejecting input that exceeds the configured limits.
///
/// The size limit is checked before parsing and the depth limit on the
/// finished tree. Both are skipped when unset.
///
/// # Errors
///
/// Returns [`Error::InputTooLarge`] or [`Error::TooDeep`].
pub fn parse(html: &str, options: &Options) -> Result<Document> {
    if let Some(max) = options.max_input_bytes {
        if html.len() > max {
            return Err(Error::InputTooLarge {
                len: html.len(),
                max,
            });
        }
    }

    let doc = Document::from(html);
    if let Some(max) = options.max_depth {
        if exceeds_depth(&doc.root(), max) {
            return Err(Error::TooDeep { max });
        }
    }
    Ok(doc)
}

/// Whether any node below `root` sits more than `max` levels beneath it.
#[must_use]
pub fn exceeds_depth(root: &NodeRef, max: usize) -> bool {
    let mut stack = Vec::new();
    if let Some(child) = root.first_child() {
        stack.push((child, 1));
    }

    while let Some((node, depth)) = stack.pop() {
        if depth > max {
            return true;
        }
        if let Some(next) = node.next_sibling() {
            stack.push((next, depth));
        }
        if let Some(child) = node.first_child() {
            stack.push((child, depth + 1));
        }
    }
    false
}

/// Whether `node` is a `script`, `style` or `noscript` element.
#[must_use]
pub fn is_raw_text_element(node: &NodeRef) -> bool {
    node.is_element()
        && node
            .node_name()
            .is_some_and(|tag| RAW_TEXT_TAGS.iter().any(|t| tag.eq_ignore_ascii_case(t)))
}
