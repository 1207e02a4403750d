//! Compiled regex patterns for document reconstruction.
//!
//! All patterns are compiled once on first use with `LazyLock` and are
//! read-only afterwards.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

/// Line-break and paragraph tags in raw markup: `<br>`, `<br/>`, `<br />`,
/// `</br>`, `<p>` and `</p>`, in any ASCII case. Tags carrying attributes
/// are not matched, and only ASCII whitespace may precede the slash.
pub static BOUNDARY_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)</?(?:br[\t\n\x0C\r ]?/?|p)>").expect("BOUNDARY_TAG regex")
});

/// Leading spaces and tabs on every line.
pub static LINE_INDENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]+").expect("LINE_INDENT regex"));

/// Three or more consecutive newlines.
pub static BLANK_LINE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("BLANK_LINE_RUN regex"));

/// Line break injected in place of each boundary tag.
pub const BOUNDARY: &str = "\r\n";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_tag_variants() {
        for tag in ["<br>", "<br/>", "<br />", "</br>", "<p>", "</p>", "<BR>", "</P>", "<br\t/>"] {
            assert!(BOUNDARY_TAG.is_match(tag), "should match {tag}");
        }
    }

    #[test]
    fn test_boundary_tag_ignores_other_tags() {
        for tag in ["<pre>", "<b>", "<p class=\"x\">", "<br  />", "<span>", "<param>", "<br\u{a0}>"] {
            assert!(!BOUNDARY_TAG.is_match(tag), "should not match {tag}");
        }
    }

    #[test]
    fn test_boundary_replacement() {
        let out = BOUNDARY_TAG.replace_all("<p>a<br>b</p>", BOUNDARY);
        assert_eq!(out, "\r\na\r\nb\r\n");
    }

    #[test]
    fn test_line_indent_is_multiline() {
        assert_eq!(LINE_INDENT.replace_all("  a\n\t b\nc ", ""), "a\nb\nc ");
    }

    #[test]
    fn test_blank_line_run() {
        assert_eq!(BLANK_LINE_RUN.replace_all("a\n\n\n\nb\n\nc", "\n\n"), "a\n\nb\n\nc");
    }
}
