//! # html-plaintext
//!
//! Converts HTML markup into plain text for places where markup is
//! unwanted: notification previews, search snippets, log lines.
//!
//! ## Quick Start
//!
//! ```rust
//! use html_plaintext::{to_document, to_line, to_text};
//!
//! let html = "<p>Hello\n\n</p><p>World</p>";
//!
//! assert_eq!(to_text(html), "Hello\n\nWorld");
//! assert_eq!(to_line(html), "Hello World");
//! assert_eq!(to_document(html), "Hello\n\nWorld\n");
//! ```
//!
//! ## Output shapes
//!
//! - [`to_text`]: text content with whitespace kept exactly as authored
//! - [`to_line`]: one line, with block and inline text joined by single spaces
//! - [`to_document`]: multi-line text rebuilt from `<p>` and `<br>` tags
//!
//! All three are total: blank input is returned unchanged, and input that
//! cannot be parsed yields `could not parse document: <reason>` rather than
//! the input itself, so callers never receive unstripped markup.

mod error;
mod extract;
mod patterns;

/// Configuration options (resource limits, raw-text policy).
pub mod options;

/// Parser adapter over `dom_query` with resource limits.
pub mod dom;

pub use error::{Error, Result};
pub use extract::{node_text, Join};
pub use options::Options;

/// Prefix of the string returned when the input cannot be parsed.
pub const PARSE_FAILURE_PREFIX: &str = "could not parse document: ";

/// Removes HTML tags, keeping text content verbatim.
///
/// Best suited to short strings (a line or less); use [`to_document`] for
/// longer text with paragraphs.
///
/// # Example
///
/// ```rust
/// use html_plaintext::to_text;
///
/// assert_eq!(to_text("<b>Hi!</b> <!-- note -->there"), "Hi! there");
/// ```
#[must_use]
pub fn to_text(html: &str) -> String {
    to_text_with_options(html, &Options::default())
}

/// Removes HTML tags with custom options.
#[must_use]
pub fn to_text_with_options(html: &str, options: &Options) -> String {
    convert(html, options, extract::extract_text)
}

/// Like [`to_text`], but collapses the result onto a single line.
///
/// # Example
///
/// ```rust
/// use html_plaintext::to_line;
///
/// let html = "<div>Hey Pat,</div><div>This is a test.</div>";
/// assert_eq!(to_line(html), "Hey Pat, This is a test.");
/// ```
#[must_use]
pub fn to_line(html: &str) -> String {
    to_line_with_options(html, &Options::default())
}

/// Single-line conversion with custom options.
#[must_use]
pub fn to_line_with_options(html: &str, options: &Options) -> String {
    convert(html, options, extract::extract_line)
}

/// Removes HTML tags and formats the text to stay readable.
///
/// `<p>` and `<br>` tags become line breaks, indentation is stripped from
/// every line, and at most one blank line separates blocks.
///
/// # Example
///
/// ```rust
/// use html_plaintext::to_document;
///
/// let html = "<p>Hello<br></p>World<br>asd<br/>";
/// assert_eq!(to_document(html), "Hello\n\nWorld\nasd\n");
/// ```
#[must_use]
pub fn to_document(html: &str) -> String {
    to_document_with_options(html, &Options::default())
}

/// Readable document conversion with custom options.
#[must_use]
pub fn to_document_with_options(html: &str, options: &Options) -> String {
    convert(html, options, extract::extract_document)
}

fn convert(html: &str, options: &Options, f: fn(&str, &Options) -> Result<String>) -> String {
    if html.trim().is_empty() {
        return html.to_string();
    }

    // Never fall back to the input: callers may treat the output as stripped.
    f(html, options).unwrap_or_else(|err| {
        tracing::debug!(error = %err, input_len = html.len(), "could not parse document");
        format!("{PARSE_FAILURE_PREFIX}{err}")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_input_is_returned_unchanged() {
        for blank in ["", " ", "\n\n", " \t\r\n "] {
            assert_eq!(to_text(blank), blank);
            assert_eq!(to_line(blank), blank);
            assert_eq!(to_document(blank), blank);
        }
    }

    #[test]
    fn test_failure_renders_diagnostic() {
        let options = Options {
            max_input_bytes: Some(4),
            ..Options::default()
        };
        let html = "<script>alert(1)</script>";
        let out = to_text_with_options(html, &options);
        assert_eq!(
            out,
            "could not parse document: input is 25 bytes, exceeding the limit of 4 bytes"
        );
        assert!(!out.contains(html));
    }

    #[test]
    fn test_document_failure_skips_normalization() {
        let options = Options {
            max_depth: Some(3),
            ..Options::default()
        };
        let out = to_document_with_options("<p><b><i>x</i></b></p>", &options);
        assert_eq!(out, "could not parse document: element nesting exceeds the maximum depth of 3");
    }
}
