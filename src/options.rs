//! Configuration options for HTML to text conversion.
//!
//! The `Options` struct carries opt-in resource limits for untrusted input
//! and controls whether raw-text elements contribute to the output.

/// Configuration options for conversion.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings, which apply no limits.
///
/// # Example
///
/// ```rust
/// use html_plaintext::Options;
///
/// let options = Options {
///     skip_raw_text: true,
///     max_depth: Some(64),
///     ..Options::default()
/// };
/// assert_eq!(options.max_input_bytes, None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    /// Reject input longer than this many bytes without parsing it.
    ///
    /// Default: `None` (no limit)
    pub max_input_bytes: Option<usize>,

    /// Reject documents whose tree is nested deeper than this.
    ///
    /// The document node itself is depth zero. Conversion does not recurse,
    /// so this only bounds work, not stack usage.
    ///
    /// Default: `None` (no limit)
    pub max_depth: Option<usize>,

    /// Drop text inside `script`, `style` and `noscript`.
    ///
    /// When `false`, their contents are extracted verbatim like any other
    /// text node, matching DOM `textContent`. `template` contents are never
    /// part of the tree walk, so they contribute nothing either way.
    ///
    /// Default: `false`
    pub skip_raw_text: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_apply_no_limits() {
        let options = Options::default();
        assert_eq!(options.max_input_bytes, None);
        assert_eq!(options.max_depth, None);
        assert!(!options.skip_raw_text);
    }

    #[test]
    fn test_struct_update_syntax() {
        let options = Options {
            skip_raw_text: true,
            ..Options::default()
        };
        assert!(options.skip_raw_text);
        assert_eq!(options.max_depth, None);
    }
}
