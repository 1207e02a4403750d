//! Error types for html-plaintext.
//!
//! Every variant is a parse failure from the caller's point of view. The
//! public conversion functions never return these directly; they render
//! them into a diagnostic string instead.

/// Error type for parsing operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Input is longer than `Options::max_input_bytes`.
    #[error("input is {len} bytes, exceeding the limit of {max} bytes")]
    InputTooLarge {
        /// Length of the rejected input in bytes.
        len: usize,
        /// Configured limit.
        max: usize,
    },

    /// Parsed tree is nested deeper than `Options::max_depth`.
    #[error("element nesting exceeds the maximum depth of {max}")]
    TooDeep {
        /// Configured limit.
        max: usize,
    },
}

/// Result type alias for parsing operations.
pub type Result<T> = std::result::Result<T, Error>;
