//! Error types for the Tenet value model.
//!
//! Comparison itself never fails; errors only arise where values are built
//! from untrusted text or where a caller asks for a bounded comparison.

use thiserror::Error;

/// Result alias used throughout Tenet.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Tenet operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates a malformed number literal error.
    #[must_use]
    pub fn malformed_number(literal: impl Into<String>) -> Self {
        Self::new(ErrorKind::MalformedNumber {
            literal: literal.into(),
        })
    }

    /// Creates an error for a number whose decimal exponent is too large.
    #[must_use]
    pub fn exponent_out_of_range(literal: impl Into<String>, limit: u32) -> Self {
        Self::new(ErrorKind::ExponentOutOfRange {
            literal: literal.into(),
            limit,
        })
    }

    /// Creates a depth limit exceeded error.
    #[must_use]
    pub fn depth_limit_exceeded(limit: usize) -> Self {
        Self::new(ErrorKind::DepthLimitExceeded { limit })
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// Text is not a valid number literal.
    #[error("malformed number literal: {literal:?}")]
    MalformedNumber {
        /// The offending text.
        literal: String,
    },

    /// Number literal whose decimal exponent exceeds the supported magnitude.
    #[error("number literal {literal:?} has an exponent beyond ±{limit}")]
    ExponentOutOfRange {
        /// The offending text.
        literal: String,
        /// The largest accepted exponent magnitude.
        limit: u32,
    },

    /// An operand nests deeper than the configured comparison limit.
    #[error("value nesting exceeds the comparison depth limit of {limit}")]
    DepthLimitExceeded {
        /// The configured limit.
        limit: usize,
    },
}
