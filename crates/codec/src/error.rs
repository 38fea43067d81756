//! Error types for codec operations.

use thiserror::Error;

/// Result type for codec operations.
pub type CodecResult<T> = std::result::Result<T, CodecError>;

/// Errors produced by the byte and numeric codecs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The input string is not valid hexadecimal.
    #[error("invalid hex string: {0}")]
    InvalidHex(String),

    /// Two arrays that must have equal length do not.
    #[error("arrays have different lengths: {0} and {1}")]
    LengthMismatch(usize, usize),

    /// An integer does not fit into the requested fixed-width encoding.
    #[error("integer needs {needed} bytes but only {available} are available")]
    Overflow {
        /// Bytes the value actually requires.
        needed: usize,
        /// Bytes the caller allowed.
        available: usize,
    },

    /// A negative value was passed to an unsigned encoding.
    #[error("negative value cannot be encoded as an unsigned integer")]
    NegativeUnsigned,
}
