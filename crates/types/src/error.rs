//! Error types for the typed value layer.

use thiserror::Error;

/// Result type for typed value operations.
pub type TypeResult<T> = std::result::Result<T, TypeError>;

/// Errors produced by hash identifiers, the address codec and contract
/// parameters.
#[derive(Error, Debug)]
pub enum TypeError {
    /// A fixed-length value had the wrong number of bytes.
    #[error("invalid length: expected {expected} bytes but got {actual}")]
    InvalidLength {
        /// Expected byte count.
        expected: usize,
        /// Actual byte count.
        actual: usize,
    },

    /// An address failed one of its structural checks.
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    /// A parameter type is not handled by the requested format.
    #[error("parameter type '{0}' is not supported here")]
    UnsupportedParameterType(String),

    /// A parameter value did not satisfy its constructor's constraints.
    #[error("invalid parameter value: {0}")]
    InvalidParameterValue(String),

    /// Hex or numeric decoding failed.
    #[error(transparent)]
    Codec(#[from] neo3_codec::CodecError),

    /// Key material embedded in a parameter was invalid.
    #[error(transparent)]
    Crypto(#[from] neo3_crypto::CryptoError),
}
