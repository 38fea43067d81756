//! Error types for cryptographic operations.

use thiserror::Error;

/// Result type for cryptographic operations.
pub type CryptoResult<T> = std::result::Result<T, CryptoError>;

/// Errors produced by key handling, signing and the WIF codec.
#[derive(Error, Debug)]
pub enum CryptoError {
    /// A key, signature or digest had the wrong length.
    #[error("invalid length: expected {expected} bytes but got {actual}")]
    InvalidLength {
        /// Expected byte count.
        expected: usize,
        /// Actual byte count.
        actual: usize,
    },

    /// A private-key scalar was out of range for the curve.
    #[error("invalid private key: {0}")]
    InvalidPrivateKey(String),

    /// A public-key encoding did not describe a point on the curve.
    #[error("invalid public key: {0}")]
    InvalidPublicKey(String),

    /// A signature could not be produced or parsed.
    #[error("invalid signature: {0}")]
    InvalidSignature(String),

    /// The recovery id did not yield the signer's public key.
    #[error("could not recover a public key from the signature")]
    RecoveryFailed,

    /// A WIF string failed one of its structural checks.
    #[error("invalid WIF: {0}")]
    InvalidWif(String),

    /// A base-58 string failed to decode or its checksum did not match.
    #[error("invalid base-58 data: {0}")]
    InvalidBase58(String),

    /// Hex decoding failed.
    #[error(transparent)]
    Codec(#[from] neo3_codec::CodecError),
}
