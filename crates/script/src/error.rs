//! Error types for script construction and analysis.

use thiserror::Error;

/// Result type for script operations.
pub type ScriptResult<T> = std::result::Result<T, ScriptError>;

/// Errors produced while building or analyzing scripts.
#[derive(Error, Debug)]
pub enum ScriptError {
    /// A multi-sig threshold/key-count combination is out of range.
    #[error("invalid signing threshold {threshold} for {keys} keys")]
    InvalidThreshold {
        /// Requested minimum number of signatures.
        threshold: usize,
        /// Number of participating keys.
        keys: usize,
    },

    /// A parameter type cannot be expressed as a script push.
    #[error("parameter type '{0}' cannot be pushed onto the stack")]
    UnsupportedParameterType(String),

    /// Script bytes do not match the expected verification-script format.
    #[error("invalid script format: {0}")]
    InvalidScriptFormat(String),

    /// Key or signature handling failed.
    #[error(transparent)]
    Crypto(#[from] neo3_crypto::CryptoError),
}
