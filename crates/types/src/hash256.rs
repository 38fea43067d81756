//! 256-bit hash identifier.

use crate::error::{TypeError, TypeResult};
use crate::HASH256_SIZE;
use neo3_codec::{decode_hex, encode_hex};
use neo3_crypto::hash;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A 32-byte double-SHA-256 hash.
///
/// These hashes identify transactions and blocks. The value is stored in
/// big-endian order; binary streams carry the byte-reversed little-endian
/// form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Hash256([u8; HASH256_SIZE]);

impl Hash256 {
    /// The zero-valued hash.
    pub fn zero() -> Self {
        Self([0u8; HASH256_SIZE])
    }

    /// Creates a hash from exactly 32 big-endian bytes.
    pub fn from_bytes(bytes: &[u8]) -> TypeResult<Self> {
        if bytes.len() != HASH256_SIZE {
            return Err(TypeError::InvalidLength {
                expected: HASH256_SIZE,
                actual: bytes.len(),
            });
        }
        let mut array = [0u8; HASH256_SIZE];
        array.copy_from_slice(bytes);
        Ok(Self(array))
    }

    /// Creates a hash from a 64-character big-endian hex string, with or
    /// without a `0x` prefix.
    pub fn from_hex(hex: &str) -> TypeResult<Self> {
        Self::from_bytes(&decode_hex(hex)?)
    }

    /// Creates a hash from exactly 32 little-endian (wire order) bytes.
    pub fn from_le_bytes(bytes: &[u8]) -> TypeResult<Self> {
        let mut hash = Self::from_bytes(bytes)?;
        hash.0.reverse();
        Ok(hash)
    }

    /// Computes the double SHA-256 of the given data.
    pub fn from_data(data: &[u8]) -> Self {
        Self(hash::hash256(data))
    }

    /// The hash in big-endian order.
    pub fn as_bytes(&self) -> &[u8; HASH256_SIZE] {
        &self.0
    }

    /// The hash in little-endian (wire) order.
    pub fn to_le_bytes(&self) -> [u8; HASH256_SIZE] {
        let mut bytes = self.0;
        bytes.reverse();
        bytes
    }

    /// The hash as a big-endian hex string without prefix.
    pub fn to_hex(&self) -> String {
        encode_hex(&self.0)
    }
}

impl fmt::Display for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Serialize for Hash256 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Hash256 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex = String::deserialize(deserializer)?;
        Self::from_hex(&hex).map_err(serde::de::Error::custom)
    }
}
