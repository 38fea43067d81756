//! 160-bit hash identifier.

use crate::address;
use crate::error::{TypeError, TypeResult};
use crate::HASH160_SIZE;
use neo3_codec::{decode_hex, encode_hex};
use neo3_crypto::hash;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A 20-byte hash created by applying SHA-256 and then RIPEMD-160.
///
/// These hashes identify accounts and contracts (script hashes). The value is
/// stored in big-endian order; binary streams carry the byte-reversed
/// little-endian form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Hash160([u8; HASH160_SIZE]);

impl Hash160 {
    /// The zero-valued hash.
    pub fn zero() -> Self {
        Self([0u8; HASH160_SIZE])
    }

    /// Creates a hash from exactly 20 big-endian bytes.
    pub fn from_bytes(bytes: &[u8]) -> TypeResult<Self> {
        if bytes.len() != HASH160_SIZE {
            return Err(TypeError::InvalidLength {
                expected: HASH160_SIZE,
                actual: bytes.len(),
            });
        }
        let mut array = [0u8; HASH160_SIZE];
        array.copy_from_slice(bytes);
        Ok(Self(array))
    }

    /// Creates a hash from a 40-character big-endian hex string, with or
    /// without a `0x` prefix.
    pub fn from_hex(hex: &str) -> TypeResult<Self> {
        Self::from_bytes(&decode_hex(hex)?)
    }

    /// Creates a hash from exactly 20 little-endian (wire order) bytes.
    pub fn from_le_bytes(bytes: &[u8]) -> TypeResult<Self> {
        let mut hash = Self::from_bytes(bytes)?;
        hash.0.reverse();
        Ok(hash)
    }

    /// Computes the script hash of the given script bytes.
    ///
    /// The raw RIPEMD-160(SHA-256(script)) digest is the little-endian wire
    /// form; the stored value is its reversal.
    pub fn from_script(script: &[u8]) -> Self {
        let mut digest = hash::hash160(script);
        digest.reverse();
        Self(digest)
    }

    /// Derives the script hash encoded in the given address.
    pub fn from_address(address: &str, version: u8) -> TypeResult<Self> {
        address::address_to_script_hash(address, version)
    }

    /// The hash in big-endian order.
    pub fn as_bytes(&self) -> &[u8; HASH160_SIZE] {
        &self.0
    }

    /// The hash in little-endian (wire) order.
    pub fn to_le_bytes(&self) -> [u8; HASH160_SIZE] {
        let mut bytes = self.0;
        bytes.reverse();
        bytes
    }

    /// The hash as a big-endian hex string without prefix.
    pub fn to_hex(&self) -> String {
        encode_hex(&self.0)
    }

    /// The address corresponding to this script hash.
    pub fn to_address(&self, version: u8) -> String {
        address::script_hash_to_address(self, version)
    }

    /// The address corresponding to this script hash on the default network.
    pub fn to_address_default(&self) -> String {
        self.to_address(address::DEFAULT_ADDRESS_VERSION)
    }
}

impl fmt::Display for Hash160 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Serialize for Hash160 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Hash160 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex = String::deserialize(deserializer)?;
        Self::from_hex(&hex).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    const BE: [u8; 20] = hex!("23ba2703c53263e8d6e522dc32203339dcd8eee9");

    #[test]
    fn test_from_bytes_checks_length() {
        assert!(Hash160::from_bytes(&BE).is_ok());
        assert!(matches!(
            Hash160::from_bytes(&BE[..19]),
            Err(TypeError::InvalidLength {
                expected: 20,
                actual: 19
            })
        ));
    }

    #[test]
    fn test_hex_round_trip() {
        let hash = Hash160::from_hex("23ba2703c53263e8d6e522dc32203339dcd8eee9").unwrap();
        assert_eq!(hash.to_hex(), "23ba2703c53263e8d6e522dc32203339dcd8eee9");
        assert_eq!(Hash160::from_hex(&hash.to_hex()).unwrap(), hash);
        // 0x prefix is accepted.
        assert_eq!(
            Hash160::from_hex("0x23ba2703c53263e8d6e522dc32203339dcd8eee9").unwrap(),
            hash
        );
    }

    #[test]
    fn test_from_hex_rejects_bad_input() {
        assert!(Hash160::from_hex("23ba").is_err());
        assert!(Hash160::from_hex("wxyz2703c53263e8d6e522dc32203339dcd8eee9").is_err());
    }

    #[test]
    fn test_wire_order_is_reversed() {
        let hash = Hash160::from_bytes(&BE).unwrap();
        let le = hash.to_le_bytes();
        assert_eq!(le[0], BE[19]);
        assert_eq!(Hash160::from_le_bytes(&le).unwrap(), hash);
    }

    #[test]
    fn test_from_script() {
        // Verification script of a known public key; its raw digest is the
        // address payload, the stored form is the reversal.
        let script = hex!(
            "0c2102163946a133e3d2e0d987fb90cb01b060ed1780f1718e2da28edf13b965fd2b600b4195440d78"
        );
        let hash = Hash160::from_script(&script);
        assert_eq!(
            hash.to_hex(),
            "0f46dc4287b70117ce8354924b5cb3a47215ad93"
        );
        assert_eq!(
            hash.to_le_bytes().to_vec(),
            hex!("93ad1572a4b35c4b925483ce1701b78742dc460f").to_vec()
        );
    }

    #[test]
    fn test_ordering_is_big_endian_numeric() {
        let small = Hash160::from_hex("0000000000000000000000000000000000000001").unwrap();
        let large = Hash160::from_hex("0100000000000000000000000000000000000000").unwrap();
        assert!(small < large);
        assert!(Hash160::zero() < small);
    }

    #[test]
    fn test_serde_round_trip() {
        let hash = Hash160::from_bytes(&BE).unwrap();
        let json = serde_json::to_string(&hash).unwrap();
        assert_eq!(json, "\"23ba2703c53263e8d6e522dc32203339dcd8eee9\"");
        let back: Hash160 = serde_json::from_str(&json).unwrap();
        assert_eq!(back, hash);
    }
}
