//! Elliptic-curve key pairs on secp256r1 (NIST P-256).

use crate::error::{CryptoError, CryptoResult};
use crate::wif;
use crate::{PRIVATE_KEY_SIZE, PUBLIC_KEY_SIZE_COMPRESSED};
use neo3_codec::{decode_hex, encode_hex};
use p256::elliptic_curve::rand_core::CryptoRngCore;
use p256::elliptic_curve::sec1::ToEncodedPoint;
use p256::{PublicKey, SecretKey};
use rand::rngs::OsRng;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A secp256r1 private key.
///
/// The scalar is held as 32 unsigned big-endian bytes and is overwritten with
/// zeros when the value is dropped or explicitly erased.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct ECPrivateKey {
    bytes: [u8; PRIVATE_KEY_SIZE],
}

impl ECPrivateKey {
    /// Creates a private key from 32 big-endian bytes.
    ///
    /// The bytes are interpreted as a positive integer, not two's complement,
    /// and must be a valid scalar for the curve.
    pub fn from_bytes(bytes: &[u8]) -> CryptoResult<Self> {
        if bytes.len() != PRIVATE_KEY_SIZE {
            return Err(CryptoError::InvalidLength {
                expected: PRIVATE_KEY_SIZE,
                actual: bytes.len(),
            });
        }
        // Range check against the curve order.
        SecretKey::from_slice(bytes)
            .map_err(|e| CryptoError::InvalidPrivateKey(e.to_string()))?;
        let mut array = [0u8; PRIVATE_KEY_SIZE];
        array.copy_from_slice(bytes);
        Ok(Self { bytes: array })
    }

    /// Creates a private key from a big-endian hex string.
    pub fn from_hex(hex: &str) -> CryptoResult<Self> {
        Self::from_bytes(&decode_hex(hex)?)
    }

    /// The key's 32 big-endian bytes.
    pub fn as_bytes(&self) -> &[u8; PRIVATE_KEY_SIZE] {
        &self.bytes
    }

    /// Overwrites the key material with zeros.
    ///
    /// After calling this the value no longer represents a valid scalar.
    pub fn erase(&mut self) {
        self.bytes.zeroize();
    }

    pub(crate) fn to_secret_key(&self) -> CryptoResult<SecretKey> {
        SecretKey::from_slice(&self.bytes)
            .map_err(|e| CryptoError::InvalidPrivateKey(e.to_string()))
    }
}

impl std::fmt::Debug for ECPrivateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print key material.
        write!(f, "ECPrivateKey(..)")
    }
}

/// A secp256r1 public key.
///
/// Equality compares curve points, so the same point parsed from compressed
/// and uncompressed encodings compares equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ECPublicKey {
    point: PublicKey,
}

impl ECPublicKey {
    /// Creates a public key from a SEC1 encoding, compressed (33 bytes) or
    /// uncompressed (65 bytes).
    pub fn from_encoded(bytes: &[u8]) -> CryptoResult<Self> {
        let point = PublicKey::from_sec1_bytes(bytes)
            .map_err(|e| CryptoError::InvalidPublicKey(e.to_string()))?;
        Ok(Self { point })
    }

    /// Creates a public key from a SEC1 encoding in hex.
    pub fn from_hex(hex: &str) -> CryptoResult<Self> {
        Self::from_encoded(&decode_hex(hex)?)
    }

    /// The SEC1 encoding of the point.
    pub fn encoded(&self, compressed: bool) -> Vec<u8> {
        self.point.to_encoded_point(compressed).as_bytes().to_vec()
    }

    /// The compressed SEC1 encoding, always 33 bytes.
    pub fn encoded_compressed(&self) -> [u8; PUBLIC_KEY_SIZE_COMPRESSED] {
        let encoded = self.point.to_encoded_point(true);
        let mut array = [0u8; PUBLIC_KEY_SIZE_COMPRESSED];
        array.copy_from_slice(encoded.as_bytes());
        array
    }

    /// The compressed SEC1 encoding as a hex string without prefix.
    pub fn encoded_compressed_hex(&self) -> String {
        encode_hex(&self.encoded_compressed())
    }

    pub(crate) fn as_point(&self) -> &PublicKey {
        &self.point
    }

    pub(crate) fn from_point(point: PublicKey) -> Self {
        Self { point }
    }
}

impl std::fmt::Display for ECPublicKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.encoded_compressed_hex())
    }
}

/// A secp256r1 key pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ECKeyPair {
    private_key: ECPrivateKey,
    public_key: ECPublicKey,
}

impl ECKeyPair {
    /// Creates a fresh key pair using the operating system's secure RNG.
    pub fn generate() -> Self {
        Self::generate_with_rng(&mut OsRng)
    }

    /// Creates a fresh key pair from the given RNG.
    ///
    /// Tests substitute a deterministic generator here; production callers
    /// use [`ECKeyPair::generate`].
    pub fn generate_with_rng(rng: &mut impl CryptoRngCore) -> Self {
        let secret = SecretKey::random(rng);
        let public = secret.public_key();
        let mut secret_bytes: [u8; PRIVATE_KEY_SIZE] = secret.to_bytes().into();
        let private_key = ECPrivateKey::from_bytes(&secret_bytes)
            .expect("freshly generated scalar is always in range");
        secret_bytes.zeroize();
        Self {
            private_key,
            public_key: ECPublicKey::from_point(public),
        }
    }

    /// Builds the key pair belonging to the given private key.
    pub fn from_private_key(private_key: ECPrivateKey) -> CryptoResult<Self> {
        let secret = private_key.to_secret_key()?;
        let public = secret.public_key();
        Ok(Self {
            private_key,
            public_key: ECPublicKey::from_point(public),
        })
    }

    /// Builds the key pair from 32 big-endian private-key bytes.
    pub fn from_private_key_bytes(bytes: &[u8]) -> CryptoResult<Self> {
        Self::from_private_key(ECPrivateKey::from_bytes(bytes)?)
    }

    /// Imports a key pair from a WIF string.
    pub fn from_wif(wif: &str) -> CryptoResult<Self> {
        let key_bytes = wif::private_key_from_wif(wif)?;
        Self::from_private_key_bytes(&key_bytes)
    }

    /// Exports the private key as a WIF string.
    pub fn export_as_wif(&self) -> String {
        wif::private_key_to_wif(self.private_key.as_bytes())
    }

    /// The private key.
    pub fn private_key(&self) -> &ECPrivateKey {
        &self.private_key
    }

    /// The public key.
    pub fn public_key(&self) -> &ECPublicKey {
        &self.public_key
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    const PRIVATE_KEY: [u8; 32] =
        hex!("09c2686880095b1a4c249ee3ac4eea8a014f11e6f986d0b5025ac1f39afbd9ae");
    const PUBLIC_KEY: [u8; 33] =
        hex!("02f5216539e101885cded09778cd720e5594260bcbf033f09dbd7d1f64478e2a9d");

    #[test]
    fn test_public_key_derivation() {
        let pair = ECKeyPair::from_private_key_bytes(&PRIVATE_KEY).unwrap();
        assert_eq!(pair.public_key().encoded_compressed(), PUBLIC_KEY);
    }

    #[test]
    fn test_public_key_equality_is_by_point() {
        let compressed = ECPublicKey::from_encoded(&PUBLIC_KEY).unwrap();
        let uncompressed =
            ECPublicKey::from_encoded(&compressed.encoded(false)).unwrap();
        assert_eq!(compressed, uncompressed);
        assert_eq!(uncompressed.encoded_compressed(), PUBLIC_KEY);
    }

    #[test]
    fn test_private_key_length_check() {
        assert!(matches!(
            ECPrivateKey::from_bytes(&[1u8; 31]),
            Err(CryptoError::InvalidLength {
                expected: 32,
                actual: 31
            })
        ));
    }

    #[test]
    fn test_invalid_public_key_rejected() {
        let mut bad = PUBLIC_KEY;
        bad[0] = 0x05;
        assert!(ECPublicKey::from_encoded(&bad).is_err());
        assert!(ECPublicKey::from_encoded(&PUBLIC_KEY[..32]).is_err());
    }

    #[test]
    fn test_generate_produces_distinct_keys() {
        let a = ECKeyPair::generate();
        let b = ECKeyPair::generate();
        assert_ne!(a.private_key().as_bytes(), b.private_key().as_bytes());
    }

    #[test]
    fn test_erase_zeroes_material() {
        let mut key = ECPrivateKey::from_bytes(&PRIVATE_KEY).unwrap();
        key.erase();
        assert_eq!(key.as_bytes(), &[0u8; 32]);
    }
}
