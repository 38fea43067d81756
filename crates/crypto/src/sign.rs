//! Deterministic ECDSA signing.
//!
//! Signatures use an HMAC-SHA-256 derived per-message nonce (RFC 6979), so
//! signing the same hash with the same key always yields the same signature.
//! The wire form is the fixed-width 64-byte `r ‖ s` concatenation with both
//! components zero-padded to 32 bytes; the recovery byte `v` travels
//! separately.

use crate::error::{CryptoError, CryptoResult};
use crate::hash::sha256;
use crate::key_pair::{ECKeyPair, ECPublicKey};
use crate::SIGNATURE_SIZE;
use ecdsa::RecoveryId;
use p256::ecdsa::signature::hazmat::PrehashVerifier;
use p256::ecdsa::{Signature, SigningKey, VerifyingKey};
use p256::PublicKey;

const RECOVERY_BASE: u8 = 27;

/// An ECDSA signature split into its components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureData {
    v: u8,
    r: [u8; 32],
    s: [u8; 32],
}

impl SignatureData {
    /// Creates a signature from its components.
    pub fn new(v: u8, r: [u8; 32], s: [u8; 32]) -> Self {
        Self { v, r, s }
    }

    /// Parses a signature from its 64-byte `r ‖ s` form (`v` is set to 0) or
    /// its 65-byte `v ‖ r ‖ s` form.
    pub fn from_bytes(bytes: &[u8]) -> CryptoResult<Self> {
        let (v, rs) = match bytes.len() {
            SIGNATURE_SIZE => (0, bytes),
            65 => (bytes[0], &bytes[1..]),
            actual => {
                return Err(CryptoError::InvalidLength {
                    expected: SIGNATURE_SIZE,
                    actual,
                })
            }
        };
        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&rs[..32]);
        s.copy_from_slice(&rs[32..]);
        Ok(Self { v, r, s })
    }

    /// The recovery byte.
    pub fn v(&self) -> u8 {
        self.v
    }

    /// The `r` component, zero-padded to 32 bytes.
    pub fn r(&self) -> &[u8; 32] {
        &self.r
    }

    /// The `s` component, zero-padded to 32 bytes.
    pub fn s(&self) -> &[u8; 32] {
        &self.s
    }

    /// The canonical 64-byte `r ‖ s` form.
    pub fn concatenated(&self) -> [u8; SIGNATURE_SIZE] {
        let mut out = [0u8; SIGNATURE_SIZE];
        out[..32].copy_from_slice(&self.r);
        out[32..].copy_from_slice(&self.s);
        out
    }
}

impl ECKeyPair {
    /// Signs a 32-byte message hash with this key pair's private key.
    ///
    /// The nonce is derived deterministically from the hash and the key.
    pub fn sign(&self, message_hash: &[u8]) -> CryptoResult<SignatureData> {
        if message_hash.len() != 32 {
            return Err(CryptoError::InvalidLength {
                expected: 32,
                actual: message_hash.len(),
            });
        }
        let signing_key = SigningKey::from(self.private_key().to_secret_key()?);
        let (signature, recovery_id) = signing_key
            .sign_prehash_recoverable(message_hash)
            .map_err(|e| CryptoError::InvalidSignature(e.to_string()))?;
        let (r, s) = signature.split_bytes();
        Ok(SignatureData::new(
            RECOVERY_BASE + recovery_id.to_byte(),
            r.into(),
            s.into(),
        ))
    }
}

/// Signs the SHA-256 hash of the given message.
pub fn sign_message(message: &[u8], key_pair: &ECKeyPair) -> CryptoResult<SignatureData> {
    key_pair.sign(&sha256(message))
}

/// Signs a message hash directly, without hashing it again.
pub fn sign_hash(message_hash: &[u8], key_pair: &ECKeyPair) -> CryptoResult<SignatureData> {
    key_pair.sign(message_hash)
}

/// Verifies a signature over the SHA-256 hash of the given message.
pub fn verify_signature(
    message: &[u8],
    signature: &SignatureData,
    public_key: &ECPublicKey,
) -> bool {
    let hash = sha256(message);
    let sig = match Signature::from_scalars(*signature.r(), *signature.s()) {
        Ok(sig) => sig,
        Err(_) => return false,
    };
    let verifying_key = VerifyingKey::from(*public_key.as_point());
    verifying_key.verify_prehash(&hash, &sig).is_ok()
}

/// Recovers the public key that produced the given signature over the SHA-256
/// hash of the message, using the signature's recovery byte.
pub fn signed_message_to_key(
    message: &[u8],
    signature: &SignatureData,
) -> CryptoResult<ECPublicKey> {
    let hash = sha256(message);
    let v = signature.v();
    let rec = if v >= RECOVERY_BASE { v - RECOVERY_BASE } else { v };
    let recovery_id =
        RecoveryId::from_byte(rec).ok_or(CryptoError::RecoveryFailed)?;
    let sig = Signature::from_scalars(*signature.r(), *signature.s())
        .map_err(|e| CryptoError::InvalidSignature(e.to_string()))?;
    let verifying_key = VerifyingKey::recover_from_prehash(&hash, &sig, recovery_id)
        .map_err(|_| CryptoError::RecoveryFailed)?;
    Ok(ECPublicKey::from_encoded(
        PublicKey::from(&verifying_key)
            .to_sec1_bytes()
            .as_ref(),
    )?)
}
