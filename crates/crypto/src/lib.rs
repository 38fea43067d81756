//! Cryptographic primitives for the neo3 SDK.
//!
//! This crate provides the hash functions the protocol composes
//! (SHA-256, RIPEMD-160 and their combinations), secp256r1 key pairs with
//! deterministic ECDSA signing, the WIF private-key encoding, and base-58
//! checksum helpers. It is deliberately script-agnostic: everything that
//! depends on verification-script layout (addresses, NEP-2 salts) lives in
//! the crates layered above.

pub mod base58;
pub mod error;
pub mod hash;
pub mod key_pair;
pub mod sign;
pub mod wif;

pub use error::{CryptoError, CryptoResult};
pub use key_pair::{ECKeyPair, ECPrivateKey, ECPublicKey};
pub use sign::{sign_hash, sign_message, signed_message_to_key, verify_signature, SignatureData};
pub use wif::{private_key_from_wif, private_key_to_wif};

/// Byte length of a secp256r1 private key.
pub const PRIVATE_KEY_SIZE: usize = 32;

/// Byte length of a compressed SEC1 public key.
pub const PUBLIC_KEY_SIZE_COMPRESSED: usize = 33;

/// Byte length of a fixed-width `r ‖ s` signature.
pub const SIGNATURE_SIZE: usize = 64;
