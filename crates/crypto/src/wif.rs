//! Wallet Import Format (WIF) for private keys.
//!
//! A WIF string is the base-58check encoding of
//! `0x80 ‖ private_key(32) ‖ 0x01`. The trailing `0x01` marks the key as
//! belonging to a compressed public key.

use crate::base58::{base58check_decode, base58check_encode};
use crate::error::{CryptoError, CryptoResult};
use crate::PRIVATE_KEY_SIZE;

const WIF_PREFIX: u8 = 0x80;
const WIF_SUFFIX: u8 = 0x01;
const WIF_PAYLOAD_LENGTH: usize = 34;

/// Encodes a 32-byte private key as a WIF string.
pub fn private_key_to_wif(private_key: &[u8; PRIVATE_KEY_SIZE]) -> String {
    let mut payload = Vec::with_capacity(WIF_PAYLOAD_LENGTH);
    payload.push(WIF_PREFIX);
    payload.extend_from_slice(private_key);
    payload.push(WIF_SUFFIX);
    base58check_encode(&payload)
}

/// Decodes a WIF string into the 32-byte private key it carries.
///
/// Validates the checksum, the total length and the prefix/suffix bytes.
pub fn private_key_from_wif(wif: &str) -> CryptoResult<[u8; PRIVATE_KEY_SIZE]> {
    let payload = base58check_decode(wif)
        .map_err(|e| CryptoError::InvalidWif(e.to_string()))?;
    if payload.len() != WIF_PAYLOAD_LENGTH {
        return Err(CryptoError::InvalidWif(format!(
            "expected {} payload bytes but got {}",
            WIF_PAYLOAD_LENGTH,
            payload.len()
        )));
    }
    if payload[0] != WIF_PREFIX {
        return Err(CryptoError::InvalidWif("wrong prefix byte".to_string()));
    }
    if payload[WIF_PAYLOAD_LENGTH - 1] != WIF_SUFFIX {
        return Err(CryptoError::InvalidWif("wrong suffix byte".to_string()));
    }
    let mut key = [0u8; PRIVATE_KEY_SIZE];
    key.copy_from_slice(&payload[1..33]);
    Ok(key)
}
