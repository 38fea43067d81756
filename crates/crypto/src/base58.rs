//! Base-58 and base-58check helpers.

use crate::error::{CryptoError, CryptoResult};
use crate::hash::{checksum, verify_checksum};

/// Encodes bytes as base-58.
pub fn encode(data: &[u8]) -> String {
    bs58::encode(data).into_string()
}

/// Decodes a base-58 string.
pub fn decode(data: &str) -> CryptoResult<Vec<u8>> {
    bs58::decode(data)
        .into_vec()
        .map_err(|e| CryptoError::InvalidBase58(e.to_string()))
}

/// Encodes bytes as base-58 with an appended 4-byte double-SHA-256 checksum.
pub fn base58check_encode(data: &[u8]) -> String {
    let mut payload = data.to_vec();
    payload.extend_from_slice(&checksum(data));
    encode(&payload)
}

/// Decodes a base-58check string, verifying and stripping the checksum.
pub fn base58check_decode(data: &str) -> CryptoResult<Vec<u8>> {
    let decoded = decode(data)?;
    if decoded.len() < 4 {
        return Err(CryptoError::InvalidBase58(
            "input too short for a checksum".to_string(),
        ));
    }
    let (payload, check) = decoded.split_at(decoded.len() - 4);
    if !verify_checksum(payload, check) {
        return Err(CryptoError::InvalidBase58("checksum mismatch".to_string()));
    }
    Ok(payload.to_vec())
}
