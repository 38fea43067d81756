//! Strict hexadecimal codec.
//!
//! A valid hex string has an even number of characters from `[0-9A-Fa-f]`,
//! optionally prefixed with `0x`. Malformed input fails construction instead
//! of being truncated or padded.

use crate::error::{CodecError, CodecResult};

/// Strips a leading `0x`/`0X` prefix if present.
pub fn clean_hex_prefix(input: &str) -> &str {
    if input.starts_with("0x") || input.starts_with("0X") {
        &input[2..]
    } else {
        input
    }
}

/// Checks whether the given string is valid hexadecimal.
///
/// The empty string passes; an odd number of digits does not.
pub fn is_valid_hex(input: &str) -> bool {
    let cleaned = clean_hex_prefix(input);
    cleaned.len() % 2 == 0 && cleaned.chars().all(|c| c.is_ascii_hexdigit())
}

/// Decodes a hex string into bytes, accepting an optional `0x` prefix.
pub fn decode_hex(input: &str) -> CodecResult<Vec<u8>> {
    let cleaned = clean_hex_prefix(input);
    if !is_valid_hex(cleaned) {
        return Err(CodecError::InvalidHex(input.to_string()));
    }
    hex::decode(cleaned).map_err(|_| CodecError::InvalidHex(input.to_string()))
}

/// Encodes bytes as a lowercase hex string without prefix.
pub fn encode_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Encodes bytes as a lowercase hex string with a `0x` prefix.
pub fn encode_hex_prefixed(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let data = vec![0x01, 0x02, 0xab, 0xff];
        assert_eq!(encode_hex(&data), "0102abff");
        assert_eq!(encode_hex_prefixed(&data), "0x0102abff");
        assert_eq!(decode_hex("0102abff").unwrap(), data);
        assert_eq!(decode_hex("0x0102abff").unwrap(), data);
        assert_eq!(decode_hex("0X0102ABFF").unwrap(), data);
    }

    #[test]
    fn test_validation() {
        assert!(is_valid_hex(""));
        assert!(is_valid_hex("0x"));
        assert!(is_valid_hex("aabb"));
        assert!(!is_valid_hex("aab"));
        assert!(!is_valid_hex("xyz1"));
    }

    #[test]
    fn test_malformed_input_fails() {
        assert!(matches!(decode_hex("abc"), Err(CodecError::InvalidHex(_))));
        assert!(matches!(decode_hex("zz"), Err(CodecError::InvalidHex(_))));
    }
}
