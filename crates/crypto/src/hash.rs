//! Hash functions composed by the protocol.
//!
//! Script hashes are RIPEMD-160 over SHA-256, checksums and transaction
//! identifiers are double SHA-256.

use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

/// Computes SHA-256 of the input data.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Computes RIPEMD-160 of the input data.
pub fn ripemd160(data: &[u8]) -> [u8; 20] {
    let mut hasher = Ripemd160::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Computes RIPEMD-160 of the SHA-256 of the input data.
///
/// This is the script-hash function: its output identifies accounts and
/// contracts.
pub fn hash160(data: &[u8]) -> [u8; 20] {
    ripemd160(&sha256(data))
}

/// Computes double SHA-256 of the input data.
pub fn hash256(data: &[u8]) -> [u8; 32] {
    sha256(&sha256(data))
}

/// Computes the 4-byte double-SHA-256 checksum used by base-58check payloads.
pub fn checksum(data: &[u8]) -> [u8; 4] {
    let hash = hash256(data);
    [hash[0], hash[1], hash[2], hash[3]]
}

/// Verifies a 4-byte double-SHA-256 checksum.
pub fn verify_checksum(data: &[u8], expected: &[u8]) -> bool {
    checksum(data) == expected
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn test_sha256() {
        assert_eq!(
            sha256(b"hello world"),
            hex!("b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9")
        );
    }

    #[test]
    fn test_hash160() {
        // RIPEMD-160(SHA-256("hello world"))
        assert_eq!(
            hash160(b"hello world"),
            hex!("d7d5ee7824ff93f94c3055af9382c86c68b5ca92")
        );
    }

    #[test]
    fn test_hash256() {
        assert_eq!(
            hash256(b"hello world"),
            hex!("bc62d4b80d9e36da29c16c5d4d9f11731f36052c72401a76c23c0fb5a9b74423")
        );
    }

    #[test]
    fn test_checksum() {
        let data = b"some payload";
        let cs = checksum(data);
        assert!(verify_checksum(data, &cs));
        assert!(!verify_checksum(b"other payload", &cs));
    }
}
