//! Checksummed base-58 address codec.
//!
//! An address is the base-58check encoding of a one-byte network version
//! followed by the 20-byte script hash in little-endian order. The version
//! byte is an explicit argument everywhere; there is no process-global
//! network configuration.

use crate::error::{TypeError, TypeResult};
use crate::hash160::Hash160;
use neo3_crypto::base58;

/// The address version byte of the default network.
pub const DEFAULT_ADDRESS_VERSION: u8 = 0x35;

/// Decoded address length: version byte + 20 hash bytes + 4 checksum bytes.
const ADDRESS_DATA_LENGTH: usize = 25;

/// Encodes a script hash as an address under the given network version.
pub fn script_hash_to_address(hash: &Hash160, version: u8) -> String {
    let mut payload = Vec::with_capacity(ADDRESS_DATA_LENGTH - 4);
    payload.push(version);
    payload.extend_from_slice(&hash.to_le_bytes());
    base58::base58check_encode(&payload)
}

/// Decodes an address into its script hash, verifying length, checksum and
/// the network version byte.
pub fn address_to_script_hash(address: &str, version: u8) -> TypeResult<Hash160> {
    let data = base58::decode(address)
        .map_err(|e| TypeError::InvalidAddress(e.to_string()))?;
    if data.len() != ADDRESS_DATA_LENGTH {
        return Err(TypeError::InvalidAddress(format!(
            "expected {} bytes but got {}",
            ADDRESS_DATA_LENGTH,
            data.len()
        )));
    }
    let (payload, checksum) = data.split_at(ADDRESS_DATA_LENGTH - 4);
    if !neo3_crypto::hash::verify_checksum(payload, checksum) {
        return Err(TypeError::InvalidAddress("checksum mismatch".to_string()));
    }
    if payload[0] != version {
        return Err(TypeError::InvalidAddress(format!(
            "version byte 0x{:02x} does not match expected 0x{:02x}",
            payload[0], version
        )));
    }
    Hash160::from_le_bytes(&payload[1..])
}

/// Checks whether the given string is a valid address under the given
/// network version.
pub fn is_valid_address(address: &str, version: u8) -> bool {
    address_to_script_hash(address, version).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn test_script_hash_to_address() {
        // hash160 of the script "2102208aea0068c429a03316e37be0e3e8e21e6cda
        // 5442df4c5914a19b3a9b6de37568747476aa"; the raw digest is the wire
        // form.
        let hash =
            Hash160::from_le_bytes(&hex!("c8e1e8eb00c81c7e802890cbbde0ffccde64a5fa")).unwrap();
        assert_eq!(
            script_hash_to_address(&hash, DEFAULT_ADDRESS_VERSION),
            "NeE8xcV4ohHi9rjyj4nPdCYTGyXnWZ79UU"
        );
        assert_eq!(
            script_hash_to_address(&hash, 0x17),
            "Aa63RMYRWHPRcrZNzUnq5SNrPqoV866Spu"
        );
    }

    #[test]
    fn test_address_to_script_hash() {
        let hash = address_to_script_hash(
            "NeE8xcV4ohHi9rjyj4nPdCYTGyXnWZ79UU",
            DEFAULT_ADDRESS_VERSION,
        )
        .unwrap();
        assert_eq!(
            hash.to_le_bytes().to_vec(),
            hex!("c8e1e8eb00c81c7e802890cbbde0ffccde64a5fa").to_vec()
        );
    }

    #[test]
    fn test_round_trip() {
        let hash = Hash160::from_hex("23ba2703c53263e8d6e522dc32203339dcd8eee9").unwrap();
        for version in [0x17u8, 0x35, 0x37] {
            let address = script_hash_to_address(&hash, version);
            assert_eq!(address_to_script_hash(&address, version).unwrap(), hash);
        }
    }

    #[test]
    fn test_wrong_version_rejected() {
        let hash = Hash160::zero();
        let address = script_hash_to_address(&hash, 0x35);
        assert!(matches!(
            address_to_script_hash(&address, 0x17),
            Err(TypeError::InvalidAddress(_))
        ));
    }

    #[test]
    fn test_validation() {
        assert!(is_valid_address(
            "NZNos2WqTbu5oCgyfss9kUJgBXJqhuYAaj",
            DEFAULT_ADDRESS_VERSION
        ));
        assert!(is_valid_address(
            "NX8GreRFGFK5wpGMWetpX93HmtrezGogzk",
            DEFAULT_ADDRESS_VERSION
        ));
        assert!(!is_valid_address("", DEFAULT_ADDRESS_VERSION));
        assert!(!is_valid_address("0", DEFAULT_ADDRESS_VERSION));
        // One character dropped.
        assert!(!is_valid_address(
            "NZNos2WqTbu5oCgyfss9kUJgBXJqhuYAa",
            DEFAULT_ADDRESS_VERSION
        ));
        // One character appended.
        assert!(!is_valid_address(
            "NZNos2WqTbu5oCgyfss9kUJgBXJqhuYAaja",
            DEFAULT_ADDRESS_VERSION
        ));
    }
}
