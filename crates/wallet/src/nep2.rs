//! NEP-2 password-based private-key encryption.
//!
//! An encrypted key is the base-58check form of
//! `0x01 0x42 0xE0 ‖ addresshash(4) ‖ ciphertext(32)`. The scrypt key stream
//! is salted with the first four bytes of the double-SHA-256 of the key's
//! address, the private key is XORed with the first half of the stream and
//! AES-256-ECB encrypted under the second half, one 16-byte block per key
//! half. ECB provides no tamper detection, so decryption recomputes the
//! address from the decrypted key and rejects the passphrase when the salt
//! fragment does not match.

use crate::error::{WalletError, WalletResult};
use crate::scrypt_params::{ScryptParams, DKLEN};
use aes::cipher::generic_array::GenericArray;
use aes::cipher::{BlockDecrypt, BlockEncrypt, KeyInit};
use aes::Aes256;
use neo3_codec::xor;
use neo3_crypto::base58::{base58check_decode, base58check_encode};
use neo3_crypto::hash::hash256;
use neo3_crypto::ECKeyPair;
use neo3_script::public_key_to_script_hash;
use neo3_types::DEFAULT_ADDRESS_VERSION;
use zeroize::Zeroize;

/// Payload length of an encrypted key before the base-58 checksum.
pub const NEP2_PRIVATE_KEY_LENGTH: usize = 39;

const NEP2_PREFIX_1: u8 = 0x01;
const NEP2_PREFIX_2: u8 = 0x42;
const NEP2_FLAGBYTE: u8 = 0xe0;

/// Encrypts a key pair's private key under the given passphrase, using the
/// default scrypt parameters and network version.
pub fn encrypt(password: &str, key_pair: &ECKeyPair) -> WalletResult<String> {
    encrypt_with(password, key_pair, &ScryptParams::default(), DEFAULT_ADDRESS_VERSION)
}

/// Encrypts a key pair's private key under the given passphrase.
pub fn encrypt_with(
    password: &str,
    key_pair: &ECKeyPair,
    params: &ScryptParams,
    address_version: u8,
) -> WalletResult<String> {
    let salt = address_hash(key_pair, address_version);
    let mut derived = derive_key(password, &salt, params)?;
    let (half1, half2) = derived.split_at(32);

    let mut xored = xor(key_pair.private_key().as_bytes(), half1)
        .expect("both operands are 32 bytes");
    let cipher = Aes256::new(GenericArray::from_slice(half2));
    let mut first = GenericArray::clone_from_slice(&xored[..16]);
    let mut second = GenericArray::clone_from_slice(&xored[16..]);
    cipher.encrypt_block(&mut first);
    cipher.encrypt_block(&mut second);
    xored.zeroize();

    let mut payload = Vec::with_capacity(NEP2_PRIVATE_KEY_LENGTH);
    payload.extend_from_slice(&[NEP2_PREFIX_1, NEP2_PREFIX_2, NEP2_FLAGBYTE]);
    payload.extend_from_slice(&salt);
    payload.extend_from_slice(first.as_slice());
    payload.extend_from_slice(second.as_slice());
    derived.zeroize();
    Ok(base58check_encode(&payload))
}

/// Decrypts an encrypted key under the given passphrase, using the default
/// scrypt parameters and network version.
pub fn decrypt(password: &str, nep2: &str) -> WalletResult<ECKeyPair> {
    decrypt_with(password, nep2, &ScryptParams::default(), DEFAULT_ADDRESS_VERSION)
}

/// Decrypts an encrypted key under the given passphrase.
///
/// Fails with [`WalletError::Nep2Format`] when the string does not have the
/// NEP-2 shape and with [`WalletError::InvalidPassphrase`] when the decrypted
/// key does not reproduce the address fragment embedded in the string.
pub fn decrypt_with(
    password: &str,
    nep2: &str,
    params: &ScryptParams,
    address_version: u8,
) -> WalletResult<ECKeyPair> {
    let payload = base58check_decode(nep2)
        .map_err(|e| WalletError::Nep2Format(e.to_string()))?;
    if payload.len() != NEP2_PRIVATE_KEY_LENGTH
        || payload[0] != NEP2_PREFIX_1
        || payload[1] != NEP2_PREFIX_2
        || payload[2] != NEP2_FLAGBYTE
    {
        return Err(WalletError::Nep2Format(
            "not a valid NEP-2 prefix".to_string(),
        ));
    }
    let embedded_salt: [u8; 4] = payload[3..7].try_into().expect("length checked");
    let mut derived = derive_key(password, &embedded_salt, params)?;
    let (half1, half2) = derived.split_at(32);

    let cipher = Aes256::new(GenericArray::from_slice(half2));
    let mut first = GenericArray::clone_from_slice(&payload[7..23]);
    let mut second = GenericArray::clone_from_slice(&payload[23..39]);
    cipher.decrypt_block(&mut first);
    cipher.decrypt_block(&mut second);

    let mut decrypted = [0u8; 32];
    decrypted[..16].copy_from_slice(first.as_slice());
    decrypted[16..].copy_from_slice(second.as_slice());
    let mut plain_key = xor(&decrypted, half1).expect("both operands are 32 bytes");
    decrypted.zeroize();
    derived.zeroize();

    let key_pair = ECKeyPair::from_private_key_bytes(&plain_key)
        .map_err(|_| WalletError::InvalidPassphrase)?;
    plain_key.zeroize();

    // The integrity check: the key must hash back to the salt fragment.
    if address_hash(&key_pair, address_version) != embedded_salt {
        return Err(WalletError::InvalidPassphrase);
    }
    Ok(key_pair)
}

/// The first four bytes of the double-SHA-256 of the key pair's address.
fn address_hash(key_pair: &ECKeyPair, address_version: u8) -> [u8; 4] {
    let address =
        public_key_to_script_hash(key_pair.public_key()).to_address(address_version);
    let digest = hash256(address.as_bytes());
    [digest[0], digest[1], digest[2], digest[3]]
}

fn derive_key(
    password: &str,
    salt: &[u8; 4],
    params: &ScryptParams,
) -> WalletResult<[u8; DKLEN]> {
    let mut output = [0u8; DKLEN];
    scrypt::scrypt(password.as_bytes(), salt, &params.to_params()?, &mut output)
        .map_err(|e| WalletError::Scrypt(e.to_string()))?;
    Ok(output)
}
