//! Verification scripts proving single- or multi-signature ownership.

use crate::error::{ScriptError, ScriptResult};
use crate::interop_service::InteropService;
use crate::op_code::OpCode;
use crate::script_builder::ScriptBuilder;
use crate::script_reader::ScriptReader;
use crate::{MAX_PUBLIC_KEYS_PER_MULTISIG_ACCOUNT, VERIFICATION_SCRIPT_SIZE};
use neo3_codec::encode_hex;
use neo3_crypto::{ECPublicKey, PUBLIC_KEY_SIZE_COMPRESSED};
use neo3_types::Hash160;
use num_traits::ToPrimitive;

/// Computes the script hash of the standard single-sig verification script
/// for the given public key.
pub fn public_key_to_script_hash(public_key: &ECPublicKey) -> Hash160 {
    VerificationScript::from_public_key(public_key).hash()
}

/// The script a node executes to check that an action is properly authorized
/// by its claimed signer.
///
/// Whether a script is single-sig or multi-sig is determined by inspecting
/// its bytes, never by a stored flag, so scripts loaded from external sources
/// classify the same way as locally built ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationScript {
    script: Vec<u8>,
}

impl VerificationScript {
    /// Creates a verification script from raw bytes.
    pub fn from_bytes(script: Vec<u8>) -> Self {
        Self { script }
    }

    /// Builds the single-sig verification script for the given public key:
    /// a push of the compressed key followed by the signature-check syscall.
    pub fn from_public_key(public_key: &ECPublicKey) -> Self {
        let mut builder = ScriptBuilder::new();
        builder
            .push_data(&public_key.encoded_compressed())
            .op_code(&[OpCode::PUSHNULL])
            .sys_call(InteropService::NeoCryptoVerifyWithEcdsaSecp256r1);
        Self {
            script: builder.to_bytes(),
        }
    }

    /// Builds the m-of-n multi-sig verification script for the given public
    /// keys with signing threshold `threshold`.
    ///
    /// The keys are embedded exactly in the order given; they are not
    /// sorted. The key order determines the script hash and therefore the
    /// account's address, so callers must supply a consistent order when
    /// re-deriving an existing account.
    pub fn from_public_keys(
        public_keys: &[ECPublicKey],
        threshold: usize,
    ) -> ScriptResult<Self> {
        if threshold < 1 || threshold > public_keys.len() {
            return Err(ScriptError::InvalidThreshold {
                threshold,
                keys: public_keys.len(),
            });
        }
        if public_keys.len() > MAX_PUBLIC_KEYS_PER_MULTISIG_ACCOUNT {
            return Err(ScriptError::InvalidThreshold {
                threshold,
                keys: public_keys.len(),
            });
        }
        let mut builder = ScriptBuilder::new();
        builder.push_integer(threshold as i64);
        for key in public_keys {
            builder.push_data(&key.encoded_compressed());
        }
        builder
            .push_integer(public_keys.len() as i64)
            .op_code(&[OpCode::PUSHNULL])
            .sys_call(InteropService::NeoCryptoCheckMultisigWithEcdsaSecp256r1);
        Ok(Self {
            script: builder.to_bytes(),
        })
    }

    /// The script bytes.
    pub fn script(&self) -> &[u8] {
        &self.script
    }

    /// Whether the script is empty.
    pub fn is_empty(&self) -> bool {
        self.script.is_empty()
    }

    /// The script hash identifying the account this script belongs to.
    pub fn hash(&self) -> Hash160 {
        Hash160::from_script(&self.script)
    }

    /// Checks whether the script has the single-sig shape.
    pub fn is_single_sig(&self) -> bool {
        self.script.len() == VERIFICATION_SCRIPT_SIZE
            && self.script[0] == OpCode::PUSHDATA1.byte()
            && self.script[1] == PUBLIC_KEY_SIZE_COMPRESSED as u8
            && self.script[35] == OpCode::PUSHNULL.byte()
            && self.script[36] == OpCode::SYSCALL.byte()
            && self.script[37..]
                == InteropService::NeoCryptoVerifyWithEcdsaSecp256r1.hash()
    }

    /// Checks whether the script has the multi-sig shape.
    pub fn is_multi_sig(&self) -> bool {
        self.parse_multi_sig().is_ok()
    }

    /// Extracts the number of signatures required to satisfy this script.
    pub fn signing_threshold(&self) -> ScriptResult<usize> {
        if self.is_single_sig() {
            return Ok(1);
        }
        let (threshold, _) = self.parse_multi_sig()?;
        Ok(threshold)
    }

    /// The number of accounts (public keys) taking part in this script.
    pub fn nr_of_accounts(&self) -> ScriptResult<usize> {
        Ok(self.public_keys()?.len())
    }

    /// Extracts the public keys encoded in this script, in the order they
    /// appear.
    pub fn public_keys(&self) -> ScriptResult<Vec<ECPublicKey>> {
        if self.is_single_sig() {
            let key = ECPublicKey::from_encoded(&self.script[2..35])?;
            return Ok(vec![key]);
        }
        let (_, keys) = self.parse_multi_sig()?;
        Ok(keys)
    }

    /// Parses the script under the multi-sig shape, returning the threshold
    /// and the embedded keys.
    fn parse_multi_sig(&self) -> ScriptResult<(usize, Vec<ECPublicKey>)> {
        // Smallest case: 1-of-1, threshold + one key push + count + PUSHNULL
        // + SYSCALL + id.
        if self.script.len() < 43 {
            return Err(ScriptError::InvalidScriptFormat(
                "script too short for a multi-sig shape".to_string(),
            ));
        }
        let mut reader = ScriptReader::new(&self.script);
        let threshold = reader
            .read_push_integer()
            .map_err(|_| {
                ScriptError::InvalidScriptFormat("missing signing threshold".to_string())
            })?
            .to_usize()
            .ok_or_else(|| {
                ScriptError::InvalidScriptFormat("signing threshold out of range".to_string())
            })?;
        if threshold < 1 || threshold > MAX_PUBLIC_KEYS_PER_MULTISIG_ACCOUNT {
            return Err(ScriptError::InvalidScriptFormat(
                "signing threshold out of range".to_string(),
            ));
        }

        let mut keys = Vec::new();
        while reader.peek_byte()? == OpCode::PUSHDATA1.byte() {
            reader.read_byte()?;
            if reader.read_byte()? != PUBLIC_KEY_SIZE_COMPRESSED as u8 {
                return Err(ScriptError::InvalidScriptFormat(
                    "key push with wrong length".to_string(),
                ));
            }
            let key_bytes = reader.read_bytes(PUBLIC_KEY_SIZE_COMPRESSED)?;
            keys.push(ECPublicKey::from_encoded(key_bytes)?);
        }
        if keys.is_empty() || keys.len() > MAX_PUBLIC_KEYS_PER_MULTISIG_ACCOUNT {
            return Err(ScriptError::InvalidScriptFormat(
                "no public keys in multi-sig script".to_string(),
            ));
        }
        if threshold > keys.len() {
            return Err(ScriptError::InvalidScriptFormat(
                "signing threshold exceeds the number of keys".to_string(),
            ));
        }

        let count = reader.read_push_usize().map_err(|_| {
            ScriptError::InvalidScriptFormat("missing key count".to_string())
        })?;
        if count != keys.len() {
            return Err(ScriptError::InvalidScriptFormat(
                "key count does not match the embedded keys".to_string(),
            ));
        }
        if reader.read_byte()? != OpCode::PUSHNULL.byte() {
            return Err(ScriptError::InvalidScriptFormat(
                "missing PUSHNULL before the syscall".to_string(),
            ));
        }
        if reader.read_byte()? != OpCode::SYSCALL.byte() {
            return Err(ScriptError::InvalidScriptFormat(
                "missing syscall".to_string(),
            ));
        }
        let id = reader.read_bytes(4)?;
        if id != InteropService::NeoCryptoCheckMultisigWithEcdsaSecp256r1.hash() {
            return Err(ScriptError::InvalidScriptFormat(format!(
                "unexpected interop service id {}",
                encode_hex(id)
            )));
        }
        if reader.remaining() != 0 {
            return Err(ScriptError::InvalidScriptFormat(
                "trailing bytes after the syscall".to_string(),
            ));
        }
        Ok((threshold, keys))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;
    use neo3_types::DEFAULT_ADDRESS_VERSION;

    const KEY: [u8; 33] =
        hex!("02163946a133e3d2e0d987fb90cb01b060ed1780f1718e2da28edf13b965fd2b60");
    const SINGLE_SIG_SCRIPT: [u8; 41] = hex!(
        "0c2102163946a133e3d2e0d987fb90cb01b060ed1780f1718e2da28edf13b965fd2b600b4195440d78"
    );

    fn key() -> ECPublicKey {
        ECPublicKey::from_encoded(&KEY).unwrap()
    }

    #[test]
    fn test_single_sig_script_layout() {
        let script = VerificationScript::from_public_key(&key());
        assert_eq!(script.script(), &SINGLE_SIG_SCRIPT);
    }

    #[test]
    fn test_single_sig_address() {
        let script = VerificationScript::from_public_key(&key());
        assert_eq!(
            script.hash().to_address(DEFAULT_ADDRESS_VERSION),
            "NZNos2WqTbu5oCgyfss9kUJgBXJqhuYAaj"
        );
    }

    #[test]
    fn test_multi_sig_script_layout() {
        let script = VerificationScript::from_public_keys(&[key(), key()], 2).unwrap();
        let mut expected = vec![0x12];
        expected.extend_from_slice(&hex!("0c21"));
        expected.extend_from_slice(&KEY);
        expected.extend_from_slice(&hex!("0c21"));
        expected.extend_from_slice(&KEY);
        expected.extend_from_slice(&hex!("120b41138defaf"));
        assert_eq!(script.script(), &expected[..]);
        assert_eq!(
            script.hash().to_address(DEFAULT_ADDRESS_VERSION),
            "NRDNEXqLYQdE58ZwGTYy1ZfjXsUV2PacZC"
        );
    }

    #[test]
    fn test_one_of_one_multi_sig_address() {
        let script = VerificationScript::from_public_keys(&[key()], 1).unwrap();
        assert_eq!(
            script.hash().to_address(DEFAULT_ADDRESS_VERSION),
            "NX8GreRFGFK5wpGMWetpX93HmtrezGogzk"
        );
    }

    #[test]
    fn test_keys_are_not_sorted() {
        let first = ECPublicKey::from_hex(
            "02f5216539e101885cded09778cd720e5594260bcbf033f09dbd7d1f64478e2a9d",
        )
        .unwrap();
        let second = ECPublicKey::from_hex(
            "026241e7e26b38bb7154b8ad49458b97fb1c4797443dc921c5ca5774f511a2bbfc",
        )
        .unwrap();

        let one = VerificationScript::from_public_keys(&[second.clone(), first.clone()], 2)
            .unwrap();
        let other = VerificationScript::from_public_keys(&[first, second], 2).unwrap();

        // Same key set, different order: different script, different address.
        assert_ne!(one, other);
        assert_eq!(
            one.hash().to_address(DEFAULT_ADDRESS_VERSION),
            "NW2RMVyKRXWnbMX2MTMWKXdzL6bZjFEPUu"
        );
        assert_eq!(
            other.hash().to_address(DEFAULT_ADDRESS_VERSION),
            "NZRiN3RdSabqWMnKK39E1D1D4df4KZZTv8"
        );
    }

    #[test]
    fn test_classification_is_structural() {
        // Loaded from raw bytes, not built locally.
        let single = VerificationScript::from_bytes(SINGLE_SIG_SCRIPT.to_vec());
        assert!(single.is_single_sig());
        assert!(!single.is_multi_sig());
        assert_eq!(single.signing_threshold().unwrap(), 1);
        assert_eq!(single.public_keys().unwrap(), vec![key()]);

        let multi = VerificationScript::from_public_keys(&[key(), key()], 2).unwrap();
        let multi = VerificationScript::from_bytes(multi.script().to_vec());
        assert!(multi.is_multi_sig());
        assert!(!multi.is_single_sig());
        assert_eq!(multi.signing_threshold().unwrap(), 2);
        assert_eq!(multi.nr_of_accounts().unwrap(), 2);
    }

    #[test]
    fn test_garbage_is_neither() {
        let script = VerificationScript::from_bytes(vec![0x01, 0x02, 0x03]);
        assert!(!script.is_single_sig());
        assert!(!script.is_multi_sig());
        assert!(script.signing_threshold().is_err());
        assert!(script.public_keys().is_err());
    }

    #[test]
    fn test_truncated_multi_sig_rejected() {
        let full = VerificationScript::from_public_keys(&[key(), key()], 2)
            .unwrap()
            .script()
            .to_vec();
        let truncated = VerificationScript::from_bytes(full[..full.len() - 1].to_vec());
        assert!(!truncated.is_multi_sig());
    }

    #[test]
    fn test_invalid_threshold_rejected() {
        assert!(matches!(
            VerificationScript::from_public_keys(&[key()], 0),
            Err(ScriptError::InvalidThreshold { .. })
        ));
        assert!(matches!(
            VerificationScript::from_public_keys(&[key()], 2),
            Err(ScriptError::InvalidThreshold { .. })
        ));
    }

    #[test]
    fn test_public_key_to_script_hash() {
        let hash = public_key_to_script_hash(&key());
        assert_eq!(hash.to_hex(), "0f46dc4287b70117ce8354924b5cb3a47215ad93");
    }
}
