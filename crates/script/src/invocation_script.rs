//! Invocation scripts carrying the signatures a witness provides.

use crate::error::ScriptResult;
use crate::script_builder::ScriptBuilder;
use neo3_crypto::{sign_message, ECKeyPair, SignatureData};

/// The script a witness uses to pass signatures to its verification script.
///
/// For a single-sig account this is one data push of the 64-byte signature;
/// a multi-sig witness pushes one signature per required signer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InvocationScript {
    script: Vec<u8>,
}

impl InvocationScript {
    /// Creates an empty invocation script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an invocation script from raw bytes.
    pub fn from_bytes(script: Vec<u8>) -> Self {
        Self { script }
    }

    /// Creates an invocation script pushing the given signature.
    pub fn from_signature(signature: &SignatureData) -> Self {
        let mut builder = ScriptBuilder::new();
        builder.push_data(&signature.concatenated());
        Self {
            script: builder.to_bytes(),
        }
    }

    /// Creates an invocation script pushing the given signatures in order.
    ///
    /// For an m-of-n account the order must match the key order of the
    /// verification script.
    pub fn from_signatures(signatures: &[SignatureData]) -> Self {
        let mut builder = ScriptBuilder::new();
        for signature in signatures {
            builder.push_data(&signature.concatenated());
        }
        Self {
            script: builder.to_bytes(),
        }
    }

    /// Signs the message with the given key pair and wraps the signature.
    pub fn from_message_and_key_pair(
        message: &[u8],
        key_pair: &ECKeyPair,
    ) -> ScriptResult<Self> {
        let signature = sign_message(message, key_pair)?;
        Ok(Self::from_signature(&signature))
    }

    /// The script bytes.
    pub fn script(&self) -> &[u8] {
        &self.script
    }

    /// Whether the script is empty.
    pub fn is_empty(&self) -> bool {
        self.script.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::INVOCATION_SCRIPT_SIZE;
    use neo3_crypto::verify_signature;

    #[test]
    fn test_from_signature_layout() {
        let signature = SignatureData::from_bytes(&[7u8; 64]).unwrap();
        let script = InvocationScript::from_signature(&signature);
        assert_eq!(script.script().len(), INVOCATION_SCRIPT_SIZE);
        assert_eq!(script.script()[0], 0x0c);
        assert_eq!(script.script()[1], 64);
        assert_eq!(&script.script()[2..], &[7u8; 64]);
    }

    #[test]
    fn test_from_signatures_concatenates() {
        let first = SignatureData::from_bytes(&[1u8; 64]).unwrap();
        let second = SignatureData::from_bytes(&[2u8; 64]).unwrap();
        let script = InvocationScript::from_signatures(&[first, second]);
        assert_eq!(script.script().len(), 2 * INVOCATION_SCRIPT_SIZE);
        assert_eq!(&script.script()[2..66], &[1u8; 64]);
        assert_eq!(&script.script()[68..], &[2u8; 64]);
    }

    #[test]
    fn test_from_message_and_key_pair() {
        let pair = ECKeyPair::generate();
        let script =
            InvocationScript::from_message_and_key_pair(b"a message", &pair).unwrap();
        let signature = SignatureData::from_bytes(&script.script()[2..]).unwrap();
        assert!(verify_signature(b"a message", &signature, pair.public_key()));
    }
}
