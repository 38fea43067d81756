//! Witnesses pairing an invocation script with its verification script.

use crate::error::ScriptResult;
use crate::invocation_script::InvocationScript;
use crate::verification_script::VerificationScript;
use neo3_crypto::ECKeyPair;
use neo3_types::Hash160;

/// A (verification script, invocation script) pair proving authorization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Witness {
    invocation_script: InvocationScript,
    verification_script: VerificationScript,
}

impl Witness {
    /// Creates a witness from its two scripts.
    pub fn new(
        invocation_script: InvocationScript,
        verification_script: VerificationScript,
    ) -> Self {
        Self {
            invocation_script,
            verification_script,
        }
    }

    /// Signs the message with the key pair and builds the complete witness
    /// for the key's single-sig account.
    pub fn create(message: &[u8], key_pair: &ECKeyPair) -> ScriptResult<Self> {
        let invocation_script =
            InvocationScript::from_message_and_key_pair(message, key_pair)?;
        let verification_script =
            VerificationScript::from_public_key(key_pair.public_key());
        Ok(Self::new(invocation_script, verification_script))
    }

    /// The invocation script.
    pub fn invocation_script(&self) -> &InvocationScript {
        &self.invocation_script
    }

    /// The verification script.
    pub fn verification_script(&self) -> &VerificationScript {
        &self.verification_script
    }

    /// The script hash of the account this witness authorizes for.
    pub fn script_hash(&self) -> Hash160 {
        self.verification_script.hash()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verification_script::public_key_to_script_hash;
    use neo3_crypto::{verify_signature, SignatureData};

    #[test]
    fn test_create() {
        let pair = ECKeyPair::generate();
        let witness = Witness::create(b"transaction bytes", &pair).unwrap();

        assert!(witness.verification_script().is_single_sig());
        assert_eq!(
            witness.script_hash(),
            public_key_to_script_hash(pair.public_key())
        );

        let signature =
            SignatureData::from_bytes(&witness.invocation_script().script()[2..]).unwrap();
        assert!(verify_signature(
            b"transaction bytes",
            &signature,
            pair.public_key()
        ));
    }
}
