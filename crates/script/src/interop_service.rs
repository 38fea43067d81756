//! Interoperability services callable through the `SYSCALL` instruction.

use neo3_codec::encode_hex;
use neo3_crypto::hash::sha256;

/// An interop service a node exposes to the NeoVM.
///
/// The `SYSCALL` operand identifying a service is the first four bytes of the
/// SHA-256 hash of its ASCII name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteropService {
    /// Verifies a single ECDSA signature over secp256r1.
    NeoCryptoVerifyWithEcdsaSecp256r1,
    /// Verifies an m-of-n set of ECDSA signatures over secp256r1.
    NeoCryptoCheckMultisigWithEcdsaSecp256r1,
    /// Calls a method of a deployed contract.
    SystemContractCall,
}

impl InteropService {
    /// The service's name.
    pub fn name(&self) -> &'static str {
        match self {
            InteropService::NeoCryptoVerifyWithEcdsaSecp256r1 => {
                "Neo.Crypto.VerifyWithECDsaSecp256r1"
            }
            InteropService::NeoCryptoCheckMultisigWithEcdsaSecp256r1 => {
                "Neo.Crypto.CheckMultisigWithECDsaSecp256r1"
            }
            InteropService::SystemContractCall => "System.Contract.Call",
        }
    }

    /// The 4-byte identifier used as the `SYSCALL` operand.
    pub fn hash(&self) -> [u8; 4] {
        let digest = sha256(self.name().as_bytes());
        [digest[0], digest[1], digest[2], digest[3]]
    }

    /// The identifier as a hex string.
    pub fn hash_hex(&self) -> String {
        encode_hex(&self.hash())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_hashes() {
        assert_eq!(
            InteropService::NeoCryptoVerifyWithEcdsaSecp256r1.hash_hex(),
            "95440d78"
        );
        assert_eq!(
            InteropService::NeoCryptoCheckMultisigWithEcdsaSecp256r1.hash_hex(),
            "138defaf"
        );
        assert_eq!(InteropService::SystemContractCall.hash_hex(), "627d5b52");
    }
}
