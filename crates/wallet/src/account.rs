//! Accounts and their key-encryption lifecycle.

use crate::error::{WalletError, WalletResult};
use crate::nep2;
use crate::nep6::{Nep6Account, Nep6Contract, Nep6Parameter};
use crate::scrypt_params::ScryptParams;
use base64::Engine;
use bip39::{Language, Mnemonic};
use log::debug;
use neo3_crypto::hash::sha256;
use neo3_crypto::{ECKeyPair, ECPublicKey};
use neo3_script::VerificationScript;
use neo3_types::{
    is_valid_address, ContractParameterType, Hash160, DEFAULT_ADDRESS_VERSION,
};

/// The key material an account holds, as an explicit state machine.
///
/// Encryption discards the plaintext arm and decryption restores it next to
/// the ciphertext, so "the plain key is gone" is a fact of the variant, not
/// of a zeroed buffer.
#[derive(Debug, Clone, PartialEq)]
enum KeyState {
    /// No key material; the account can only observe the chain.
    None,
    /// A plaintext key pair that has not been encrypted yet.
    Decrypted(ECKeyPair),
    /// Only the NEP-2 ciphertext; signing requires decryption first.
    Encrypted(String),
    /// The ciphertext together with the key pair decrypted from it.
    Unlocked { nep2: String, key_pair: ECKeyPair },
}

/// A single account: an address, its verification script, and key material
/// moving through the encryption lifecycle.
///
/// An account belongs to at most one [`crate::Wallet`] at a time; the owning
/// wallet is tracked by an opaque id instead of a back pointer.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    address: String,
    label: String,
    lock: bool,
    verification_script: Option<VerificationScript>,
    key_state: KeyState,
    /// `(threshold, nr_of_participants)`, present iff the account is
    /// multi-sig.
    multi_sig: Option<(usize, usize)>,
    /// The recovery mnemonic, present iff the key was derived from one.
    mnemonic: Option<String>,
    wallet_id: Option<u64>,
}

impl Account {
    fn from_parts(
        address: String,
        verification_script: Option<VerificationScript>,
        key_state: KeyState,
    ) -> Self {
        Self {
            label: address.clone(),
            address,
            lock: false,
            verification_script,
            key_state,
            multi_sig: None,
            mnemonic: None,
            wallet_id: None,
        }
    }

    /// Creates an account from an existing key pair.
    pub fn from_key_pair(key_pair: ECKeyPair) -> Self {
        let script = VerificationScript::from_public_key(key_pair.public_key());
        let address = script.hash().to_address(DEFAULT_ADDRESS_VERSION);
        Self::from_parts(address, Some(script), KeyState::Decrypted(key_pair))
    }

    /// Creates an account with a freshly generated key pair.
    pub fn create() -> Self {
        Self::from_key_pair(ECKeyPair::generate())
    }

    /// Imports an account from a WIF-encoded private key.
    pub fn from_wif(wif: &str) -> WalletResult<Self> {
        Ok(Self::from_key_pair(ECKeyPair::from_wif(wif)?))
    }

    /// Creates a watch-only account from a public key.
    pub fn from_public_key(public_key: &ECPublicKey) -> Self {
        let script = VerificationScript::from_public_key(public_key);
        let address = script.hash().to_address(DEFAULT_ADDRESS_VERSION);
        Self::from_parts(address, Some(script), KeyState::None)
    }

    /// Creates a multi-sig account from the given public keys and signing
    /// threshold.
    ///
    /// The key order determines the resulting address; supply the same order
    /// when re-deriving an existing account.
    pub fn create_multi_sig(
        public_keys: &[ECPublicKey],
        threshold: usize,
    ) -> WalletResult<Self> {
        let script = VerificationScript::from_public_keys(public_keys, threshold)?;
        let address = script.hash().to_address(DEFAULT_ADDRESS_VERSION);
        let mut account = Self::from_parts(address, Some(script), KeyState::None);
        account.multi_sig = Some((threshold, public_keys.len()));
        Ok(account)
    }

    /// Creates an account from an existing verification script.
    ///
    /// The script's shape decides whether the account is multi-sig.
    pub fn from_verification_script(script: VerificationScript) -> Self {
        let address = script.hash().to_address(DEFAULT_ADDRESS_VERSION);
        let multi_sig = if script.is_multi_sig() {
            let threshold = script.signing_threshold().expect("shape checked");
            let participants = script.nr_of_accounts().expect("shape checked");
            Some((threshold, participants))
        } else {
            None
        };
        let mut account = Self::from_parts(address, Some(script), KeyState::None);
        account.multi_sig = multi_sig;
        account
    }

    /// Creates a watch-only account from an address.
    pub fn from_address(address: &str) -> WalletResult<Self> {
        if !is_valid_address(address, DEFAULT_ADDRESS_VERSION) {
            return Err(WalletError::Types(neo3_types::TypeError::InvalidAddress(
                address.to_string(),
            )));
        }
        Ok(Self::from_parts(address.to_string(), None, KeyState::None))
    }

    /// Creates an account with a fresh BIP-39 mnemonic.
    ///
    /// The private key is the SHA-256 of the BIP-39 seed derived from the
    /// mnemonic and the passphrase. The mnemonic is kept on the account for
    /// recovery.
    pub fn from_bip39(passphrase: &str) -> WalletResult<Self> {
        let mnemonic = Mnemonic::generate_in(Language::English, 12)
            .map_err(|e| WalletError::Bip39(e.to_string()))?;
        Self::from_mnemonic(mnemonic, passphrase)
    }

    /// Recovers an account from a BIP-39 mnemonic and passphrase.
    pub fn from_bip39_mnemonic(phrase: &str, passphrase: &str) -> WalletResult<Self> {
        let mnemonic = Mnemonic::parse_in_normalized(Language::English, phrase)
            .map_err(|e| WalletError::Bip39(e.to_string()))?;
        Self::from_mnemonic(mnemonic, passphrase)
    }

    fn from_mnemonic(mnemonic: Mnemonic, passphrase: &str) -> WalletResult<Self> {
        let seed = mnemonic.to_seed(passphrase);
        let key_pair = ECKeyPair::from_private_key_bytes(&sha256(&seed))?;
        let mut account = Self::from_key_pair(key_pair);
        account.mnemonic = Some(mnemonic.to_string());
        Ok(account)
    }

    /// Restores an account from its NEP-6 representation.
    pub fn from_nep6_account(nep6: &Nep6Account) -> WalletResult<Self> {
        if !is_valid_address(&nep6.address, DEFAULT_ADDRESS_VERSION) {
            return Err(WalletError::Types(neo3_types::TypeError::InvalidAddress(
                nep6.address.clone(),
            )));
        }
        let verification_script = match &nep6.contract {
            Some(contract) if !contract.script.is_empty() => {
                let bytes = base64::engine::general_purpose::STANDARD
                    .decode(&contract.script)
                    .map_err(|e| {
                        WalletError::AccountState(format!(
                            "undecodable contract script: {e}"
                        ))
                    })?;
                Some(VerificationScript::from_bytes(bytes))
            }
            _ => None,
        };
        let key_state = match &nep6.key {
            Some(key) => KeyState::Encrypted(key.clone()),
            None => KeyState::None,
        };
        let multi_sig = verification_script
            .as_ref()
            .filter(|script| script.is_multi_sig())
            .map(|script| {
                let threshold = script.signing_threshold().expect("shape checked");
                let participants = script.nr_of_accounts().expect("shape checked");
                (threshold, participants)
            });
        Ok(Self {
            address: nep6.address.clone(),
            label: nep6
                .label
                .clone()
                .unwrap_or_else(|| nep6.address.clone()),
            lock: nep6.lock,
            verification_script,
            key_state,
            multi_sig,
            mnemonic: None,
            wallet_id: None,
        })
    }

    /// The account's address.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// The script hash identifying this account.
    pub fn script_hash(&self) -> Hash160 {
        Hash160::from_address(&self.address, DEFAULT_ADDRESS_VERSION)
            .expect("account addresses are validated on construction")
    }

    /// The account's label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Replaces the label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Whether the account is locked against signing.
    pub fn is_locked(&self) -> bool {
        self.lock
    }

    /// Locks the account.
    pub fn lock(&mut self) {
        self.lock = true;
    }

    /// Unlocks the account.
    pub fn unlock(&mut self) {
        self.lock = false;
    }

    /// The verification script, if the account has one.
    pub fn verification_script(&self) -> Option<&VerificationScript> {
        self.verification_script.as_ref()
    }

    /// The plaintext key pair, present in the decrypted states only.
    pub fn key_pair(&self) -> Option<&ECKeyPair> {
        match &self.key_state {
            KeyState::Decrypted(key_pair) | KeyState::Unlocked { key_pair, .. } => {
                Some(key_pair)
            }
            _ => None,
        }
    }

    /// The NEP-2 ciphertext, present in the encrypted states only.
    pub fn encrypted_private_key(&self) -> Option<&str> {
        match &self.key_state {
            KeyState::Encrypted(nep2) | KeyState::Unlocked { nep2, .. } => Some(nep2),
            _ => None,
        }
    }

    /// Whether this is a multi-sig account.
    pub fn is_multi_sig(&self) -> bool {
        self.multi_sig.is_some()
    }

    /// The signing threshold, for multi-sig accounts.
    pub fn signing_threshold(&self) -> Option<usize> {
        self.multi_sig.map(|(threshold, _)| threshold)
    }

    /// The number of participating keys, for multi-sig accounts.
    pub fn nr_of_participants(&self) -> Option<usize> {
        self.multi_sig.map(|(_, participants)| participants)
    }

    /// The recovery mnemonic, for accounts derived from one.
    pub fn mnemonic(&self) -> Option<&str> {
        self.mnemonic.as_deref()
    }

    pub(crate) fn wallet_id(&self) -> Option<u64> {
        self.wallet_id
    }

    pub(crate) fn set_wallet_id(&mut self, id: Option<u64>) {
        self.wallet_id = id;
    }

    /// Encrypts the account's private key under the given passphrase and
    /// discards the plaintext.
    ///
    /// Fails with [`WalletError::AccountState`] when the account holds no
    /// decrypted key pair.
    pub fn encrypt_private_key(
        &mut self,
        password: &str,
        params: &ScryptParams,
    ) -> WalletResult<()> {
        let key_pair = self.key_pair().ok_or_else(|| {
            WalletError::AccountState(
                "the account does not hold a decrypted private key".to_string(),
            )
        })?;
        let nep2 = nep2::encrypt_with(password, key_pair, params, DEFAULT_ADDRESS_VERSION)?;
        debug!("encrypted the private key of account {}", self.address);
        // The plaintext arm is dropped here; key bytes are zeroed on drop.
        self.key_state = KeyState::Encrypted(nep2);
        Ok(())
    }

    /// Decrypts the account's private key if it is not decrypted already.
    ///
    /// The ciphertext stays on the account. Fails with
    /// [`WalletError::AccountState`] when there is nothing to decrypt and
    /// with [`WalletError::InvalidPassphrase`] when the passphrase does not
    /// reproduce the account's key.
    pub fn decrypt_private_key(
        &mut self,
        password: &str,
        params: &ScryptParams,
    ) -> WalletResult<()> {
        let nep2 = match &self.key_state {
            KeyState::Decrypted(_) | KeyState::Unlocked { .. } => return Ok(()),
            KeyState::Encrypted(nep2) => nep2.clone(),
            KeyState::None => {
                return Err(WalletError::AccountState(
                    "the account does not hold an encrypted private key".to_string(),
                ))
            }
        };
        let key_pair =
            nep2::decrypt_with(password, &nep2, params, DEFAULT_ADDRESS_VERSION)?;
        if let Some(script) = &self.verification_script {
            if script.is_single_sig()
                && script.public_keys()?.first() != Some(key_pair.public_key())
            {
                return Err(WalletError::AccountState(
                    "the decrypted key does not match the account's public key"
                        .to_string(),
                ));
            }
        }
        debug!("decrypted the private key of account {}", self.address);
        self.key_state = KeyState::Unlocked { nep2, key_pair };
        Ok(())
    }

    /// Converts the account to its NEP-6 representation.
    ///
    /// Fails with [`WalletError::AccountState`] while the account holds a
    /// plaintext key that was never encrypted, since the file format only
    /// carries ciphertext.
    pub fn to_nep6_account(&self, is_default: bool) -> WalletResult<Nep6Account> {
        if matches!(self.key_state, KeyState::Decrypted(_)) {
            return Err(WalletError::AccountState(
                "the account's private key is available but not encrypted".to_string(),
            ));
        }
        let contract = self.verification_script.as_ref().map(|script| {
            let parameters = if let Some((_, participants)) = self.multi_sig {
                (0..participants)
                    .map(|i| Nep6Parameter {
                        param_name: format!("signature{i}"),
                        param_type: ContractParameterType::Signature,
                    })
                    .collect()
            } else {
                vec![Nep6Parameter {
                    param_name: "signature".to_string(),
                    param_type: ContractParameterType::Signature,
                }]
            };
            Nep6Contract {
                script: base64::engine::general_purpose::STANDARD.encode(script.script()),
                parameters,
                deployed: false,
            }
        });
        Ok(Nep6Account {
            address: self.address.clone(),
            label: Some(self.label.clone()),
            is_default,
            lock: self.lock,
            key: self.encrypted_private_key().map(str::to_string),
            contract,
            extra: None,
        })
    }
}
