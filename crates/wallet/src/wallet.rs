//! The wallet aggregate.

use crate::account::Account;
use crate::error::{WalletError, WalletResult};
use crate::nep6::Nep6Wallet;
use crate::scrypt_params::ScryptParams;
use indexmap::IndexMap;
use log::{debug, warn};
use neo3_types::Hash160;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

const DEFAULT_WALLET_NAME: &str = "neo3Wallet";

/// The wallet file version written by this implementation.
pub const CURRENT_VERSION: &str = "3.0";

static NEXT_WALLET_ID: AtomicU64 = AtomicU64::new(1);

/// A collection of accounts with one designated default account.
///
/// The wallet owns its accounts; an account can belong to at most one wallet
/// at a time, which is enforced through an opaque wallet id on the account
/// rather than a back pointer.
#[derive(Debug)]
pub struct Wallet {
    name: String,
    version: String,
    scrypt_params: ScryptParams,
    accounts: IndexMap<Hash160, Account>,
    default_account: Option<Hash160>,
    id: u64,
}

impl Wallet {
    /// Creates an empty wallet with default name, version and scrypt
    /// parameters.
    pub fn new() -> Self {
        Self {
            name: DEFAULT_WALLET_NAME.to_string(),
            version: CURRENT_VERSION.to_string(),
            scrypt_params: ScryptParams::default(),
            accounts: IndexMap::new(),
            default_account: None,
            id: NEXT_WALLET_ID.fetch_add(1, Ordering::Relaxed),
        }
    }

    /// Creates a wallet holding one fresh account, set as the default.
    pub fn create() -> Self {
        let account = Account::create();
        let hash = account.script_hash();
        let mut wallet = Self::new();
        wallet
            .add_accounts(vec![account])
            .expect("a fresh account belongs to no wallet");
        wallet
            .set_default_account(&hash)
            .expect("the account was just added");
        wallet
    }

    /// Creates a wallet holding one fresh account and encrypts it with the
    /// given passphrase.
    pub fn create_encrypted(password: &str) -> WalletResult<Self> {
        let mut wallet = Self::create();
        wallet.encrypt_all_accounts(password)?;
        Ok(wallet)
    }

    /// Creates a wallet from the given accounts; the first becomes the
    /// default account.
    pub fn with_accounts(accounts: Vec<Account>) -> WalletResult<Self> {
        let first_hash = accounts
            .first()
            .map(Account::script_hash)
            .ok_or(WalletError::NoAccounts)?;
        let mut wallet = Self::new();
        wallet.add_accounts(accounts)?;
        wallet.set_default_account(&first_hash)?;
        Ok(wallet)
    }

    /// The wallet's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replaces the wallet's name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// The wallet file version.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Replaces the wallet file version.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// The scrypt parameters used for account encryption.
    pub fn scrypt_params(&self) -> &ScryptParams {
        &self.scrypt_params
    }

    /// Replaces the scrypt parameters.
    pub fn with_scrypt_params(mut self, params: ScryptParams) -> Self {
        self.scrypt_params = params;
        self
    }

    /// The accounts, sorted by script hash.
    pub fn accounts(&self) -> Vec<&Account> {
        let mut entries: Vec<(&Hash160, &Account)> = self.accounts.iter().collect();
        entries.sort_by_key(|(hash, _)| **hash);
        entries.into_iter().map(|(_, account)| account).collect()
    }

    /// The number of accounts in the wallet.
    pub fn nr_of_accounts(&self) -> usize {
        self.accounts.len()
    }

    /// Adds the given accounts to this wallet.
    ///
    /// An account whose script hash is already present is skipped. Adding an
    /// account that currently belongs to a different wallet fails with
    /// [`WalletError::AlreadyInWallet`].
    pub fn add_accounts(&mut self, accounts: Vec<Account>) -> WalletResult<&mut Self> {
        for mut account in accounts {
            let hash = account.script_hash();
            if self.accounts.contains_key(&hash) {
                continue;
            }
            match account.wallet_id() {
                Some(id) if id != self.id => {
                    return Err(WalletError::AlreadyInWallet(account.address().to_string()))
                }
                _ => {}
            }
            account.set_wallet_id(Some(self.id));
            debug!("adding account {} to wallet {}", account.address(), self.name);
            self.accounts.insert(hash, account);
        }
        Ok(self)
    }

    /// Removes the account with the given script hash.
    ///
    /// Returns `false` when no such account exists. The sole remaining
    /// account cannot be removed. When the default account is removed,
    /// another account is promoted in iteration order.
    pub fn remove_account(&mut self, hash: &Hash160) -> WalletResult<bool> {
        if !self.accounts.contains_key(hash) {
            return Ok(false);
        }
        if self.accounts.len() == 1 {
            let address = self.accounts[0].address().to_string();
            return Err(WalletError::LastAccountGuard(address));
        }
        let removed = self.accounts.shift_remove(hash).expect("presence checked");
        debug!("removed account {} from wallet {}", removed.address(), self.name);

        if self.default_account.as_ref() == Some(hash) {
            let promoted = *self.accounts.keys().next().expect("wallet is not empty");
            warn!(
                "the removed account was the default; promoting {}",
                promoted.to_address_default()
            );
            self.default_account = Some(promoted);
        }
        Ok(true)
    }

    /// Designates the account with the given script hash as the default.
    ///
    /// Fails with [`WalletError::NotAMember`] when the account is not in
    /// this wallet.
    pub fn set_default_account(&mut self, hash: &Hash160) -> WalletResult<()> {
        if !self.accounts.contains_key(hash) {
            return Err(WalletError::NotAMember(hash.to_string()));
        }
        self.default_account = Some(*hash);
        Ok(())
    }

    /// The default account, once one has been designated.
    pub fn default_account(&self) -> Option<&Account> {
        self.default_account
            .as_ref()
            .and_then(|hash| self.accounts.get(hash))
    }

    /// Whether the account with the given script hash is the default.
    pub fn is_default(&self, hash: &Hash160) -> bool {
        self.default_account.as_ref() == Some(hash)
    }

    /// Whether the wallet holds an account with the given script hash.
    pub fn holds_account(&self, hash: &Hash160) -> bool {
        self.accounts.contains_key(hash)
    }

    /// The account with the given script hash, if it is in this wallet.
    pub fn get_account(&self, hash: &Hash160) -> Option<&Account> {
        self.accounts.get(hash)
    }

    /// Mutable access to the account with the given script hash.
    pub fn get_account_mut(&mut self, hash: &Hash160) -> Option<&mut Account> {
        self.accounts.get_mut(hash)
    }

    /// Encrypts every account's private key with the given passphrase.
    ///
    /// Stops at the first failing account; accounts processed before it stay
    /// encrypted.
    pub fn encrypt_all_accounts(&mut self, password: &str) -> WalletResult<()> {
        let params = self.scrypt_params;
        for account in self.accounts.values_mut() {
            account.encrypt_private_key(password, &params)?;
        }
        Ok(())
    }

    /// Decrypts every account's private key with the given passphrase.
    ///
    /// Stops at the first failing account; accounts processed before it stay
    /// decrypted.
    pub fn decrypt_all_accounts(&mut self, password: &str) -> WalletResult<()> {
        let params = self.scrypt_params;
        for account in self.accounts.values_mut() {
            account.decrypt_private_key(password, &params)?;
        }
        Ok(())
    }

    /// Converts the wallet to its NEP-6 document.
    pub fn to_nep6(&self) -> WalletResult<Nep6Wallet> {
        let accounts = self
            .accounts
            .iter()
            .map(|(hash, account)| account.to_nep6_account(self.is_default(hash)))
            .collect::<WalletResult<Vec<_>>>()?;
        Ok(Nep6Wallet {
            name: self.name.clone(),
            version: self.version.clone(),
            scrypt: self.scrypt_params,
            accounts,
            extra: None,
        })
    }

    /// Restores a wallet from its NEP-6 document.
    ///
    /// The document must designate exactly one default account among its
    /// members.
    pub fn from_nep6(nep6: &Nep6Wallet) -> WalletResult<Self> {
        let mut accounts = Vec::with_capacity(nep6.accounts.len());
        let mut default_hash = None;
        for entry in &nep6.accounts {
            let account = Account::from_nep6_account(entry)?;
            if entry.is_default {
                default_hash = Some(account.script_hash());
            }
            accounts.push(account);
        }
        let default_hash = default_hash.ok_or_else(|| {
            WalletError::NotAMember("no default account in the wallet document".to_string())
        })?;

        let mut wallet = Self::new()
            .with_name(nep6.name.clone())
            .with_version(nep6.version.clone())
            .with_scrypt_params(nep6.scrypt);
        wallet.add_accounts(accounts)?;
        wallet.set_default_account(&default_hash)?;
        Ok(wallet)
    }

    /// Serializes the wallet to a NEP-6 JSON string.
    pub fn to_json(&self) -> WalletResult<String> {
        Ok(serde_json::to_string(&self.to_nep6()?)?)
    }

    /// Writes the wallet as a NEP-6 file.
    pub fn save(&self, path: &Path) -> WalletResult<()> {
        debug!("saving wallet {} to {}", self.name, path.display());
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Loads a wallet from a NEP-6 file.
    pub fn load(path: &Path) -> WalletResult<Self> {
        debug!("loading wallet from {}", path.display());
        let contents = std::fs::read_to_string(path)?;
        let nep6: Nep6Wallet = serde_json::from_str(&contents)?;
        Self::from_nep6(&nep6)
    }

}

impl Default for Wallet {
    fn default() -> Self {
        Self::new()
    }
}
