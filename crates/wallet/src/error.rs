//! Error types for accounts and wallets.

use thiserror::Error;

/// Result type for wallet operations.
pub type WalletResult<T> = std::result::Result<T, WalletError>;

/// Errors produced by account lifecycle and wallet aggregate operations.
#[derive(Error, Debug)]
pub enum WalletError {
    /// An operation needed key material the account does not hold, or would
    /// overwrite material it must not.
    #[error("account state: {0}")]
    AccountState(String),

    /// The account already belongs to a different wallet.
    #[error("the account {0} is already contained in a wallet; remove it there first")]
    AlreadyInWallet(String),

    /// The sole remaining account cannot be removed.
    #[error("the account {0} is the only account in the wallet and cannot be removed")]
    LastAccountGuard(String),

    /// The designated default account must be a wallet member.
    #[error("the wallet does not contain an account with script hash {0}")]
    NotAMember(String),

    /// A wallet needs at least one account for this operation.
    #[error("no accounts provided")]
    NoAccounts,

    /// The decrypted key did not reproduce the expected address.
    #[error("the passphrase did not decrypt to the expected key")]
    InvalidPassphrase,

    /// An encrypted-key string failed its structural checks.
    #[error("invalid NEP-2 data: {0}")]
    Nep2Format(String),

    /// Key derivation failed.
    #[error("scrypt failure: {0}")]
    Scrypt(String),

    /// Mnemonic handling failed.
    #[error("invalid mnemonic: {0}")]
    Bip39(String),

    /// Wallet-file serialization failed.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Wallet-file I/O failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Key or signature handling failed.
    #[error(transparent)]
    Crypto(#[from] neo3_crypto::CryptoError),

    /// Typed value handling failed.
    #[error(transparent)]
    Types(#[from] neo3_types::TypeError),

    /// Script construction or analysis failed.
    #[error(transparent)]
    Script(#[from] neo3_script::ScriptError),
}
