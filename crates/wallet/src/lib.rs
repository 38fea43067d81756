//! Account and wallet management for the neo3 SDK.
//!
//! This crate composes the lower layers into the mutable wallet aggregate:
//! NEP-2 password-based key encryption, accounts whose key material moves
//! through an explicit encryption lifecycle, and the NEP-6 wallet document
//! with its persisted-file round trip.

pub mod account;
pub mod error;
pub mod nep2;
pub mod nep6;
pub mod scrypt_params;
pub mod wallet;

pub use account::Account;
pub use error::{WalletError, WalletResult};
pub use nep6::{Nep6Account, Nep6Contract, Nep6Parameter, Nep6Wallet};
pub use scrypt_params::ScryptParams;
pub use wallet::Wallet;
