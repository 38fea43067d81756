//! The NEP-6 wallet document.
//!
//! These structs mirror the persisted JSON one to one. Field order in the
//! serialized output follows the declaration order here, so loading a wallet
//! and saving it again reproduces the same document for the same object
//! graph.

use crate::scrypt_params::ScryptParams;
use neo3_types::ContractParameterType;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A persisted wallet file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Nep6Wallet {
    pub name: String,
    pub version: String,
    pub scrypt: ScryptParams,
    pub accounts: Vec<Nep6Account>,
    pub extra: Option<Value>,
}

/// An account entry of a persisted wallet file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Nep6Account {
    pub address: String,
    pub label: Option<String>,
    #[serde(rename = "isDefault")]
    pub is_default: bool,
    pub lock: bool,
    /// The NEP-2 encrypted private key, absent for watch-only accounts.
    pub key: Option<String>,
    pub contract: Option<Nep6Contract>,
    pub extra: Option<Value>,
}

/// The contract section of a persisted account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Nep6Contract {
    /// The verification script, base-64 encoded.
    pub script: String,
    pub parameters: Vec<Nep6Parameter>,
    pub deployed: bool,
}

/// A parameter of a persisted contract section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Nep6Parameter {
    #[serde(rename = "name")]
    pub param_name: String,
    #[serde(rename = "type")]
    pub param_type: ContractParameterType,
}
