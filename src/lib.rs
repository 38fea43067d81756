//! # neo3
//!
//! A Rust SDK for the Neo N3 blockchain. It derives cryptographic
//! identities, builds the executable scripts those identities use to
//! authorize actions, and encodes typed values into both the binary form the
//! NeoVM executes and the JSON form the network's nodes exchange.
//!
//! The crate is a facade over the workspace members:
//!
//! - [`codec`]: byte-array and numeric codecs
//! - [`crypto`]: hashing, secp256r1 key pairs, deterministic ECDSA, WIF
//! - [`types`]: `Hash160`/`Hash256`, the address codec, contract parameters
//! - [`script`]: opcodes, script builder, verification/invocation scripts
//! - [`wallet`]: NEP-2 key encryption, accounts and NEP-6 wallets
//!
//! ## Example
//!
//! ```rust
//! use neo3::crypto::ECKeyPair;
//! use neo3::script::public_key_to_script_hash;
//! use neo3::types::DEFAULT_ADDRESS_VERSION;
//!
//! let key_pair = ECKeyPair::generate();
//! let script_hash = public_key_to_script_hash(key_pair.public_key());
//! let address = script_hash.to_address(DEFAULT_ADDRESS_VERSION);
//! assert!(address.starts_with('N'));
//! ```

pub use neo3_codec as codec;
pub use neo3_crypto as crypto;
pub use neo3_script as script;
pub use neo3_types as types;
pub use neo3_wallet as wallet;

// The types a typical embedder touches, re-exported at the top level.
pub use neo3_crypto::{ECKeyPair, ECPrivateKey, ECPublicKey, SignatureData};
pub use neo3_script::{
    InvocationScript, OpCode, ScriptBuilder, VerificationScript, Witness,
};
pub use neo3_types::{ContractParameter, ContractParameterType, Hash160, Hash256};
pub use neo3_wallet::{Account, ScryptParams, Wallet};
