//! Typed values of the neo3 SDK.
//!
//! This crate provides the fixed-length hash identifiers (`Hash160`,
//! `Hash256`) with their endianness rules, the checksummed base-58 address
//! codec, and the typed contract parameter model with its JSON wire form.

pub mod address;
pub mod contract_parameter;
pub mod error;
pub mod hash160;
pub mod hash256;
pub mod parameter_type;

pub use address::{
    address_to_script_hash, is_valid_address, script_hash_to_address, DEFAULT_ADDRESS_VERSION,
};
pub use contract_parameter::{ContractParameter, ParameterValue};
pub use error::{TypeError, TypeResult};
pub use hash160::Hash160;
pub use hash256::Hash256;
pub use parameter_type::ContractParameterType;

/// Byte length of a [`Hash160`].
pub const HASH160_SIZE: usize = 20;

/// Byte length of a [`Hash256`].
pub const HASH256_SIZE: usize = 32;
