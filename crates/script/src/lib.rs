//! NeoVM script construction for the neo3 SDK.
//!
//! This crate emits the bytecode wallets need: general value pushes through
//! [`ScriptBuilder`], the fixed-format verification scripts that prove
//! single- and multi-signature ownership, the invocation scripts carrying
//! signatures, and the witness pair combining the two.

pub mod call_flags;
pub mod error;
pub mod interop_service;
pub mod invocation_script;
pub mod op_code;
pub mod script_builder;
mod script_reader;
pub mod verification_script;
pub mod witness;

pub use call_flags::CallFlags;
pub use error::{ScriptError, ScriptResult};
pub use interop_service::InteropService;
pub use invocation_script::InvocationScript;
pub use op_code::OpCode;
pub use script_builder::ScriptBuilder;
pub use verification_script::{public_key_to_script_hash, VerificationScript};
pub use witness::Witness;

/// Maximum number of public keys in a multi-sig account.
pub const MAX_PUBLIC_KEYS_PER_MULTISIG_ACCOUNT: usize = 1024;

/// Byte length of a single-sig verification script:
/// PUSHDATA1 + length byte + 33-byte key + PUSHNULL + SYSCALL + 4-byte id.
pub const VERIFICATION_SCRIPT_SIZE: usize = 41;

/// Byte length of a single-signature invocation script:
/// PUSHDATA1 + length byte + 64-byte signature.
pub const INVOCATION_SCRIPT_SIZE: usize = 66;
