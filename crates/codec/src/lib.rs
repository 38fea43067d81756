//! Byte-array and numeric codecs used across the neo3 SDK.
//!
//! Everything the protocol encodes ultimately reduces to three concerns that
//! live here: plain byte-array manipulation (reversal for endianness flips,
//! concatenation, slicing, XOR), a strict hexadecimal codec, and conversions
//! between big integers and the two's-complement little-endian byte form the
//! NeoVM uses.

pub mod array;
pub mod bigint;
pub mod error;
pub mod hexutil;

pub use array::{concatenate, first_n, last_n, reverse, xor};
pub use bigint::{
    from_twos_complement_le, to_bytes_padded, to_twos_complement_le,
    to_twos_complement_le_padded,
};
pub use error::{CodecError, CodecResult};
pub use hexutil::{clean_hex_prefix, decode_hex, encode_hex, encode_hex_prefixed, is_valid_hex};
