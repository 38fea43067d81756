//! Big-integer byte codecs.
//!
//! The NeoVM represents integers as two's complement in little-endian order,
//! while key material is carried as unsigned big-endian. Both conversions and
//! their fixed-width padded variants live here.

use crate::error::{CodecError, CodecResult};
use num_bigint::{BigInt, Sign};

/// Encodes the integer as minimal two's complement in little-endian order.
pub fn to_twos_complement_le(value: &BigInt) -> Vec<u8> {
    value.to_signed_bytes_le()
}

/// Decodes a two's-complement little-endian byte array into an integer.
pub fn from_twos_complement_le(bytes: &[u8]) -> BigInt {
    BigInt::from_signed_bytes_le(bytes)
}

/// Encodes a non-negative integer as unsigned big-endian, zero-padded to
/// exactly `length` bytes.
///
/// Fails with [`CodecError::Overflow`] if the magnitude needs more than
/// `length` bytes, and with [`CodecError::NegativeUnsigned`] for negative
/// input.
pub fn to_bytes_padded(value: &BigInt, length: usize) -> CodecResult<Vec<u8>> {
    if value.sign() == Sign::Minus {
        return Err(CodecError::NegativeUnsigned);
    }
    let (_, magnitude) = value.to_bytes_be();
    let needed = if magnitude.is_empty() { 1 } else { magnitude.len() };
    if needed > length {
        return Err(CodecError::Overflow {
            needed,
            available: length,
        });
    }
    let mut padded = vec![0u8; length];
    padded[length - magnitude.len()..].copy_from_slice(&magnitude);
    Ok(padded)
}

/// Encodes the integer as two's complement in little-endian order, padded to
/// exactly `length` bytes.
///
/// Non-negative values are padded with `0x00`, negative values are
/// sign-extended with `0xff`. Fails with [`CodecError::Overflow`] if the
/// minimal encoding is already longer than `length`.
pub fn to_twos_complement_le_padded(value: &BigInt, length: usize) -> CodecResult<Vec<u8>> {
    let bytes = value.to_signed_bytes_le();
    if bytes.len() > length {
        return Err(CodecError::Overflow {
            needed: bytes.len(),
            available: length,
        });
    }
    let fill = if value.sign() == Sign::Minus { 0xff } else { 0x00 };
    let mut padded = vec![fill; length];
    padded[..bytes.len()].copy_from_slice(&bytes);
    Ok(padded)
}
