//! Byte-array manipulation helpers.
//!
//! Endianness flips in the protocol are plain byte reversals, so `reverse` is
//! the workhorse here. `concatenate` accepts optional slices and skips the
//! absent ones, which keeps call sites that assemble payloads from optional
//! parts free of branching.

use crate::error::{CodecError, CodecResult};

/// Returns a reversed copy of the given bytes.
pub fn reverse(bytes: &[u8]) -> Vec<u8> {
    let mut copy = bytes.to_vec();
    copy.reverse();
    copy
}

/// Concatenates the given byte slices in order, skipping `None` entries.
pub fn concatenate(parts: &[Option<&[u8]>]) -> Vec<u8> {
    let len = parts.iter().flatten().map(|p| p.len()).sum();
    let mut result = Vec::with_capacity(len);
    for part in parts.iter().flatten() {
        result.extend_from_slice(part);
    }
    result
}

/// Returns the first `n` bytes of the given slice.
///
/// If the slice is shorter than `n`, the whole slice is returned.
pub fn first_n(bytes: &[u8], n: usize) -> Vec<u8> {
    bytes[..n.min(bytes.len())].to_vec()
}

/// Returns the last `n` bytes of the given slice.
///
/// If the slice is shorter than `n`, the whole slice is returned.
pub fn last_n(bytes: &[u8], n: usize) -> Vec<u8> {
    bytes[bytes.len() - n.min(bytes.len())..].to_vec()
}

/// XORs two equal-length byte slices.
///
/// Fails with [`CodecError::LengthMismatch`] if the lengths differ.
pub fn xor(a: &[u8], b: &[u8]) -> CodecResult<Vec<u8>> {
    if a.len() != b.len() {
        return Err(CodecError::LengthMismatch(a.len(), b.len()));
    }
    Ok(a.iter().zip(b.iter()).map(|(x, y)| x ^ y).collect())
}
