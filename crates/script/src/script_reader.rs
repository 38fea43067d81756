//! Minimal cursor over script bytes, used for structural analysis.

use crate::error::{ScriptError, ScriptResult};
use crate::op_code::OpCode;
use neo3_codec::from_twos_complement_le;
use num_bigint::BigInt;
use num_traits::ToPrimitive;

pub(crate) struct ScriptReader<'a> {
    bytes: &'a [u8],
    position: usize,
}

impl<'a> ScriptReader<'a> {
    pub(crate) fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, position: 0 }
    }

    pub(crate) fn remaining(&self) -> usize {
        self.bytes.len() - self.position
    }

    pub(crate) fn read_byte(&mut self) -> ScriptResult<u8> {
        let byte = *self.bytes.get(self.position).ok_or_else(|| {
            ScriptError::InvalidScriptFormat("unexpected end of script".to_string())
        })?;
        self.position += 1;
        Ok(byte)
    }

    pub(crate) fn peek_byte(&self) -> ScriptResult<u8> {
        self.bytes.get(self.position).copied().ok_or_else(|| {
            ScriptError::InvalidScriptFormat("unexpected end of script".to_string())
        })
    }

    pub(crate) fn read_bytes(&mut self, count: usize) -> ScriptResult<&'a [u8]> {
        if self.remaining() < count {
            return Err(ScriptError::InvalidScriptFormat(
                "unexpected end of script".to_string(),
            ));
        }
        let slice = &self.bytes[self.position..self.position + count];
        self.position += count;
        Ok(slice)
    }

    /// Reads an integer push in any of the encodings a script may carry:
    /// the dedicated small-integer opcodes, the `PUSHINT*` family, or a
    /// data push of little-endian two's-complement bytes.
    pub(crate) fn read_push_integer(&mut self) -> ScriptResult<BigInt> {
        let opcode = self.read_byte()?;
        if opcode == OpCode::PUSHM1.byte() {
            return Ok(BigInt::from(-1));
        }
        if (OpCode::PUSH0.byte()..=OpCode::PUSH16.byte()).contains(&opcode) {
            return Ok(BigInt::from(opcode - OpCode::PUSH0.byte()));
        }
        let operand_len = match OpCode::from_byte(opcode) {
            Some(OpCode::PUSHINT8) => 1,
            Some(OpCode::PUSHINT16) => 2,
            Some(OpCode::PUSHINT32) => 4,
            Some(OpCode::PUSHINT64) => 8,
            Some(OpCode::PUSHINT128) => 16,
            Some(OpCode::PUSHINT256) => 32,
            Some(OpCode::PUSHDATA1) => {
                let len = self.read_byte()? as usize;
                return Ok(from_twos_complement_le(self.read_bytes(len)?));
            }
            _ => {
                return Err(ScriptError::InvalidScriptFormat(format!(
                    "opcode 0x{opcode:02x} is not an integer push"
                )))
            }
        };
        Ok(from_twos_complement_le(self.read_bytes(operand_len)?))
    }

    /// Like [`Self::read_push_integer`], but converted to `usize`.
    pub(crate) fn read_push_usize(&mut self) -> ScriptResult<usize> {
        self.read_push_integer()?.to_usize().ok_or_else(|| {
            ScriptError::InvalidScriptFormat("pushed integer out of range".to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_integer_opcodes() {
        let script = [0x0f, 0x10, 0x11, 0x20];
        let mut reader = ScriptReader::new(&script);
        assert_eq!(reader.read_push_integer().unwrap(), BigInt::from(-1));
        assert_eq!(reader.read_push_integer().unwrap(), BigInt::from(0));
        assert_eq!(reader.read_push_integer().unwrap(), BigInt::from(1));
        assert_eq!(reader.read_push_integer().unwrap(), BigInt::from(16));
    }

    #[test]
    fn test_pushint_operands() {
        // PUSHINT8 17, PUSHINT16 -2
        let script = [0x00, 0x11, 0x01, 0xfe, 0xff];
        let mut reader = ScriptReader::new(&script);
        assert_eq!(reader.read_push_integer().unwrap(), BigInt::from(17));
        assert_eq!(reader.read_push_integer().unwrap(), BigInt::from(-2));
    }

    #[test]
    fn test_data_pushed_integer() {
        // PUSHDATA1, length 2, 300 as little-endian two's complement.
        let script = [0x0c, 0x02, 0x2c, 0x01];
        let mut reader = ScriptReader::new(&script);
        assert_eq!(reader.read_push_integer().unwrap(), BigInt::from(300));
    }

    #[test]
    fn test_non_integer_push_rejected() {
        let script = [0x41, 0x00];
        let mut reader = ScriptReader::new(&script);
        assert!(reader.read_push_integer().is_err());
    }

    #[test]
    fn test_truncated_script() {
        let script = [0x00];
        let mut reader = ScriptReader::new(&script);
        assert!(reader.read_push_integer().is_err());
    }
}
