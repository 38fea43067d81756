//! Programmatic construction of NeoVM scripts.

use crate::call_flags::CallFlags;
use crate::error::{ScriptError, ScriptResult};
use crate::interop_service::InteropService;
use crate::op_code::OpCode;
use neo3_codec::to_twos_complement_le;
use neo3_types::{ContractParameter, Hash160, ParameterValue};
use num_bigint::BigInt;
use num_traits::ToPrimitive;

/// An append-only byte buffer with helpers for the NeoVM instruction
/// encoding.
///
/// All multi-byte header integers are little-endian. The buffer only grows;
/// [`ScriptBuilder::to_bytes`] takes an immutable snapshot.
pub struct ScriptBuilder {
    script: Vec<u8>,
}

impl ScriptBuilder {
    /// Creates an empty script builder.
    pub fn new() -> Self {
        Self { script: Vec::new() }
    }

    /// Appends the given opcodes in order.
    pub fn op_code(&mut self, op_codes: &[OpCode]) -> &mut Self {
        for op in op_codes {
            self.script.push(op.byte());
        }
        self
    }

    /// Appends an opcode followed by its operand bytes.
    pub fn op_code_with_arg(&mut self, op_code: OpCode, argument: &[u8]) -> &mut Self {
        self.script.push(op_code.byte());
        self.script.extend_from_slice(argument);
        self
    }

    /// Pushes a boolean value.
    pub fn push_boolean(&mut self, value: bool) -> &mut Self {
        if value {
            self.op_code(&[OpCode::PUSHT])
        } else {
            self.op_code(&[OpCode::PUSHF])
        }
    }

    /// Pushes an integer.
    ///
    /// −1 and 0..=16 use their dedicated single-byte opcodes; any other value
    /// is pushed as a data array holding its two's complement in
    /// little-endian order.
    pub fn push_integer(&mut self, value: impl Into<BigInt>) -> &mut Self {
        let value = value.into();
        if value == BigInt::from(-1) {
            return self.op_code(&[OpCode::PUSHM1]);
        }
        if value >= BigInt::from(0) && value <= BigInt::from(16) {
            let small = value.to_u8().expect("value is in 0..=16");
            self.script.push(OpCode::PUSH0.byte() + small);
            return self;
        }
        let bytes = to_twos_complement_le(&value);
        self.push_data(&bytes)
    }

    /// Pushes a data array, prefixed with the correct header for its length.
    ///
    /// Lengths below 256 use `PUSHDATA1` with a one-byte length, lengths
    /// below 65536 use `PUSHDATA2` with a two-byte little-endian length, and
    /// anything larger uses `PUSHDATA4` with a four-byte little-endian
    /// length.
    pub fn push_data(&mut self, data: &[u8]) -> &mut Self {
        if data.len() < 256 {
            self.op_code(&[OpCode::PUSHDATA1]);
            self.script.push(data.len() as u8);
        } else if data.len() < 65536 {
            self.op_code(&[OpCode::PUSHDATA2]);
            self.script
                .extend_from_slice(&(data.len() as u16).to_le_bytes());
        } else {
            self.op_code(&[OpCode::PUSHDATA4]);
            self.script
                .extend_from_slice(&(data.len() as u32).to_le_bytes());
        }
        self.script.extend_from_slice(data);
        self
    }

    /// Pushes a string's UTF-8 bytes as a data array.
    pub fn push_string(&mut self, value: &str) -> &mut Self {
        self.push_data(value.as_bytes())
    }

    /// Appends a call to the given interop service.
    pub fn sys_call(&mut self, service: InteropService) -> &mut Self {
        self.op_code_with_arg(OpCode::SYSCALL, &service.hash())
    }

    /// Pushes a contract parameter according to its type.
    ///
    /// Fails with [`ScriptError::UnsupportedParameterType`] for types that
    /// have no stack representation.
    pub fn push_param(&mut self, param: &ContractParameter) -> ScriptResult<&mut Self> {
        match param.value() {
            ParameterValue::Any => {
                self.op_code(&[OpCode::PUSHNULL]);
            }
            ParameterValue::Boolean(b) => {
                self.push_boolean(*b);
            }
            ParameterValue::Integer(i) => {
                self.push_integer(i.clone());
            }
            ParameterValue::ByteArray(bytes)
            | ParameterValue::PublicKey(bytes)
            | ParameterValue::Signature(bytes) => {
                self.push_data(bytes);
            }
            ParameterValue::String(s) => {
                self.push_string(s);
            }
            ParameterValue::Hash160(h) => {
                self.push_data(&h.to_le_bytes());
            }
            ParameterValue::Hash256(h) => {
                self.push_data(&h.to_le_bytes());
            }
            ParameterValue::Array(entries) => {
                self.push_array_entries(entries)?;
            }
            ParameterValue::Map(entries) => {
                self.push_map_entries(entries)?;
            }
            ParameterValue::InteropInterface(_) | ParameterValue::Void => {
                return Err(ScriptError::UnsupportedParameterType(
                    param.param_type().to_string(),
                ))
            }
        }
        Ok(self)
    }

    /// Pushes a parameter list for an invocation.
    ///
    /// Elements are pushed in reverse order followed by the element count and
    /// `PACK`, matching the VM's stack-based array construction. An empty
    /// list produces `PUSH0 ‖ PACK`.
    pub fn push_params(&mut self, params: &[ContractParameter]) -> ScriptResult<&mut Self> {
        for param in params.iter().rev() {
            self.push_param(param)?;
        }
        self.push_integer(params.len() as i64);
        Ok(self.pack())
    }

    fn push_array_entries(&mut self, entries: &[ContractParameter]) -> ScriptResult<()> {
        for entry in entries.iter().rev() {
            self.push_param(entry)?;
        }
        self.push_integer(entries.len() as i64);
        self.pack();
        Ok(())
    }

    fn push_map_entries(
        &mut self,
        entries: &[(ContractParameter, ContractParameter)],
    ) -> ScriptResult<()> {
        self.op_code(&[OpCode::NEWMAP]);
        for (key, value) in entries {
            self.op_code(&[OpCode::DUP]);
            self.push_param(key)?;
            self.push_param(value)?;
            self.op_code(&[OpCode::SETITEM]);
        }
        Ok(())
    }

    /// Appends a `PACK` instruction.
    pub fn pack(&mut self) -> &mut Self {
        self.op_code(&[OpCode::PACK])
    }

    /// Appends a call to a method of the contract with the given script hash.
    ///
    /// The parameters need to be in the order the method expects.
    pub fn contract_call(
        &mut self,
        contract_hash: &Hash160,
        method: &str,
        params: &[ContractParameter],
        call_flags: CallFlags,
    ) -> ScriptResult<&mut Self> {
        if params.is_empty() {
            self.op_code(&[OpCode::NEWARRAY0]);
        } else {
            self.push_params(params)?;
        }
        self.push_integer(call_flags.value() as i64);
        self.push_string(method);
        self.push_data(&contract_hash.to_le_bytes());
        Ok(self.sys_call(InteropService::SystemContractCall))
    }

    /// The current script length in bytes.
    pub fn len(&self) -> usize {
        self.script.len()
    }

    /// Whether nothing has been emitted yet.
    pub fn is_empty(&self) -> bool {
        self.script.is_empty()
    }

    /// Snapshots the script as an immutable byte vector.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.script.clone()
    }
}

impl Default for ScriptBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;
    use neo3_codec::encode_hex;

    fn header_of(data_len: usize) -> Vec<u8> {
        let mut builder = ScriptBuilder::new();
        builder.push_data(&vec![0u8; data_len]);
        let bytes = builder.to_bytes();
        bytes[..bytes.len() - data_len].to_vec()
    }

    #[test]
    fn test_push_data_headers() {
        assert_eq!(encode_hex(&header_of(1)), "0c01");
        assert_eq!(encode_hex(&header_of(75)), "0c4b");
        assert_eq!(encode_hex(&header_of(255)), "0cff");
        assert_eq!(encode_hex(&header_of(256)), "0d0001");
        assert_eq!(encode_hex(&header_of(65535)), "0dffff");
        assert_eq!(encode_hex(&header_of(65536)), "0e00000100");
    }

    #[test]
    fn test_push_integer_small_values() {
        let mut builder = ScriptBuilder::new();
        builder
            .push_integer(-1)
            .push_integer(0)
            .push_integer(10)
            .push_integer(16);
        assert_eq!(builder.to_bytes(), vec![0x0f, 0x10, 0x1a, 0x20]);
    }

    #[test]
    fn test_push_integer_large_values_are_data_pushes() {
        let mut builder = ScriptBuilder::new();
        builder.push_integer(17);
        assert_eq!(builder.to_bytes(), hex!("0c0111").to_vec());

        let mut builder = ScriptBuilder::new();
        builder.push_integer(300);
        assert_eq!(builder.to_bytes(), hex!("0c022c01").to_vec());

        let mut builder = ScriptBuilder::new();
        builder.push_integer(-2);
        assert_eq!(builder.to_bytes(), hex!("0c01fe").to_vec());
    }

    #[test]
    fn test_push_boolean() {
        let mut builder = ScriptBuilder::new();
        builder.push_boolean(true).push_boolean(false);
        assert_eq!(
            builder.to_bytes(),
            vec![OpCode::PUSHT.byte(), OpCode::PUSHF.byte()]
        );
    }

    #[test]
    fn test_sys_call() {
        let mut builder = ScriptBuilder::new();
        builder.sys_call(InteropService::SystemContractCall);
        assert_eq!(builder.to_bytes(), hex!("41627d5b52").to_vec());
    }

    #[test]
    fn test_push_string() {
        let mut builder = ScriptBuilder::new();
        builder.push_string("transfer");
        assert_eq!(builder.to_bytes(), hex!("0c087472616e73666572").to_vec());
    }

    #[test]
    fn test_push_array_param_reverses_elements() {
        let array = ContractParameter::array(vec![1.into(), 2.into(), 3.into()]).unwrap();
        let mut builder = ScriptBuilder::new();
        builder.push_param(&array).unwrap();
        // 3, 2, 1 pushed, then the count and PACK.
        assert_eq!(
            builder.to_bytes(),
            vec![0x13, 0x12, 0x11, 0x13, OpCode::PACK.byte()]
        );
    }

    #[test]
    fn test_push_map_param() {
        let map = ContractParameter::map(vec![(1.into(), "first".into())]).unwrap();
        let mut builder = ScriptBuilder::new();
        builder.push_param(&map).unwrap();
        let mut expected = vec![OpCode::NEWMAP.byte(), OpCode::DUP.byte(), 0x11];
        expected.extend_from_slice(&hex!("0c056669727374"));
        expected.push(OpCode::SETITEM.byte());
        assert_eq!(builder.to_bytes(), expected);
    }

    #[test]
    fn test_push_params_empty_list() {
        let mut builder = ScriptBuilder::new();
        builder.push_params(&[]).unwrap();
        assert_eq!(
            builder.to_bytes(),
            vec![OpCode::PUSH0.byte(), OpCode::PACK.byte()]
        );
    }

    #[test]
    fn test_unsupported_param_types_rejected() {
        let mut builder = ScriptBuilder::new();
        assert!(matches!(
            builder.push_param(&ContractParameter::void()),
            Err(ScriptError::UnsupportedParameterType(_))
        ));
        assert!(builder
            .push_param(&ContractParameter::interop_interface("iterator"))
            .is_err());
    }

    #[test]
    fn test_push_any_is_null() {
        let mut builder = ScriptBuilder::new();
        builder.push_param(&ContractParameter::any()).unwrap();
        assert_eq!(builder.to_bytes(), vec![OpCode::PUSHNULL.byte()]);
    }

    #[test]
    fn test_hash_params_push_little_endian() {
        let hash = Hash160::from_hex("23ba2703c53263e8d6e522dc32203339dcd8eee9").unwrap();
        let mut builder = ScriptBuilder::new();
        builder.push_param(&ContractParameter::hash160(hash)).unwrap();
        let mut expected = vec![0x0c, 0x14];
        expected.extend_from_slice(&hash.to_le_bytes());
        assert_eq!(builder.to_bytes(), expected);
    }

    #[test]
    fn test_contract_call() {
        let contract = Hash160::from_hex("de5f57d430d3dece511cf975a8d37848cb9e0525").unwrap();
        let mut builder = ScriptBuilder::new();
        builder
            .contract_call(&contract, "symbol", &[], CallFlags::All)
            .unwrap();
        let bytes = builder.to_bytes();
        assert_eq!(bytes[0], OpCode::NEWARRAY0.byte());
        // Call flags 15, method name, contract hash, syscall.
        assert_eq!(bytes[1], 0x1f);
        assert_eq!(&bytes[2..10], &hex!("0c0673796d626f6c"));
        assert_eq!(&bytes[10..12], &hex!("0c14"));
        assert_eq!(&bytes[12..32], &contract.to_le_bytes());
        assert_eq!(&bytes[32..], &hex!("41627d5b52"));
    }
}
