//! Typed contract invocation parameters.
//!
//! A contract parameter is a named, typed value used as input or output of a
//! contract invocation. The JSON form defined here is the boundary format the
//! RPC layer exchanges with nodes; the binary script-push form is produced by
//! the script builder, which walks these values.

use crate::error::{TypeError, TypeResult};
use crate::hash160::Hash160;
use crate::hash256::Hash256;
use crate::parameter_type::ContractParameterType;
use neo3_codec::{decode_hex, encode_hex};
use neo3_crypto::{ECPublicKey, SignatureData, PUBLIC_KEY_SIZE_COMPRESSED, SIGNATURE_SIZE};
use num_bigint::BigInt;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{json, Map as JsonMap, Value};
use std::str::FromStr;

/// The type-dependent payload of a [`ContractParameter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParameterValue {
    /// A value of no particular type; carried as null.
    Any,
    Boolean(bool),
    Integer(BigInt),
    ByteArray(Vec<u8>),
    String(String),
    Hash160(Hash160),
    Hash256(Hash256),
    /// A compressed SEC1 public key, 33 bytes.
    PublicKey(Vec<u8>),
    /// A fixed-width `r ‖ s` signature, 64 bytes.
    Signature(Vec<u8>),
    /// An ordered sequence of nested parameters.
    Array(Vec<ContractParameter>),
    /// Key-value pairs in insertion order. Keys cannot be arrays or maps.
    Map(Vec<(ContractParameter, ContractParameter)>),
    InteropInterface(String),
    Void,
}

impl ParameterValue {
    /// The type tag of this value.
    pub fn param_type(&self) -> ContractParameterType {
        match self {
            ParameterValue::Any => ContractParameterType::Any,
            ParameterValue::Boolean(_) => ContractParameterType::Boolean,
            ParameterValue::Integer(_) => ContractParameterType::Integer,
            ParameterValue::ByteArray(_) => ContractParameterType::ByteArray,
            ParameterValue::String(_) => ContractParameterType::String,
            ParameterValue::Hash160(_) => ContractParameterType::Hash160,
            ParameterValue::Hash256(_) => ContractParameterType::Hash256,
            ParameterValue::PublicKey(_) => ContractParameterType::PublicKey,
            ParameterValue::Signature(_) => ContractParameterType::Signature,
            ParameterValue::Array(_) => ContractParameterType::Array,
            ParameterValue::Map(_) => ContractParameterType::Map,
            ParameterValue::InteropInterface(_) => ContractParameterType::InteropInterface,
            ParameterValue::Void => ContractParameterType::Void,
        }
    }
}

/// A typed, optionally named contract invocation parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractParameter {
    name: Option<String>,
    value: ParameterValue,
}

impl ContractParameter {
    /// Creates a parameter from a raw value.
    pub fn new(value: ParameterValue) -> Self {
        Self { name: None, value }
    }

    /// Attaches a name to the parameter.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Creates an untyped null parameter.
    pub fn any() -> Self {
        Self::new(ParameterValue::Any)
    }

    /// Creates a boolean parameter.
    pub fn boolean(value: bool) -> Self {
        Self::new(ParameterValue::Boolean(value))
    }

    /// Creates an integer parameter.
    pub fn integer(value: impl Into<BigInt>) -> Self {
        Self::new(ParameterValue::Integer(value.into()))
    }

    /// Creates a byte-array parameter.
    ///
    /// The bytes are taken as given; callers are responsible for the byte
    /// order their contract expects.
    pub fn byte_array(bytes: impl Into<Vec<u8>>) -> Self {
        Self::new(ParameterValue::ByteArray(bytes.into()))
    }

    /// Creates a byte-array parameter from a hex string.
    pub fn byte_array_from_hex(hex: &str) -> TypeResult<Self> {
        Ok(Self::byte_array(decode_hex(hex)?))
    }

    /// Creates a byte-array parameter from a string's UTF-8 bytes.
    pub fn byte_array_from_string(value: &str) -> Self {
        Self::byte_array(value.as_bytes().to_vec())
    }

    /// Creates a string parameter.
    pub fn string(value: impl Into<String>) -> Self {
        Self::new(ParameterValue::String(value.into()))
    }

    /// Creates a script-hash parameter.
    pub fn hash160(hash: Hash160) -> Self {
        Self::new(ParameterValue::Hash160(hash))
    }

    /// Creates a 256-bit-hash parameter.
    pub fn hash256(hash: Hash256) -> Self {
        Self::new(ParameterValue::Hash256(hash))
    }

    /// Creates a 256-bit-hash parameter from 32 big-endian bytes.
    pub fn hash256_from_bytes(bytes: &[u8]) -> TypeResult<Self> {
        Ok(Self::hash256(Hash256::from_bytes(bytes)?))
    }

    /// Creates a public-key parameter from a compressed 33-byte encoding.
    pub fn public_key_from_bytes(bytes: &[u8]) -> TypeResult<Self> {
        if bytes.len() != PUBLIC_KEY_SIZE_COMPRESSED {
            return Err(TypeError::InvalidLength {
                expected: PUBLIC_KEY_SIZE_COMPRESSED,
                actual: bytes.len(),
            });
        }
        Ok(Self::new(ParameterValue::PublicKey(bytes.to_vec())))
    }

    /// Creates a public-key parameter from a hex string.
    pub fn public_key_from_hex(hex: &str) -> TypeResult<Self> {
        Self::public_key_from_bytes(&decode_hex(hex)?)
    }

    /// Creates a public-key parameter from a key.
    pub fn public_key(key: &ECPublicKey) -> Self {
        Self::new(ParameterValue::PublicKey(
            key.encoded_compressed().to_vec(),
        ))
    }

    /// Creates a signature parameter from the fixed 64-byte form.
    pub fn signature(bytes: &[u8]) -> TypeResult<Self> {
        if bytes.len() != SIGNATURE_SIZE {
            return Err(TypeError::InvalidLength {
                expected: SIGNATURE_SIZE,
                actual: bytes.len(),
            });
        }
        Ok(Self::new(ParameterValue::Signature(bytes.to_vec())))
    }

    /// Creates a signature parameter from a hex string.
    pub fn signature_from_hex(hex: &str) -> TypeResult<Self> {
        Self::signature(&decode_hex(hex)?)
    }

    /// Creates a signature parameter from signature data.
    pub fn signature_data(signature: &SignatureData) -> Self {
        Self::new(ParameterValue::Signature(signature.concatenated().to_vec()))
    }

    /// Creates an array parameter from the given entries.
    ///
    /// At least one entry is required; entries auto-box through the `From`
    /// conversions on [`ContractParameter`].
    pub fn array(entries: Vec<ContractParameter>) -> TypeResult<Self> {
        if entries.is_empty() {
            return Err(TypeError::InvalidParameterValue(
                "an array parameter requires at least one entry".to_string(),
            ));
        }
        Ok(Self::new(ParameterValue::Array(entries)))
    }

    /// Creates a map parameter from the given key-value pairs.
    ///
    /// At least one pair is required, and keys cannot be arrays or maps.
    pub fn map(entries: Vec<(ContractParameter, ContractParameter)>) -> TypeResult<Self> {
        if entries.is_empty() {
            return Err(TypeError::InvalidParameterValue(
                "a map parameter requires at least one entry".to_string(),
            ));
        }
        for (key, _) in &entries {
            match key.param_type() {
                ContractParameterType::Array | ContractParameterType::Map => {
                    return Err(TypeError::InvalidParameterValue(
                        "map keys cannot be of type array or map".to_string(),
                    ))
                }
                _ => {}
            }
        }
        Ok(Self::new(ParameterValue::Map(entries)))
    }

    /// Creates an interop-interface parameter holding a plain string.
    pub fn interop_interface(value: impl Into<String>) -> Self {
        Self::new(ParameterValue::InteropInterface(value.into()))
    }

    /// Creates a void parameter.
    pub fn void() -> Self {
        Self::new(ParameterValue::Void)
    }

    /// The parameter's name, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The parameter's type tag.
    pub fn param_type(&self) -> ContractParameterType {
        self.value.param_type()
    }

    /// The parameter's value.
    pub fn value(&self) -> &ParameterValue {
        &self.value
    }

    /// Encodes the parameter as a JSON object.
    pub fn to_json(&self) -> Value {
        let mut object = JsonMap::new();
        if let Some(name) = &self.name {
            object.insert("name".to_string(), json!(name));
        }
        object.insert("type".to_string(), json!(self.param_type().json_value()));
        match &self.value {
            // Carried without a value field.
            ParameterValue::Any | ParameterValue::Void => {}
            ParameterValue::Boolean(b) => {
                object.insert("value".to_string(), json!(b));
            }
            ParameterValue::Integer(i) => {
                object.insert("value".to_string(), json!(i.to_string()));
            }
            ParameterValue::ByteArray(bytes)
            | ParameterValue::PublicKey(bytes)
            | ParameterValue::Signature(bytes) => {
                object.insert("value".to_string(), json!(encode_hex(bytes)));
            }
            ParameterValue::String(s) | ParameterValue::InteropInterface(s) => {
                object.insert("value".to_string(), json!(s));
            }
            ParameterValue::Hash160(h) => {
                object.insert("value".to_string(), json!(h.to_hex()));
            }
            ParameterValue::Hash256(h) => {
                object.insert("value".to_string(), json!(h.to_hex()));
            }
            ParameterValue::Array(entries) => {
                let values: Vec<Value> = entries.iter().map(|p| p.to_json()).collect();
                object.insert("value".to_string(), Value::Array(values));
            }
            ParameterValue::Map(entries) => {
                let values: Vec<Value> = entries
                    .iter()
                    .map(|(k, v)| json!({"key": k.to_json(), "value": v.to_json()}))
                    .collect();
                object.insert("value".to_string(), Value::Array(values));
            }
        }
        Value::Object(object)
    }

    /// Decodes a parameter from its JSON object form.
    ///
    /// Unknown type tags and values of the wrong shape are rejected.
    pub fn from_json(value: &Value) -> TypeResult<Self> {
        let object = value.as_object().ok_or_else(|| {
            TypeError::InvalidParameterValue("expected a JSON object".to_string())
        })?;
        let name = match object.get("name") {
            Some(Value::String(s)) => Some(s.clone()),
            Some(Value::Null) | None => None,
            Some(other) => {
                return Err(TypeError::InvalidParameterValue(format!(
                    "parameter name must be a string, got {other}"
                )))
            }
        };
        let type_tag = object
            .get("type")
            .and_then(Value::as_str)
            .ok_or_else(|| {
                TypeError::InvalidParameterValue("missing parameter type".to_string())
            })?;
        let param_type = ContractParameterType::from_str(type_tag)?;
        let raw = object.get("value").unwrap_or(&Value::Null);
        let value = Self::value_from_json(param_type, raw)?;
        Ok(Self { name, value })
    }

    fn value_from_json(param_type: ContractParameterType, raw: &Value) -> TypeResult<ParameterValue> {
        let wrong_shape = |expected: &str| {
            TypeError::InvalidParameterValue(format!(
                "a {param_type} parameter requires a {expected} value"
            ))
        };
        match param_type {
            ContractParameterType::Any => Ok(ParameterValue::Any),
            ContractParameterType::Void => Ok(ParameterValue::Void),
            ContractParameterType::Boolean => match raw {
                Value::Bool(b) => Ok(ParameterValue::Boolean(*b)),
                Value::String(s) if s == "true" => Ok(ParameterValue::Boolean(true)),
                Value::String(s) if s == "false" => Ok(ParameterValue::Boolean(false)),
                _ => Err(wrong_shape("boolean")),
            },
            ContractParameterType::Integer => match raw {
                Value::String(s) => s
                    .parse::<BigInt>()
                    .map(ParameterValue::Integer)
                    .map_err(|_| wrong_shape("decimal integer")),
                Value::Number(n) => n
                    .as_i64()
                    .map(|i| ParameterValue::Integer(BigInt::from(i)))
                    .or_else(|| n.as_u64().map(|u| ParameterValue::Integer(BigInt::from(u))))
                    .ok_or_else(|| wrong_shape("integer")),
                _ => Err(wrong_shape("integer")),
            },
            ContractParameterType::ByteArray => match raw {
                Value::String(s) => Ok(ParameterValue::ByteArray(decode_hex(s)?)),
                _ => Err(wrong_shape("hex string")),
            },
            ContractParameterType::Signature => match raw {
                Value::String(s) => Ok(Self::signature(&decode_hex(s)?)?.value),
                _ => Err(wrong_shape("hex string")),
            },
            ContractParameterType::PublicKey => match raw {
                Value::String(s) => Ok(Self::public_key_from_bytes(&decode_hex(s)?)?.value),
                _ => Err(wrong_shape("hex string")),
            },
            ContractParameterType::String => match raw {
                Value::String(s) => Ok(ParameterValue::String(s.clone())),
                _ => Err(wrong_shape("string")),
            },
            ContractParameterType::InteropInterface => match raw {
                Value::String(s) => Ok(ParameterValue::InteropInterface(s.clone())),
                _ => Err(wrong_shape("string")),
            },
            ContractParameterType::Hash160 => match raw {
                Value::String(s) => Ok(ParameterValue::Hash160(Hash160::from_hex(s)?)),
                _ => Err(wrong_shape("hex string")),
            },
            ContractParameterType::Hash256 => match raw {
                Value::String(s) => Ok(ParameterValue::Hash256(Hash256::from_hex(s)?)),
                _ => Err(wrong_shape("hex string")),
            },
            ContractParameterType::Array => match raw {
                Value::Array(entries) => {
                    let parsed: TypeResult<Vec<ContractParameter>> =
                        entries.iter().map(Self::from_json).collect();
                    Ok(ParameterValue::Array(parsed?))
                }
                _ => Err(wrong_shape("array")),
            },
            ContractParameterType::Map => match raw {
                Value::Array(entries) => {
                    let mut pairs = Vec::with_capacity(entries.len());
                    for entry in entries {
                        let key = entry
                            .get("key")
                            .ok_or_else(|| wrong_shape("array of key/value objects"))?;
                        let value = entry
                            .get("value")
                            .ok_or_else(|| wrong_shape("array of key/value objects"))?;
                        pairs.push((Self::from_json(key)?, Self::from_json(value)?));
                    }
                    Ok(ParameterValue::Map(pairs))
                }
                _ => Err(wrong_shape("array")),
            },
        }
    }
}

impl Serialize for ContractParameter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ContractParameter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_json(&value).map_err(serde::de::Error::custom)
    }
}

impl From<bool> for ContractParameter {
    fn from(value: bool) -> Self {
        Self::boolean(value)
    }
}

impl From<i32> for ContractParameter {
    fn from(value: i32) -> Self {
        Self::integer(value)
    }
}

impl From<i64> for ContractParameter {
    fn from(value: i64) -> Self {
        Self::integer(value)
    }
}

impl From<BigInt> for ContractParameter {
    fn from(value: BigInt) -> Self {
        Self::integer(value)
    }
}

impl From<&str> for ContractParameter {
    fn from(value: &str) -> Self {
        Self::string(value)
    }
}

impl From<String> for ContractParameter {
    fn from(value: String) -> Self {
        Self::string(value)
    }
}

impl From<Vec<u8>> for ContractParameter {
    fn from(value: Vec<u8>) -> Self {
        Self::byte_array(value)
    }
}

impl From<&[u8]> for ContractParameter {
    fn from(value: &[u8]) -> Self {
        Self::byte_array(value.to_vec())
    }
}

impl From<Hash160> for ContractParameter {
    fn from(value: Hash160) -> Self {
        Self::hash160(value)
    }
}

impl From<Hash256> for ContractParameter {
    fn from(value: Hash256) -> Self {
        Self::hash256(value)
    }
}

impl From<&ECPublicKey> for ContractParameter {
    fn from(value: &ECPublicKey) -> Self {
        Self::public_key(value)
    }
}

impl From<&SignatureData> for ContractParameter {
    fn from(value: &SignatureData) -> Self {
        Self::signature_data(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn test_size_validation() {
        assert!(ContractParameter::signature(&[0u8; 64]).is_ok());
        assert!(matches!(
            ContractParameter::signature(&[0u8; 65]),
            Err(TypeError::InvalidLength {
                expected: 64,
                actual: 65
            })
        ));
        assert!(ContractParameter::public_key_from_bytes(&[2u8; 33]).is_ok());
        assert!(ContractParameter::public_key_from_bytes(&[2u8; 32]).is_err());
        assert!(ContractParameter::hash256_from_bytes(&[0u8; 31]).is_err());
    }

    #[test]
    fn test_empty_array_and_map_rejected() {
        assert!(ContractParameter::array(vec![]).is_err());
        assert!(ContractParameter::map(vec![]).is_err());
    }

    #[test]
    fn test_map_key_restriction() {
        let array_key = ContractParameter::array(vec![1.into()]).unwrap();
        assert!(matches!(
            ContractParameter::map(vec![(array_key, 2.into())]),
            Err(TypeError::InvalidParameterValue(_))
        ));
        let plain_key: ContractParameter = "key".into();
        assert!(ContractParameter::map(vec![(plain_key, 2.into())]).is_ok());
    }

    #[test]
    fn test_structural_equality() {
        let first = ContractParameter::array(vec![1.into(), "two".into(), true.into()]).unwrap();
        let second = ContractParameter::array(vec![1.into(), "two".into(), true.into()]).unwrap();
        assert_eq!(first, second);

        let reordered =
            ContractParameter::array(vec!["two".into(), 1.into(), true.into()]).unwrap();
        assert_ne!(first, reordered);

        let a = ContractParameter::byte_array(vec![1, 2, 3]);
        let b = ContractParameter::byte_array(vec![1, 2, 3]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_json_scalars() {
        let param = ContractParameter::integer(12345).with_name("amount");
        assert_eq!(
            param.to_json(),
            serde_json::json!({"name": "amount", "type": "Integer", "value": "12345"})
        );

        let param = ContractParameter::boolean(true);
        assert_eq!(
            param.to_json(),
            serde_json::json!({"type": "Boolean", "value": true})
        );

        let param = ContractParameter::byte_array(hex!("a3b001").to_vec());
        assert_eq!(
            param.to_json(),
            serde_json::json!({"type": "ByteArray", "value": "a3b001"})
        );
    }

    #[test]
    fn test_json_hashes_are_big_endian() {
        let hash = Hash160::from_hex("23ba2703c53263e8d6e522dc32203339dcd8eee9").unwrap();
        let param = ContractParameter::hash160(hash);
        assert_eq!(
            param.to_json(),
            serde_json::json!({"type": "Hash160", "value": "23ba2703c53263e8d6e522dc32203339dcd8eee9"})
        );
    }

    #[test]
    fn test_json_nested_round_trip() {
        let map = ContractParameter::map(vec![
            ("one".into(), ContractParameter::integer(1)),
            ("two".into(), ContractParameter::integer(2)),
        ])
        .unwrap();
        let array =
            ContractParameter::array(vec![map, true.into(), vec![0xaau8, 0xbb].into()]).unwrap();

        let json = array.to_json();
        let back = ContractParameter::from_json(&json).unwrap();
        assert_eq!(back, array);
        assert_eq!(back.to_json(), json);
    }

    #[test]
    fn test_json_unknown_type_rejected() {
        let value = serde_json::json!({"type": "Struct", "value": []});
        assert!(matches!(
            ContractParameter::from_json(&value),
            Err(TypeError::UnsupportedParameterType(_))
        ));
    }

    #[test]
    fn test_json_integer_accepts_number_form() {
        let value = serde_json::json!({"type": "Integer", "value": 42});
        let param = ContractParameter::from_json(&value).unwrap();
        assert_eq!(param, ContractParameter::integer(42));
    }

    #[test]
    fn test_json_any_has_no_value() {
        let param = ContractParameter::any();
        assert_eq!(param.to_json(), serde_json::json!({"type": "Any"}));
        let back = ContractParameter::from_json(&param.to_json()).unwrap();
        assert_eq!(back, param);
    }

    #[test]
    fn test_serde_integration() {
        let param = ContractParameter::string("hello").with_name("greeting");
        let text = serde_json::to_string(&param).unwrap();
        assert_eq!(
            text,
            "{\"name\":\"greeting\",\"type\":\"String\",\"value\":\"hello\"}"
        );
        let back: ContractParameter = serde_json::from_str(&text).unwrap();
        assert_eq!(back, param);
    }
}
