//! Contract parameter type tags.

use crate::error::TypeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The type tag of a contract parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContractParameterType {
    Any = 0x00,
    Boolean = 0x10,
    Integer = 0x11,
    ByteArray = 0x12,
    String = 0x13,
    Hash160 = 0x14,
    Hash256 = 0x15,
    PublicKey = 0x16,
    Signature = 0x17,
    Array = 0x20,
    Map = 0x22,
    InteropInterface = 0x30,
    Void = 0xff,
}

impl ContractParameterType {
    /// The tag's byte value in contract manifests.
    pub fn byte(self) -> u8 {
        self as u8
    }

    /// The tag's name as it appears in JSON.
    pub fn json_value(self) -> &'static str {
        match self {
            ContractParameterType::Any => "Any",
            ContractParameterType::Boolean => "Boolean",
            ContractParameterType::Integer => "Integer",
            ContractParameterType::ByteArray => "ByteArray",
            ContractParameterType::String => "String",
            ContractParameterType::Hash160 => "Hash160",
            ContractParameterType::Hash256 => "Hash256",
            ContractParameterType::PublicKey => "PublicKey",
            ContractParameterType::Signature => "Signature",
            ContractParameterType::Array => "Array",
            ContractParameterType::Map => "Map",
            ContractParameterType::InteropInterface => "InteropInterface",
            ContractParameterType::Void => "Void",
        }
    }
}

impl fmt::Display for ContractParameterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.json_value())
    }
}

impl FromStr for ContractParameterType {
    type Err = TypeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Any" => Ok(ContractParameterType::Any),
            "Boolean" => Ok(ContractParameterType::Boolean),
            "Integer" => Ok(ContractParameterType::Integer),
            "ByteArray" => Ok(ContractParameterType::ByteArray),
            "String" => Ok(ContractParameterType::String),
            "Hash160" => Ok(ContractParameterType::Hash160),
            "Hash256" => Ok(ContractParameterType::Hash256),
            "PublicKey" => Ok(ContractParameterType::PublicKey),
            "Signature" => Ok(ContractParameterType::Signature),
            "Array" => Ok(ContractParameterType::Array),
            "Map" => Ok(ContractParameterType::Map),
            "InteropInterface" => Ok(ContractParameterType::InteropInterface),
            "Void" => Ok(ContractParameterType::Void),
            other => Err(TypeError::UnsupportedParameterType(other.to_string())),
        }
    }
}

impl TryFrom<u8> for ContractParameterType {
    type Error = TypeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0x00 => Ok(ContractParameterType::Any),
            0x10 => Ok(ContractParameterType::Boolean),
            0x11 => Ok(ContractParameterType::Integer),
            0x12 => Ok(ContractParameterType::ByteArray),
            0x13 => Ok(ContractParameterType::String),
            0x14 => Ok(ContractParameterType::Hash160),
            0x15 => Ok(ContractParameterType::Hash256),
            0x16 => Ok(ContractParameterType::PublicKey),
            0x17 => Ok(ContractParameterType::Signature),
            0x20 => Ok(ContractParameterType::Array),
            0x22 => Ok(ContractParameterType::Map),
            0x30 => Ok(ContractParameterType::InteropInterface),
            0xff => Ok(ContractParameterType::Void),
            other => Err(TypeError::UnsupportedParameterType(format!("0x{other:02x}"))),
        }
    }
}
