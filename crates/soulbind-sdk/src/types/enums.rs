/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

/// Who is allowed to burn a claimed token.
///
/// Serialized as the numeric discriminant the contract uses on chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BurnAuth {
    IssuerOnly,
    OwnerOnly,
    Both,
    Neither,
}

impl Serialize for BurnAuth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(*self as u8)
    }
}

impl<'de> Deserialize<'de> for BurnAuth {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match u8::deserialize(deserializer)? {
            0 => Ok(BurnAuth::IssuerOnly),
            1 => Ok(BurnAuth::OwnerOnly),
            2 => Ok(BurnAuth::Both),
            3 => Ok(BurnAuth::Neither),
            other => Err(de::Error::invalid_value(
                de::Unexpected::Unsigned(other as u64),
                &"a burn authorization discriminant in 0..=3",
            )),
        }
    }
}

/// Lifecycle status of one issued recipient slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClaimStatus {
    Issued,
    Claimed,
    Emailed,
    Burned,
}

impl Serialize for ClaimStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(*self as u8)
    }
}

impl<'de> Deserialize<'de> for ClaimStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match u8::deserialize(deserializer)? {
            0 => Ok(ClaimStatus::Issued),
            1 => Ok(ClaimStatus::Claimed),
            2 => Ok(ClaimStatus::Emailed),
            3 => Ok(ClaimStatus::Burned),
            other => Err(de::Error::invalid_value(
                de::Unexpected::Unsigned(other as u64),
                &"a claim status discriminant in 0..=3",
            )),
        }
    }
}

/// Application-level error codes carried inside an otherwise successful
/// response envelope. The SDK passes these through without interpretation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ErrorCode {
    #[serde(rename = "Entity already exists")]
    EntityExists,
    #[serde(rename = "Entity does NOT exists")]
    EntityDoesNotExist,
    #[serde(rename = "Invalid request")]
    InvalidRequest,
    #[serde(rename = "Unauthorized")]
    Unauthorized,
}
