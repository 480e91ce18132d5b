/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust request structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

use super::enums::BurnAuth;
use super::models::SbtMetadata;

/// A signed authorization: proof that `message` was signed by the address
/// the server expects for the action. The message comes from
/// [`crate::auth::MessageBuilder`]; the signature from a wallet, local or
/// custodial.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Authorization {
    pub signature: String,
    pub message: String,
}

/// Body for creating a new token event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTokenRequest {
    pub metadata: SbtMetadata,
    pub limit: u32,
    pub restricted: bool,
    pub boe: bool,
    #[serde(rename = "burnAuth")]
    pub burn_auth: BurnAuth,
    pub updatable: bool,
    /// Pre-issued allowlist addresses for restricted events.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub addresses: Option<Vec<String>>,
    /// Number of claim codes to mint for email-based issuance.
    #[serde(rename = "codeCount", skip_serializing_if = "Option::is_none")]
    pub code_count: Option<u32>,
    pub signature: String,
    pub message: String,
}

/// Additional recipients for an existing token event: allowlist addresses
/// and/or more claim codes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddToIssuedRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub addresses: Option<Vec<String>>,
    #[serde(rename = "codeCount", skip_serializing_if = "Option::is_none")]
    pub code_count: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindRequest {
    pub address: String,
    #[serde(rename = "eventId")]
    pub event_id: String,
    #[serde(rename = "tokenId")]
    pub token_id: String,
    pub signature: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BurnRequest {
    pub address: String,
    #[serde(rename = "eventId")]
    pub event_id: String,
    #[serde(rename = "tokenId")]
    pub token_id: String,
    pub signature: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimRequest {
    pub signature: String,
    /// The event id.
    pub id: String,
    pub address: String,
    pub message: String,
    #[serde(rename = "uniqueCode", skip_serializing_if = "Option::is_none")]
    pub unique_code: Option<String>,
}

/// Metadata/URI update for a single updatable token event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateTokenRequest {
    #[serde(rename = "eventId")]
    pub event_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<SbtMetadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    pub signature: String,
    pub message: String,
}
