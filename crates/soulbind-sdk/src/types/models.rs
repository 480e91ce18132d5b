/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust model structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

use super::enums::{BurnAuth, ClaimStatus};

/// One key/value attribute inside token metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenAttribute {
    pub trait_type: String,
    pub value: String,
}

/// Token metadata, OpenSea-compatible field names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SbtMetadata {
    pub name: String,
    pub description: String,
    pub external_url: String,
    /// IPFS URI or raw image data.
    pub image: String,
    #[serde(default)]
    pub attributes: Vec<TokenAttribute>,
}

/// A token event: one class of soulbound/transferable tokens created by an
/// issuer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenData {
    pub id: String,
    #[serde(rename = "idHash")]
    pub id_hash: String,
    pub owner: String,
    #[serde(rename = "createdAt")]
    pub created_at: u64,
    #[serde(rename = "txnHash")]
    pub txn_hash: String,
    /// Maximum number of tokens this event can issue.
    pub limit: u32,
    /// Number of tokens issued so far.
    pub count: u32,
    /// Pre-issued allowlist when true, open claim when false.
    pub restricted: bool,
    /// Bind-on-equip: claimed tokens stay transferable until bound.
    pub boe: bool,
    #[serde(rename = "burnAuth")]
    pub burn_auth: BurnAuth,
    pub updatable: bool,
    pub uri: String,
}

/// One recipient slot under a token event: a wallet address or a claim code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuedTo {
    /// Wallet address, or the email the claim code was sent to.
    pub to: String,
    pub status: ClaimStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bound: Option<bool>,
    /// Secret claim code for email-based issuance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(rename = "claimersEmail", skip_serializing_if = "Option::is_none")]
    pub claimers_email: Option<String>,
    #[serde(rename = "tokenId", skip_serializing_if = "Option::is_none")]
    pub token_id: Option<u64>,
    #[serde(rename = "txnHash", skip_serializing_if = "Option::is_none")]
    pub txn_hash: Option<String>,
}

/// Full view of a token event as returned by read endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenDataResponse {
    #[serde(rename = "eventData")]
    pub event_data: TokenData,
    #[serde(rename = "metaData")]
    pub meta_data: SbtMetadata,
    #[serde(rename = "issuedTo", skip_serializing_if = "Option::is_none")]
    pub issued_to: Option<Vec<IssuedTo>>,
}

/// Custodial wallet provider configuration returned by the network
/// bootstrap endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig {
    #[serde(rename = "magicKey")]
    pub key: String,
    pub network: String,
}

/// Optional filter for querying an address's tokens. Only `true` flags are
/// sent on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenFilter {
    pub organization: bool,
    pub can_claim: bool,
}

impl TokenFilter {
    pub(crate) fn query_pairs(&self) -> Vec<(&'static str, &'static str)> {
        let mut pairs = Vec::new();
        if self.organization {
            pairs.push(("organization", "true"));
        }
        if self.can_claim {
            pairs.push(("canClaim", "true"));
        }
        pairs
    }
}
