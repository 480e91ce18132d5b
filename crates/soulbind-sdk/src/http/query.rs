/*
[INPUT]:  Event ids, addresses, claim codes, and query filters
[OUTPUT]: Token event data and claim validation envelopes
[POS]:    HTTP layer - read and validation endpoints
[UPDATE]: When adding new read endpoints or changing query parameters
*/

use reqwest::Method;

use crate::http::{Result, SoulbindClient};
use crate::types::{ApiResponse, ProviderConfig, TokenDataResponse, TokenFilter};

pub(crate) const VERSION_PATH: &str = "/v1/contract";

impl SoulbindClient {
    /// Get the token events your organization has created.
    ///
    /// GET /v1/contract/tenant/tokens
    pub async fn account_tokens(&self) -> Result<ApiResponse<Vec<TokenDataResponse>>> {
        let endpoint = format!("{VERSION_PATH}/tenant/tokens");
        let builder = self.contract_request(Method::GET, &endpoint)?;
        self.send_json(builder).await
    }

    /// Get the token events created by `address` (or another tenant), proven
    /// by a signature over `message`. The signer must match `address`.
    ///
    /// GET /v1/contract/created-tokens/{address}/{signature}?message={message}&tenantId={tenantId}
    pub async fn account_tokens_for(
        &self,
        address: &str,
        signature: &str,
        message: &str,
        tenant_id: Option<&str>,
    ) -> Result<ApiResponse<Vec<TokenDataResponse>>> {
        let endpoint = format!("{VERSION_PATH}/created-tokens/{address}/{signature}");
        let mut builder = self
            .contract_request(Method::GET, &endpoint)?
            .query(&[("message", message)]);
        if let Some(tenant_id) = tenant_id {
            builder = builder.query(&[("tenantId", tenant_id)]);
        }
        self.send_json(builder).await
    }

    /// Get a single token event, read through to the chain for the most
    /// current view. Pass `token_id` to have the matching issued slot
    /// populated.
    ///
    /// POST /v1/contract/created-token/{eventId}
    pub async fn created_token(
        &self,
        event_id: &str,
        token_id: Option<&str>,
    ) -> Result<ApiResponse<TokenDataResponse>> {
        let endpoint = format!("{VERSION_PATH}/created-token/{event_id}");
        let mut builder = self.contract_request(Method::POST, &endpoint)?;
        if let Some(token_id) = token_id {
            builder = builder.json(&serde_json::json!({ "tokenId": token_id }));
        }
        self.send_json(builder).await
    }

    /// Get a single token event with the full issued-to list, authorized as
    /// the issuer.
    ///
    /// POST /v1/contract/created-token/{eventId}
    pub async fn created_token_as_admin(
        &self,
        event_id: &str,
        address: &str,
        signature: &str,
        message: &str,
    ) -> Result<ApiResponse<TokenDataResponse>> {
        let endpoint = format!("{VERSION_PATH}/created-token/{event_id}");
        let body = serde_json::json!({
            "address": address,
            "signature": signature,
            "message": message,
        });
        let builder = self.contract_request(Method::POST, &endpoint)?.json(&body);
        self.send_json(builder).await
    }

    /// Get the tokens held by an address, optionally filtered to your
    /// organization's events or to claimable ones.
    ///
    /// GET /v1/contract/tokens/{address}?organization=true&canClaim=true
    pub async fn tokens_for(
        &self,
        address: &str,
        filter: Option<TokenFilter>,
    ) -> Result<ApiResponse<Vec<TokenDataResponse>>> {
        let endpoint = format!("{VERSION_PATH}/tokens/{address}");
        let mut builder = self.contract_request(Method::GET, &endpoint)?;
        if let Some(filter) = filter {
            let pairs = filter.query_pairs();
            if !pairs.is_empty() {
                builder = builder.query(&pairs);
            }
        }
        self.send_json(builder).await
    }

    /// Validate that an address has rights to claim from an event.
    ///
    /// GET /v1/contract/issued/{eventId}/{address}
    pub async fn validate_claim_auth_address(
        &self,
        event_id: &str,
        address: &str,
    ) -> Result<ApiResponse<bool>> {
        let endpoint = format!("{VERSION_PATH}/issued/{event_id}/{address}");
        let builder = self.contract_request(Method::GET, &endpoint)?;
        self.send_json(builder).await
    }

    /// Validate that a unique code (e.g. one mailed to an off-chain email
    /// address) has rights to claim from an event.
    ///
    /// GET /v1/contract/issued-code/{eventId}/{code}
    pub async fn validate_claim_auth_code(
        &self,
        event_id: &str,
        code: &str,
    ) -> Result<ApiResponse<bool>> {
        let endpoint = format!("{VERSION_PATH}/issued-code/{event_id}/{code}");
        let builder = self.contract_request(Method::GET, &endpoint)?;
        self.send_json(builder).await
    }

    /// Validate that an address has claimed from an event, optionally
    /// requiring the token to be bound.
    ///
    /// GET /v1/contract/claimed/{eventId}/{address}?bound=true
    pub async fn validate_claimed(
        &self,
        event_id: &str,
        address: &str,
        bound: bool,
    ) -> Result<ApiResponse<bool>> {
        let endpoint = format!("{VERSION_PATH}/claimed/{event_id}/{address}");
        let mut builder = self.contract_request(Method::GET, &endpoint)?;
        if bound {
            builder = builder.query(&[("bound", "true")]);
        }
        self.send_json(builder).await
    }

    /// Fetch the custodial wallet provider configuration used to bootstrap
    /// the email-wallet flow.
    ///
    /// GET /v1/contract/network
    pub async fn provider_config(&self) -> Result<ApiResponse<ProviderConfig>> {
        let endpoint = format!("{VERSION_PATH}/network");
        let builder = self.contract_request(Method::GET, &endpoint)?;
        self.send_json(builder).await
    }
}
