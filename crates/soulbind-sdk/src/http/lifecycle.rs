/*
[INPUT]:  Typed lifecycle requests and signed authorizations
[OUTPUT]: Transaction hashes and claim/bind/burn confirmations
[POS]:    HTTP layer - token lifecycle endpoints (require authorization)
[UPDATE]: When adding new lifecycle endpoints or changing request bodies
*/

use reqwest::Method;

use crate::http::query::VERSION_PATH;
use crate::http::{Result, SoulbindClient};
use crate::types::{
    AddToIssuedRequest, ApiResponse, Authorization, BindRequest, BurnRequest, ClaimRequest,
    CreateTokenRequest, UpdateTokenRequest,
};

impl SoulbindClient {
    /// Create a new token event. The issuer's authorization rides inside
    /// the request body. Returns the mint transaction hash.
    ///
    /// POST /v1/contract/create
    pub async fn create_token(&self, request: CreateTokenRequest) -> Result<ApiResponse<String>> {
        let endpoint = format!("{VERSION_PATH}/create");
        let builder = self.contract_request(Method::POST, &endpoint)?.json(&request);
        self.send_json(builder).await
    }

    /// Issue more tokens for future claiming: extend the address allowlist
    /// and/or add more unique codes. Returns the transaction hash.
    ///
    /// PATCH /v1/contract/add-issued-to
    pub async fn add_to_issued(
        &self,
        event_id: &str,
        data: AddToIssuedRequest,
        authorization: &Authorization,
    ) -> Result<ApiResponse<String>> {
        let endpoint = format!("{VERSION_PATH}/add-issued-to");
        let body = serde_json::json!({
            "eventId": event_id,
            "addresses": data.addresses,
            "codeCount": data.code_count,
            "signature": authorization.signature,
            "message": authorization.message,
        });
        let builder = self.contract_request(Method::PATCH, &endpoint)?.json(&body);
        self.send_json(builder).await
    }

    /// Bind a claimed bind-on-equip token to its holder, making it
    /// soulbound. The signer must match `address`.
    ///
    /// PATCH /v1/contract/bind
    pub async fn bind(
        &self,
        event_id: &str,
        token_id: &str,
        address: &str,
        signature: &str,
        message: &str,
    ) -> Result<ApiResponse<bool>> {
        let request = BindRequest {
            address: address.to_string(),
            event_id: event_id.to_string(),
            token_id: token_id.to_string(),
            signature: signature.to_string(),
            message: message.to_string(),
        };

        let endpoint = format!("{VERSION_PATH}/bind");
        let builder = self.contract_request(Method::PATCH, &endpoint)?.json(&request);
        self.send_json(builder).await
    }

    /// Burn a claimed token. Subject to the event's burn authorization
    /// policy. The signer must match `address`.
    ///
    /// PATCH /v1/contract/burn
    pub async fn burn(
        &self,
        event_id: &str,
        token_id: &str,
        address: &str,
        signature: &str,
        message: &str,
    ) -> Result<ApiResponse<bool>> {
        let request = BurnRequest {
            address: address.to_string(),
            event_id: event_id.to_string(),
            token_id: token_id.to_string(),
            signature: signature.to_string(),
            message: message.to_string(),
        };

        let endpoint = format!("{VERSION_PATH}/burn");
        let builder = self.contract_request(Method::PATCH, &endpoint)?.json(&request);
        self.send_json(builder).await
    }

    /// Claim a token: mint to `address`. Restricted events additionally
    /// require the unique code that was issued off-chain. Returns the
    /// on-chain token id.
    ///
    /// PATCH /v1/contract/claim
    pub async fn claim(
        &self,
        event_id: &str,
        address: &str,
        signature: &str,
        message: &str,
        unique_code: Option<&str>,
    ) -> Result<ApiResponse<String>> {
        let request = ClaimRequest {
            signature: signature.to_string(),
            id: event_id.to_string(),
            address: address.to_string(),
            message: message.to_string(),
            unique_code: unique_code.map(str::to_string),
        };

        let endpoint = format!("{VERSION_PATH}/claim");
        let builder = self.contract_request(Method::PATCH, &endpoint)?.json(&request);
        self.send_json(builder).await
    }

    /// Push a token to any number of addresses directly. Only valid for
    /// events whose burn authorization is `OwnerOnly` or `Both`. Returns one
    /// transaction hash per recipient.
    ///
    /// PATCH /v1/contract/drop
    pub async fn drop_to(
        &self,
        event_id: &str,
        drop_to: &[String],
        authorization: &Authorization,
    ) -> Result<ApiResponse<Vec<String>>> {
        let endpoint = format!("{VERSION_PATH}/drop");
        let body = serde_json::json!({
            "eventId": event_id,
            "dropTo": drop_to,
            "signature": authorization.signature,
            "message": authorization.message,
        });
        let builder = self.contract_request(Method::PATCH, &endpoint)?.json(&body);
        self.send_json(builder).await
    }

    /// Raise the issuance cap of a non-restricted event. Returns the
    /// transaction hash.
    ///
    /// PATCH /v1/contract/increase-token-limit
    pub async fn increase_token_limit(
        &self,
        event_id: &str,
        limit_increase: u32,
        authorization: &Authorization,
    ) -> Result<ApiResponse<String>> {
        let endpoint = format!("{VERSION_PATH}/increase-token-limit");
        let body = serde_json::json!({
            "eventId": event_id,
            "limitIncrease": limit_increase,
            "signature": authorization.signature,
            "message": authorization.message,
        });
        let builder = self.contract_request(Method::PATCH, &endpoint)?.json(&body);
        self.send_json(builder).await
    }

    /// Update the metadata/URI of a single updatable event. Returns the
    /// transaction hash.
    ///
    /// PATCH /v1/contract/update
    pub async fn update_token(&self, request: UpdateTokenRequest) -> Result<ApiResponse<String>> {
        let endpoint = format!("{VERSION_PATH}/update");
        let builder = self.contract_request(Method::PATCH, &endpoint)?.json(&request);
        self.send_json(builder).await
    }
}

#[cfg(test)]
mod tests {
    use crate::http::{ClientConfig, SoulbindClient};
    use crate::types::{AddToIssuedRequest, Authorization};
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(server: &MockServer) -> SoulbindClient {
        let config = ClientConfig::new("test-key").with_base_url(server.uri());
        SoulbindClient::with_config(config).expect("client init")
    }

    fn test_authorization() -> Authorization {
        Authorization {
            signature: "0xsig".to_string(),
            message: "signed message".to_string(),
        }
    }

    #[tokio::test]
    async fn test_add_to_issued_merges_authorization_into_body() {
        let server = MockServer::start().await;

        Mock::given(method("PATCH"))
            .and(path("/v1/contract/add-issued-to"))
            .and(body_json(serde_json::json!({
                "eventId": "evt-1",
                "addresses": ["0xaa", "0xbb"],
                "codeCount": 5,
                "signature": "0xsig",
                "message": "signed message",
            })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "success": "0xTXN" })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let data = AddToIssuedRequest {
            addresses: Some(vec!["0xaa".to_string(), "0xbb".to_string()]),
            code_count: Some(5),
        };

        let envelope = client
            .add_to_issued("evt-1", data, &test_authorization())
            .await
            .unwrap();
        assert_eq!(envelope.success, Some("0xTXN".to_string()));
    }

    #[tokio::test]
    async fn test_drop_to_returns_txn_hash_per_recipient() {
        let server = MockServer::start().await;

        Mock::given(method("PATCH"))
            .and(path("/v1/contract/drop"))
            .and(body_json(serde_json::json!({
                "eventId": "evt-1",
                "dropTo": ["0xaa", "0xbb"],
                "signature": "0xsig",
                "message": "signed message",
            })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "success": ["0xT1", "0xT2"] })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let recipients = vec!["0xaa".to_string(), "0xbb".to_string()];
        let envelope = client
            .drop_to("evt-1", &recipients, &test_authorization())
            .await
            .unwrap();
        assert_eq!(
            envelope.success,
            Some(vec!["0xT1".to_string(), "0xT2".to_string()])
        );
    }

    #[tokio::test]
    async fn test_increase_token_limit_body() {
        let server = MockServer::start().await;

        Mock::given(method("PATCH"))
            .and(path("/v1/contract/increase-token-limit"))
            .and(body_json(serde_json::json!({
                "eventId": "evt-1",
                "limitIncrease": 50,
                "signature": "0xsig",
                "message": "signed message",
            })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "success": "0xTXN" })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let envelope = client
            .increase_token_limit("evt-1", 50, &test_authorization())
            .await
            .unwrap();
        assert_eq!(envelope.success, Some("0xTXN".to_string()));
    }
}
