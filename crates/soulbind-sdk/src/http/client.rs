/*
[INPUT]:  HTTP configuration (base URL, timeouts, API key)
[OUTPUT]: Configured reqwest client ready for API calls
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

use crate::http::{Result, SoulbindError};

/// Default production API endpoint
const DEFAULT_BASE_URL: &str = "https://api.soulbind.app/api";

/// Header carrying the organization API key
const API_KEY_HEADER: &str = "soulbind-api-key";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_key: String,
    pub base_url: String,
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl ClientConfig {
    /// Configuration with the production base URL and default timeouts
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }

    /// Override the base URL, e.g. to point at a staging deployment or a
    /// mock server in tests.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

/// Main HTTP client for the Soulbind API.
///
/// A thin pass-through: one outbound call per invocation, no retry, no
/// caching, and no inspection of the response envelope.
#[derive(Debug)]
pub struct SoulbindClient {
    http_client: Client,
    base_url: String,
    api_key: String,
}

impl SoulbindClient {
    /// Create a new client for the production API
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig::new(api_key))
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        // Validate the base URL up front so endpoint calls cannot fail on it.
        Url::parse(&config.base_url)?;

        Ok(Self {
            http_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a request for an endpoint path relative to the base URL, with
    /// the fixed header set attached.
    pub(crate) fn contract_request(
        &self,
        method: Method,
        endpoint: &str,
    ) -> Result<RequestBuilder> {
        // The base URL may carry a path segment (`/api`), so endpoints are
        // appended rather than joined.
        let url = Url::parse(&format!("{}{}", self.base_url, endpoint))?;
        Ok(self
            .http_client
            .request(method, url)
            .header(CONTENT_TYPE, "application/json")
            .header(API_KEY_HEADER, &self.api_key))
    }

    /// Issue the request and decode the JSON body.
    ///
    /// Non-2xx statuses fail with [`SoulbindError::RequestFailed`] carrying
    /// the status text; a malformed body surfaces as a serialization error.
    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<T> {
        let response = builder.send().await?;
        let status = response.status();
        debug!(status = %status, "soulbind api response");

        if !status.is_success() {
            return Err(SoulbindError::request_failed(status));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
