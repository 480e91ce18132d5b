/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for soulbind-sdk tests

use soulbind_sdk::{ClientConfig, SoulbindClient};
use wiremock::MockServer;

/// A well-known test private key
#[allow(dead_code)]
pub const TEST_PRIVATE_KEY: &str =
    "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client pointed at the mock server with a fixed test API key
pub fn test_client(server: &MockServer) -> SoulbindClient {
    let config = ClientConfig::new("test-key").with_base_url(server.uri());
    SoulbindClient::with_config(config).expect("client init")
}
