/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for wallex-adapter tests

use wallex_adapter::{ClientConfig, WallexClient};
use wiremock::MockServer;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client pointed at the mock server, without an API key
pub fn anonymous_client(server: &MockServer) -> WallexClient {
    WallexClient::with_config_and_base_url(ClientConfig::default(), &server.uri())
        .expect("client init")
}

/// Client pointed at the mock server, with a test API key configured
#[allow(dead_code)]
pub fn authenticated_client(server: &MockServer) -> WallexClient {
    let mut client = anonymous_client(server);
    client.set_api_key("test-api-key");
    client
}
