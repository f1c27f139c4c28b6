/*
[INPUT]:  HTTP configuration (base URL, timeouts, API key)
[OUTPUT]: Configured reqwest client and the request executor
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing request/response handling
*/

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::http::error::{RequestError, RequestStage, Result, WallexError, parse_error_response};

/// Base URL for the Wallex REST API
const BASE_URL: &str = "https://api.wallex.ir";

/// Header carrying the static Wallex API key
const API_KEY_HEADER: &str = "X-API-Key";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
    /// When set, replaces the per-endpoint version segment (`v1`, `v2`) of
    /// every request path.
    pub version_override: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            version_override: None,
        }
    }
}

/// Main HTTP client for the Wallex API.
///
/// Wallex uses a single authentication mechanism: a static `X-API-Key`
/// header on the endpoints that require it. There is no login flow and no
/// token refresh. The client is stateless across calls and safe to share
/// between tasks.
#[derive(Debug)]
pub struct WallexClient {
    http_client: Client,
    base_url: String,
    version_override: Option<String>,
    api_key: Option<String>,
}

impl WallexClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Self::with_config_and_base_url(config, BASE_URL)
    }

    /// Create a new client against a custom base URL
    pub fn with_config_and_base_url(config: ClientConfig, base_url: &str) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(|e| WallexError::Config(format!("failed to build HTTP client: {e}")))?;

        Self::with_http_client(http_client, base_url, config.version_override)
    }

    /// Create a client around a preconfigured transport. Timeouts and pooling
    /// are whatever the supplied client was built with.
    pub fn with_http_client(
        http_client: Client,
        base_url: &str,
        version_override: Option<String>,
    ) -> Result<Self> {
        // Validate eagerly so endpoint calls never fail on a bad base URL.
        Url::parse(base_url)
            .map_err(|e| WallexError::Config(format!("invalid base URL {base_url:?}: {e}")))?;

        Ok(Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
            version_override,
            api_key: None,
        })
    }

    /// Set the API key for authenticated requests
    pub fn set_api_key(&mut self, api_key: impl Into<String>) {
        self.api_key = Some(api_key.into());
    }

    /// Get the API key if set
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    /// Ensure a non-empty API key is configured before an authenticated call
    fn require_api_key(&self) -> Result<&str> {
        match self.api_key.as_deref() {
            Some(key) if !key.is_empty() => Ok(key),
            _ => Err(WallexError::Config("API key is empty".to_string())),
        }
    }

    /// Build the full API URL: `{base_url}/{version}{endpoint}`
    fn api_url(&self, version: &str, endpoint: &str) -> Result<Url> {
        let version = self.version_override.as_deref().unwrap_or(version);
        Url::parse(&format!("{}/{}{}", self.base_url, version, endpoint))
            .map_err(|e| RequestError::new(RequestStage::CreatingRequest, e).into())
    }

    /// Execute a request without a payload
    pub(crate) async fn request<T>(
        &self,
        method: Method,
        endpoint: &str,
        version: &str,
        auth: bool,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        self.execute::<(), T>(method, endpoint, version, auth, None)
            .await
    }

    /// Execute a request carrying a typed payload. GET/DELETE payloads are
    /// flattened into the query string; other methods serialize the payload
    /// as a JSON body.
    pub(crate) async fn request_with<P, T>(
        &self,
        method: Method,
        endpoint: &str,
        version: &str,
        auth: bool,
        payload: &P,
    ) -> Result<T>
    where
        P: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.execute(method, endpoint, version, auth, Some(payload))
            .await
    }

    /// Perform exactly one request/response cycle and classify the outcome.
    ///
    /// - Missing API key on an authenticated call fails before any network
    ///   activity.
    /// - A non-2xx status is normalized by
    ///   [`parse_error_response`](crate::http::error) and returned as
    ///   [`WallexError::Api`].
    /// - Any failure before a classified response (encoding, transport, body
    ///   read, decoding of a 2xx body) is a [`RequestError`] tagged with the
    ///   stage at which it occurred.
    ///
    /// No retries, no backoff: Wallex enforces its own rate limits and this
    /// layer deliberately performs a single round trip per call.
    async fn execute<P, T>(
        &self,
        method: Method,
        endpoint: &str,
        version: &str,
        auth: bool,
        payload: Option<&P>,
    ) -> Result<T>
    where
        P: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let api_key = if auth {
            Some(self.require_api_key()?.to_string())
        } else {
            None
        };

        let mut url = self.api_url(version, endpoint)?;

        let query_style = method == Method::GET || method == Method::DELETE;
        if query_style {
            if let Some(payload) = payload {
                let query = serde_urlencoded::to_string(payload)
                    .map_err(|e| RequestError::new(RequestStage::PreparingParameters, e))?;
                if !query.is_empty() {
                    match url.query() {
                        Some(existing) => {
                            let merged = format!("{existing}&{query}");
                            url.set_query(Some(&merged));
                        }
                        None => url.set_query(Some(&query)),
                    }
                }
            }
        }

        let mut builder = self
            .http_client
            .request(method.clone(), url.clone())
            .header(CONTENT_TYPE, "application/json");

        if !query_style {
            if let Some(payload) = payload {
                let body = serde_json::to_vec(payload)
                    .map_err(|e| RequestError::new(RequestStage::PreparingBody, e))?;
                builder = builder.body(body);
            }
        }

        if let Some(api_key) = api_key {
            builder = builder.header(API_KEY_HEADER, api_key);
        }

        tracing::debug!(%method, %url, auth, "dispatching Wallex request");

        let response = builder
            .send()
            .await
            .map_err(|e| RequestError::new(RequestStage::SendingRequest, e))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| RequestError::new(RequestStage::ReadingResponse, e))?;

        if !status.is_success() {
            let api_err = parse_error_response(status, &body);
            tracing::error!(
                status = status.as_u16(),
                endpoint,
                message = %api_err.message,
                "request rejected by Wallex"
            );
            return Err(api_err.into());
        }

        serde_json::from_slice(&body).map_err(|e| {
            tracing::error!(endpoint, error = %e, "failed to decode Wallex response");
            RequestError::new(RequestStage::ParsingResponse, e).into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = WallexClient::new().expect("client init");
        assert!(client.api_key().is_none());
    }

    #[test]
    fn test_api_key_roundtrip() {
        let mut client = WallexClient::new().expect("client init");
        client.set_api_key("secret");
        assert_eq!(client.api_key(), Some("secret"));
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let result = WallexClient::with_config_and_base_url(ClientConfig::default(), "not a url");
        assert!(matches!(result, Err(WallexError::Config(_))));
    }

    #[test]
    fn test_api_url_versioning() {
        let client =
            WallexClient::with_config_and_base_url(ClientConfig::default(), "https://example.com/")
                .expect("client init");

        let url = client.api_url("v1", "/markets").expect("url");
        assert_eq!(url.as_str(), "https://example.com/v1/markets");

        let url = client.api_url("v2", "/depth/all").expect("url");
        assert_eq!(url.as_str(), "https://example.com/v2/depth/all");
    }

    #[test]
    fn test_version_override() {
        let config = ClientConfig {
            version_override: Some("v3".to_string()),
            ..ClientConfig::default()
        };
        let client = WallexClient::with_config_and_base_url(config, "https://example.com")
            .expect("client init");

        let url = client.api_url("v1", "/markets").expect("url");
        assert_eq!(url.as_str(), "https://example.com/v3/markets");
    }

    #[test]
    fn test_require_api_key_rejects_empty() {
        let mut client = WallexClient::new().expect("client init");
        assert!(matches!(
            client.require_api_key(),
            Err(WallexError::Config(_))
        ));

        client.set_api_key("");
        assert!(matches!(
            client.require_api_key(),
            Err(WallexError::Config(_))
        ));

        client.set_api_key("key");
        assert_eq!(client.require_api_key().expect("api key"), "key");
    }
}
