/*
[INPUT]:  Order requests with API key authentication
[OUTPUT]: Order responses and confirmations
[POS]:    HTTP layer - order endpoints (require X-API-Key)
[UPDATE]: When adding new order endpoints or changing order flow
*/

use reqwest::Method;

use crate::http::error::WallexError;
use crate::http::{Result, WallexClient};
use crate::types::requests::CancelOrderQuery;
use crate::types::requests::SymbolQuery;
use crate::types::{CreateOrderParams, OpenOrdersResponse, OrderResponse};

impl WallexClient {
    /// Submit a new order
    ///
    /// POST /v1/account/orders
    pub async fn create_order(&self, params: &CreateOrderParams) -> Result<OrderResponse> {
        self.request_with(Method::POST, "/account/orders", "v1", true, params)
            .await
    }

    /// Cancel an active order. An unknown or already-closed order id comes
    /// back from Wallex as an API error, not a transport failure.
    ///
    /// DELETE /v1/account/orders?clientOrderId={id}
    pub async fn cancel_order(&self, client_order_id: &str) -> Result<OrderResponse> {
        self.request_with(
            Method::DELETE,
            "/account/orders",
            "v1",
            true,
            &CancelOrderQuery { client_order_id },
        )
        .await
    }

    /// Retrieve all active orders, optionally scoped to one symbol
    ///
    /// GET /v1/account/openOrders[?symbol={symbol}]
    pub async fn get_open_orders(&self, symbol: Option<&str>) -> Result<OpenOrdersResponse> {
        match symbol {
            Some(symbol) => {
                self.request_with(
                    Method::GET,
                    "/account/openOrders",
                    "v1",
                    true,
                    &SymbolQuery { symbol },
                )
                .await
            }
            None => {
                self.request(Method::GET, "/account/openOrders", "v1", true)
                    .await
            }
        }
    }

    /// Retrieve full details for a specific order
    ///
    /// GET /v1/account/orders/{clientOrderId}
    pub async fn get_order_status(&self, client_order_id: &str) -> Result<OrderResponse> {
        if client_order_id.is_empty() {
            return Err(WallexError::InvalidRequest(
                "client order id is required for getting order status".to_string(),
            ));
        }

        let endpoint = format!("/account/orders/{client_order_id}");
        self.request(Method::GET, &endpoint, "v1", true).await
    }
}

#[cfg(test)]
mod tests {
    use crate::http::{ClientConfig, WallexClient, WallexError};
    use crate::types::{CreateOrderParams, OrderType, Side};
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(server: &MockServer) -> WallexClient {
        let mut client =
            WallexClient::with_config_and_base_url(ClientConfig::default(), &server.uri())
                .expect("client init");
        client.set_api_key("test-key");
        client
    }

    fn order_body(status: &str, active: bool) -> String {
        format!(
            r#"{{
                "success": true,
                "result": {{
                    "symbol": "BTCUSDT",
                    "type": "LIMIT",
                    "side": "BUY",
                    "price": "20950.0",
                    "origQty": "0.01",
                    "origSum": "209.50",
                    "executedPrice": "0",
                    "executedQty": "0",
                    "executedSum": "0",
                    "executedPercent": 0.0,
                    "status": "{status}",
                    "active": {active},
                    "clientOrderId": "cl-1",
                    "created_at": "2022-06-17T11:53:02Z"
                }}
            }}"#
        )
    }

    #[tokio::test]
    async fn test_create_order_posts_json_body() {
        let server = MockServer::start().await;

        let expected_body = serde_json::json!({
            "symbol": "BTCUSDT",
            "type": "LIMIT",
            "side": "BUY",
            "price": "20950.0",
            "quantity": "0.01",
            "clientOrderId": "cl-1"
        });

        let _mock = Mock::given(method("POST"))
            .and(path("/v1/account/orders"))
            .and(header("X-API-Key", "test-key"))
            .and(header("content-type", "application/json"))
            .and(body_json(&expected_body))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_raw(order_body("NEW", true), "application/json"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let params = CreateOrderParams {
            symbol: "BTCUSDT".to_string(),
            order_type: OrderType::Limit,
            side: Side::Buy,
            price: Some("20950.0".parse().expect("price")),
            quantity: "0.01".parse().expect("quantity"),
            client_order_id: Some("cl-1".to_string()),
        };

        let response = client.create_order(&params).await.expect("create_order failed");

        assert_eq!(response.result.status, "NEW");
        assert!(response.result.active);
    }

    #[tokio::test]
    async fn test_cancel_order_uses_delete_with_query() {
        let server = MockServer::start().await;

        let _mock = Mock::given(method("DELETE"))
            .and(path("/v1/account/orders"))
            .and(query_param("clientOrderId", "cl-1"))
            .and(header("X-API-Key", "test-key"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_raw(order_body("CANCELED", false), "application/json"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let response = client.cancel_order("cl-1").await.expect("cancel_order failed");

        assert_eq!(response.result.status, "CANCELED");
        assert!(!response.result.active);
    }

    #[tokio::test]
    async fn test_get_open_orders_scoped_by_symbol() {
        let server = MockServer::start().await;
        let mock_response = r#"{"success": true, "result": {"orders": []}}"#;

        let _mock = Mock::given(method("GET"))
            .and(path("/v1/account/openOrders"))
            .and(query_param("symbol", "BTCUSDT"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_raw(mock_response, "application/json"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let response = client
            .get_open_orders(Some("BTCUSDT"))
            .await
            .expect("get_open_orders failed");

        assert!(response.result.orders.is_empty());
    }

    #[tokio::test]
    async fn test_get_order_status_by_path_segment() {
        let server = MockServer::start().await;

        let _mock = Mock::given(method("GET"))
            .and(path("/v1/account/orders/cl-1"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_raw(order_body("FILLED", false), "application/json"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let response = client
            .get_order_status("cl-1")
            .await
            .expect("get_order_status failed");

        assert_eq!(response.result.client_order_id, "cl-1");
        assert_eq!(response.result.status, "FILLED");
    }

    #[tokio::test]
    async fn test_get_order_status_rejects_empty_id() {
        let server = MockServer::start().await;
        let client = test_client(&server);

        let err = client
            .get_order_status("")
            .await
            .expect_err("expected validation error");

        assert!(matches!(err, WallexError::InvalidRequest(_)));
    }

    #[tokio::test]
    async fn test_cancel_unknown_order_surfaces_api_error() {
        let server = MockServer::start().await;

        let _mock = Mock::given(method("DELETE"))
            .and(path("/v1/account/orders"))
            .respond_with(ResponseTemplate::new(422).set_body_raw(
                r#"{"success":false,"code":2004,"message":"order not found","result":{}}"#,
                "application/json",
            ))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let err = client
            .cancel_order("missing")
            .await
            .expect_err("expected API error");

        match err {
            WallexError::Api(api_err) => {
                assert_eq!(api_err.status_code, 422);
                assert_eq!(api_err.code, Some(2004));
                assert_eq!(api_err.message, "order not found");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }
}
