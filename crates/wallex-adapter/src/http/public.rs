/*
[INPUT]:  Symbol identifiers and query parameters
[OUTPUT]: Market data (symbol metadata, order books, recent trades)
[POS]:    HTTP layer - public market data endpoints (no auth required)
[UPDATE]: When adding new public endpoints or changing response format
*/

use reqwest::Method;

use crate::http::{Result, WallexClient};
use crate::types::requests::SymbolQuery;
use crate::types::{
    AllOrderBooksResponse, MarketsResponse, OrderBookResponse, TradesResponse,
};

impl WallexClient {
    /// Retrieve metadata for all trading symbols
    ///
    /// GET /v1/markets
    pub async fn get_markets(&self) -> Result<MarketsResponse> {
        self.request(Method::GET, "/markets", "v1", false).await
    }

    /// Retrieve the current order book for a single market
    ///
    /// GET /v1/depth?symbol={symbol}
    pub async fn get_order_book(&self, symbol: &str) -> Result<OrderBookResponse> {
        self.request_with(Method::GET, "/depth", "v1", false, &SymbolQuery { symbol })
            .await
    }

    /// Retrieve the order books for all markets in a single call
    ///
    /// GET /v2/depth/all (note: v2)
    pub async fn get_all_order_books(&self) -> Result<AllOrderBooksResponse> {
        self.request(Method::GET, "/depth/all", "v2", false).await
    }

    /// Retrieve recent executed trades for a symbol
    ///
    /// GET /v1/trades?symbol={symbol}
    pub async fn get_recent_trades(&self, symbol: &str) -> Result<TradesResponse> {
        self.request_with(Method::GET, "/trades", "v1", false, &SymbolQuery { symbol })
            .await
    }
}
