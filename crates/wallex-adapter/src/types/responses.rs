/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust response structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::models::{Balance, Order, OrderBook, SymbolInfo, Trade, UserTrade};

/// The Wallex success envelope: every endpoint wraps its payload under
/// `result` next to a `success` flag and an optional `message`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub result: T,
}

/// `result` of GET /v1/markets: symbol metadata keyed by market symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketsResult {
    pub symbols: HashMap<String, SymbolInfo>,
}

/// `result` of GET /v1/trades.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatestTrades {
    #[serde(rename = "latestTrades")]
    pub latest_trades: Vec<Trade>,
}

/// `result` of GET /v1/account/balances: balances keyed by asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalancesResult {
    pub balances: HashMap<String, Balance>,
}

/// `result` of GET /v1/account/openOrders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenOrdersResult {
    pub orders: Vec<Order>,
}

/// `result` of GET /v1/account/trades.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserTradesResult {
    #[serde(rename = "accountLatestTrades")]
    pub account_latest_trades: Vec<UserTrade>,
}

pub type MarketsResponse = ApiResponse<MarketsResult>;
pub type OrderBookResponse = ApiResponse<OrderBook>;
pub type AllOrderBooksResponse = ApiResponse<HashMap<String, OrderBook>>;
pub type TradesResponse = ApiResponse<LatestTrades>;
pub type BalancesResponse = ApiResponse<BalancesResult>;
pub type OrderResponse = ApiResponse<Order>;
pub type OpenOrdersResponse = ApiResponse<OpenOrdersResult>;
pub type UserTradesResponse = ApiResponse<UserTradesResult>;
