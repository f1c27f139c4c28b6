/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust request structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::{OrderType, Side};

/// Payload for POST /v1/account/orders.
///
/// `price` is required for LIMIT orders and omitted for MARKET orders.
/// `client_order_id` is optional and can be assigned to track orders across
/// systems.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateOrderParams {
    pub symbol: String,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    pub side: Side,
    #[serde(with = "rust_decimal::serde::str_option")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::str")]
    pub quantity: Decimal,
    #[serde(rename = "clientOrderId")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_order_id: Option<String>,
}

/// Optional server-side filters for GET /v1/account/trades.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UserTradesFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<Side>,
}

/// Query payload for the symbol-scoped public endpoints.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct SymbolQuery<'a> {
    pub symbol: &'a str,
}

/// Query payload for DELETE /v1/account/orders.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct CancelOrderQuery<'a> {
    #[serde(rename = "clientOrderId")]
    pub client_order_id: &'a str,
}
