/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::{OrderType, Side};

/// Buy/sell directional distribution of recent trades for a symbol, both as
/// percentages (0-100). Part of the `stats` block under GET /v1/markets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Direction {
    #[serde(rename = "SELL")]
    pub sell: i64,
    #[serde(rename = "BUY")]
    pub buy: i64,
}

/// 24-hour and 7-day statistics for a trading pair, found inside
/// [`SymbolInfo`] under GET /v1/markets.
///
/// Prices and volumes are number-strings on the wire; Wallex reports `"-"`
/// for markets with no data, which decodes as zero. Percentage changes are
/// plain JSON numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymbolStats {
    #[serde(
        rename = "bidPrice",
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub bid_price: Decimal,
    #[serde(
        rename = "askPrice",
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub ask_price: Decimal,
    #[serde(rename = "24h_ch", default)]
    pub day_change: f64,
    #[serde(rename = "7d_ch", default)]
    pub week_change: f64,
    #[serde(
        rename = "24h_volume",
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub day_volume: Decimal,
    #[serde(
        rename = "7d_volume",
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub week_volume: Decimal,
    #[serde(
        rename = "24h_quoteVolume",
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub day_quote_volume: Decimal,
    #[serde(
        rename = "24h_highPrice",
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub day_high_price: Decimal,
    #[serde(
        rename = "24h_lowPrice",
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub day_low_price: Decimal,
    #[serde(
        rename = "lastPrice",
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub last_price: Decimal,
    #[serde(
        rename = "lastQty",
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub last_qty: Decimal,
    #[serde(rename = "lastTradeSide", default)]
    pub last_trade_side: String,
    #[serde(
        rename = "bidVolume",
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub bid_volume: Decimal,
    #[serde(
        rename = "askVolume",
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub ask_volume: Decimal,
    #[serde(rename = "bidCount", default)]
    pub bid_count: i32,
    #[serde(rename = "askCount", default)]
    pub ask_count: i32,
    #[serde(default)]
    pub direction: Direction,
}

/// Complete metadata of a trading symbol: asset identifiers, precision
/// rules, minimum trading constraints, tick sizes, and market statistics.
/// Returned inside `result.symbols` from GET /v1/markets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymbolInfo {
    pub symbol: String,
    #[serde(rename = "baseAsset")]
    pub base_asset: String,
    #[serde(rename = "baseAssetPrecision")]
    pub base_asset_precision: i32,
    #[serde(rename = "quoteAsset")]
    pub quote_asset: String,
    #[serde(rename = "quotePrecision")]
    pub quote_precision: i32,
    #[serde(rename = "faName", default)]
    pub fa_name: String,
    #[serde(rename = "faBaseAsset", default)]
    pub fa_base_asset: String,
    #[serde(rename = "faQuoteAsset", default)]
    pub fa_quote_asset: String,
    #[serde(rename = "stepSize")]
    pub step_size: i64,
    #[serde(rename = "tickSize")]
    pub tick_size: i64,
    #[serde(rename = "minQty")]
    pub min_qty: i64,
    #[serde(rename = "minNotional")]
    pub min_notional: i64,
    pub stats: SymbolStats,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// A single order book price level. Price and quantity arrive as JSON
/// numbers, the running sum as a number-string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderBookLevel {
    pub price: f64,
    pub quantity: f64,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub sum: Decimal,
}

/// Full depth for a symbol: bid and ask level arrays. Returned as `result`
/// for GET /v1/depth and as map values for GET /v2/depth/all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderBook {
    pub ask: Vec<OrderBookLevel>,
    pub bid: Vec<OrderBookLevel>,
}

/// A single executed public trade from GET /v1/trades.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub symbol: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub quantity: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub sum: Decimal,
    /// true when the taker was buying
    #[serde(rename = "isBuyOrder")]
    pub is_buy_order: bool,
    pub timestamp: DateTime<Utc>,
}

/// A wallet entry for one asset: available and blocked balances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Balance {
    pub asset: String,
    #[serde(rename = "faName", default)]
    pub fa_name: String,
    pub fiat: bool,
    #[serde(with = "rust_decimal::serde::str")]
    pub value: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub locked: Decimal,
}

/// A user order as returned by the account order endpoints: create-order
/// responses, open-order queries, order-status lookups, and cancellations.
///
/// Cancellation responses additionally carry fill and fee information; those
/// fields are optional here so one model covers every order-shaped payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub symbol: String,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    pub side: Side,
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    #[serde(rename = "origQty", with = "rust_decimal::serde::str")]
    pub orig_qty: Decimal,
    #[serde(
        rename = "origSum",
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub orig_sum: Decimal,
    #[serde(
        rename = "executedPrice",
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub executed_price: Decimal,
    #[serde(
        rename = "executedQty",
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub executed_qty: Decimal,
    #[serde(
        rename = "executedSum",
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub executed_sum: Decimal,
    #[serde(rename = "executedPercent", default)]
    pub executed_percent: f64,
    pub status: String,
    #[serde(default)]
    pub active: bool,
    #[serde(rename = "clientOrderId", default)]
    pub client_order_id: String,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub fee: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fills: Option<Vec<serde_json::Value>>,
    #[serde(rename = "transactTime", default, skip_serializing_if = "Option::is_none")]
    pub transact_time: Option<i64>,
    #[serde(rename = "created_at")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updated_at", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A trade execution belonging to the authenticated user, from
/// GET /v1/account/trades. Unlike public trades this includes fee data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserTrade {
    pub symbol: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub quantity: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub sum: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub fee: Decimal,
    #[serde(rename = "feeCoefficient", with = "rust_decimal::serde::str")]
    pub fee_coefficient: Decimal,
    #[serde(rename = "feeAsset")]
    pub fee_asset: String,
    #[serde(rename = "isBuyer")]
    pub is_buyer: bool,
    pub timestamp: DateTime<Utc>,
}

mod serde_helpers {
    use super::Decimal;
    use serde::{Deserialize, Deserializer, Serializer};
    use serde_json::Value;
    use std::str::FromStr;

    /// Tolerant decimal decode: accepts numbers and number-strings, and maps
    /// Wallex's placeholder values (`"-"`, empty string, null, unparseable
    /// text) to zero.
    pub fn deserialize_decimal_or_zero<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        if value.is_null() {
            return Ok(Decimal::ZERO);
        }

        if let Some(raw) = value.as_str() {
            let raw = raw.trim();
            if raw.is_empty() || raw == "-" {
                return Ok(Decimal::ZERO);
            }
            return Ok(Decimal::from_str(raw).unwrap_or(Decimal::ZERO));
        }

        if value.is_number() {
            return Decimal::from_str(&value.to_string()).map_err(serde::de::Error::custom);
        }

        Err(serde::de::Error::custom("invalid decimal value"))
    }

    pub fn serialize_decimal<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_string())
    }
}
