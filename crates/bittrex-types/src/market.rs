//! Public market data types

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::enums::{FillType, TradeSide};

/// A tradable market
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Market {
    pub market_currency: String,
    pub base_currency: String,
    pub market_currency_long: String,
    pub base_currency_long: String,
    #[serde(with = "crate::decimal")]
    pub min_trade_size: Decimal,
    pub market_name: String,
    pub is_active: bool,
    pub created: String,
    pub notice: Option<String>,
    pub is_sponsored: Option<bool>,
    pub logo_url: Option<String>,
}

/// A supported currency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Currency {
    pub currency: String,
    pub currency_long: String,
    pub min_confirmation: u32,
    #[serde(with = "crate::decimal")]
    pub tx_fee: Decimal,
    pub is_active: bool,
    pub coin_type: String,
    pub base_address: Option<String>,
    pub notice: Option<String>,
}

/// 24h summary of a market
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MarketSummary {
    pub market_name: String,
    #[serde(with = "crate::decimal")]
    pub high: Decimal,
    #[serde(with = "crate::decimal")]
    pub low: Decimal,
    #[serde(with = "crate::decimal")]
    pub volume: Decimal,
    #[serde(with = "crate::decimal")]
    pub last: Decimal,
    #[serde(with = "crate::decimal")]
    pub base_volume: Decimal,
    pub time_stamp: String,
    #[serde(with = "crate::decimal")]
    pub bid: Decimal,
    #[serde(with = "crate::decimal")]
    pub ask: Decimal,
    pub open_buy_orders: u32,
    pub open_sell_orders: u32,
    #[serde(with = "crate::decimal")]
    pub prev_day: Decimal,
    pub created: String,
}

/// Best bid, best ask and last trade price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MarketTick {
    #[serde(with = "crate::decimal")]
    pub bid: Decimal,
    #[serde(with = "crate::decimal")]
    pub ask: Decimal,
    #[serde(with = "crate::decimal")]
    pub last: Decimal,
}

/// OHLC candle from the v2 tick endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    /// Open
    #[serde(rename = "O", with = "crate::decimal")]
    pub open: Decimal,
    /// High
    #[serde(rename = "H", with = "crate::decimal")]
    pub high: Decimal,
    /// Low
    #[serde(rename = "L", with = "crate::decimal")]
    pub low: Decimal,
    /// Close
    #[serde(rename = "C", with = "crate::decimal")]
    pub close: Decimal,
    /// Volume in market currency
    #[serde(rename = "V", with = "crate::decimal")]
    pub volume: Decimal,
    /// Candle start time
    #[serde(rename = "T")]
    pub timestamp: String,
    /// Volume in base currency
    #[serde(rename = "BV", with = "crate::decimal")]
    pub base_volume: Decimal,
}

/// A single orderbook price level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OrderbookEntry {
    #[serde(with = "crate::decimal")]
    pub quantity: Decimal,
    #[serde(with = "crate::decimal")]
    pub rate: Decimal,
}

/// Both sides of an orderbook
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Orderbook {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buy: Option<Vec<OrderbookEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sell: Option<Vec<OrderbookEntry>>,
}

/// Orderbook payload, whose shape depends on the requested type
///
/// `type=both` returns an object with `buy`/`sell`; `type=buy` or `type=sell`
/// return a bare list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OrderbookResult {
    Side(Vec<OrderbookEntry>),
    Both(Orderbook),
}

impl OrderbookResult {
    /// Entries of a single-side request
    pub fn as_side(&self) -> Option<&[OrderbookEntry]> {
        match self {
            Self::Side(entries) => Some(entries),
            Self::Both(_) => None,
        }
    }

    /// Book of a `both` request
    pub fn as_both(&self) -> Option<&Orderbook> {
        match self {
            Self::Both(book) => Some(book),
            Self::Side(_) => None,
        }
    }
}

/// Public trade from the market history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Trade {
    pub id: u64,
    pub time_stamp: String,
    #[serde(with = "crate::decimal")]
    pub quantity: Decimal,
    #[serde(with = "crate::decimal")]
    pub price: Decimal,
    #[serde(with = "crate::decimal")]
    pub total: Decimal,
    pub fill_type: FillType,
    pub order_type: TradeSide,
}
