//! Candle interval, orderbook side, and order enums

use serde::{Deserialize, Serialize};

/// Candle interval accepted by the v2 tick endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TickInterval {
    /// 1 minute
    #[serde(rename = "oneMin")]
    OneMin,
    /// 5 minutes
    #[serde(rename = "fiveMin")]
    #[default]
    FiveMin,
    /// 30 minutes
    #[serde(rename = "thirtyMin")]
    ThirtyMin,
    /// 1 hour
    #[serde(rename = "hour")]
    Hour,
    /// 1 day
    #[serde(rename = "day")]
    Day,
}

impl TickInterval {
    /// Returns the interval as used in query strings
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OneMin => "oneMin",
            Self::FiveMin => "fiveMin",
            Self::ThirtyMin => "thirtyMin",
            Self::Hour => "hour",
            Self::Day => "day",
        }
    }
}

impl std::fmt::Display for TickInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which side(s) of the orderbook to fetch
///
/// `Both` returns an object with `buy` and `sell` arrays; a single side
/// returns a bare array of entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderBookType {
    Buy,
    Sell,
    #[default]
    Both,
}

impl OrderBookType {
    /// Returns the type as used in query strings
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Buy => "buy",
            Self::Sell => "sell",
            Self::Both => "both",
        }
    }
}

impl std::fmt::Display for OrderBookType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order type as reported on orders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderType {
    LimitBuy,
    LimitSell,
    MarketBuy,
    MarketSell,
}

/// Conditional order trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderCondition {
    #[default]
    None,
    GreaterThan,
    LessThan,
    StopLossFixed,
    StopLossPercentage,
}

/// Whether a trade filled an order completely
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FillType {
    Fill,
    PartialFill,
}

/// Taker side of a public trade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TradeSide {
    Buy,
    Sell,
}
