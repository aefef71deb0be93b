//! Private account and order types

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::enums::{OrderCondition, OrderType};

/// Order entry from the order history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Order {
    pub order_uuid: String,
    pub exchange: String,
    pub time_stamp: String,
    pub order_type: OrderType,
    #[serde(with = "crate::decimal")]
    pub limit: Decimal,
    #[serde(with = "crate::decimal")]
    pub quantity: Decimal,
    #[serde(with = "crate::decimal")]
    pub quantity_remaining: Decimal,
    #[serde(with = "crate::decimal")]
    pub commission: Decimal,
    #[serde(with = "crate::decimal")]
    pub price: Decimal,
    #[serde(default, with = "crate::decimal::option")]
    pub price_per_unit: Option<Decimal>,
    pub is_conditional: bool,
    pub condition: OrderCondition,
    /// Upstream-defined, pass-through only
    pub condition_target: Option<serde_json::Value>,
    pub immediate_or_cancel: bool,
    pub closed: Option<String>,
}

/// A single order looked up by id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OrderSingle {
    pub account_id: Option<String>,
    pub order_uuid: String,
    pub exchange: String,
    #[serde(rename = "Type")]
    pub order_type: OrderType,
    #[serde(with = "crate::decimal")]
    pub quantity: Decimal,
    #[serde(with = "crate::decimal")]
    pub quantity_remaining: Decimal,
    #[serde(with = "crate::decimal")]
    pub limit: Decimal,
    #[serde(with = "crate::decimal")]
    pub reserved: Decimal,
    #[serde(with = "crate::decimal")]
    pub reserve_remaining: Decimal,
    #[serde(with = "crate::decimal")]
    pub commission_reserved: Decimal,
    #[serde(with = "crate::decimal")]
    pub commission_reserve_remaining: Decimal,
    #[serde(with = "crate::decimal")]
    pub commission_paid: Decimal,
    #[serde(with = "crate::decimal")]
    pub price: Decimal,
    #[serde(default, with = "crate::decimal::option")]
    pub price_per_unit: Option<Decimal>,
    pub opened: String,
    pub closed: Option<String>,
    pub is_open: bool,
    pub sentinel: String,
    pub cancel_initiated: bool,
    pub immediate_or_cancel: bool,
    pub is_conditional: bool,
    pub condition: OrderCondition,
    /// Upstream-defined, pass-through only
    pub condition_target: Option<serde_json::Value>,
}

/// An order that is still open
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OpenOrder {
    #[serde(default)]
    pub uuid: Option<String>,
    pub order_uuid: String,
    pub exchange: String,
    pub order_type: OrderType,
    #[serde(with = "crate::decimal")]
    pub quantity: Decimal,
    #[serde(with = "crate::decimal")]
    pub quantity_remaining: Decimal,
    #[serde(with = "crate::decimal")]
    pub limit: Decimal,
    #[serde(with = "crate::decimal")]
    pub commission_paid: Decimal,
    #[serde(with = "crate::decimal")]
    pub price: Decimal,
    #[serde(default, with = "crate::decimal::option")]
    pub price_per_unit: Option<Decimal>,
    pub opened: String,
    pub closed: Option<String>,
    pub cancel_initiated: bool,
    pub immediate_or_cancel: bool,
    pub is_conditional: bool,
    /// Raw condition name; `null` on orders placed without one
    pub condition: Option<String>,
    /// Upstream-defined, pass-through only
    pub condition_target: Option<serde_json::Value>,
}

/// Balance of one currency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Balance {
    pub currency: String,
    #[serde(with = "crate::decimal")]
    pub balance: Decimal,
    #[serde(with = "crate::decimal")]
    pub available: Decimal,
    #[serde(with = "crate::decimal")]
    pub pending: Decimal,
    pub crypto_address: Option<String>,
    #[serde(default)]
    pub requested: Option<bool>,
    #[serde(default)]
    pub uuid: Option<String>,
}

/// Completed or pending deposit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Deposit {
    pub id: u64,
    #[serde(with = "crate::decimal")]
    pub amount: Decimal,
    pub currency: String,
    pub confirmations: u32,
    pub last_updated: String,
    pub tx_id: String,
    pub crypto_address: String,
}

/// Deposit address for a currency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DepositAddress {
    pub currency: String,
    pub address: String,
}

/// Withdrawal history entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Withdrawal {
    pub payment_uuid: String,
    pub currency: String,
    #[serde(with = "crate::decimal")]
    pub amount: Decimal,
    pub address: String,
    pub opened: String,
    pub authorized: bool,
    pub pending_payment: bool,
    #[serde(with = "crate::decimal")]
    pub tx_cost: Decimal,
    pub tx_id: Option<String>,
    pub canceled: bool,
    pub invalid_address: bool,
}

/// Id returned when an order or withdrawal is created
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderReference {
    pub uuid: String,
}
