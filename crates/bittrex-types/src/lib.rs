//! Shared types for the Bittrex REST API
//!
//! This crate provides the data model used by the Bittrex client crates.
//! Entities mirror the upstream JSON shapes one-to-one and carry no behavior.
//!
//! # Key Types
//!
//! - [`ApiResponse`] - The `success`/`message`/`result` envelope every call returns
//! - [`QueryParams`] - Ordered query parameters (order matters for request signing)
//! - [`Market`], [`MarketSummary`], [`Candle`], [`Trade`] - Public market data
//! - [`Order`], [`OpenOrder`], [`Balance`], [`Deposit`], [`Withdrawal`] - Account data
//! - [`TickInterval`], [`OrderBookType`], [`OrderType`] - Request and response enums

pub mod account;
pub mod decimal;
pub mod enums;
pub mod envelope;
pub mod market;
pub mod query;

// Re-export commonly used types
pub use account::*;
pub use enums::*;
pub use envelope::*;
pub use market::*;
pub use query::*;

// Re-export rust_decimal for users
pub use rust_decimal::Decimal;
