//! REST API client for the Bittrex cryptocurrency exchange
//!
//! This crate provides a typed async client for the Bittrex v1.1 API and the
//! v2.0 candle endpoints, covering market data, account management and order
//! execution.
//!
//! # Features
//!
//! - **Public**: Markets, currencies, ticker, candles, summaries, orderbook, trades
//! - **Market**: Place limit orders, cancel, list open orders
//! - **Account**: Balances, deposits, withdrawals, order history
//!
//! Every call returns the Bittrex envelope, [`ApiResponse`], on success and a
//! [`RestError`] otherwise.
//!
//! # Authentication
//!
//! Private endpoints require API credentials. The client signs each private
//! request URL with HMAC-SHA512 and sends the signature in the `apisign`
//! header.
//!
//! # Example
//!
//! ```no_run
//! use bittrex_rest::{BittrexClient, Credentials, OrderBookType};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Public endpoints (no auth required)
//!     let mut client = BittrexClient::new();
//!     let book = client.get_orderbook("BTC-LTC", OrderBookType::Both).await?;
//!     println!("Orderbook: {:?}", book.result);
//!
//!     // Private endpoints (auth required)
//!     client.authenticate(Credentials::from_env()?);
//!     let balances = client.get_balances().await?;
//!     println!("Balances: {:?}", balances.result);
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod dispatch;
pub mod endpoints;
pub mod error;

// Re-export main types
pub use bittrex_auth::{AuthError, Credentials};
pub use client::{BittrexClient, ClientConfig};
pub use dispatch::{ApiVersion, BaseUrls, RequestDescriptor};
pub use error::{ErrorKind, RestError, RestResult};

// Re-export the data model
pub use bittrex_types::{
    // Envelope
    ApiResponse, Decimal, QueryParams,
    // Public
    Candle, Currency, Market, MarketSummary, MarketTick, Orderbook, OrderbookEntry,
    OrderbookResult, Trade,
    // Account
    Balance, Deposit, DepositAddress, OpenOrder, Order, OrderReference, OrderSingle, Withdrawal,
    // Enums
    FillType, OrderBookType, OrderCondition, OrderType, TickInterval, TradeSide,
};
