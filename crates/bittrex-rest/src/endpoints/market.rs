//! Private trading endpoints
//!
//! These endpoints require authentication.

use bittrex_auth::Credentials;
use bittrex_types::{ApiResponse, OpenOrder, OrderReference, QueryParams};
use rust_decimal::Decimal;
use tracing::instrument;

use crate::dispatch::{ApiVersion, Dispatcher, RequestDescriptor};
use crate::endpoints::{optional, require};
use crate::error::RestResult;

/// Private trading endpoints
pub struct MarketEndpoints<'a> {
    dispatcher: &'a Dispatcher,
    credentials: &'a Credentials,
}

impl<'a> MarketEndpoints<'a> {
    pub fn new(dispatcher: &'a Dispatcher, credentials: &'a Credentials) -> Self {
        Self {
            dispatcher,
            credentials,
        }
    }

    async fn get<T: serde::de::DeserializeOwned>(
        &self,
        path: &'static str,
        query: QueryParams,
    ) -> RestResult<ApiResponse<T>> {
        let request = RequestDescriptor::get(ApiVersion::V1, path).with_query(query);
        self.dispatcher.send_signed(self.credentials, request).await
    }

    /// Place a limit buy order
    ///
    /// # Arguments
    /// * `market` - Market name (e.g., "BTC-LTC")
    /// * `quantity` - Amount to buy
    /// * `rate` - Limit price
    #[instrument(skip(self))]
    pub async fn buy_limit(
        &self,
        market: &str,
        quantity: Decimal,
        rate: Decimal,
    ) -> RestResult<ApiResponse<OrderReference>> {
        self.get("/market/buylimit", limit_query(market, quantity, rate)?)
            .await
    }

    /// Place a limit sell order
    #[instrument(skip(self))]
    pub async fn sell_limit(
        &self,
        market: &str,
        quantity: Decimal,
        rate: Decimal,
    ) -> RestResult<ApiResponse<OrderReference>> {
        self.get("/market/selllimit", limit_query(market, quantity, rate)?)
            .await
    }

    /// Cancel an order
    ///
    /// Bittrex answers a successful cancel with a `null` result.
    #[instrument(skip(self))]
    pub async fn cancel(&self, order_id: &str) -> RestResult<ApiResponse<OrderReference>> {
        let query = QueryParams::new().with("uuid", require("order_id", order_id)?);
        self.get("/market/cancel", query).await
    }

    /// Get open orders, optionally for one market
    #[instrument(skip(self))]
    pub async fn get_open_orders(
        &self,
        market: Option<&str>,
    ) -> RestResult<ApiResponse<Vec<OpenOrder>>> {
        let mut query = QueryParams::new();
        query.push_opt("market", optional(market));
        self.get("/market/getopenorders", query).await
    }
}

fn limit_query(market: &str, quantity: Decimal, rate: Decimal) -> RestResult<QueryParams> {
    let mut query = QueryParams::new();
    query
        .push("market", require("market", market)?)
        .push_decimal("quantity", quantity)
        .push_decimal("rate", rate);
    Ok(query)
}
