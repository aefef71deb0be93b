//! Private account endpoints
//!
//! These endpoints require authentication.

use bittrex_auth::Credentials;
use bittrex_types::{
    ApiResponse, Balance, Deposit, DepositAddress, Order, OrderReference, OrderSingle,
    QueryParams, Withdrawal,
};
use rust_decimal::Decimal;
use tracing::instrument;

use crate::dispatch::{ApiVersion, Dispatcher, RequestDescriptor};
use crate::endpoints::{optional, require};
use crate::error::RestResult;

/// Private account endpoints
pub struct AccountEndpoints<'a> {
    dispatcher: &'a Dispatcher,
    credentials: &'a Credentials,
}

impl<'a> AccountEndpoints<'a> {
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

    /// Get balances of all currencies
    #[instrument(skip(self))]
    pub async fn get_balances(&self) -> RestResult<ApiResponse<Vec<Balance>>> {
        self.get("/account/getbalances", QueryParams::new()).await
    }

    /// Get the balance of one currency
    ///
    /// # Arguments
    /// * `currency` - Currency code (e.g., "BTC")
    #[instrument(skip(self))]
    pub async fn get_balance(&self, currency: &str) -> RestResult<ApiResponse<Balance>> {
        let query = QueryParams::new().with("currency", require("currency", currency)?);
        self.get("/account/getbalance", query).await
    }

    /// Get withdrawal history, optionally for one currency
    #[instrument(skip(self))]
    pub async fn get_withdrawal_history(
        &self,
        currency: Option<&str>,
    ) -> RestResult<ApiResponse<Vec<Withdrawal>>> {
        let mut query = QueryParams::new();
        query.push_opt("currency", optional(currency));
        self.get("/account/getwithdrawalhistory", query).await
    }

    /// Get or generate the deposit address for a currency
    #[instrument(skip(self))]
    pub async fn get_deposit_address(
        &self,
        currency: &str,
    ) -> RestResult<ApiResponse<DepositAddress>> {
        let query = QueryParams::new().with("currency", require("currency", currency)?);
        self.get("/account/getdepositaddress", query).await
    }

    /// Get deposit history, optionally for one currency
    #[instrument(skip(self))]
    pub async fn get_deposit_history(
        &self,
        currency: Option<&str>,
    ) -> RestResult<ApiResponse<Vec<Deposit>>> {
        let mut query = QueryParams::new();
        query.push_opt("currency", optional(currency));
        self.get("/account/getDepositHistory", query).await
    }

    /// Get order history, optionally for one market
    #[instrument(skip(self))]
    pub async fn get_order_history(
        &self,
        market: Option<&str>,
    ) -> RestResult<ApiResponse<Vec<Order>>> {
        let mut query = QueryParams::new();
        query.push_opt("market", optional(market));
        self.get("/account/getOrderHistory", query).await
    }

    /// Get a single order by id
    #[instrument(skip(self))]
    pub async fn get_order(&self, order_id: &str) -> RestResult<ApiResponse<OrderSingle>> {
        let query = QueryParams::new().with("uuid", require("order_id", order_id)?);
        self.get("/account/getOrder", query).await
    }

    /// Withdraw funds to an external address
    ///
    /// # Arguments
    /// * `currency` - Currency code (e.g., "BTC")
    /// * `quantity` - Amount to withdraw
    /// * `address` - Destination address
    /// * `payment_id` - Memo/tag for currencies that need one; omitted when `None`
    #[instrument(skip(self))]
    pub async fn withdraw(
        &self,
        currency: &str,
        quantity: Decimal,
        address: &str,
        payment_id: Option<&str>,
    ) -> RestResult<ApiResponse<OrderReference>> {
        let mut query = QueryParams::new();
        query
            .push("currency", require("currency", currency)?)
            .push_decimal("quantity", quantity)
            .push("address", require("address", address)?)
            .push_opt("paymentid", optional(payment_id));
        self.get("/account/withdraw", query).await
    }
}
