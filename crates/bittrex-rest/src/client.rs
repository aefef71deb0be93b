//! Main REST client implementation

use bittrex_auth::Credentials;
use bittrex_types::{
    ApiResponse, Balance, Candle, Currency, Deposit, DepositAddress, Market, MarketSummary,
    MarketTick, OpenOrder, Order, OrderBookType, OrderReference, OrderSingle, OrderbookResult,
    TickInterval, Trade, Withdrawal,
};
use rust_decimal::Decimal;
use tracing::info;

use crate::dispatch::{BaseUrls, Dispatcher, DEFAULT_USER_AGENT};
use crate::endpoints::{AccountEndpoints, MarketEndpoints, PublicEndpoints};
use crate::error::{RestError, RestResult};

/// Bittrex REST API client
///
/// Provides access to both public and private endpoints. Every call takes
/// `&self`; only [`authenticate`](Self::authenticate) mutates the client.
///
/// # Example
///
/// ```no_run
/// use bittrex_rest::{BittrexClient, Credentials, TickInterval};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Public endpoints only
///     let client = BittrexClient::new();
///     let candles = client.get_market_candles("BTC-LTC", TickInterval::default()).await?;
///
///     // With authentication for private endpoints
///     let creds = Credentials::from_env()?;
///     let auth_client = BittrexClient::with_credentials(creds);
///     let balances = auth_client.get_balances().await?;
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct BittrexClient {
    dispatcher: Dispatcher,
    credentials: Option<Credentials>,
}

impl BittrexClient {
    /// Create a new client without authentication
    ///
    /// Only public endpoints will be available.
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with credentials
    ///
    /// All endpoints (public and private) will be available.
    pub fn with_credentials(credentials: Credentials) -> Self {
        Self::with_config(ClientConfig::new().with_credentials(credentials))
    }

    /// Create a new client with credentials read from the environment
    ///
    /// See [`Credentials::from_env`].
    pub fn from_env() -> RestResult<Self> {
        Ok(Self::with_credentials(Credentials::from_env()?))
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Self {
        let user_agent = config
            .user_agent
            .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());
        let dispatcher = Dispatcher::new(config.base_urls, user_agent);

        info!(
            authenticated = config.credentials.is_some(),
            "Created Bittrex REST client"
        );

        Self {
            dispatcher,
            credentials: config.credentials,
        }
    }

    /// Set the credentials used by private endpoints
    ///
    /// Replaces any credentials set before.
    pub fn authenticate(&mut self, credentials: Credentials) -> &mut Self {
        info!("Credentials set on Bittrex REST client");
        self.credentials = Some(credentials);
        self
    }

    /// Check if the client has credentials for private endpoints
    pub fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }

    fn credentials(&self) -> RestResult<&Credentials> {
        self.credentials.as_ref().ok_or(RestError::AuthRequired)
    }

    // ========================================================================
    // Public Endpoints
    // ========================================================================

    /// Get public endpoints
    pub fn public(&self) -> PublicEndpoints<'_> {
        PublicEndpoints::new(&self.dispatcher)
    }

    /// Get all markets
    pub async fn get_markets(&self) -> RestResult<ApiResponse<Vec<Market>>> {
        self.public().get_markets().await
    }

    /// Get all supported currencies
    pub async fn get_currencies(&self) -> RestResult<ApiResponse<Vec<Currency>>> {
        self.public().get_currencies().await
    }

    /// Get bid, ask and last price for a market
    pub async fn get_market_ticker(&self, market: &str) -> RestResult<ApiResponse<MarketTick>> {
        self.public().get_market_ticker(market).await
    }

    /// Get candles for a market
    pub async fn get_market_candles(
        &self,
        market: &str,
        interval: TickInterval,
    ) -> RestResult<ApiResponse<Vec<Candle>>> {
        self.public().get_market_candles(market, interval).await
    }

    /// Get the most recent candle for a market
    pub async fn get_latest_candle(
        &self,
        market: &str,
        interval: TickInterval,
    ) -> RestResult<ApiResponse<Vec<Candle>>> {
        self.public().get_latest_candle(market, interval).await
    }

    /// Get 24h summaries of all markets
    pub async fn get_market_summaries(&self) -> RestResult<ApiResponse<Vec<MarketSummary>>> {
        self.public().get_market_summaries().await
    }

    /// Get the 24h summary of one market
    pub async fn get_market_summary(
        &self,
        market: &str,
    ) -> RestResult<ApiResponse<Vec<MarketSummary>>> {
        self.public().get_market_summary(market).await
    }

    /// Get the orderbook of a market
    pub async fn get_orderbook(
        &self,
        market: &str,
        book_type: OrderBookType,
    ) -> RestResult<ApiResponse<OrderbookResult>> {
        self.public().get_orderbook(market, book_type).await
    }

    /// Get the latest trades of a market
    pub async fn get_market_history(&self, market: &str) -> RestResult<ApiResponse<Vec<Trade>>> {
        self.public().get_market_history(market).await
    }

    // ========================================================================
    // Private Market Endpoints
    // ========================================================================

    /// Get trading endpoints (requires credentials)
    pub fn market(&self) -> RestResult<MarketEndpoints<'_>> {
        Ok(MarketEndpoints::new(&self.dispatcher, self.credentials()?))
    }

    /// Place a limit buy order
    pub async fn buy_limit(
        &self,
        market: &str,
        quantity: Decimal,
        rate: Decimal,
    ) -> RestResult<ApiResponse<OrderReference>> {
        self.market()?.buy_limit(market, quantity, rate).await
    }

    /// Place a limit sell order
    pub async fn sell_limit(
        &self,
        market: &str,
        quantity: Decimal,
        rate: Decimal,
    ) -> RestResult<ApiResponse<OrderReference>> {
        self.market()?.sell_limit(market, quantity, rate).await
    }

    /// Cancel an order
    pub async fn cancel(&self, order_id: &str) -> RestResult<ApiResponse<OrderReference>> {
        self.market()?.cancel(order_id).await
    }

    /// Get open orders, optionally for one market
    pub async fn get_open_orders(
        &self,
        market: Option<&str>,
    ) -> RestResult<ApiResponse<Vec<OpenOrder>>> {
        self.market()?.get_open_orders(market).await
    }

    // ========================================================================
    // Private Account Endpoints
    // ========================================================================

    /// Get account endpoints (requires credentials)
    pub fn account(&self) -> RestResult<AccountEndpoints<'_>> {
        Ok(AccountEndpoints::new(&self.dispatcher, self.credentials()?))
    }

    /// Get balances of all currencies
    pub async fn get_balances(&self) -> RestResult<ApiResponse<Vec<Balance>>> {
        self.account()?.get_balances().await
    }

    /// Get the balance of one currency
    pub async fn get_balance(&self, currency: &str) -> RestResult<ApiResponse<Balance>> {
        self.account()?.get_balance(currency).await
    }

    /// Get withdrawal history, optionally for one currency
    pub async fn get_withdrawal_history(
        &self,
        currency: Option<&str>,
    ) -> RestResult<ApiResponse<Vec<Withdrawal>>> {
        self.account()?.get_withdrawal_history(currency).await
    }

    /// Get the deposit address for a currency
    pub async fn get_deposit_address(
        &self,
        currency: &str,
    ) -> RestResult<ApiResponse<DepositAddress>> {
        self.account()?.get_deposit_address(currency).await
    }

    /// Get deposit history, optionally for one currency
    pub async fn get_deposit_history(
        &self,
        currency: Option<&str>,
    ) -> RestResult<ApiResponse<Vec<Deposit>>> {
        self.account()?.get_deposit_history(currency).await
    }

    /// Get order history, optionally for one market
    pub async fn get_order_history(
        &self,
        market: Option<&str>,
    ) -> RestResult<ApiResponse<Vec<Order>>> {
        self.account()?.get_order_history(market).await
    }

    /// Get a single order by id
    pub async fn get_order(&self, order_id: &str) -> RestResult<ApiResponse<OrderSingle>> {
        self.account()?.get_order(order_id).await
    }

    /// Withdraw funds to an external address
    pub async fn withdraw(
        &self,
        currency: &str,
        quantity: Decimal,
        address: &str,
        payment_id: Option<&str>,
    ) -> RestResult<ApiResponse<OrderReference>> {
        self.account()?
            .withdraw(currency, quantity, address, payment_id)
            .await
    }
}

impl Default for BittrexClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for BittrexClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BittrexClient")
            .field("base_urls", self.dispatcher.base_urls())
            .field("has_credentials", &self.has_credentials())
            .finish()
    }
}

/// Client configuration
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    /// API credentials (optional)
    pub credentials: Option<Credentials>,
    /// Custom user agent
    pub user_agent: Option<String>,
    /// Base URLs of the v1.1 and v2.0 APIs
    pub base_urls: BaseUrls,
}

impl ClientConfig {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set credentials
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Point the client at other hosts, e.g. a mock server
    pub fn with_base_urls(mut self, v1: impl Into<String>, v2: impl Into<String>) -> Self {
        self.base_urls = BaseUrls::new(v1, v2);
        self
    }
}
