//! Public market data endpoints
//!
//! These endpoints don't require authentication.

use bittrex_types::{
    ApiResponse, Candle, Currency, Market, MarketSummary, MarketTick, OrderBookType,
    OrderbookResult, QueryParams, TickInterval, Trade,
};
use tracing::instrument;

use crate::dispatch::{ApiVersion, Dispatcher, RequestDescriptor};
use crate::endpoints::require;
use crate::error::RestResult;

/// Public market data endpoints
pub struct PublicEndpoints<'a> {
    dispatcher: &'a Dispatcher,
}

impl<'a> PublicEndpoints<'a> {
    pub fn new(dispatcher: &'a Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// Get all markets
    #[instrument(skip(self))]
    pub async fn get_markets(&self) -> RestResult<ApiResponse<Vec<Market>>> {
        self.dispatcher
            .send(RequestDescriptor::get(ApiVersion::V1, "/public/getMarkets"))
            .await
    }

    /// Get all supported currencies
    #[instrument(skip(self))]
    pub async fn get_currencies(&self) -> RestResult<ApiResponse<Vec<Currency>>> {
        self.dispatcher
            .send(RequestDescriptor::get(ApiVersion::V1, "/public/getCurrencies"))
            .await
    }

    /// Get bid, ask and last price for a market
    ///
    /// # Arguments
    /// * `market` - Market name (e.g., "BTC-LTC")
    #[instrument(skip(self))]
    pub async fn get_market_ticker(&self, market: &str) -> RestResult<ApiResponse<MarketTick>> {
        let query = QueryParams::new().with("market", require("market", market)?);
        self.dispatcher
            .send(RequestDescriptor::get(ApiVersion::V1, "/public/getTicker").with_query(query))
            .await
    }

    /// Get candles for a market (v2 API)
    ///
    /// # Arguments
    /// * `market` - Market name (e.g., "BTC-LTC")
    /// * `interval` - Candle interval, usually [`TickInterval::default`]
    #[instrument(skip(self))]
    pub async fn get_market_candles(
        &self,
        market: &str,
        interval: TickInterval,
    ) -> RestResult<ApiResponse<Vec<Candle>>> {
        let query = candle_query(market, interval)?;
        self.dispatcher
            .send(RequestDescriptor::get(ApiVersion::V2, "/pub/market/GetTicks").with_query(query))
            .await
    }

    /// Get the most recent candle for a market (v2 API)
    #[instrument(skip(self))]
    pub async fn get_latest_candle(
        &self,
        market: &str,
        interval: TickInterval,
    ) -> RestResult<ApiResponse<Vec<Candle>>> {
        let query = candle_query(market, interval)?;
        self.dispatcher
            .send(
                RequestDescriptor::get(ApiVersion::V2, "/pub/market/GetLatestTick")
                    .with_query(query),
            )
            .await
    }

    /// Get 24h summaries of all markets
    #[instrument(skip(self))]
    pub async fn get_market_summaries(&self) -> RestResult<ApiResponse<Vec<MarketSummary>>> {
        self.dispatcher
            .send(RequestDescriptor::get(ApiVersion::V1, "/public/getMarketSummaries"))
            .await
    }

    /// Get the 24h summary of one market
    ///
    /// Bittrex wraps the single summary in a list.
    #[instrument(skip(self))]
    pub async fn get_market_summary(
        &self,
        market: &str,
    ) -> RestResult<ApiResponse<Vec<MarketSummary>>> {
        let query = QueryParams::new().with("market", require("market", market)?);
        self.dispatcher
            .send(
                RequestDescriptor::get(ApiVersion::V1, "/public/getMarketSummary")
                    .with_query(query),
            )
            .await
    }

    /// Get the orderbook of a market
    ///
    /// The result shape follows `book_type`: [`OrderbookResult::Both`] for
    /// `both`, [`OrderbookResult::Side`] for `buy` or `sell`.
    #[instrument(skip(self))]
    pub async fn get_orderbook(
        &self,
        market: &str,
        book_type: OrderBookType,
    ) -> RestResult<ApiResponse<OrderbookResult>> {
        let query = QueryParams::new()
            .with("market", require("market", market)?)
            .with("type", book_type);
        self.dispatcher
            .send(RequestDescriptor::get(ApiVersion::V1, "/public/getOrderbook").with_query(query))
            .await
    }

    /// Get the latest trades of a market
    #[instrument(skip(self))]
    pub async fn get_market_history(&self, market: &str) -> RestResult<ApiResponse<Vec<Trade>>> {
        let query = QueryParams::new().with("market", require("market", market)?);
        self.dispatcher
            .send(
                RequestDescriptor::get(ApiVersion::V1, "/public/getMarketHistory")
                    .with_query(query),
            )
            .await
    }
}

fn candle_query(market: &str, interval: TickInterval) -> RestResult<QueryParams> {
    Ok(QueryParams::new()
        .with("marketName", require("market", market)?)
        .with("tickInterval", interval))
}
