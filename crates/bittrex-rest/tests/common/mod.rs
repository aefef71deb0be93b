//! Common test utilities and fixtures for integration tests
//!
//! Contains sample payloads in the shape returned by the live Bittrex API

#![allow(dead_code)]

use bittrex_rest::{BittrexClient, ClientConfig, Credentials};
use serde_json::{json, Value};
use tracing_subscriber::EnvFilter;
use wiremock::{MockServer, Request};

pub const API_KEY: &str = "0123456789abcdef0123456789abcdef";
pub const API_SECRET: &str = "fedcba9876543210fedcba9876543210";

pub const V1: &str = "/api/v1.1";
pub const V2: &str = "/Api/v2.0";

/// Print client logs when `RUST_LOG` is set
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub async fn setup_mock_server() -> MockServer {
    init_tracing();
    MockServer::start().await
}

fn config_for(server: &MockServer) -> ClientConfig {
    ClientConfig::new()
        .with_user_agent("bittrex-rest-tests")
        .with_base_urls(
            format!("{}{}", server.uri(), V1),
            format!("{}{}", server.uri(), V2),
        )
}

/// Client without credentials pointed at the mock server
pub fn public_client(server: &MockServer) -> BittrexClient {
    BittrexClient::with_config(config_for(server))
}

/// Client with test credentials pointed at the mock server
pub fn private_client(server: &MockServer) -> BittrexClient {
    BittrexClient::with_config(config_for(server).with_credentials(credentials()))
}

pub fn credentials() -> Credentials {
    Credentials::new(API_KEY, API_SECRET).unwrap()
}

/// Successful envelope around `result`
pub fn success(result: Value) -> Value {
    json!({"success": true, "message": "", "result": result})
}

/// Failed envelope with `message`
pub fn failure(message: &str) -> Value {
    json!({"success": false, "message": message, "result": null})
}

/// Query pairs of a received request, decoded
pub fn query_pairs(request: &Request) -> Vec<(String, String)> {
    request
        .url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

/// Keys of the query of a received request, in order
pub fn query_keys(request: &Request) -> Vec<String> {
    query_pairs(request).into_iter().map(|(k, _)| k).collect()
}

/// The `apisign` header of a received request
pub fn signature_header(request: &Request) -> Option<String> {
    request
        .headers
        .get("apisign")
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

/// URL the client requested, rebuilt against the server address
///
/// wiremock reports `request.url` with a `localhost` host, so the host part
/// comes from the server while path and query come from the request.
pub fn requested_url(server: &MockServer, request: &Request) -> String {
    let mut url = format!("{}{}", server.uri(), request.url.path());
    if let Some(query) = request.url.query() {
        url.push('?');
        url.push_str(query);
    }
    url
}

/// Recompute the signature the server expects for a received request
pub fn expected_signature(server: &MockServer, request: &Request) -> String {
    bittrex_auth::sign_url(&requested_url(server, request), API_SECRET)
}

pub fn market_json() -> Value {
    json!({
        "MarketCurrency": "LTC",
        "BaseCurrency": "BTC",
        "MarketCurrencyLong": "Litecoin",
        "BaseCurrencyLong": "Bitcoin",
        "MinTradeSize": 0.01,
        "MarketName": "BTC-LTC",
        "IsActive": true,
        "Created": "2014-02-13T00:00:00",
        "Notice": null,
        "IsSponsored": null,
        "LogoUrl": null
    })
}

pub fn currency_json() -> Value {
    json!({
        "Currency": "BTC",
        "CurrencyLong": "Bitcoin",
        "MinConfirmation": 2,
        "TxFee": 0.0002,
        "IsActive": true,
        "CoinType": "BITCOIN",
        "BaseAddress": null,
        "Notice": null
    })
}

pub fn summary_json() -> Value {
    json!({
        "MarketName": "BTC-LTC",
        "High": 0.0135,
        "Low": 0.012,
        "Volume": 3833.97619253,
        "Last": 0.01349998,
        "BaseVolume": 47.03987026,
        "TimeStamp": "2014-07-09T07:22:16.72",
        "Bid": 0.01271001,
        "Ask": 0.012911,
        "OpenBuyOrders": 45,
        "OpenSellOrders": 45,
        "PrevDay": 0.01229501,
        "Created": "2014-02-13T00:00:00"
    })
}

pub fn candle_json() -> Value {
    json!({"O": 0.0171, "H": 0.0172, "L": 0.017, "C": 0.01715, "V": 15.23, "T": "2017-09-01T00:00:00", "BV": 0.26})
}

pub fn trade_json() -> Value {
    json!({
        "Id": 319435,
        "TimeStamp": "2014-07-09T03:21:20.08",
        "Quantity": 0.30802438,
        "Price": 0.012634,
        "Total": 0.00389158,
        "FillType": "FILL",
        "OrderType": "BUY"
    })
}

pub fn balance_json() -> Value {
    json!({
        "Currency": "DOGE",
        "Balance": 4.21549076,
        "Available": 4.21549076,
        "Pending": 0.0,
        "CryptoAddress": "DLxcEt3AatMyr2NTatzjsfHNoB9NT62HiF",
        "Requested": false,
        "Uuid": null
    })
}

pub fn open_order_json() -> Value {
    json!({
        "Uuid": null,
        "OrderUuid": "09aa5bb6-8232-41aa-9b78-a5a1093e0211",
        "Exchange": "BTC-LTC",
        "OrderType": "LIMIT_SELL",
        "Quantity": 5.0,
        "QuantityRemaining": 5.0,
        "Limit": 2.0,
        "CommissionPaid": 0.0,
        "Price": 0.0,
        "PricePerUnit": null,
        "Opened": "2014-07-09T03:55:48.77",
        "Closed": null,
        "CancelInitiated": false,
        "ImmediateOrCancel": false,
        "IsConditional": false,
        "Condition": null,
        "ConditionTarget": null
    })
}

pub fn order_json() -> Value {
    json!({
        "OrderUuid": "fd97d393-e9b9-4dd1-9dbf-f288fc72a185",
        "Exchange": "BTC-LTC",
        "TimeStamp": "2014-07-09T04:01:00.667",
        "OrderType": "LIMIT_BUY",
        "Limit": 0.00000001,
        "Quantity": 100000.0,
        "QuantityRemaining": 100000.0,
        "Commission": 0.0,
        "Price": 0.0,
        "PricePerUnit": null,
        "IsConditional": false,
        "Condition": "NONE",
        "ConditionTarget": null,
        "ImmediateOrCancel": false,
        "Closed": "2014-07-09T04:01:00.667"
    })
}

pub fn order_single_json() -> Value {
    json!({
        "AccountId": null,
        "OrderUuid": "0cb4c4e4-bdc7-4e13-8c13-430e587d2cc1",
        "Exchange": "BTC-SHLD",
        "Type": "LIMIT_BUY",
        "Quantity": 1000.0,
        "QuantityRemaining": 1000.0,
        "Limit": 0.00000001,
        "Reserved": 0.00001,
        "ReserveRemaining": 0.00001,
        "CommissionReserved": 0.00000002,
        "CommissionReserveRemaining": 0.00000002,
        "CommissionPaid": 0.0,
        "Price": 0.0,
        "PricePerUnit": null,
        "Opened": "2014-07-13T07:45:46.27",
        "Closed": null,
        "IsOpen": true,
        "Sentinel": "6c454604-22e2-4fb4-892e-179eede20972",
        "CancelInitiated": false,
        "ImmediateOrCancel": false,
        "IsConditional": false,
        "Condition": "NONE",
        "ConditionTarget": null
    })
}

pub fn deposit_json() -> Value {
    json!({
        "Id": 1,
        "Amount": 0.00156121,
        "Currency": "BTC",
        "Confirmations": 2,
        "LastUpdated": "2014-02-13T07:38:53.883",
        "TxId": "e26d3b33fcfc2cb0c74f0938034956ea590339170bf4102f080eab4b85da9bde",
        "CryptoAddress": "15VyEAT4uf7ycrNWZVb1eGMzrs21BH95Va"
    })
}

pub fn withdrawal_json() -> Value {
    json!({
        "PaymentUuid": "b52c7a5c-90c6-4c6e-835c-e16df12708b1",
        "Currency": "BTC",
        "Amount": 17.0,
        "Address": "1DeaaFBdbB5nrHj87x3NHS4onvw1GPNyAu",
        "Opened": "2014-07-09T04:24:47.217",
        "Authorized": true,
        "PendingPayment": false,
        "TxCost": 0.0002,
        "TxId": null,
        "Canceled": true,
        "InvalidAddress": false
    })
}
