//! Alpha Vantage market data provider implementation.
//!
//! This module provides market data from the Alpha Vantage API:
//! - Latest equity quotes via the GLOBAL_QUOTE function
//! - Daily OHLCV series via the TIME_SERIES_DAILY function
//! - Realtime FX rates via the CURRENCY_EXCHANGE_RATE function
//!
//! Alpha Vantage quotes its numbers as strings and is not consistent about it,
//! so every field goes through the render-as-text coercions in [`crate::coerce`].
//! A field that fails to parse becomes zero; only a missing payload is an error.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::{debug, warn};
use reqwest::Url;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::coerce::{decode_lenient, parse_float_text, parse_int_text, parse_percent_text, RawValue};
use crate::errors::MarketDataError;
use crate::http::{HttpFetcher, ReqwestFetcher, DEFAULT_TIMEOUT};
use crate::models::{CurrencyRate, Quote, TimeSeriesPoint};
use crate::provider::{fetch_json, QuoteProvider};

pub const DEFAULT_BASE_URL: &str = "https://www.alphavantage.co/query";
const PROVIDER_ID: &str = "ALPHA_VANTAGE";

const GLOBAL_QUOTE_KEY: &str = "Global Quote";
const TIME_SERIES_KEY: &str = "Time Series (Daily)";
const EXCHANGE_RATE_KEY: &str = "Realtime Currency Exchange Rate";

/// Top-level keys Alpha Vantage uses to explain an empty response.
const NOTICE_KEYS: [&str; 3] = ["Error Message", "Note", "Information"];

/// Connection settings for [`AlphaVantageClient`].
#[derive(Clone, Debug)]
pub struct AlphaVantageConfig {
    /// API key sent with every request. May be empty; the provider rejects it then.
    pub api_key: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl AlphaVantageConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

/// Alpha Vantage client for stocks and forex.
///
/// Holds only immutable configuration, so one instance can serve any number of
/// concurrent calls.
pub struct AlphaVantageClient {
    config: AlphaVantageConfig,
    fetcher: Arc<dyn HttpFetcher>,
}

// ============================================================================
// Response structures for Alpha Vantage API
// ============================================================================

/// Fields of the "Global Quote" object
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct GlobalQuoteFields {
    #[serde(rename = "02. open")]
    open: RawValue,
    #[serde(rename = "03. high")]
    high: RawValue,
    #[serde(rename = "04. low")]
    low: RawValue,
    #[serde(rename = "05. price")]
    price: RawValue,
    #[serde(rename = "06. volume")]
    volume: RawValue,
    #[serde(rename = "08. previous close")]
    previous_close: RawValue,
    #[serde(rename = "09. change")]
    change: RawValue,
    /// e.g. "1.6900%"
    #[serde(rename = "10. change percent")]
    change_percent: RawValue,
}

impl GlobalQuoteFields {
    fn into_quote(self, symbol: &str, now: DateTime<Utc>) -> Quote {
        Quote {
            symbol: symbol.to_string(),
            price: parse_float_text(&self.price),
            change: parse_float_text(&self.change),
            change_percent: parse_percent_text(&self.change_percent),
            volume: parse_int_text(&self.volume),
            high: parse_float_text(&self.high),
            low: parse_float_text(&self.low),
            open: parse_float_text(&self.open),
            previous_close: parse_float_text(&self.previous_close),
            last_updated: now,
        }
    }
}

/// One entry of the "Time Series (Daily)" object
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct DailyFields {
    #[serde(rename = "1. open")]
    open: RawValue,
    #[serde(rename = "2. high")]
    high: RawValue,
    #[serde(rename = "3. low")]
    low: RawValue,
    #[serde(rename = "4. close")]
    close: RawValue,
    #[serde(rename = "5. volume")]
    volume: RawValue,
}

impl DailyFields {
    fn into_point(self, date: String) -> TimeSeriesPoint {
        TimeSeriesPoint {
            date,
            open: parse_float_text(&self.open),
            high: parse_float_text(&self.high),
            low: parse_float_text(&self.low),
            close: parse_float_text(&self.close),
            volume: parse_int_text(&self.volume),
        }
    }
}

/// Fields of the "Realtime Currency Exchange Rate" object
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ExchangeRateFields {
    #[serde(rename = "5. Exchange Rate")]
    rate: RawValue,
    #[serde(rename = "8. Bid Price")]
    bid: RawValue,
    #[serde(rename = "9. Ask Price")]
    ask: RawValue,
}

// ============================================================================
// AlphaVantageClient implementation
// ============================================================================

impl AlphaVantageClient {
    /// Create a client for the public endpoint with the given API key.
    pub fn new(api_key: String) -> Result<Self, MarketDataError> {
        Self::with_config(AlphaVantageConfig::new(api_key))
    }

    /// Create a client that issues requests through `reqwest`.
    pub fn with_config(config: AlphaVantageConfig) -> Result<Self, MarketDataError> {
        let fetcher = ReqwestFetcher::new(config.timeout).map_err(|e| {
            MarketDataError::network(
                PROVIDER_ID,
                format!("Failed to build HTTP client: {}", e),
                false,
            )
        })?;
        Ok(Self::with_fetcher(config, Arc::new(fetcher)))
    }

    /// Create a client over an existing transport.
    pub fn with_fetcher(config: AlphaVantageConfig, fetcher: Arc<dyn HttpFetcher>) -> Self {
        Self { config, fetcher }
    }

    /// Build the query URL; the API key is always appended last.
    fn build_url(&self, params: &[(&str, &str)]) -> Result<Url, MarketDataError> {
        let mut all_params: Vec<(&str, &str)> = params.to_vec();
        all_params.push(("apikey", &self.config.api_key));

        Url::parse_with_params(&self.config.base_url, &all_params).map_err(|e| {
            MarketDataError::network(PROVIDER_ID, format!("Failed to build URL: {}", e), false)
        })
    }

    /// Loggable form of `url` with the `apikey` value replaced.
    ///
    /// Works on decoded query pairs, so keys that need percent-encoding are
    /// hidden too.
    fn masked(url: &Url) -> String {
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| {
                let value = if k == "apikey" {
                    "***".to_string()
                } else {
                    v.into_owned()
                };
                (k.into_owned(), value)
            })
            .collect();

        let mut masked = url.clone();
        masked.query_pairs_mut().clear().extend_pairs(pairs);
        masked.to_string()
    }

    /// Make a request to the Alpha Vantage API and decode the JSON body.
    async fn fetch(&self, params: &[(&str, &str)]) -> Result<Value, MarketDataError> {
        let url = self.build_url(params)?;
        debug!("Alpha Vantage request: {}", Self::masked(&url));
        fetch_json(self.fetcher.as_ref(), PROVIDER_ID, &url).await
    }

    /// Detach the object stored under `key`, if it is one.
    fn take_object(response: &mut Value, key: &str) -> Option<Map<String, Value>> {
        match response.get_mut(key).map(Value::take) {
            Some(Value::Object(map)) => Some(map),
            _ => None,
        }
    }

    /// Build a `NotFound` error, carrying any explanation the provider attached.
    fn not_found(response: &Value, what: String) -> MarketDataError {
        let notice = NOTICE_KEYS
            .iter()
            .find_map(|key| response.get(*key).and_then(Value::as_str));

        match notice {
            Some(text) => {
                warn!("Alpha Vantage notice: {}", text);
                MarketDataError::not_found(PROVIDER_ID, format!("{} ({})", what, text))
            }
            None => MarketDataError::not_found(PROVIDER_ID, what),
        }
    }

    fn parse_quote(
        mut response: Value,
        symbol: &str,
        now: DateTime<Utc>,
    ) -> Result<Quote, MarketDataError> {
        let payload = match Self::take_object(&mut response, GLOBAL_QUOTE_KEY) {
            Some(map) if !map.is_empty() => map,
            _ => {
                return Err(Self::not_found(
                    &response,
                    format!("Invalid response or symbol not found: {}", symbol),
                ))
            }
        };

        let fields: GlobalQuoteFields = decode_lenient(Value::Object(payload));
        Ok(fields.into_quote(symbol, now))
    }

    fn parse_time_series(
        mut response: Value,
        symbol: &str,
        limit: usize,
    ) -> Result<Vec<TimeSeriesPoint>, MarketDataError> {
        let series = Self::take_object(&mut response, TIME_SERIES_KEY).ok_or_else(|| {
            Self::not_found(&response, format!("No time series data for symbol: {}", symbol))
        })?;

        // Provider document order, truncated. Not re-sorted by date.
        Ok(series
            .into_iter()
            .take(limit)
            .map(|(date, values)| decode_lenient::<DailyFields>(values).into_point(date))
            .collect())
    }

    fn parse_exchange_rate(
        mut response: Value,
        from: &str,
        to: &str,
        now: DateTime<Utc>,
    ) -> Result<CurrencyRate, MarketDataError> {
        let payload = match Self::take_object(&mut response, EXCHANGE_RATE_KEY) {
            Some(map) if !map.is_empty() => map,
            _ => {
                return Err(Self::not_found(
                    &response,
                    format!("No exchange rate data for pair: {}/{}", from, to),
                ))
            }
        };

        let fields: ExchangeRateFields = decode_lenient(Value::Object(payload));
        Ok(CurrencyRate {
            from_currency: from.to_string(),
            to_currency: to.to_string(),
            rate: parse_float_text(&fields.rate),
            bid: parse_float_text(&fields.bid),
            ask: parse_float_text(&fields.ask),
            last_updated: now,
        })
    }
}

// ============================================================================
// QuoteProvider trait implementation
// ============================================================================

#[async_trait]
impl QuoteProvider for AlphaVantageClient {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn get_quote(&self, symbol: &str) -> Result<Quote, MarketDataError> {
        let params = [("function", "GLOBAL_QUOTE"), ("symbol", symbol)];
        let response = self.fetch(&params).await?;
        Self::parse_quote(response, symbol, Utc::now())
    }

    async fn get_time_series(
        &self,
        symbol: &str,
        limit: usize,
    ) -> Result<Vec<TimeSeriesPoint>, MarketDataError> {
        let params = [("function", "TIME_SERIES_DAILY"), ("symbol", symbol)];
        let response = self.fetch(&params).await?;
        let points = Self::parse_time_series(response, symbol, limit)?;

        debug!(
            "Alpha Vantage: fetched {} daily points for {}",
            points.len(),
            symbol
        );

        Ok(points)
    }

    async fn get_exchange_rate(
        &self,
        from: &str,
        to: &str,
    ) -> Result<CurrencyRate, MarketDataError> {
        let params = [
            ("function", "CURRENCY_EXCHANGE_RATE"),
            ("from_currency", from),
            ("to_currency", to),
        ];
        let response = self.fetch(&params).await?;
        Self::parse_exchange_rate(response, from, to, Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;
    use crate::http::testing::StubFetcher;

    const IBM_QUOTE: &str = r#"{
        "Global Quote": {
            "01. symbol": "IBM",
            "02. open": "148.5000",
            "03. high": "151.0000",
            "04. low": "148.0000",
            "05. price": "150.2500",
            "06. volume": "1000000",
            "07. latest trading day": "2024-01-15",
            "08. previous close": "147.7500",
            "09. change": "2.5000",
            "10. change percent": "1.69%"
        }
    }"#;

    const DAILY_SERIES: &str = r#"{
        "Meta Data": {"2. Symbol": "IBM"},
        "Time Series (Daily)": {
            "2024-01-17": {"1. open": "171.0", "2. high": "172.0", "3. low": "170.0", "4. close": "171.5", "5. volume": "300"},
            "2024-01-16": {"1. open": "161.0", "2. high": "162.0", "3. low": "160.0", "4. close": "161.5", "5. volume": "200"},
            "2024-01-15": {"1. open": "151.0", "2. high": "152.0", "3. low": "150.0", "4. close": "151.5", "5. volume": "100"}
        }
    }"#;

    fn client(fetcher: Arc<StubFetcher>) -> AlphaVantageClient {
        AlphaVantageClient::with_fetcher(AlphaVantageConfig::new("test_key"), fetcher)
    }

    #[tokio::test]
    async fn test_get_quote_decodes_all_fields() {
        let stub = Arc::new(StubFetcher::ok(IBM_QUOTE));
        let before = Utc::now();
        let quote = client(stub.clone()).get_quote("IBM").await.unwrap();

        assert_eq!(quote.symbol, "IBM");
        assert_eq!(quote.price, 150.25);
        assert_eq!(quote.volume, 1_000_000);
        assert_eq!(quote.change_percent, 1.69);
        assert_eq!(quote.change, 2.5);
        assert_eq!(quote.high, 151.0);
        assert_eq!(quote.low, 148.0);
        assert_eq!(quote.open, 148.5);
        assert_eq!(quote.previous_close, 147.75);
        assert!(quote.last_updated >= before);
    }

    #[tokio::test]
    async fn test_get_quote_request_parameters() {
        let stub = Arc::new(StubFetcher::ok(IBM_QUOTE));
        client(stub.clone()).get_quote("IBM").await.unwrap();

        let requests = stub.requests();
        assert_eq!(requests.len(), 1);
        let pairs: Vec<(String, String)> = requests[0]
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("function".to_string(), "GLOBAL_QUOTE".to_string()),
                ("symbol".to_string(), "IBM".to_string()),
                ("apikey".to_string(), "test_key".to_string()),
            ]
        );
        assert!(requests[0].as_str().starts_with(DEFAULT_BASE_URL));
    }

    #[tokio::test]
    async fn test_get_quote_encodes_symbol() {
        let stub = Arc::new(StubFetcher::ok(IBM_QUOTE));
        client(stub.clone()).get_quote("A&B C").await.unwrap();

        let url = &stub.requests()[0];
        assert!(url.as_str().contains("symbol=A%26B+C"));
    }

    #[tokio::test]
    async fn test_get_quote_garbled_fields_are_zeroed() {
        let body = r#"{
            "Global Quote": {
                "05. price": "n/a",
                "06. volume": null,
                "09. change": {"oops": 1},
                "10. change percent": "",
                "03. high": 151.5
            }
        }"#;
        let stub = Arc::new(StubFetcher::ok(body));
        let quote = client(stub).get_quote("IBM").await.unwrap();

        assert_eq!(quote.price, 0.0);
        assert_eq!(quote.volume, 0);
        assert_eq!(quote.change, 0.0);
        assert_eq!(quote.change_percent, 0.0);
        // Bare numbers are rendered and parsed like quoted ones.
        assert_eq!(quote.high, 151.5);
        assert_eq!(quote.open, 0.0);
        assert_eq!(quote.previous_close, 0.0);
    }

    #[tokio::test]
    async fn test_get_quote_empty_payload_is_not_found() {
        let stub = Arc::new(StubFetcher::ok(r#"{"Global Quote": {}}"#));
        let err = client(stub).get_quote("ZZZZ").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_get_quote_missing_key_is_not_found() {
        let stub = Arc::new(StubFetcher::ok(r#"{"Something Else": {"a": "1"}}"#));
        let err = client(stub).get_quote("IBM").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_get_quote_wrong_shape_payload_is_not_found() {
        let stub = Arc::new(StubFetcher::ok(r#"{"Global Quote": "IBM"}"#));
        let err = client(stub).get_quote("IBM").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_get_quote_carries_provider_notice() {
        let body = r#"{"Note": "Thank you for using Alpha Vantage! Our standard API call frequency is 5 calls per minute."}"#;
        let stub = Arc::new(StubFetcher::ok(body));
        let err = client(stub).get_quote("IBM").await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(err.to_string().contains("API call frequency"));
    }

    #[tokio::test]
    async fn test_get_quote_invalid_json_is_parse_error() {
        let stub = Arc::new(StubFetcher::ok("<html>Bad Gateway</html>"));
        let err = client(stub).get_quote("IBM").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
    }

    #[tokio::test]
    async fn test_get_quote_transport_failure_is_network_error() {
        let stub = Arc::new(StubFetcher::failing("operation timed out", true));
        let err = client(stub).get_quote("IBM").await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Network);
        assert!(err.is_timeout());
    }

    #[tokio::test]
    async fn test_non_success_status_still_decodes_body() {
        let stub = Arc::new(StubFetcher::with_status(503, IBM_QUOTE));
        let quote = client(stub).get_quote("IBM").await.unwrap();
        assert_eq!(quote.price, 150.25);
    }

    #[tokio::test]
    async fn test_get_time_series_truncates_to_limit() {
        let stub = Arc::new(StubFetcher::ok(DAILY_SERIES));
        let points = client(stub).get_time_series("IBM", 2).await.unwrap();

        assert_eq!(points.len(), 2);
        for point in &points {
            // Each point's fields come from the same dated entry.
            let expected = match point.date.as_str() {
                "2024-01-17" => (171.0, 171.5, 300),
                "2024-01-16" => (161.0, 161.5, 200),
                "2024-01-15" => (151.0, 151.5, 100),
                other => panic!("unexpected date {}", other),
            };
            assert_eq!((point.open, point.close, point.volume), expected);
        }
    }

    #[tokio::test]
    async fn test_get_time_series_keeps_provider_order() {
        let stub = Arc::new(StubFetcher::ok(DAILY_SERIES));
        let points = client(stub).get_time_series("IBM", 3).await.unwrap();

        let dates: Vec<&str> = points.iter().map(|p| p.date.as_str()).collect();
        assert_eq!(dates, vec!["2024-01-17", "2024-01-16", "2024-01-15"]);
    }

    #[tokio::test]
    async fn test_get_time_series_fewer_entries_than_limit() {
        let stub = Arc::new(StubFetcher::ok(DAILY_SERIES));
        let points = client(stub).get_time_series("IBM", 30).await.unwrap();
        assert_eq!(points.len(), 3);
    }

    #[tokio::test]
    async fn test_get_time_series_zero_limit() {
        let stub = Arc::new(StubFetcher::ok(DAILY_SERIES));
        let points = client(stub).get_time_series("IBM", 0).await.unwrap();
        assert!(points.is_empty());
    }

    #[tokio::test]
    async fn test_get_time_series_missing_key_is_not_found() {
        let body = r#"{"Error Message": "Invalid API call. Please retry or visit the documentation."}"#;
        let stub = Arc::new(StubFetcher::ok(body));
        let err = client(stub).get_time_series("ZZZZ", 30).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(err.to_string().contains("Invalid API call"));
    }

    #[tokio::test]
    async fn test_get_time_series_empty_object_is_empty_result() {
        let stub = Arc::new(StubFetcher::ok(r#"{"Time Series (Daily)": {}}"#));
        let points = client(stub).get_time_series("IBM", 30).await.unwrap();
        assert!(points.is_empty());
    }

    #[tokio::test]
    async fn test_get_time_series_malformed_entry_is_zeroed() {
        let body = r#"{"Time Series (Daily)": {"2024-01-15": "garbage"}}"#;
        let stub = Arc::new(StubFetcher::ok(body));
        let points = client(stub).get_time_series("IBM", 30).await.unwrap();

        assert_eq!(points.len(), 1);
        assert_eq!(points[0].date, "2024-01-15");
        assert_eq!(points[0].close, 0.0);
        assert_eq!(points[0].volume, 0);
    }

    #[tokio::test]
    async fn test_get_exchange_rate() {
        let body = r#"{
            "Realtime Currency Exchange Rate": {
                "1. From_Currency Code": "USD",
                "3. To_Currency Code": "EUR",
                "5. Exchange Rate": "0.91230000",
                "6. Last Refreshed": "2024-01-15 10:00:01",
                "8. Bid Price": "0.91225000",
                "9. Ask Price": "0.91235000"
            }
        }"#;
        let stub = Arc::new(StubFetcher::ok(body));
        let rate = client(stub.clone())
            .get_exchange_rate("USD", "EUR")
            .await
            .unwrap();

        assert_eq!(rate.from_currency, "USD");
        assert_eq!(rate.to_currency, "EUR");
        assert_eq!(rate.rate, 0.9123);
        assert_eq!(rate.bid, 0.91225);
        assert_eq!(rate.ask, 0.91235);

        let url = &stub.requests()[0];
        assert!(url.as_str().contains("function=CURRENCY_EXCHANGE_RATE"));
        assert!(url.as_str().contains("from_currency=USD"));
        assert!(url.as_str().contains("to_currency=EUR"));
    }

    #[tokio::test]
    async fn test_get_exchange_rate_empty_is_not_found() {
        let stub = Arc::new(StubFetcher::ok(r#"{"Realtime Currency Exchange Rate": {}}"#));
        let err = client(stub).get_exchange_rate("USD", "XXX").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_get_exchange_rate_missing_key_is_not_found() {
        let body = r#"{"Note": "Thank you for using Alpha Vantage! Our standard API call frequency is 5 calls per minute."}"#;
        let stub = Arc::new(StubFetcher::ok(body));
        let err = client(stub).get_exchange_rate("USD", "EUR").await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(err.to_string().contains("USD/EUR"));
    }

    #[tokio::test]
    async fn test_get_exchange_rate_wrong_shape_payload_is_not_found() {
        let stub = Arc::new(StubFetcher::ok(r#"{"Realtime Currency Exchange Rate": "x"}"#));
        let err = client(stub).get_exchange_rate("USD", "EUR").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_get_exchange_rate_garbled_fields_are_zeroed() {
        let body = r#"{
            "Realtime Currency Exchange Rate": {
                "5. Exchange Rate": null,
                "8. Bid Price": "n/a",
                "9. Ask Price": 0.9124
            }
        }"#;
        let stub = Arc::new(StubFetcher::ok(body));
        let rate = client(stub).get_exchange_rate("USD", "EUR").await.unwrap();

        assert_eq!(rate.from_currency, "USD");
        assert_eq!(rate.to_currency, "EUR");
        assert_eq!(rate.rate, 0.0);
        assert_eq!(rate.bid, 0.0);
        assert_eq!(rate.ask, 0.9124);
    }

    #[test]
    fn test_masked_url_hides_api_key() {
        let client = client(Arc::new(StubFetcher::ok("{}")));
        let url = client.build_url(&[("function", "GLOBAL_QUOTE")]).unwrap();
        let masked = AlphaVantageClient::masked(&url);

        assert!(!masked.contains("test_key"));
        assert!(masked.ends_with("?function=GLOBAL_QUOTE&apikey=***"));
    }

    #[test]
    fn test_masked_url_hides_key_that_needs_encoding() {
        let client = AlphaVantageClient::with_fetcher(
            AlphaVantageConfig::new("ab+cd/ef=="),
            Arc::new(StubFetcher::ok("{}")),
        );
        let url = client
            .build_url(&[("function", "GLOBAL_QUOTE"), ("symbol", "A&B")])
            .unwrap();
        assert!(url.as_str().contains("apikey=ab%2Bcd%2Fef%3D%3D"));

        let masked = AlphaVantageClient::masked(&url);
        assert!(!masked.contains("ab%2Bcd"));
        assert!(!masked.contains("ab+cd"));
        assert!(masked.contains("symbol=A%26B"));
        assert!(masked.contains("apikey=***"));
    }

    #[test]
    fn test_invalid_base_url_is_network_error() {
        let config = AlphaVantageConfig::new("k").with_base_url("not a url");
        let client = AlphaVantageClient::with_fetcher(config, Arc::new(StubFetcher::ok("{}")));
        let err = client.build_url(&[]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Network);
    }

    #[test]
    fn test_provider_id() {
        let client = AlphaVantageClient::new("test_key".to_string()).unwrap();
        assert_eq!(client.id(), "ALPHA_VANTAGE");
    }
}
