//! CoinGecko market data provider implementation.
//!
//! Uses the public `/coins/markets` listing endpoint for both single-coin
//! lookups and the top-by-market-cap listing. No API key is required.
//! API documentation: https://docs.coingecko.com/reference/coins-markets

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Url;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::coerce::{coerce_float, coerce_int, coerce_string, decode_lenient, RawValue};
use crate::errors::MarketDataError;
use crate::http::{HttpFetcher, ReqwestFetcher, DEFAULT_TIMEOUT};
use crate::models::MarketCoin;
use crate::provider::{fetch_json, CryptoMarketProvider};

pub const DEFAULT_BASE_URL: &str = "https://api.coingecko.com/api/v3";
const PROVIDER_ID: &str = "COINGECKO";

// ============================================================================
// API Response Structures
// ============================================================================

/// One element of the `/coins/markets` array.
///
/// Every field is captured raw; a record of the wrong shape decodes to all
/// `Missing` and produces a zeroed [`MarketCoin`].
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CoinMarketEntry {
    id: RawValue,
    symbol: RawValue,
    name: RawValue,
    current_price: RawValue,
    market_cap: RawValue,
    market_cap_rank: RawValue,
    price_change_24h: RawValue,
    price_change_percentage_24h: RawValue,
    high_24h: RawValue,
    low_24h: RawValue,
    circulating_supply: RawValue,
}

impl CoinMarketEntry {
    fn into_coin(self, now: DateTime<Utc>) -> MarketCoin {
        MarketCoin {
            id: coerce_string(&self.id),
            symbol: coerce_string(&self.symbol),
            name: coerce_string(&self.name),
            current_price: coerce_float(&self.current_price),
            market_cap: coerce_float(&self.market_cap),
            market_cap_rank: coerce_int(&self.market_cap_rank),
            price_change_24h: coerce_float(&self.price_change_24h),
            price_change_percent_24h: coerce_float(&self.price_change_percentage_24h),
            high_24h: coerce_float(&self.high_24h),
            low_24h: coerce_float(&self.low_24h),
            circulating_supply: coerce_float(&self.circulating_supply),
            last_updated: now,
        }
    }
}

// ============================================================================
// CoinGeckoClient
// ============================================================================

/// Connection settings for [`CoinGeckoClient`].
#[derive(Clone, Debug)]
pub struct CoinGeckoConfig {
    pub base_url: String,
    /// Currency prices are quoted in
    pub vs_currency: String,
    pub timeout: Duration,
}

impl Default for CoinGeckoConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            vs_currency: "usd".to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// CoinGecko client for cryptocurrency listings.
pub struct CoinGeckoClient {
    config: CoinGeckoConfig,
    fetcher: Arc<dyn HttpFetcher>,
}

impl CoinGeckoClient {
    pub fn new() -> Result<Self, MarketDataError> {
        Self::with_config(CoinGeckoConfig::default())
    }

    pub fn with_config(config: CoinGeckoConfig) -> Result<Self, MarketDataError> {
        let fetcher = ReqwestFetcher::new(config.timeout).map_err(|e| {
            MarketDataError::network(
                PROVIDER_ID,
                format!("Failed to build HTTP client: {}", e),
                false,
            )
        })?;
        Ok(Self::with_fetcher(config, Arc::new(fetcher)))
    }

    pub fn with_fetcher(config: CoinGeckoConfig, fetcher: Arc<dyn HttpFetcher>) -> Self {
        Self { config, fetcher }
    }

    /// Build a `/coins/markets` URL. `ids` narrows the listing to one coin.
    fn markets_url(&self, ids: Option<&str>, per_page: usize) -> Result<Url, MarketDataError> {
        let endpoint = format!("{}/coins/markets", self.config.base_url.trim_end_matches('/'));
        let per_page = per_page.to_string();

        let mut params: Vec<(&str, &str)> =
            vec![("vs_currency", self.config.vs_currency.as_str())];
        if let Some(ids) = ids {
            params.push(("ids", ids));
        }
        params.extend([
            ("order", "market_cap_desc"),
            ("per_page", per_page.as_str()),
            ("page", "1"),
            ("sparkline", "false"),
            ("price_change_percentage", "24h"),
        ]);

        Url::parse_with_params(&endpoint, &params).map_err(|e| {
            MarketDataError::network(PROVIDER_ID, format!("Failed to build URL: {}", e), false)
        })
    }

    async fn fetch_markets(&self, url: Url) -> Result<Vec<Value>, MarketDataError> {
        debug!("CoinGecko request: {}", url);
        match fetch_json(self.fetcher.as_ref(), PROVIDER_ID, &url).await? {
            Value::Array(entries) => Ok(entries),
            other => Err(MarketDataError::parse(
                PROVIDER_ID,
                format!("Expected a JSON array, got: {}", json_type(&other)),
            )),
        }
    }

    fn parse_coins(entries: Vec<Value>, now: DateTime<Utc>) -> Vec<MarketCoin> {
        entries
            .into_iter()
            .map(|entry| decode_lenient::<CoinMarketEntry>(entry).into_coin(now))
            .collect()
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[async_trait]
impl CryptoMarketProvider for CoinGeckoClient {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn get_price(&self, coin_id: &str) -> Result<MarketCoin, MarketDataError> {
        let url = self.markets_url(Some(coin_id), 1)?;
        let entries = self.fetch_markets(url).await?;

        Self::parse_coins(entries, Utc::now())
            .into_iter()
            .next()
            .ok_or_else(|| {
                MarketDataError::not_found(PROVIDER_ID, format!("Coin not found: {}", coin_id))
            })
    }

    async fn get_top_coins(&self, limit: usize) -> Result<Vec<MarketCoin>, MarketDataError> {
        let url = self.markets_url(None, limit)?;
        let entries = self.fetch_markets(url).await?;
        let coins = Self::parse_coins(entries, Utc::now());

        debug!("CoinGecko: fetched {} coins (limit {})", coins.len(), limit);

        Ok(coins)
    }
}
