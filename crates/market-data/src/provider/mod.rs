//! Market data provider abstractions and implementations.
//!
//! This module contains:
//! - The `QuoteProvider` and `CryptoMarketProvider` traits
//! - Alpha Vantage (stocks and forex) and CoinGecko (crypto) clients
//! - Shared response plumbing: transport error mapping and JSON body decoding
//!
//! Every call is one independent request. Responses are not cached and a
//! failed request is reported to the caller as-is.

mod traits;

pub mod alpha_vantage;
pub mod coingecko;

pub use traits::{CryptoMarketProvider, QuoteProvider};

use serde_json::Value;

use crate::errors::MarketDataError;
use crate::http::{FetchResponse, HttpFetcher};

/// Issues the request and decodes the body as JSON.
///
/// Non-2xx responses are logged and still decoded, since both providers
/// describe errors in a JSON body.
async fn fetch_json(
    fetcher: &dyn HttpFetcher,
    provider: &str,
    url: &reqwest::Url,
) -> Result<Value, MarketDataError> {
    let response = fetcher
        .fetch(url)
        .await
        .map_err(|e| MarketDataError::network(provider, e.message, e.timeout))?;

    if !response.is_success() {
        tracing::warn!("{} responded with HTTP {}", provider, response.status);
    }

    decode_body(provider, &response)
}

fn decode_body(provider: &str, response: &FetchResponse) -> Result<Value, MarketDataError> {
    serde_json::from_slice(&response.body)
        .map_err(|e| MarketDataError::parse(provider, format!("Failed to parse response: {}", e)))
}
