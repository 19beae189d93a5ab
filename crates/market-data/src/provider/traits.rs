//! Market data provider trait definitions.
//!
//! The server depends on these traits rather than on concrete clients, so a
//! provider can be swapped or stubbed without touching the HTTP layer.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::{CurrencyRate, MarketCoin, Quote, TimeSeriesPoint};

/// Source of equity quotes, daily series and FX rates.
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    /// Unique identifier for this provider (e.g. "ALPHA_VANTAGE").
    ///
    /// Used in error values and log lines.
    fn id(&self) -> &'static str;

    /// Fetch the latest quote for `symbol`.
    ///
    /// # Returns
    ///
    /// A quote whose fields may be zero if the provider sent garbled values,
    /// or a `MarketDataError` if the request itself failed.
    async fn get_quote(&self, symbol: &str) -> Result<Quote, MarketDataError>;

    /// Fetch at most `limit` daily OHLCV points for `symbol`.
    ///
    /// Points come back in the provider's order. No chronological sorting is
    /// applied, so callers must not assume the newest dates are first.
    async fn get_time_series(
        &self,
        symbol: &str,
        limit: usize,
    ) -> Result<Vec<TimeSeriesPoint>, MarketDataError>;

    /// Fetch the realtime exchange rate from `from` to `to`.
    async fn get_exchange_rate(&self, from: &str, to: &str)
        -> Result<CurrencyRate, MarketDataError>;
}

/// Source of cryptocurrency market listings.
#[async_trait]
pub trait CryptoMarketProvider: Send + Sync {
    /// Unique identifier for this provider (e.g. "COINGECKO").
    fn id(&self) -> &'static str;

    /// Fetch the market listing for a single coin id.
    async fn get_price(&self, coin_id: &str) -> Result<MarketCoin, MarketDataError>;

    /// Fetch up to `limit` coins ordered by market cap, as ranked by the provider.
    ///
    /// An empty listing is a success with an empty vector.
    async fn get_top_coins(&self, limit: usize) -> Result<Vec<MarketCoin>, MarketDataError>;
}
