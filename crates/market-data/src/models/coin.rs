use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Cryptocurrency market listing
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketCoin {
    /// Provider coin id (e.g. "bitcoin")
    pub id: String,

    /// Ticker symbol, lowercase as the provider sends it (e.g. "btc")
    pub symbol: String,

    /// Display name (e.g. "Bitcoin")
    pub name: String,

    /// Price in the quote currency
    pub current_price: f64,

    pub market_cap: f64,

    /// Rank by market cap; 0 when the provider has no rank
    pub market_cap_rank: i64,

    /// Absolute price change over 24h
    pub price_change_24h: f64,

    /// Percent price change over 24h
    pub price_change_percent_24h: f64,

    pub high_24h: f64,
    pub low_24h: f64,

    pub circulating_supply: f64,

    /// When this record was built
    pub last_updated: DateTime<Utc>,
}
