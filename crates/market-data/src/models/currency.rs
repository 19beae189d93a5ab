use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Realtime exchange rate between two currencies
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyRate {
    /// Base currency code, as requested (e.g. "USD")
    pub from_currency: String,

    /// Quote currency code, as requested (e.g. "EUR")
    pub to_currency: String,

    /// Units of `to_currency` per unit of `from_currency`
    pub rate: f64,

    pub bid: f64,
    pub ask: f64,

    /// When this record was built
    pub last_updated: DateTime<Utc>,
}
