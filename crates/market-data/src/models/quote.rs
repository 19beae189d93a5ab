use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Latest equity quote
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    /// Symbol as requested by the caller
    pub symbol: String,

    /// Last traded price
    pub price: f64,

    /// Absolute change from the previous close
    pub change: f64,

    /// Percent change from the previous close (1.69 means 1.69%)
    pub change_percent: f64,

    /// Traded volume for the session
    pub volume: i64,

    pub high: f64,
    pub low: f64,
    pub open: f64,
    pub previous_close: f64,

    /// When this record was built. Provider timestamps are not used.
    pub last_updated: DateTime<Utc>,
}

/// One day of OHLCV data
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    /// Date key exactly as the provider sent it (e.g. "2024-01-15")
    pub date: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: i64,
}
