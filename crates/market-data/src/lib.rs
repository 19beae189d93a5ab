//! FinanceHub Market Data Crate
//!
//! This crate fetches quotes and listings from third-party providers and
//! normalizes their loosely typed JSON into stable records.
//!
//! # Overview
//!
//! - Stocks and forex from Alpha Vantage ([`AlphaVantageClient`])
//! - Cryptocurrency listings from CoinGecko ([`CoinGeckoClient`])
//! - Per-field best-effort coercion ([`coerce`])
//!
//! # Architecture
//!
//! ```text
//! +------------------+     +------------------+
//! |  Provider client | --> |   HttpFetcher    |  (one GET, 10s timeout)
//! +------------------+     +------------------+
//!          |
//!          v
//! +------------------+
//! |  serde_json      |  (ParseError if the body is not JSON)
//! +------------------+
//!          |
//!          v
//! +------------------+
//! |  payload lookup  |  (NotFound if the expected key/array is empty)
//! +------------------+
//!          |
//!          v
//! +------------------+
//! |  RawValue fields |  (coerced one by one, zero on failure)
//! +------------------+
//!          |
//!          v
//! +------------------+
//! |  Domain record   |  (Quote, TimeSeriesPoint, CurrencyRate, MarketCoin)
//! +------------------+
//! ```
//!
//! Request-level failures are [`MarketDataError`]s. Field-level failures never
//! are: a garbled field becomes zero inside a successful record.

pub mod coerce;
pub mod errors;
pub mod http;
pub mod models;
pub mod provider;

pub use errors::{ErrorKind, MarketDataError};
pub use http::{FetchResponse, HttpFetcher, ReqwestFetcher, TransportError, DEFAULT_TIMEOUT};
pub use models::{CurrencyRate, MarketCoin, Quote, TimeSeriesPoint};

pub use provider::alpha_vantage::{AlphaVantageClient, AlphaVantageConfig};
pub use provider::coingecko::{CoinGeckoClient, CoinGeckoConfig};
pub use provider::{CryptoMarketProvider, QuoteProvider};
