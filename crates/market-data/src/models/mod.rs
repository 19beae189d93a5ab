//! Market data models
//!
//! Normalized records produced by the provider clients:
//! - `quote` - Point-in-time equity quotes and daily OHLCV points (Quote, TimeSeriesPoint)
//! - `currency` - Realtime exchange rates (CurrencyRate)
//! - `coin` - Cryptocurrency market listings (MarketCoin)
//!
//! All records are plain values: built once from a parsed response and never mutated.

mod coin;
mod currency;
mod quote;

pub use coin::MarketCoin;
pub use currency::CurrencyRate;
pub use quote::{Quote, TimeSeriesPoint};
