//! Error types for the market data crate.
//!
//! This module provides:
//! - [`MarketDataError`]: The request-level error returned by every provider call
//! - [`ErrorKind`]: The category of a [`MarketDataError`], for matching without strings
//!
//! Field-level problems (a garbled price, a null volume) are not errors. They are
//! absorbed by the coercion layer in [`crate::coerce`] and surface as zero values
//! inside an otherwise successful record.

use thiserror::Error;

/// Category of a [`MarketDataError`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// The provider could not be reached or the body could not be read.
    Network,
    /// The body was not valid JSON (or not the JSON shape the endpoint always returns).
    Parse,
    /// The expected payload was absent or empty.
    NotFound,
}

/// Errors that can occur while fetching from a provider.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// Transport failure or timeout while talking to the provider.
    /// Not retried; surfaced to the caller as-is.
    #[error("Network error: {provider} - {message}")]
    Network {
        /// The provider that could not be reached
        provider: String,
        /// Transport error description
        message: String,
        /// Whether the failure was the client-side timeout firing
        timeout: bool,
    },

    /// The response body is not syntactically valid JSON.
    #[error("Parse error: {provider} - {message}")]
    Parse {
        /// The provider that returned the body
        provider: String,
        /// Decoder error description
        message: String,
    },

    /// The semantic payload is missing.
    ///
    /// Conflates "unknown identifier" with "provider returned an unexpected shape";
    /// the providers do not distinguish the two and neither do we.
    #[error("Not found: {provider} - {message}")]
    NotFound {
        /// The provider that returned the empty payload
        provider: String,
        /// What was missing, plus any notice the provider attached
        message: String,
    },
}

impl MarketDataError {
    pub(crate) fn network(provider: &str, message: impl Into<String>, timeout: bool) -> Self {
        Self::Network {
            provider: provider.to_string(),
            message: message.into(),
            timeout,
        }
    }

    pub(crate) fn parse(provider: &str, message: impl Into<String>) -> Self {
        Self::Parse {
            provider: provider.to_string(),
            message: message.into(),
        }
    }

    pub(crate) fn not_found(provider: &str, message: impl Into<String>) -> Self {
        Self::NotFound {
            provider: provider.to_string(),
            message: message.into(),
        }
    }

    /// Returns the category of this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use financehub_market_data::errors::{ErrorKind, MarketDataError};
    ///
    /// let error = MarketDataError::NotFound {
    ///     provider: "COINGECKO".to_string(),
    ///     message: "coin not found".to_string(),
    /// };
    /// assert_eq!(error.kind(), ErrorKind::NotFound);
    /// ```
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Network { .. } => ErrorKind::Network,
            Self::Parse { .. } => ErrorKind::Parse,
            Self::NotFound { .. } => ErrorKind::NotFound,
        }
    }

    /// The provider id the error originated from.
    pub fn provider(&self) -> &str {
        match self {
            Self::Network { provider, .. }
            | Self::Parse { provider, .. }
            | Self::NotFound { provider, .. } => provider,
        }
    }

    /// True when the request failed because the client-side timeout elapsed.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Network { timeout: true, .. })
    }
}
