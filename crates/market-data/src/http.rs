//! HTTP transport used by the provider clients.
//!
//! Clients talk to the network only through [`HttpFetcher`], so tests can hand
//! them canned bodies and the server can share one connection pool.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use thiserror::Error;

/// Client-side timeout applied to every provider request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Status and fully-read body of a provider response.
#[derive(Clone, Debug)]
pub struct FetchResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl FetchResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The request never produced a readable response.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct TransportError {
    pub message: String,
    pub timeout: bool,
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        Self {
            timeout: err.is_timeout(),
            message: err.to_string(),
        }
    }
}

/// A single GET with a bounded duration.
///
/// Non-2xx statuses are returned as responses, not errors; providers put JSON
/// error bodies behind them and the caller decides what they mean.
#[async_trait]
pub trait HttpFetcher: Send + Sync {
    async fn fetch(&self, url: &Url) -> Result<FetchResponse, TransportError>;
}

/// [`HttpFetcher`] backed by a `reqwest::Client`.
#[derive(Clone, Debug)]
pub struct ReqwestFetcher {
    client: Client,
}

impl ReqwestFetcher {
    /// Builds a fetcher whose requests are cut off after `timeout`.
    ///
    /// Fails when the TLS backend cannot be initialised; there is no
    /// fallback client without the timeout.
    pub fn new(timeout: Duration) -> Result<Self, TransportError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpFetcher for ReqwestFetcher {
    async fn fetch(&self, url: &Url) -> Result<FetchResponse, TransportError> {
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status().as_u16();
        // Consumes the response; the connection goes back to the pool on both paths.
        let body = response.bytes().await?.to_vec();

        Ok(FetchResponse { status, body })
    }
}
