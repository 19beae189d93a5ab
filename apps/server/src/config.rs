use std::{net::SocketAddr, time::Duration};

use anyhow::Context;
use financehub_market_data::{provider, DEFAULT_TIMEOUT};

pub struct Config {
    pub listen_addr: SocketAddr,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    /// Sent to Alpha Vantage as-is; an empty key is rejected by the provider, not here.
    pub alpha_vantage_api_key: String,
    pub alpha_vantage_base_url: String,
    pub coingecko_base_url: String,
    pub provider_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            cors_allow: vec![
                "http://localhost:5173".to_string(),
                "http://localhost:3000".to_string(),
            ],
            request_timeout: Duration::from_secs(30),
            alpha_vantage_api_key: String::new(),
            alpha_vantage_base_url: provider::alpha_vantage::DEFAULT_BASE_URL.to_string(),
            coingecko_base_url: provider::coingecko::DEFAULT_BASE_URL.to_string(),
            provider_timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let defaults = Self::default();

        // FH_LISTEN_ADDR wins; otherwise bind all interfaces on PORT.
        let listen_addr: SocketAddr = match std::env::var("FH_LISTEN_ADDR") {
            Ok(addr) => addr.parse().context("Invalid FH_LISTEN_ADDR")?,
            Err(_) => {
                let port: u16 = std::env::var("PORT")
                    .unwrap_or_else(|_| "8080".into())
                    .parse()
                    .context("Invalid PORT")?;
                SocketAddr::from(([0, 0, 0, 0], port))
            }
        };
        let cors_allow = match std::env::var("FH_CORS_ALLOW_ORIGINS") {
            Ok(origins) => origins
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            Err(_) => defaults.cors_allow,
        };
        let timeout_ms: u64 = std::env::var("FH_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".into())
            .parse()
            .context("Invalid FH_REQUEST_TIMEOUT_MS")?;
        let alpha_vantage_api_key = std::env::var("ALPHA_VANTAGE_API_KEY").unwrap_or_default();
        let alpha_vantage_base_url = std::env::var("FH_ALPHA_VANTAGE_BASE_URL")
            .unwrap_or(defaults.alpha_vantage_base_url);
        let coingecko_base_url =
            std::env::var("FH_COINGECKO_BASE_URL").unwrap_or(defaults.coingecko_base_url);

        Ok(Self {
            listen_addr,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            alpha_vantage_api_key,
            alpha_vantage_base_url,
            coingecko_base_url,
            provider_timeout: defaults.provider_timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.listen_addr.port(), 8080);
        assert_eq!(
            config.cors_allow,
            vec!["http://localhost:5173", "http://localhost:3000"]
        );
        assert_eq!(config.provider_timeout, Duration::from_secs(10));
        assert!(config.alpha_vantage_api_key.is_empty());
        assert!(config.coingecko_base_url.starts_with("https://"));
    }

    #[test]
    fn test_invalid_request_timeout_is_startup_error() {
        std::env::set_var("FH_REQUEST_TIMEOUT_MS", "thirty seconds");
        let result = Config::from_env();
        std::env::remove_var("FH_REQUEST_TIMEOUT_MS");

        let err = result.err().unwrap();
        assert!(err.to_string().contains("FH_REQUEST_TIMEOUT_MS"));
    }
}
