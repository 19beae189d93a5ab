use std::sync::Arc;

use anyhow::Context;
use financehub_market_data::{
    AlphaVantageClient, AlphaVantageConfig, CoinGeckoClient, CoinGeckoConfig,
    CryptoMarketProvider, QuoteProvider,
};
use reqwest::Url;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;

pub struct AppState {
    pub quote_provider: Arc<dyn QuoteProvider>,
    pub crypto_provider: Arc<dyn CryptoMarketProvider>,
}

impl AppState {
    pub fn new(
        quote_provider: Arc<dyn QuoteProvider>,
        crypto_provider: Arc<dyn CryptoMarketProvider>,
    ) -> Self {
        Self {
            quote_provider,
            crypto_provider,
        }
    }
}

pub fn init_tracing() {
    let log_format = std::env::var("FH_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    Url::parse(&config.alpha_vantage_base_url).context("Invalid Alpha Vantage base URL")?;
    Url::parse(&config.coingecko_base_url).context("Invalid CoinGecko base URL")?;

    if config.alpha_vantage_api_key.is_empty() {
        tracing::warn!("ALPHA_VANTAGE_API_KEY is not set; stock and currency requests will be rejected upstream");
    }

    let mut alpha_vantage = AlphaVantageConfig::new(config.alpha_vantage_api_key.clone())
        .with_base_url(config.alpha_vantage_base_url.clone());
    alpha_vantage.timeout = config.provider_timeout;
    let quote_provider: Arc<dyn QuoteProvider> =
        Arc::new(AlphaVantageClient::with_config(alpha_vantage)?);

    let coingecko = CoinGeckoConfig {
        base_url: config.coingecko_base_url.clone(),
        timeout: config.provider_timeout,
        ..CoinGeckoConfig::default()
    };
    let crypto_provider: Arc<dyn CryptoMarketProvider> =
        Arc::new(CoinGeckoClient::with_config(coingecko)?);

    tracing::info!(
        quotes = quote_provider.id(),
        crypto = crypto_provider.id(),
        "Market data providers configured"
    );

    Ok(Arc::new(AppState::new(quote_provider, crypto_provider)))
}
