use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{config::Config, main_lib::AppState};

mod crypto;
mod currency;
mod health;
mod stocks;
mod topics;

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    let cors = cors_layer(&config.cors_allow);

    let api = Router::new()
        .merge(health::router())
        .merge(topics::router())
        .merge(stocks::router())
        .merge(crypto::router())
        .merge(currency::router());

    Router::new()
        .nest("/api", api)
        .with_state(state)
        .layer(cors)
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(allow: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::ORIGIN, header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION]);

    if allow.iter().any(|o| o == "*") {
        return layer.allow_origin(Any);
    }
    let origins = allow
        .iter()
        .filter_map(|o| match o.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", o);
                None
            }
        })
        .collect::<Vec<_>>();
    layer.allow_origin(origins)
}
