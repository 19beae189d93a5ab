use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    routing::get,
    Json, Router,
};
use financehub_market_data::MarketCoin;
use serde::Deserialize;

use crate::{error::ApiResult, main_lib::AppState, models::ApiResponse};

const DEFAULT_TOP_LIMIT: usize = 10;
/// CoinGecko's `per_page` ceiling.
const MAX_TOP_LIMIT: usize = 250;

#[derive(Deserialize)]
struct TopQuery {
    limit: Option<usize>,
}

async fn get_top_coins(
    State(state): State<Arc<AppState>>,
    query: Result<Query<TopQuery>, QueryRejection>,
) -> ApiResult<Json<ApiResponse<Vec<MarketCoin>>>> {
    let Query(query) = query?;
    let limit = query.limit.unwrap_or(DEFAULT_TOP_LIMIT).min(MAX_TOP_LIMIT);
    let coins = state.crypto_provider.get_top_coins(limit).await?;
    Ok(Json(ApiResponse::ok(coins)))
}

async fn get_price(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<MarketCoin>>> {
    let coin = state.crypto_provider.get_price(&id).await?;
    Ok(Json(ApiResponse::ok(coin)))
}

pub fn router() -> Router<Arc<AppState>> {
    // `/crypto/top` is a static segment and wins over `/crypto/{id}`.
    Router::new()
        .route("/crypto/top", get(get_top_coins))
        .route("/crypto/{id}", get(get_price))
}
