use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use financehub_market_data::CurrencyRate;

use crate::{error::ApiResult, main_lib::AppState, models::ApiResponse};

async fn get_exchange_rate(
    State(state): State<Arc<AppState>>,
    Path((from, to)): Path<(String, String)>,
) -> ApiResult<Json<ApiResponse<CurrencyRate>>> {
    let rate = state.quote_provider.get_exchange_rate(&from, &to).await?;
    Ok(Json(ApiResponse::ok(rate)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/currency/{from}/{to}", get(get_exchange_rate))
}
