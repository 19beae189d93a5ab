use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    routing::get,
    Json, Router,
};
use financehub_market_data::{Quote, TimeSeriesPoint};
use serde::Deserialize;

use crate::{error::ApiResult, main_lib::AppState, models::ApiResponse};

const DEFAULT_SERIES_LIMIT: usize = 30;
/// The compact daily series never carries more than 100 points.
const MAX_SERIES_LIMIT: usize = 100;

#[derive(Deserialize)]
struct SeriesQuery {
    limit: Option<usize>,
}

async fn get_quote(
    State(state): State<Arc<AppState>>,
    Path(symbol): Path<String>,
) -> ApiResult<Json<ApiResponse<Quote>>> {
    let quote = state.quote_provider.get_quote(&symbol).await?;
    Ok(Json(ApiResponse::ok(quote)))
}

async fn get_time_series(
    State(state): State<Arc<AppState>>,
    Path(symbol): Path<String>,
    query: Result<Query<SeriesQuery>, QueryRejection>,
) -> ApiResult<Json<ApiResponse<Vec<TimeSeriesPoint>>>> {
    let Query(query) = query?;
    let limit = query
        .limit
        .unwrap_or(DEFAULT_SERIES_LIMIT)
        .min(MAX_SERIES_LIMIT);
    let series = state.quote_provider.get_time_series(&symbol, limit).await?;
    Ok(Json(ApiResponse::ok(series)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/stocks/{symbol}", get(get_quote))
        .route("/stocks/{symbol}/timeseries", get(get_time_series))
}
