use std::sync::Arc;

use axum::{routing::get, Json, Router};

use crate::{main_lib::AppState, models::ApiResponse};

async fn health() -> Json<ApiResponse<()>> {
    Json(ApiResponse::message("Finance Hub API is running"))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(health))
}
