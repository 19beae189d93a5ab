use std::sync::Arc;

use axum::{extract::Path, routing::get, Json, Router};

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
    models::ApiResponse,
    topics::{self, FinanceTopic},
};

async fn list_topics() -> Json<ApiResponse<&'static [FinanceTopic]>> {
    Json(ApiResponse::ok(topics::all_topics()))
}

async fn get_topic(Path(id): Path<String>) -> ApiResult<Json<ApiResponse<&'static FinanceTopic>>> {
    let topic =
        topics::find_topic(&id).ok_or_else(|| ApiError::NotFound("Topic not found".to_string()))?;
    Ok(Json(ApiResponse::ok(topic)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/topics", get(list_topics))
        .route("/topics/{id}", get(get_topic))
}
