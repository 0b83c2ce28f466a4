use crate::transport::http::handlers::common::ok_response;
use crate::transport::http::types::{ApiResponse, AppState};
use axum::extract::State;
use axum::response::IntoResponse;

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up", body = ApiResponse)
    )
)]
pub async fn healthcheck_handler(State(state): State<AppState>) -> impl IntoResponse {
    let balance = state.service.balance().await;
    ok_response(serde_json::json!({ "status": "ok", "balance": balance }))
}
