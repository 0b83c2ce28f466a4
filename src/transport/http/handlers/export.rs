use crate::transport::http::handlers::common::{internal_error_response, ok_response};
use crate::transport::http::types::{ApiResponse, AppState};
use axum::extract::State;
use axum::response::IntoResponse;

#[utoipa::path(
    get,
    path = "/api/export",
    responses(
        (status = 200, description = "Snapshot of balance and catalog; `data` is the backup document", body = ApiResponse),
        (status = 500, description = "Serialization failed", body = ApiResponse)
    )
)]
pub async fn export_handler(State(state): State<AppState>) -> impl IntoResponse {
    let snapshot = state.service.export_snapshot().await;
    match serde_json::to_value(&snapshot) {
        Ok(data) => ok_response(data),
        Err(e) => internal_error_response(format!("Failed to serialize snapshot: {}", e)),
    }
}
