use crate::transport::http::handlers::common::{ledger_error_response, ok_response};
use crate::transport::http::types::{ApiResponse, AppState};
use axum::extract::{Path, State};
use axum::response::IntoResponse;

/// Redeems immediately. The reveal animation is a presentation concern; clients that want it
/// play it locally before calling this route.
#[utoipa::path(
    post,
    path = "/api/items/{id}/redeem",
    params(("id" = String, Path, description = "Item id")),
    responses(
        (status = 200, description = "Key issued", body = ApiResponse),
        (status = 402, description = "Balance lower than the item price", body = ApiResponse),
        (status = 404, description = "Unknown item", body = ApiResponse),
        (status = 409, description = "Item already redeemed", body = ApiResponse)
    )
)]
pub async fn redeem_handler(
    State(state): State<AppState>,
    Path(item_id): Path<String>,
) -> impl IntoResponse {
    match state.service.redeem(&item_id).await {
        Ok(redemption) => ok_response(serde_json::json!({
            "item_id": redemption.item_id,
            "key": redemption.key,
            "price": redemption.price,
            "balance": redemption.balance_after,
        })),
        Err(e) => ledger_error_response(&e),
    }
}
