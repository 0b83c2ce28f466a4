use crate::transport::http::handlers::{export, health, items, redeem};
use crate::transport::http::types::{AddItemRequest, ApiResponse};
use axum::routing::{get, post};
use axum::Router;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck_handler,
        items::balance_handler,
        items::list_items_handler,
        items::add_item_handler,
        redeem::redeem_handler,
        export::export_handler
    ),
    components(schemas(ApiResponse, AddItemRequest))
)]
pub struct ApiDoc;

pub fn create_router(app_state: crate::transport::http::types::AppState) -> Router {
    Router::new()
        .route("/health", get(health::healthcheck_handler))
        .route("/api/balance", get(items::balance_handler))
        .route(
            "/api/items",
            get(items::list_items_handler).post(items::add_item_handler),
        )
        .route("/api/items/:id/redeem", post(redeem::redeem_handler))
        .route("/api/export", get(export::export_handler))
        .with_state(app_state)
}
