use crate::domain::{FilterTab, ItemFilter};
use crate::transport::http::handlers::common::{
    internal_error_response, invalid_input_response, ledger_error_response, ok_response,
};
use crate::transport::http::types::{
    json_422, AddItemRequest, ApiResponse, AppState, ItemView, ItemsQuery,
};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;

#[utoipa::path(
    get,
    path = "/api/balance",
    responses(
        (status = 200, description = "Current credit balance", body = ApiResponse)
    )
)]
pub async fn balance_handler(State(state): State<AppState>) -> impl IntoResponse {
    let balance = state.service.balance().await;
    ok_response(serde_json::json!({ "balance": balance }))
}

#[utoipa::path(
    get,
    path = "/api/items",
    params(ItemsQuery),
    responses(
        (status = 200, description = "Filtered catalog, most recent first", body = ApiResponse),
        (status = 400, description = "Unknown tab", body = ApiResponse)
    )
)]
pub async fn list_items_handler(
    State(state): State<AppState>,
    Query(query): Query<ItemsQuery>,
) -> impl IntoResponse {
    let tab = match query.tab.as_deref().map(str::parse::<FilterTab>) {
        None => FilterTab::All,
        Some(Ok(tab)) => tab,
        Some(Err(e)) => return invalid_input_response(e).into_response(),
    };
    let filter = ItemFilter::new(query.search.unwrap_or_default(), tab);
    let listing = state.service.listing(&filter).await;
    let balance = listing.balance;
    let views: Vec<ItemView> = listing
        .items
        .into_iter()
        .map(|item| ItemView::new(item, balance))
        .collect();

    match serde_json::to_value(&views) {
        Ok(items) => ok_response(serde_json::json!({
            "balance": balance,
            "tab": filter.tab(),
            "count": views.len(),
            "items": items,
        }))
        .into_response(),
        Err(e) => internal_error_response(format!("Failed to serialize items: {}", e)).into_response(),
    }
}

#[utoipa::path(
    post,
    path = "/api/items",
    request_body = AddItemRequest,
    responses(
        (status = 200, description = "Item added", body = ApiResponse),
        (status = 422, description = "Empty name or image url", body = ApiResponse)
    )
)]
pub async fn add_item_handler(
    State(state): State<AppState>,
    payload: Result<Json<AddItemRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match payload {
        Ok(p) => p,
        Err(e) => return json_422(e, "{ \"name\": string, \"imageUrl\": string }").into_response(),
    };

    match state.service.add_item(&request.name, &request.image_url).await {
        Ok(item) => match serde_json::to_value(&item) {
            Ok(item) => ok_response(serde_json::json!({ "item": item })).into_response(),
            Err(e) => internal_error_response(format!("Failed to serialize item: {}", e))
                .into_response(),
        },
        Err(e) => ledger_error_response(&e).into_response(),
    }
}
