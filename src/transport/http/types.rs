use crate::app::RedemptionService;
use crate::domain::keygen::LOCKED_KEY_MASK;
use crate::domain::CatalogItem;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::sync::Arc;
use utoipa::{IntoParams, ToSchema};

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<RedemptionService>,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub data: Option<JsonValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Stable reason code for failures (e.g. `insufficient_credits`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

#[derive(Deserialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddItemRequest {
    pub name: String,
    #[serde(alias = "image_url")]
    pub image_url: String,
}

#[derive(Deserialize, Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ItemsQuery {
    /// Case-insensitive substring of the item name.
    #[serde(default)]
    pub search: Option<String>,
    /// `all` (default, also when empty), `available` or `used`; case-insensitive.
    #[serde(default)]
    pub tab: Option<String>,
}

/// A catalog row as the UI renders it.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ItemView {
    #[serde(flatten)]
    pub item: CatalogItem,
    pub can_afford: bool,
    /// The issued key, or the locked mask.
    pub display_key: String,
}

impl ItemView {
    pub fn new(item: CatalogItem, balance: u64) -> Self {
        let can_afford = balance >= item.price();
        let display_key = item
            .issued_key()
            .unwrap_or(LOCKED_KEY_MASK)
            .to_string();
        Self {
            item,
            can_afford,
            display_key,
        }
    }
}

pub fn json_422(err: JsonRejection, expected: &str) -> (StatusCode, Json<ApiResponse>) {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ApiResponse {
            success: false,
            data: None,
            error: Some(format!("Invalid JSON body: {} (expected: {})", err, expected)),
            code: Some("invalid_input".to_string()),
        }),
    )
}
