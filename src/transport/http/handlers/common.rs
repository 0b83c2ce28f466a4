use crate::domain::LedgerError;
use crate::transport::http::types::ApiResponse;
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value as JsonValue;

pub fn ok_response(data: JsonValue) -> (StatusCode, Json<ApiResponse>) {
    (
        StatusCode::OK,
        Json(ApiResponse {
            success: true,
            data: Some(data),
            error: None,
            code: None,
        }),
    )
}

pub fn status_for(err: &LedgerError) -> StatusCode {
    match err {
        LedgerError::ItemNotFound(_) => StatusCode::NOT_FOUND,
        LedgerError::InsufficientCredits { .. } => StatusCode::PAYMENT_REQUIRED,
        LedgerError::AlreadyRedeemed(_) => StatusCode::CONFLICT,
        LedgerError::InvalidInput(_) => StatusCode::UNPROCESSABLE_ENTITY,
    }
}

pub fn ledger_error_response(err: &LedgerError) -> (StatusCode, Json<ApiResponse>) {
    (
        status_for(err),
        Json(ApiResponse {
            success: false,
            data: None,
            error: Some(err.to_string()),
            code: Some(err.code().to_string()),
        }),
    )
}

pub fn internal_error_response(message: String) -> (StatusCode, Json<ApiResponse>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiResponse {
            success: false,
            data: None,
            error: Some(message),
            code: None,
        }),
    )
}

pub fn invalid_input_response(message: String) -> (StatusCode, Json<ApiResponse>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiResponse {
            success: false,
            data: None,
            error: Some(message),
            code: Some("invalid_input".to_string()),
        }),
    )
}
