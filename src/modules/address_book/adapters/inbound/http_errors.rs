use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::modules::address_book::core::record_store::StoreError;

pub fn store_error_response(err: StoreError) -> Response {
    match err {
        StoreError::NotFound(id) => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({"error": format!("record {id} not found")})),
        )
            .into_response(),
        err => {
            tracing::error!(error = %err, "address book persistence failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

pub fn malformed_id_response() -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(serde_json::json!({"error": "record id must be a non-negative integer"})),
    )
        .into_response()
}
