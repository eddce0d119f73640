use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::modules::address_book::adapters::inbound::http_errors::{
    malformed_id_response, store_error_response,
};
use crate::modules::address_book::core::record::Record;
use crate::shell::state::AppState;

/// Partial update: only non-empty fields in the body replace stored values.
pub async fn handle(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
    body: Result<Json<Record>, JsonRejection>,
) -> Response {
    let Ok(Path(id)) = id else {
        return malformed_id_response();
    };
    let Json(patch) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match state.store.lock().await.update(id, patch).await {
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => store_error_response(err),
    }
}
