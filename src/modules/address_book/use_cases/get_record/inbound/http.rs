use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
    response::{IntoResponse, Response},
};

use crate::modules::address_book::adapters::inbound::http_errors::{
    malformed_id_response, store_error_response,
};
use crate::modules::address_book::core::record::SENTINEL_KEY;
use crate::modules::address_book::core::record_store::StoreError;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> Response {
    let Ok(Path(id)) = id else {
        return malformed_id_response();
    };
    // The sentinel is bookkeeping, not an address book entry.
    if id == SENTINEL_KEY {
        return store_error_response(StoreError::NotFound(id));
    }

    match state.store.lock().await.get(id) {
        Ok(record) => Json(record).into_response(),
        Err(err) => store_error_response(err),
    }
}
