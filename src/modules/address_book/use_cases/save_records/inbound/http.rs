use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::modules::address_book::adapters::inbound::http_errors::store_error_response;
use crate::shell::state::AppState;

/// Explicit whole-file save, e.g. to make an import durable.
pub async fn handle(State(state): State<AppState>) -> Response {
    match state.store.lock().await.persist().await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => store_error_response(err),
    }
}
