use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::modules::address_book::adapters::inbound::http_errors::store_error_response;
use crate::modules::address_book::core::record::Record;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<Record>, JsonRejection>,
) -> Response {
    let Json(candidate) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let mut store = state.store.lock().await;
    match store.create(candidate).await {
        Ok(record) => (
            StatusCode::CREATED,
            [(header::LOCATION, format!("/records/{}", record.id))],
        )
            .into_response(),
        Err(err) => store_error_response(err),
    }
}
