use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::modules::address_book::adapters::inbound::http_errors::store_error_response;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> Response {
    match state.store.lock().await.export_to(&*state.csv).await {
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => store_error_response(err),
    }
}
