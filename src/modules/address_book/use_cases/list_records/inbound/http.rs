use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};

use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> Response {
    let records = state.store.lock().await.list();
    Json(records).into_response()
}
