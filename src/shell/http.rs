use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::modules::address_book::use_cases::create_record::inbound::http as create_http;
use crate::modules::address_book::use_cases::delete_record::inbound::http as delete_http;
use crate::modules::address_book::use_cases::export_records::inbound::http as export_http;
use crate::modules::address_book::use_cases::get_record::inbound::http as get_http;
use crate::modules::address_book::use_cases::import_records::inbound::http as import_http;
use crate::modules::address_book::use_cases::list_records::inbound::http as list_http;
use crate::modules::address_book::use_cases::save_records::inbound::http as save_http;
use crate::modules::address_book::use_cases::update_record::inbound::http as update_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/records", get(list_http::handle).post(create_http::handle))
        .route("/records/import", post(import_http::handle))
        .route("/records/export", post(export_http::handle))
        .route("/records/save", post(save_http::handle))
        .route(
            "/records/{id}",
            get(get_http::handle)
                .put(update_http::handle)
                .delete(delete_http::handle),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
