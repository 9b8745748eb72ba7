use axum::{routing::get, Router};

use shared_database::SharedStore;

use crate::handlers;

pub fn doctor_routes(store: SharedStore) -> Router {
    Router::new()
        .route("/", get(handlers::list_doctors))
        // must be registered ahead of the id capture
        .route("/available", get(handlers::list_available_doctors))
        .route(
            "/{doctor_id}",
            get(handlers::get_doctor).put(handlers::update_doctor_status),
        )
        .with_state(store)
}
