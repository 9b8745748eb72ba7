use axum::{routing::get, Router};
use shared_database::SharedStore;

use crate::handlers::*;

pub fn create_patient_router(store: SharedStore) -> Router {
    Router::new()
        .route("/", get(list_patients).post(create_patient))
        .route("/{id}", get(get_patient).put(update_patient))
        .with_state(store)
}
