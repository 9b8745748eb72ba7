use axum::{
    routing::{get, post},
    Router,
};

use shared_database::SharedStore;

use crate::handlers::{get_queue_analytics, get_queue_status, update_queue};

pub fn create_queue_router(store: SharedStore) -> Router {
    Router::new()
        .route("/", get(get_queue_status))
        .route("/update", post(update_queue))
        .route("/analytics", get(get_queue_analytics))
        .with_state(store)
}
