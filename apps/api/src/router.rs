use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    routing::get,
};
use serde_json::{json, Value};

use doctor_cell::doctor_routes;
use patient_cell::create_patient_router;
use prediction_cell::create_prediction_router;
use queue_cell::create_queue_router;
use shared_config::AppConfig;
use shared_database::SharedStore;
use shared_utils::response::success_list;

async fn ping(State(config): State<Arc<AppConfig>>) -> Json<Value> {
    Json(json!({ "message": config.ping_message }))
}

async fn list_hospitals(State(store): State<SharedStore>) -> Json<Value> {
    success_list(store.list_hospitals().await)
}

pub fn create_router(store: SharedStore, config: Arc<AppConfig>) -> Router {
    let api = Router::new()
        .route("/ping", get(ping).with_state(config.clone()))
        .route("/hospitals", get(list_hospitals).with_state(store.clone()))
        .nest("/patients", create_patient_router(store.clone()))
        .nest("/doctors", doctor_routes(store.clone()))
        .nest("/queue", create_queue_router(store.clone()))
        .nest("/predict", create_prediction_router(store, config));

    Router::new()
        .route("/", get(|| async { "Clinic queue API is running!" }))
        .nest("/api", api)
}
