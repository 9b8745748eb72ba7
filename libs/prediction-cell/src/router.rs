use std::sync::Arc;
use axum::{routing::get, Router};

use shared_config::AppConfig;
use shared_database::SharedStore;

use crate::handlers::{optimize_queue, predict_peak_hours, predict_wait_time, PredictionHandlers};
use crate::services::QueuePredictionEngine;

pub fn create_prediction_router(store: SharedStore, config: Arc<AppConfig>) -> Router {
    prediction_routes(store, QueuePredictionEngine::from_config(&config))
}

/// Same routes with a caller-built engine, e.g. a custom forecaster.
pub fn prediction_routes(store: SharedStore, engine: QueuePredictionEngine) -> Router {
    let handlers = Arc::new(PredictionHandlers::new(store, engine));

    Router::new()
        .route("/wait-time/{patient_id}", get(predict_wait_time))
        .route("/optimize-queue", get(optimize_queue))
        .route("/peak-hours", get(predict_peak_hours))
        .with_state(handlers)
}
