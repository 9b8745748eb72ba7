use axum::{extract::State, Json};
use serde_json::Value;
use tracing::{info, instrument};

use shared_database::SharedStore;
use shared_models::error::AppError;
use shared_utils::response::{success, success_with_message};

use crate::models::QueueStatus;
use crate::services::{queue_analytics, queue_stats};

#[axum::debug_handler]
pub async fn get_queue_status(State(store): State<SharedStore>) -> Result<Json<Value>, AppError> {
    let patients = store.list_patients().await;
    let stats = queue_stats(&patients);

    let active = patients
        .into_iter()
        .filter(|p| !p.status.is_terminal())
        .collect();

    Ok(success(QueueStatus { stats, patients: active }))
}

#[axum::debug_handler]
#[instrument(skip(store))]
pub async fn update_queue(State(store): State<SharedStore>) -> Result<Json<Value>, AppError> {
    store.advance_queue().await;
    let stats = queue_stats(&store.list_patients().await);

    info!("Manual queue update, {} waiting", stats.waiting_patients);
    Ok(success_with_message(stats, "Queue updated successfully"))
}

#[axum::debug_handler]
pub async fn get_queue_analytics(State(store): State<SharedStore>) -> Result<Json<Value>, AppError> {
    let snapshot = store.snapshot().await;

    Ok(success(queue_analytics(&snapshot.patients, &snapshot.doctors)))
}
