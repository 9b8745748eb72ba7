use std::sync::Arc;
use axum::{
    extract::{Path, State},
    response::Json,
};
use serde_json::Value;
use tracing::{info, instrument};

use shared_database::SharedStore;
use shared_models::error::AppError;
use shared_utils::response::success;

use crate::services::QueuePredictionEngine;

pub struct PredictionHandlers {
    store: SharedStore,
    engine: QueuePredictionEngine,
}

impl PredictionHandlers {
    pub fn new(store: SharedStore, engine: QueuePredictionEngine) -> Self {
        Self { store, engine }
    }
}

/// Predict wait time for a patient
#[axum::debug_handler]
#[instrument(skip(handlers))]
pub async fn predict_wait_time(
    State(handlers): State<Arc<PredictionHandlers>>,
    Path(patient_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let snapshot = handlers.store.snapshot().await;

    let prediction = handlers
        .engine
        .predict_wait_time(&patient_id, &snapshot.patients, &snapshot.doctors)?;

    info!(
        "Predicted {} min wait for patient {} ({}% confidence)",
        prediction.estimated_wait_time, prediction.patient_id, prediction.confidence
    );

    Ok(success(prediction))
}

/// Recommended order for the waiting queue with doctor allocations
#[axum::debug_handler]
#[instrument(skip(handlers))]
pub async fn optimize_queue(
    State(handlers): State<Arc<PredictionHandlers>>,
) -> Result<Json<Value>, AppError> {
    let snapshot = handlers.store.snapshot().await;

    let optimization = handlers
        .engine
        .optimize_queue(&snapshot.patients, &snapshot.doctors);

    info!("Optimized queue of {} waiting patients", optimization.current_queue_length);

    Ok(success(optimization))
}

/// Next expected surge with staffing recommendations
#[axum::debug_handler]
#[instrument(skip(handlers))]
pub async fn predict_peak_hours(
    State(handlers): State<Arc<PredictionHandlers>>,
) -> Result<Json<Value>, AppError> {
    let patients = handlers.store.list_patients().await;

    Ok(success(handlers.engine.forecast_peak_hours(&patients)))
}
