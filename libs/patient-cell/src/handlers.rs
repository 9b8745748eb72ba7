use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;
use tracing::instrument;

use shared_database::SharedStore;
use shared_models::error::AppError;
use shared_utils::response::{success, success_list, success_with_message};

use crate::models::{CreatePatientRequest, UpdatePatientRequest};
use crate::services::PatientService;

#[axum::debug_handler]
#[instrument(skip(store))]
pub async fn list_patients(
    State(store): State<SharedStore>,
) -> Result<Json<Value>, AppError> {
    let service = PatientService::new(store);

    Ok(success_list(service.list_patients().await))
}

#[axum::debug_handler]
#[instrument(skip(store))]
pub async fn get_patient(
    State(store): State<SharedStore>,
    Path(patient_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let service = PatientService::new(store);

    let patient = service.get_patient(&patient_id).await?;

    Ok(success(patient))
}

#[axum::debug_handler]
#[instrument(skip(store, request))]
pub async fn create_patient(
    State(store): State<SharedStore>,
    Json(request): Json<CreatePatientRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let service = PatientService::new(store);

    let patient = service.create_patient(request).await?;
    let message = format!("Patient {} added successfully", patient.full_name());

    Ok((StatusCode::CREATED, success_with_message(patient, message)))
}

#[axum::debug_handler]
#[instrument(skip(store, request))]
pub async fn update_patient(
    State(store): State<SharedStore>,
    Path(patient_id): Path<String>,
    Json(request): Json<UpdatePatientRequest>,
) -> Result<Json<Value>, AppError> {
    let service = PatientService::new(store);

    let patient = service.update_patient(&patient_id, request).await?;

    Ok(success_with_message(patient, "Patient updated successfully"))
}
