use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::Value;
use tracing::instrument;

use shared_database::SharedStore;
use shared_models::error::AppError;
use shared_utils::response::{success, success_list, success_with_message};

use crate::models::UpdateDoctorStatusRequest;
use crate::services::DoctorService;

#[axum::debug_handler]
pub async fn list_doctors(State(store): State<SharedStore>) -> Result<Json<Value>, AppError> {
    let service = DoctorService::new(store);

    Ok(success_list(service.list_doctors().await))
}

#[axum::debug_handler]
pub async fn list_available_doctors(
    State(store): State<SharedStore>,
) -> Result<Json<Value>, AppError> {
    let service = DoctorService::new(store);

    Ok(success_list(service.available_doctors().await))
}

#[axum::debug_handler]
#[instrument(skip(store))]
pub async fn get_doctor(
    State(store): State<SharedStore>,
    Path(doctor_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let service = DoctorService::new(store);

    let doctor = service.get_doctor(&doctor_id).await?;

    Ok(success(doctor))
}

#[axum::debug_handler]
#[instrument(skip(store, request))]
pub async fn update_doctor_status(
    State(store): State<SharedStore>,
    Path(doctor_id): Path<String>,
    Json(request): Json<UpdateDoctorStatusRequest>,
) -> Result<Json<Value>, AppError> {
    let service = DoctorService::new(store);

    let doctor = service.update_status(&doctor_id, request).await?;

    Ok(success_with_message(doctor, "Doctor status updated successfully"))
}
