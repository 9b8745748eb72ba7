use thiserror::Error;

use shared_models::error::AppError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    #[error("Patient not found: {0}")]
    PatientNotFound(String),

    #[error("Doctor not found: {0}")]
    DoctorNotFound(String),

    #[error("Invalid patient status transition from {from} to {to}")]
    InvalidStatusTransition { from: String, to: String },

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::PatientNotFound(_) => AppError::NotFound("Patient not found".to_string()),
            StoreError::DoctorNotFound(_) => AppError::NotFound("Doctor not found".to_string()),
            StoreError::InvalidStatusTransition { .. } => AppError::Conflict(err.to_string()),
            StoreError::Validation(msg) => AppError::ValidationError(msg),
        }
    }
}
