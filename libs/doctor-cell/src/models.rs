use serde::{Deserialize, Serialize};

use shared_database::StoreError;
use shared_models::error::AppError;
use shared_models::{DoctorStatus, DoctorUpdate};

/// Body of `PUT /doctors/{id}`. The status arrives as a raw string so an
/// unknown value can be answered with the list of accepted ones.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateDoctorStatusRequest {
    pub status: Option<String>,
    pub current_patients: Option<u32>,
}

impl UpdateDoctorStatusRequest {
    pub fn into_update(self) -> Result<DoctorUpdate, DoctorError> {
        let status = self
            .status
            .ok_or_else(|| DoctorError::InvalidStatus(DoctorStatus::PARSE_ERROR.to_string()))?
            .parse::<DoctorStatus>()
            .map_err(DoctorError::InvalidStatus)?;

        Ok(DoctorUpdate {
            status: Some(status),
            current_patients: self.current_patients,
        })
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DoctorError {
    #[error("Doctor not found")]
    NotFound,

    #[error("{0}")]
    InvalidStatus(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<DoctorError> for AppError {
    fn from(err: DoctorError) -> Self {
        match err {
            DoctorError::NotFound => AppError::NotFound(err.to_string()),
            DoctorError::InvalidStatus(msg) => AppError::BadRequest(msg),
            DoctorError::Store(e) => e.into(),
        }
    }
}
