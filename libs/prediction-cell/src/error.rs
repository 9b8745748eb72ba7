use thiserror::Error;

use shared_models::error::AppError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PredictionError {
    #[error("Patient not found: {0}")]
    NotFound(String),
}

impl From<PredictionError> for AppError {
    fn from(err: PredictionError) -> Self {
        match err {
            PredictionError::NotFound(_) => AppError::NotFound("Patient not found".to_string()),
        }
    }
}
