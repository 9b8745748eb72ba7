use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use shared_database::StoreError;
use shared_models::error::AppError;
use shared_models::{NewPatient, PatientStatus, PatientUpdate, Severity};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePatientRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub date_of_birth: Option<String>,
    pub gender: Option<String>,
    pub symptom: Option<String>,
    pub severity: Option<Severity>,
    pub is_emergency: Option<bool>,
    pub notes: Option<String>,
    pub doctor_id: Option<String>,
    pub status: Option<String>,
}

fn required(value: Option<String>, field: &'static str, missing: &mut Vec<&'static str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => {
            missing.push(field);
            String::new()
        }
    }
}

fn parse_status(raw: Option<String>) -> Result<Option<PatientStatus>, PatientError> {
    raw.map(|s| s.parse::<PatientStatus>())
        .transpose()
        .map_err(PatientError::ValidationError)
}

impl CreatePatientRequest {
    /// Checks required fields and applies registration defaults
    /// (moderate severity, not an emergency, empty notes).
    pub fn into_new_patient(self) -> Result<NewPatient, PatientError> {
        let mut missing = Vec::new();

        let first_name = required(self.first_name, "first_name", &mut missing);
        let last_name = required(self.last_name, "last_name", &mut missing);
        let email = required(self.email, "email", &mut missing);
        let phone = required(self.phone, "phone", &mut missing);
        let date_of_birth = required(self.date_of_birth, "date_of_birth", &mut missing);
        let gender = required(self.gender, "gender", &mut missing);
        let symptom = required(self.symptom, "symptom", &mut missing);

        if !missing.is_empty() {
            return Err(PatientError::MissingFields(missing.join(", ")));
        }

        let date_of_birth = NaiveDate::parse_from_str(date_of_birth.trim(), "%Y-%m-%d")
            .map_err(|_| PatientError::InvalidDateOfBirth)?;

        Ok(NewPatient {
            first_name,
            last_name,
            email,
            phone,
            date_of_birth,
            gender,
            symptom,
            severity: self.severity.unwrap_or_default(),
            is_emergency: self.is_emergency.unwrap_or(false),
            notes: self.notes.unwrap_or_default(),
            doctor_id: self.doctor_id,
            status: parse_status(self.status)?,
        })
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePatientRequest {
    pub phone: Option<String>,
    pub email: Option<String>,
    pub symptom: Option<String>,
    pub severity: Option<Severity>,
    pub is_emergency: Option<bool>,
    pub notes: Option<String>,
    pub estimated_wait: Option<u32>,
    pub status: Option<String>,
    pub doctor_id: Option<String>,
}

impl UpdatePatientRequest {
    pub fn into_update(self) -> Result<PatientUpdate, PatientError> {
        Ok(PatientUpdate {
            status: parse_status(self.status)?,
            phone: self.phone,
            email: self.email,
            symptom: self.symptom,
            severity: self.severity,
            is_emergency: self.is_emergency,
            notes: self.notes,
            estimated_wait: self.estimated_wait,
            doctor_id: self.doctor_id,
        })
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PatientError {
    #[error("Patient not found")]
    NotFound,

    #[error("Missing required fields: {0}")]
    MissingFields(String),

    #[error("Invalid date of birth, expected YYYY-MM-DD")]
    InvalidDateOfBirth,

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<PatientError> for AppError {
    fn from(err: PatientError) -> Self {
        match err {
            PatientError::NotFound => AppError::NotFound(err.to_string()),
            PatientError::MissingFields(_) | PatientError::InvalidDateOfBirth => {
                AppError::BadRequest(err.to_string())
            }
            PatientError::ValidationError(msg) => AppError::ValidationError(msg),
            PatientError::Store(e) => e.into(),
        }
    }
}
