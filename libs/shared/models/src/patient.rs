use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Patient {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: NaiveDate,
    pub gender: String,
    pub symptom: String,
    #[serde(default)]
    pub severity: Severity,
    pub is_emergency: bool,
    pub notes: String,
    pub arrival_time: DateTime<Utc>,
    /// Minutes until the patient is expected to be seen.
    pub estimated_wait: u32,
    pub status: PatientStatus,
    pub doctor_id: Option<String>,
}

impl Patient {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn is_waiting(&self) -> bool {
        self.status == PatientStatus::Waiting
    }
}

/// Clinical urgency of a case. Unknown values deserialize as `Moderate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Severity {
    Mild,
    #[default]
    Moderate,
    Severe,
}

impl Severity {
    pub fn parse_lenient(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "mild" => Severity::Mild,
            "moderate" => Severity::Moderate,
            "severe" => Severity::Severe,
            other => {
                warn!("Unknown severity '{}', defaulting to moderate", other);
                Severity::Moderate
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Mild => "mild",
            Severity::Moderate => "moderate",
            Severity::Severe => "severe",
        }
    }
}

impl From<String> for Severity {
    fn from(value: String) -> Self {
        Severity::parse_lenient(&value)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PatientStatus {
    Waiting,
    InProgress,
    Completed,
}

impl PatientStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PatientStatus::Waiting => "waiting",
            PatientStatus::InProgress => "in-progress",
            PatientStatus::Completed => "completed",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, PatientStatus::Completed)
    }

    pub fn can_transition_to(&self, target: &PatientStatus) -> bool {
        use PatientStatus::*;
        match (self, target) {
            (from, to) if from == to => true,
            (Waiting, InProgress) => true,
            (Waiting, Completed) => true,
            (InProgress, Completed) => true,
            _ => false,
        }
    }
}

impl FromStr for PatientStatus {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "waiting" => Ok(PatientStatus::Waiting),
            "in-progress" => Ok(PatientStatus::InProgress),
            "completed" => Ok(PatientStatus::Completed),
            _ => Err(format!(
                "Invalid status '{}'. Must be 'waiting', 'in-progress', or 'completed'",
                value
            )),
        }
    }
}

impl fmt::Display for PatientStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Registration data handed to the store. The store assigns id, arrival time
/// and the initial wait.
#[derive(Debug, Clone)]
pub struct NewPatient {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: NaiveDate,
    pub gender: String,
    pub symptom: String,
    pub severity: Severity,
    pub is_emergency: bool,
    pub notes: String,
    pub doctor_id: Option<String>,
    pub status: Option<PatientStatus>,
}

#[derive(Debug, Clone, Default)]
pub struct PatientUpdate {
    pub phone: Option<String>,
    pub email: Option<String>,
    pub symptom: Option<String>,
    pub severity: Option<Severity>,
    pub is_emergency: Option<bool>,
    pub notes: Option<String>,
    pub estimated_wait: Option<u32>,
    pub status: Option<PatientStatus>,
    pub doctor_id: Option<String>,
}
