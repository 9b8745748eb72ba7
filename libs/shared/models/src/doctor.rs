use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Doctor {
    pub id: String,
    pub name: String,
    pub specialization: String,
    pub status: DoctorStatus,
    pub current_patients: u32,
    pub max_capacity: u32,
    pub experience_years: u32,
    pub bio: String,
    #[serde(default)]
    pub feedback: Vec<DoctorFeedback>,
}

impl Doctor {
    pub fn has_capacity(&self) -> bool {
        self.current_patients < self.max_capacity
    }

    /// Available and below capacity.
    pub fn can_take_patient(&self) -> bool {
        self.status == DoctorStatus::Available && self.has_capacity()
    }

    pub fn utilization_percentage(&self) -> f64 {
        if self.max_capacity == 0 {
            return 0.0;
        }
        self.current_patients as f64 / self.max_capacity as f64 * 100.0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DoctorFeedback {
    pub rating: u8,
    pub comment: String,
    pub patient_name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DoctorStatus {
    Available,
    Busy,
    Break,
}

impl DoctorStatus {
    pub const PARSE_ERROR: &'static str = "Invalid status. Must be 'available', 'busy', or 'break'";

    pub fn as_str(&self) -> &'static str {
        match self {
            DoctorStatus::Available => "available",
            DoctorStatus::Busy => "busy",
            DoctorStatus::Break => "break",
        }
    }
}

impl FromStr for DoctorStatus {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "available" => Ok(DoctorStatus::Available),
            "busy" => Ok(DoctorStatus::Busy),
            "break" => Ok(DoctorStatus::Break),
            _ => Err(Self::PARSE_ERROR.to_string()),
        }
    }
}

impl fmt::Display for DoctorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default)]
pub struct DoctorUpdate {
    pub status: Option<DoctorStatus>,
    pub current_patients: Option<u32>,
}
